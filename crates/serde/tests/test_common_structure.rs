use arxml_model::{
    AdminData, AutosarEngineeringObject, Code, DataFilter, DataFilterType, Language,
    MultiLanguageLongName, RevisionLabel,
};
use arxml_serde::{Result, SerdeError, from_xml_str, to_xml_string};

#[test]
fn test_data_filter_empty() -> Result<()> {
    assert_eq!(to_xml_string(&DataFilter::new())?, "<DATA-FILTER/>");
    assert_eq!(from_xml_str::<DataFilter>("<DATA-FILTER/>")?, DataFilter::new());
    Ok(())
}

#[test]
fn test_data_filter_type() -> Result<()> {
    let filter = DataFilter::of_type(DataFilterType::OneEveryN);
    let xml = "<DATA-FILTER>\n  <DATA-FILTER-TYPE>ONE-EVERY-N</DATA-FILTER-TYPE>\n</DATA-FILTER>";
    assert_eq!(to_xml_string(&filter)?, xml);
    let read: DataFilter = from_xml_str(xml)?;
    assert_eq!(read.data_filter_type, Some(DataFilterType::OneEveryN));
    Ok(())
}

#[test]
fn test_data_filter_numbers() -> Result<()> {
    let cases = [
        (DataFilter { mask: Some(0xFF00), ..DataFilter::default() }, "MASK", "65280"),
        (DataFilter { max: Some(100), ..DataFilter::default() }, "MAX", "100"),
        (DataFilter { min: Some(0), ..DataFilter::default() }, "MIN", "0"),
        (DataFilter { offset: Some(1), ..DataFilter::default() }, "OFFSET", "1"),
        (DataFilter { period: Some(10), ..DataFilter::default() }, "PERIOD", "10"),
        (DataFilter { x: Some(2), ..DataFilter::default() }, "X", "2"),
    ];
    for (filter, tag, text) in cases {
        let xml = format!("<DATA-FILTER>\n  <{tag}>{text}</{tag}>\n</DATA-FILTER>");
        assert_eq!(to_xml_string(&filter)?, xml);
        assert_eq!(from_xml_str::<DataFilter>(&xml)?, filter);
    }
    Ok(())
}

#[test]
fn test_data_filter_child_order() -> Result<()> {
    let filter = DataFilter {
        x: Some(3),
        min: Some(-5),
        mask: Some(255),
        ..DataFilter::of_type(DataFilterType::MaskedNewEqualsX)
    };
    let xml = r#"<DATA-FILTER>
  <DATA-FILTER-TYPE>MASKED-NEW-EQUALS-X</DATA-FILTER-TYPE>
  <MASK>255</MASK>
  <MIN>-5</MIN>
  <X>3</X>
</DATA-FILTER>"#;
    assert_eq!(to_xml_string(&filter)?, xml);
    Ok(())
}

#[test]
fn test_data_filter_strict_integers() {
    let err = from_xml_str::<DataFilter>("<DATA-FILTER><MASK>0x10</MASK></DATA-FILTER>").unwrap_err();
    assert!(matches!(err, SerdeError::Model(_)));
    assert!(err.to_string().contains("0x10"));

    let err = from_xml_str::<DataFilter>("<DATA-FILTER><PERIOD>-1</PERIOD></DATA-FILTER>").unwrap_err();
    assert!(matches!(err, SerdeError::Model(_)));

    let err = from_xml_str::<DataFilter>("<DATA-FILTER><DATA-FILTER-TYPE>SOMETIMES</DATA-FILTER-TYPE></DATA-FILTER>")
        .unwrap_err();
    assert!(err.to_string().contains("SOMETIMES"));
}

#[test]
fn test_engineering_object() -> Result<()> {
    assert_eq!(
        to_xml_string(&AutosarEngineeringObject::new())?,
        "<AUTOSAR-ENGINEERING-OBJECT/>"
    );

    let labeled = AutosarEngineeringObject::with_label("MyLabel");
    let xml = "<AUTOSAR-ENGINEERING-OBJECT>\n  <SHORT-LABEL>MyLabel</SHORT-LABEL>\n</AUTOSAR-ENGINEERING-OBJECT>";
    assert_eq!(to_xml_string(&labeled)?, xml);
    let read: AutosarEngineeringObject = from_xml_str(xml)?;
    assert_eq!(read.short_label.as_deref(), Some("MyLabel"));

    let full = AutosarEngineeringObject::with_label("Lib")
        .with_category("SWSRC")
        .with_revision_label(RevisionLabel::parse("4.1.0")?)
        .with_domain("AUTOSAR");
    let xml = r#"<AUTOSAR-ENGINEERING-OBJECT>
  <SHORT-LABEL>Lib</SHORT-LABEL>
  <CATEGORY>SWSRC</CATEGORY>
  <REVISION-LABELS>
    <REVISION-LABEL>4.1.0</REVISION-LABEL>
  </REVISION-LABELS>
  <DOMAIN>AUTOSAR</DOMAIN>
</AUTOSAR-ENGINEERING-OBJECT>"#;
    assert_eq!(to_xml_string(&full)?, xml);
    assert_eq!(from_xml_str::<AutosarEngineeringObject>(xml)?, full);
    Ok(())
}

#[test]
fn test_code() -> Result<()> {
    let code = Code::new("Default");
    let xml = "<CODE>\n  <SHORT-NAME>Default</SHORT-NAME>\n</CODE>";
    assert_eq!(to_xml_string(&code)?, xml);
    assert_eq!(from_xml_str::<Code>(xml)?.short_name, "Default");

    let code = Code::new("Default").with_artifact_descriptor(
        AutosarEngineeringObject::with_label("Default").with_category("SWSRC"),
    );
    let xml = r#"<CODE>
  <SHORT-NAME>Default</SHORT-NAME>
  <ARTIFACT-DESCRIPTORS>
    <AUTOSAR-ENGINEERING-OBJECT>
      <SHORT-LABEL>Default</SHORT-LABEL>
      <CATEGORY>SWSRC</CATEGORY>
    </AUTOSAR-ENGINEERING-OBJECT>
  </ARTIFACT-DESCRIPTORS>
</CODE>"#;
    assert_eq!(to_xml_string(&code)?, xml);
    let read: Code = from_xml_str(xml)?;
    assert_eq!(read.artifact_descriptors.len(), 1);
    assert_eq!(read.artifact_descriptors[0].category.as_deref(), Some("SWSRC"));
    Ok(())
}

#[test]
fn test_code_with_description_and_admin_data() -> Result<()> {
    let code = Code {
        long_name: Some(MultiLanguageLongName::from_input((Language::En, "Source"))),
        category: Some("SWSRC".to_string()),
        admin_data: Some(AdminData::new().with_language(Language::En)),
        ..Code::new("Impl")
    };
    let xml = r#"<CODE>
  <SHORT-NAME>Impl</SHORT-NAME>
  <LONG-NAME>
    <L-4 L="EN">Source</L-4>
  </LONG-NAME>
  <CATEGORY>SWSRC</CATEGORY>
  <ADMIN-DATA>
    <LANGUAGE>EN</LANGUAGE>
  </ADMIN-DATA>
</CODE>"#;
    assert_eq!(to_xml_string(&code)?, xml);
    assert_eq!(from_xml_str::<Code>(xml)?, code);
    Ok(())
}

#[test]
fn test_code_requires_short_name() {
    let err = from_xml_str::<Code>("<CODE><CATEGORY>SWSRC</CATEGORY></CODE>").unwrap_err();
    assert!(matches!(
        err,
        SerdeError::MissingElement { ref parent, ref child } if parent == "CODE" && child == "SHORT-NAME"
    ));
}
