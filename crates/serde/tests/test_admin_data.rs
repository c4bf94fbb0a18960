use arxml_model::{
    AdminData, DateValue, DocRevision, Language, LanguageInput, Modification, MultiLanguageLongName, MultiLanguageOverviewParagraph,
    MultiLanguagePlainText, Numeric, RevisionLabel, SdgContent, SdgContentInput,
    SpecialDataElement, SpecialDataGroup, SpecialDataValue,
};
use arxml_serde::{Result, from_xml_str, to_xml_string};
use rust_decimal_macros::dec;

#[test]
fn test_sdg_empty_and_gid() -> Result<()> {
    assert_eq!(to_xml_string(&SpecialDataGroup::new())?, "<SDG/>");
    let xml = r#"<SDG GID="MyGID"/>"#;
    assert_eq!(to_xml_string(&SpecialDataGroup::with_gid("MyGID"))?, xml);

    let sdg: SpecialDataGroup = from_xml_str(xml)?;
    assert_eq!(sdg.gid.as_deref(), Some("MyGID"));
    assert!(sdg.is_empty());
    Ok(())
}

#[test]
fn test_sdg_caption() -> Result<()> {
    let sdg = SpecialDataGroup::new().with_caption(MultiLanguageLongName::from_input((Language::ForAll, "MyCaption")));
    let xml = r#"<SDG>
  <SDG-CAPTION>
    <L-4 L="FOR-ALL">MyCaption</L-4>
  </SDG-CAPTION>
</SDG>"#;
    assert_eq!(to_xml_string(&sdg)?, xml);

    let back: SpecialDataGroup = from_xml_str(xml)?;
    let caption = back.caption.as_ref().expect("caption");
    assert_eq!(caption.items[0].text(), "MyCaption");
    assert_eq!(back, sdg);

    let plain: SpecialDataGroup = from_xml_str("<SDG>\n  <SDG-CAPTION>MyCaption</SDG-CAPTION>\n</SDG>")?;
    assert_eq!(plain, sdg);
    Ok(())
}

#[test]
fn test_sdg_content_from_scalars() -> Result<()> {
    let text = SpecialDataGroup::from_content(None, "MyContent")?;
    assert_eq!(to_xml_string(&text)?, "<SDG>\n  <SD>MyContent</SD>\n</SDG>");

    let pair = SpecialDataGroup::from_content(None, ("MyGID", "MyContent"))?;
    let xml = "<SDG>\n  <SD GID=\"MyGID\">MyContent</SD>\n</SDG>";
    assert_eq!(to_xml_string(&pair)?, xml);
    let back: SpecialDataGroup = from_xml_str(xml)?;
    assert_eq!(
        back.content[0],
        SdgContent::Element(SpecialDataElement::new("MyContent").with_gid("MyGID"))
    );

    let integer = SpecialDataGroup::from_content(None, 100)?;
    assert_eq!(to_xml_string(&integer)?, "<SDG>\n  <SDF>100</SDF>\n</SDG>");

    let float = SpecialDataGroup::from_content(None, 0.5)?;
    let xml = "<SDG>\n  <SDF>0.5</SDF>\n</SDG>";
    assert_eq!(to_xml_string(&float)?, xml);
    let back: SpecialDataGroup = from_xml_str(xml)?;
    assert_eq!(back.content[0].as_value().map(|v| v.value), Some(Numeric::from(dec!(0.5))));
    Ok(())
}

#[test]
fn test_sdf_float_range() -> Result<()> {
    let one = SpecialDataGroup::from_content(None, 1.0)?;
    assert_eq!(to_xml_string(&one)?, "<SDG>\n  <SDF>1.0</SDF>\n</SDG>");

    for (value, text) in [(1e30, "1e30"), (1e-30, "1e-30"), (-2.5e40, "-2.5e40")] {
        let sdg = SpecialDataGroup::from_content(None, value)?;
        let xml = format!("<SDG>\n  <SDF>{text}</SDF>\n</SDG>");
        assert_eq!(to_xml_string(&sdg)?, xml);
        let back: SpecialDataGroup = from_xml_str(&xml)?;
        assert_eq!(back, sdg);
        assert_eq!(back.content[0].as_value().map(|v| v.value.as_f64()), Some(value));
    }

    let small: SpecialDataValue = from_xml_str("<SDF>1.5E-30</SDF>")?;
    assert_eq!(small.value, Numeric::Float(1.5e-30));
    let large: SpecialDataValue = from_xml_str("<SDF>1e30</SDF>")?;
    assert_eq!(to_xml_string(&large)?, "<SDF>1e30</SDF>");
    Ok(())
}

#[test]
fn test_sdg_content_from_list() -> Result<()> {
    let content = vec![
        SdgContentInput::from("MyContent1"),
        ("MyGID2", "MyContent2").into(),
        SpecialDataElement::new("MyContent3").into(),
        SpecialDataElement::new("MyContent4").with_gid("MyGID4").into(),
        "true".into(),
        50.into(),
        ("MyGID6", 0.125).into(),
    ];
    let sdg = SpecialDataGroup::from_content(Some("MyGID0"), content)?;
    let xml = r#"<SDG GID="MyGID0">
  <SD>MyContent1</SD>
  <SD GID="MyGID2">MyContent2</SD>
  <SD>MyContent3</SD>
  <SD GID="MyGID4">MyContent4</SD>
  <SD>true</SD>
  <SDF>50</SDF>
  <SDF GID="MyGID6">0.125</SDF>
</SDG>"#;
    assert_eq!(to_xml_string(&sdg)?, xml);

    let back: SpecialDataGroup = from_xml_str(xml)?;
    assert_eq!(back.content.len(), 7);
    assert_eq!(back.content[0], SpecialDataElement::new("MyContent1").into());
    assert_eq!(back.content[4], SpecialDataElement::new("true").into());
    assert_eq!(back.content[5], SpecialDataValue::new(50).into());
    assert_eq!(
        back.content[6],
        SpecialDataValue::new(dec!(0.125)).with_gid("MyGID6").into()
    );
    assert_eq!(back, sdg);
    Ok(())
}

#[test]
fn test_sdg_nested_group() -> Result<()> {
    let inner = SdgContentInput::group(Some("InnerGID"), "InnerContent");
    let sdg = SpecialDataGroup::from_content(Some("OuterGID"), inner)?;
    let xml = r#"<SDG GID="OuterGID">
  <SDG GID="InnerGID">
    <SD>InnerContent</SD>
  </SDG>
</SDG>"#;
    assert_eq!(to_xml_string(&sdg)?, xml);

    let back: SpecialDataGroup = from_xml_str(xml)?;
    let child = back.content[0].as_group().expect("nested group");
    assert_eq!(child.gid.as_deref(), Some("InnerGID"));
    assert_eq!(child.content[0], SpecialDataElement::new("InnerContent").into());
    assert_eq!(back.depth(), 2);
    Ok(())
}

#[test]
fn test_modification() -> Result<()> {
    assert_eq!(to_xml_string(&Modification::new())?, "<MODIFICATION/>");

    let change = Modification::from_change((Language::ForAll, "MyChange"));
    let xml = r#"<MODIFICATION>
  <CHANGE>
    <L-2 L="FOR-ALL">MyChange</L-2>
  </CHANGE>
</MODIFICATION>"#;
    assert_eq!(to_xml_string(&change)?, xml);
    let back: Modification = from_xml_str(xml)?;
    assert_eq!(back.change.expect("change").items[0].parts()[0], "MyChange");

    let reason = Modification::new().with_reason((Language::ForAll, "MyReason"));
    let xml = r#"<MODIFICATION>
  <REASON>
    <L-2 L="FOR-ALL">MyReason</L-2>
  </REASON>
</MODIFICATION>"#;
    assert_eq!(to_xml_string(&reason)?, xml);
    let back: Modification = from_xml_str(xml)?;
    assert!(back.change.is_none());
    assert_eq!(back.reason.expect("reason").items[0].text(), "MyReason");
    Ok(())
}

#[test]
fn test_doc_revision_labels() -> Result<()> {
    assert_eq!(to_xml_string(&DocRevision::new())?, "<DOC-REVISION/>");

    let revision = DocRevision {
        revision_label: Some(RevisionLabel::parse("1.2.3")?),
        revision_label_p1: Some(RevisionLabel::parse("1.2.4")?),
        revision_label_p2: Some(RevisionLabel::parse("1.2.5")?),
        state: Some("MyState".to_string()),
        issued_by: Some("MyName".to_string()),
        ..DocRevision::default()
    };
    let xml = r#"<DOC-REVISION>
  <REVISION-LABEL>1.2.3</REVISION-LABEL>
  <REVISION-LABEL-P1>1.2.4</REVISION-LABEL-P1>
  <REVISION-LABEL-P2>1.2.5</REVISION-LABEL-P2>
  <STATE>MyState</STATE>
  <ISSUED-BY>MyName</ISSUED-BY>
</DOC-REVISION>"#;
    assert_eq!(to_xml_string(&revision)?, xml);

    let back: DocRevision = from_xml_str(xml)?;
    assert_eq!(back.revision_label.as_ref().map(RevisionLabel::as_str), Some("1.2.3"));
    assert_eq!(back.state.as_deref(), Some("MyState"));
    assert_eq!(back, revision);
    Ok(())
}

#[test]
fn test_doc_revision_dates() -> Result<()> {
    for date in ["2025-01-01", "2025-01-02T12:34:56+02:00", "2025-01-02T12:34:56Z"] {
        let revision = DocRevision::new().with_date(DateValue::parse(date)?);
        let xml = format!("<DOC-REVISION>\n  <DATE>{date}</DATE>\n</DOC-REVISION>");
        assert_eq!(to_xml_string(&revision)?, xml);

        let back: DocRevision = from_xml_str(&xml)?;
        let value = back.date.expect("date");
        assert_eq!((value.year(), value.month()), (2025, 1));
        assert_eq!(value.to_string(), date);
    }

    let err = from_xml_str::<DocRevision>("<DOC-REVISION><DATE>2025-13-01</DATE></DOC-REVISION>")
        .unwrap_err();
    assert!(err.to_string().contains("2025-13-01"));
    Ok(())
}

#[test]
fn test_doc_revision_modifications() -> Result<()> {
    let revision = DocRevision::new()
        .with_modification(Modification::from_change((Language::ForAll, "First Change")))
        .with_modification(
            Modification::from_change((Language::ForAll, "Second Change"))
                .with_reason((Language::ForAll, "Reason for second change")),
        );
    let xml = r#"<DOC-REVISION>
  <MODIFICATIONS>
    <MODIFICATION>
      <CHANGE>
        <L-2 L="FOR-ALL">First Change</L-2>
      </CHANGE>
    </MODIFICATION>
    <MODIFICATION>
      <CHANGE>
        <L-2 L="FOR-ALL">Second Change</L-2>
      </CHANGE>
      <REASON>
        <L-2 L="FOR-ALL">Reason for second change</L-2>
      </REASON>
    </MODIFICATION>
  </MODIFICATIONS>
</DOC-REVISION>"#;
    assert_eq!(to_xml_string(&revision)?, xml);

    let back: DocRevision = from_xml_str(xml)?;
    assert_eq!(back.modifications.len(), 2);
    let reason: &MultiLanguageOverviewParagraph =
        back.modifications[1].reason.as_ref().expect("reason");
    assert_eq!(reason.items[0].language, Language::ForAll);
    assert_eq!(back, revision);
    Ok(())
}

#[test]
fn test_admin_data_language() -> Result<()> {
    assert_eq!(to_xml_string(&AdminData::new())?, "<ADMIN-DATA/>");

    let admin = AdminData::new().with_language(Language::En);
    let xml = "<ADMIN-DATA>\n  <LANGUAGE>EN</LANGUAGE>\n</ADMIN-DATA>";
    assert_eq!(to_xml_string(&admin)?, xml);
    let back: AdminData = from_xml_str(xml)?;
    assert_eq!(back.language, Some(Language::En));

    let err = from_xml_str::<AdminData>("<ADMIN-DATA><LANGUAGE>XX</LANGUAGE></ADMIN-DATA>")
        .unwrap_err();
    assert!(matches!(err, arxml_serde::SerdeError::Model(_)));
    Ok(())
}

#[test]
fn test_admin_data_used_languages() -> Result<()> {
    let mut used = MultiLanguagePlainText::new();
    used.append((Language::Fr, ""));
    used.append((Language::En, ""));
    let admin = AdminData {
        used_languages: Some(used),
        ..AdminData::default()
    };
    let xml = r#"<ADMIN-DATA>
  <USED-LANGUAGES>
    <L-10 L="FR"/>
    <L-10 L="EN"/>
  </USED-LANGUAGES>
</ADMIN-DATA>"#;
    assert_eq!(to_xml_string(&admin)?, xml);
    let back: AdminData = from_xml_str(xml)?;
    let languages: Vec<Language> = back
        .used_languages
        .as_ref()
        .map(|used| used.languages().collect())
        .unwrap_or_default();
    assert_eq!(languages, [Language::Fr, Language::En]);

    let texts = AdminData::new().with_used_languages(vec![
        LanguageInput::from((Language::Fr, "Text1")),
        LanguageInput::from((Language::En, "Text2")),
    ]);
    let xml = r#"<ADMIN-DATA>
  <USED-LANGUAGES>
    <L-10 L="FR">Text1</L-10>
    <L-10 L="EN">Text2</L-10>
  </USED-LANGUAGES>
</ADMIN-DATA>"#;
    assert_eq!(to_xml_string(&texts)?, xml);
    let back: AdminData = from_xml_str(xml)?;
    let used = back.used_languages.expect("used languages");
    assert_eq!(used.get(Language::En).map(|item| item.text()), Some("Text2".to_string()));

    let languages = AdminData::new().with_used_languages(vec![
        LanguageInput::from(Language::Fr),
        LanguageInput::from(Language::En),
        LanguageInput::from(Language::De),
    ]);
    let xml = r#"<ADMIN-DATA>
  <USED-LANGUAGES>
    <L-10 L="FR"/>
    <L-10 L="EN"/>
    <L-10 L="DE"/>
  </USED-LANGUAGES>
</ADMIN-DATA>"#;
    assert_eq!(to_xml_string(&languages)?, xml);
    Ok(())
}

#[test]
fn test_admin_data_doc_revisions() -> Result<()> {
    let admin = AdminData::new().with_doc_revision(
        DocRevision::new().with_modification(Modification::from_change((Language::En, "My Change 1"))),
    );
    let xml = r#"<ADMIN-DATA>
  <DOC-REVISIONS>
    <DOC-REVISION>
      <MODIFICATIONS>
        <MODIFICATION>
          <CHANGE>
            <L-2 L="EN">My Change 1</L-2>
          </CHANGE>
        </MODIFICATION>
      </MODIFICATIONS>
    </DOC-REVISION>
  </DOC-REVISIONS>
</ADMIN-DATA>"#;
    assert_eq!(to_xml_string(&admin)?, xml);
    assert_eq!(from_xml_str::<AdminData>(xml)?, admin);

    let mut dated = AdminData::new();
    for date in ["2019-12-22", "2020-02-16", "2020-04-06"] {
        dated.append_doc_revision(DocRevision::new().with_date(DateValue::parse(date)?));
    }
    let xml = r#"<ADMIN-DATA>
  <DOC-REVISIONS>
    <DOC-REVISION>
      <DATE>2019-12-22</DATE>
    </DOC-REVISION>
    <DOC-REVISION>
      <DATE>2020-02-16</DATE>
    </DOC-REVISION>
    <DOC-REVISION>
      <DATE>2020-04-06</DATE>
    </DOC-REVISION>
  </DOC-REVISIONS>
</ADMIN-DATA>"#;
    assert_eq!(to_xml_string(&dated)?, xml);
    let back: AdminData = from_xml_str(xml)?;
    let dates: Vec<String> = back
        .doc_revisions
        .iter()
        .filter_map(|rev| rev.date.map(|d| d.to_string()))
        .collect();
    assert_eq!(dates, ["2019-12-22", "2020-02-16", "2020-04-06"]);
    Ok(())
}

#[test]
fn test_admin_data_sdgs() -> Result<()> {
    let admin = AdminData::new()
        .with_sdg(SpecialDataGroup::from_content(Some("Outer1"), ("Inner1", "MyContent1"))?)
        .with_sdg(SpecialDataGroup::from_content(Some("Outer2"), ("Inner2", 2))?);
    let xml = r#"<ADMIN-DATA>
  <SDGS>
    <SDG GID="Outer1">
      <SD GID="Inner1">MyContent1</SD>
    </SDG>
    <SDG GID="Outer2">
      <SDF GID="Inner2">2</SDF>
    </SDG>
  </SDGS>
</ADMIN-DATA>"#;
    assert_eq!(to_xml_string(&admin)?, xml);

    let back: AdminData = from_xml_str(xml)?;
    assert_eq!(back.sdgs.len(), 2);
    let outer2 = back.find_sdg("Outer2").expect("Outer2");
    assert_eq!(outer2.content[0], SpecialDataValue::new(2).with_gid("Inner2").into());
    assert_eq!(back, admin);
    Ok(())
}
