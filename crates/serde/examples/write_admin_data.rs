//! Builds an `ADMIN-DATA` element and writes it as a document.
//!
//! Usage: `cargo run --example write_admin_data -- [OUTPUT]`. Without an
//! output path the document is printed. Layout follows `ARXML_*`
//! environment variables; set `RUST_LOG=arxml_serde=debug` to trace writes.

use arxml_model::{
    AdminData, DateValue, DocRevision, Language, LanguageInput, Modification, RevisionLabel,
    SdgContentInput, SpecialDataGroup,
};
use arxml_serde::{Result, XmlConfig, to_xml_document_string, write_xml_file};
use tracing::info;

fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("arxml_serde={level},write_admin_data={level}")));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

fn build() -> Result<AdminData> {
    let revision = DocRevision::new()
        .with_revision_label(RevisionLabel::parse("1.0.0")?)
        .with_issued_by("Integration")
        .with_date(DateValue::parse("2025-01-02T12:34:56+02:00")?)
        .with_modification(
            Modification::from_change((Language::En, "Initial release"))
                .with_reason((Language::En, "Customer request")),
        );

    let sdg = SpecialDataGroup::from_content(
        Some("Build"),
        vec![
            SdgContentInput::from(("Compiler", "gcc")),
            ("OptLevel", 2).into(),
            SdgContentInput::group(Some("Flags"), vec!["-Wall", "-Werror"]),
        ],
    )?;

    Ok(AdminData::new()
        .with_language(Language::En)
        .with_used_languages(vec![
            LanguageInput::from(Language::En),
            LanguageInput::from(Language::De),
        ])
        .with_doc_revision(revision)
        .with_sdg(sdg))
}

fn main() -> Result<()> {
    init_logging("info");

    let config = XmlConfig::from_env();
    if let Err(problems) = config.validate() {
        return Err(problems.join("; ").into());
    }

    let admin = build()?;
    match std::env::args().nth(1) {
        Some(path) => {
            write_xml_file(&admin, &path, &config)?;
            info!(%path, "wrote admin data");
        }
        None => print!("{}", to_xml_document_string(&admin, &config)?),
    }
    Ok(())
}
