//! Reads an ARXML fragment and prints a summary of what it contains.
//!
//! Usage: `cargo run --example read_admin_data -- FILE`. Set
//! `ARXML_STRICT_BLOCK_TEXT=1` to reject stray text instead of dropping it.

use arxml_model::{AdminData, Node, SdgContent, SpecialDataGroup};
use arxml_serde::{Result, XmlConfig, XmlReader, to_json_string_pretty};
use tracing::{info, warn};

fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("arxml_serde={level},read_admin_data={level}")));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

fn print_group(group: &SpecialDataGroup, depth: usize) {
    let pad = "  ".repeat(depth);
    println!("{pad}SDG {}", group.gid.as_deref().unwrap_or("-"));
    for item in &group.content {
        match item {
            SdgContent::Element(sd) => println!("{pad}  SD {} = {}", sd.gid.as_deref().unwrap_or("-"), sd.value),
            SdgContent::Value(sdf) => println!("{pad}  SDF {} = {}", sdf.gid.as_deref().unwrap_or("-"), sdf.value),
            SdgContent::Group(inner) => print_group(inner, depth + 1),
        }
    }
}

fn summarize(admin: &AdminData) {
    if let Some(language) = admin.language {
        println!("language: {language}");
    }
    if let Some(used) = &admin.used_languages {
        let languages: Vec<String> = used.languages().map(|l| l.to_string()).collect();
        println!("used languages: {}", languages.join(", "));
    }
    for revision in &admin.doc_revisions {
        let label = revision.revision_label.as_ref().map_or("-", |l| l.as_str());
        let date = revision.date.map(|d| d.to_string()).unwrap_or_default();
        println!("revision {label} {date} ({} modifications)", revision.modifications.len());
    }
    for group in &admin.sdgs {
        print_group(group, 0);
    }
}

fn main() -> Result<()> {
    init_logging("info");

    let Some(path) = std::env::args().nth(1) else {
        return Err("usage: read_admin_data FILE".into());
    };

    let reader = XmlReader::with_config(XmlConfig::from_env());
    let node = reader.read_file(&path)?;
    info!(%path, kind = node.type_name(), "read element");

    match node {
        Node::AdminData(admin) => summarize(&admin),
        other => {
            warn!(kind = other.type_name(), "not an ADMIN-DATA element, dumping as JSON");
            println!("{}", to_json_string_pretty(&other)?);
        }
    }
    Ok(())
}
