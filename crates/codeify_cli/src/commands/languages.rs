//! `codeify languages` — list the supported language catalog.

use anyhow::Result;
use codeify_core::Language;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};

pub fn run() -> Result<()> {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Value", "Label"]);
    for language in Language::all() {
        table.add_row(vec![language.value(), language.label()]);
    }
    println!("{table}");
    Ok(())
}
