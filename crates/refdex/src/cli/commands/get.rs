//! Implementation of `refdex get`.

use std::process::ExitCode;

use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};

use crate::cli::{
    args::GetCommand,
    context::CommandContext,
    output::{JsonRecord, dim, format_value, header, print_json},
};

/// Looks up one record by code and prints every field.
pub fn run(ctx: &mut CommandContext, cmd: &GetCommand) -> ExitCode {
    let searcher = match ctx.searcher(true) {
        Ok(s) => s,
        Err(code) => return code,
    };

    let Some(found) = searcher.lookup(&cmd.code) else {
        eprintln!("error: no record with code: {}", cmd.code.trim());
        return ExitCode::FAILURE;
    };

    if cmd.json {
        return print_json(&JsonRecord {
            catalog: found.collection,
            position: found.position,
            record: found.record,
        });
    }

    let record = found.record;
    println!(
        "{} {}",
        header(&record.code),
        dim(&format!("({} #{})", found.collection, found.position + 1))
    );

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Field", "Value"]);
    table.add_row(vec![Cell::new("name"), Cell::new(&record.name)]);
    if let Some(subcategory) = &record.subcategory {
        table.add_row(vec![Cell::new("subcategory"), Cell::new(subcategory)]);
    }
    if !record.alias_terms.is_empty() {
        table.add_row(vec![
            Cell::new("search_terms"),
            Cell::new(record.alias_terms.join("; ")),
        ]);
    }
    for (key, value) in &record.extra {
        table.add_row(vec![Cell::new(key), Cell::new(format_value(value))]);
    }
    println!("{table}");

    ExitCode::SUCCESS
}
