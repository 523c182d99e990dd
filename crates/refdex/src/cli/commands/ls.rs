//! Implementation of `refdex ls`.

use std::process::ExitCode;

use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};

use crate::cli::{
    args::{LsCommand, LsWhat},
    context::CommandContext,
    output::{dim, format_path_for_display, format_value, header},
};

/// Lists configured catalogs or the records of one catalog.
pub fn run(ctx: &mut CommandContext, cmd: &LsCommand) -> ExitCode {
    match &cmd.what {
        None | Some(LsWhat::Catalogs) => cmd_ls_catalogs(ctx, cmd.long),
        Some(LsWhat::Records { catalog }) => cmd_ls_records(ctx, catalog, cmd.long),
    }
}

/// Lists every configured catalog with its record count.
fn cmd_ls_catalogs(ctx: &mut CommandContext, long: bool) -> ExitCode {
    if ctx.config.catalogs.is_empty() {
        println!("{}", dim("No catalogs configured."));
        return ExitCode::SUCCESS;
    }

    let base = ctx.config.config_root.clone();
    let rows: Vec<(String, &'static str, Vec<String>)> = ctx
        .config
        .catalogs
        .iter()
        .map(|catalog| {
            let scope = if catalog.is_global { "global" } else { "local" };
            let files = catalog
                .paths
                .iter()
                .map(|p| format_path_for_display(p, base.as_deref()))
                .collect();
            (catalog.name.clone(), scope, files)
        })
        .collect();

    let searcher = match ctx.searcher(false) {
        Ok(s) => s,
        Err(code) => return code,
    };

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Catalog", "Records", "Scope", "Files"]);
    for (name, scope, files) in &rows {
        let count = searcher
            .index()
            .collection(name)
            .map_or(0, |c| c.len());
        let files = if long {
            files.join("\n")
        } else {
            files.join(", ")
        };
        table.add_row(vec![
            Cell::new(name),
            Cell::new(count.to_string()),
            Cell::new(*scope),
            Cell::new(files),
        ]);
    }
    println!("{table}");

    ExitCode::SUCCESS
}

/// Lists the records of one catalog in catalog order.
fn cmd_ls_records(ctx: &mut CommandContext, name: &str, long: bool) -> ExitCode {
    let searcher = match ctx.searcher(false) {
        Ok(s) => s,
        Err(code) => return code,
    };

    let Some(collection) = searcher.index().collection(name) else {
        eprintln!("error: unknown catalog: {name}");
        return ExitCode::FAILURE;
    };

    if collection.is_empty() {
        println!("{}", dim("No records."));
        return ExitCode::SUCCESS;
    }

    println!(
        "{} {}",
        header(collection.name()),
        dim(&format!("({} records)", collection.len()))
    );
    for record in collection.records() {
        let mut line = format!("  {:<8} {}", record.code, record.name);
        if let Some(subcategory) = &record.subcategory {
            line.push_str(&format!(" {}", dim(&format!("[{subcategory}]"))));
        }
        println!("{line}");

        if long {
            if !record.alias_terms.is_empty() {
                println!(
                    "           {}",
                    dim(&format!("aliases: {}", record.alias_terms.join(", ")))
                );
            }
            for (key, value) in &record.extra {
                println!(
                    "           {}",
                    dim(&format!("{key}: {}", format_value(value)))
                );
            }
        }
    }

    ExitCode::SUCCESS
}
