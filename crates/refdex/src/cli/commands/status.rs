//! Implementation of `refdex status`.

use std::process::ExitCode;

use refdex_config::{ConfigWarning, discover_config_files};

use crate::cli::{
    context::CommandContext,
    output::{dim, error, format_path_for_display, subheader, success, warning},
};

/// Shows configuration files, catalogs, and validation warnings.
///
/// Exits with failure when validation reports any warning.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let cwd = &ctx.cwd;

    let config_files = discover_config_files(cwd);
    if config_files.is_empty() {
        println!("{}", dim("No configuration files found."));
        println!();
        println!(
            "Run {} to create a configuration file.",
            subheader("refdex init")
        );
        return ExitCode::SUCCESS;
    }

    println!("{}", subheader("Config files:"));
    for path in &config_files {
        println!("   {}", format_path_for_display(path, Some(cwd)));
    }
    println!();

    let config = &ctx.config;

    println!("{}", subheader("Catalogs:"));
    if config.catalogs.is_empty() {
        println!("   {}", dim("(none defined)"));
    } else {
        for catalog in &config.catalogs {
            let scope = if catalog.is_global { "global" } else { "local" };
            println!("   {} {}", catalog.name, dim(&format!("({scope})")));
            let base = if catalog.is_global {
                None
            } else {
                config.config_root.as_deref()
            };
            for path in &catalog.paths {
                let display_path = format_path_for_display(path, base);
                if path.is_file() {
                    println!("      {}", dim(&format!("-> {display_path}")));
                } else {
                    println!(
                        "      {} {}",
                        dim(&format!("-> {display_path}")),
                        error("[missing]")
                    );
                }
            }
        }
    }
    println!();

    let warnings = config.validate();
    if warnings.is_empty() {
        println!("{}", success("No issues found."));
        return ExitCode::SUCCESS;
    }

    println!("{}", subheader(&format!("Warnings ({}):", warnings.len())));
    for w in &warnings {
        println!("   {}", warning(&w.to_string()));
    }
    println!();

    print_hints(&warnings);

    ExitCode::FAILURE
}

/// Prints hints for resolving common warnings.
fn print_hints(warnings: &[ConfigWarning]) {
    for w in warnings {
        match w {
            ConfigWarning::NoCatalogsDefined => {
                println!("{}", dim("Hint: add [[catalog]] entries to .refdex.toml"));
            }
            ConfigWarning::CatalogFileMissing { .. } => {
                println!(
                    "{}",
                    dim("Hint: catalog paths are relative to the config file that declares them")
                );
            }
            ConfigWarning::FuzzyDisabled => {
                println!(
                    "{}",
                    dim("Hint: set [search] max_edit_distance = 1 to tolerate typos")
                );
            }
            _ => {}
        }
    }
}
