//! Command-line interface for the `refdex` code lookup tool.

use std::process::ExitCode;

use refdex::cli::{CommandContext, args::parse_cli, commands::run};

fn main() -> ExitCode {
    let cli = parse_cli();

    let ctx = if cli.command.needs_config() {
        CommandContext::load()
    } else {
        CommandContext::load_cwd_only()
    };

    match ctx {
        Ok(mut ctx) => run(cli.command, &mut ctx),
        Err(code) => code,
    }
}
