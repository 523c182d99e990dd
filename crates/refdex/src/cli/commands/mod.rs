//! Command implementations and dispatch.

pub mod config;
pub mod get;
pub mod init;
pub mod inspect;
pub mod ls;
pub mod search;
pub mod status;

use std::process::ExitCode;

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
pub fn run(command: Commands, ctx: &mut CommandContext) -> ExitCode {
    match command {
        Commands::Search(cmd) => search::run(ctx, &cmd),
        Commands::Get(cmd) => get::run(ctx, &cmd),
        Commands::Inspect { what } => inspect::run(ctx, what),
        Commands::Init(cmd) => init::run(ctx, &cmd),
        Commands::Status => status::run(ctx),
        Commands::Config => config::run(ctx),
        Commands::Ls(cmd) => ls::run(ctx, &cmd),
    }
}
