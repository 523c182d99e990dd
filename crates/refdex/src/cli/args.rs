//! Clap argument definitions for the `refdex` CLI.

use std::{env, process::exit};

use clap::{ArgAction, Args, CommandFactory, Parser, Subcommand, error::ErrorKind};

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "refdex")]
#[command(about = "Reference index - ranked lookup of billing and diagnostic codes")]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments for `refdex search`.
#[derive(Args, Debug, Clone)]
pub struct SearchCommand {
    /// Query words (joined with spaces into one query)
    #[arg(required = true)]
    pub query: Vec<String>,

    /// Maximum results per catalog [default: 50]
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Only show these catalogs (can be specified multiple times)
    #[arg(short = 'c', long = "catalog")]
    pub catalogs: Vec<String>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Show scores and display groups
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Show the parsed query and how every result scored
    #[arg(long)]
    pub explain: bool,
}

impl SearchCommand {
    /// Returns the query words as one string.
    pub fn query_text(&self) -> String {
        self.query.join(" ")
    }
}

/// Arguments for `refdex get`.
#[derive(Args, Debug, Clone)]
pub struct GetCommand {
    /// Record code (case-insensitive)
    pub code: String,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `refdex init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.refdex.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for `refdex ls`.
#[derive(Args, Debug, Clone)]
pub struct LsCommand {
    /// Show alias terms and extra fields.
    #[arg(short = 'l', long)]
    pub long: bool,

    /// What to list (catalogs when omitted).
    #[command(subcommand)]
    pub what: Option<LsWhat>,
}

/// Supported `refdex` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Search all catalogs and print ranked matches
    #[command(after_help = "\
MATCHING:
  Every word must match a record, by code, alias, or name. Stronger matches rank
  higher: exact code, code prefix, exact alias, name word, alias substring, name
  substring, then single-typo matches. Multi-word matches get a bonus.

EXAMPLES:
  refdex search H102
  refdex search fx wrist
  refdex search weekday evening assessment
  refdex search -c diagnostic colles
  refdex search --explain night assessment")]
    Search(SearchCommand),

    /// Show one record by code
    Get(GetCommand),

    /// Inspect query parsing or scoring
    Inspect {
        /// What to inspect
        #[command(subcommand)]
        what: InspectWhat,
    },

    /// Initialize refdex configuration in current directory
    Init(InitCommand),

    /// Show status and validate configuration
    Status,

    /// Show effective configuration settings
    Config,

    /// List catalogs or the records of one catalog
    Ls(LsCommand),
}

impl Commands {
    /// Returns true if the command reads the merged configuration.
    ///
    /// `init` and `inspect query` work even when an existing config file is invalid.
    pub fn needs_config(&self) -> bool {
        !matches!(
            self,
            Self::Init(_)
                | Self::Inspect {
                    what: InspectWhat::Query { .. }
                }
        )
    }
}

/// What to list with `refdex ls`.
#[derive(Clone, Subcommand, Debug)]
pub enum LsWhat {
    /// List configured catalogs with record counts
    Catalogs,
    /// List the records of one catalog in catalog order
    Records {
        /// Catalog name
        catalog: String,
    },
}

/// What to inspect with `refdex inspect`.
#[derive(Clone, Subcommand)]
pub enum InspectWhat {
    /// Show how a query is normalized and tokenized
    Query {
        /// Query words
        #[arg(required = true)]
        query: Vec<String>,
    },
    /// Show how one record scores against a query
    Score {
        /// Record code
        code: String,
        /// Query words
        #[arg(required = true)]
        query: Vec<String>,
    },
}

/// Parses CLI arguments, printing hierarchical help for top-level `--help`.
pub fn parse_cli() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            if e.kind() == ErrorKind::DisplayHelp {
                let args: Vec<_> = env::args().collect();
                if args.len() <= 2 {
                    print_hierarchical_help();
                    exit(0);
                }
            }
            e.exit();
        }
    }
}

/// Prints custom help with hierarchical subcommand display.
fn print_hierarchical_help() {
    let cmd = Cli::command();
    let about = cmd.get_about().map(|s| s.to_string()).unwrap_or_default();

    println!("{about}");
    println!();
    println!("Usage: refdex <COMMAND>");
    println!();
    println!("Commands:");

    for sub in cmd.get_subcommands() {
        let name = sub.get_name();
        if name == "help" {
            continue;
        }

        let about = sub.get_about().map(|s| s.to_string()).unwrap_or_default();
        println!("  {name:10} {about}");

        for subsub in sub.get_subcommands() {
            let subname = subsub.get_name();
            if subname == "help" {
                continue;
            }
            let subabout = subsub
                .get_about()
                .map(|s| s.to_string())
                .unwrap_or_default();
            println!("    {subname:8} {subabout}");
        }
    }

    println!(
        "  {:<10} Print this message or the help of the given subcommand(s)",
        "help"
    );
    println!();
    println!("Options:");
    println!("  -h, --help  Print help");
}
