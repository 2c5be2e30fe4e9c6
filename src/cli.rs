//! CLI module - Command-line interface definitions and handlers

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::commands;
use crate::core::error::TokenKind;
use crate::core::model::ResultSet;
use crate::core::render::{OutputFormat, RenderConfig, Renderer};

/// rolodex - interpret contact-book argument lines.
#[derive(Parser, Debug)]
#[command(name = "rolodex")]
#[command(
    author,
    version,
    about,
    long_about = r#"rolodex splits argument lines into search keywords and sort arguments,
pulls typed tokens out of free text, and searches a contact file.

Each command prints a ResultSet in the selected format (default: jsonl).

Sort arguments go after every keyword:
    n/ p/ e/ a/            sort by name, phone, email or address
    n/asc ... a/asc        ascending
    n/desc ... a/desc      descending

Examples:
    rolodex classify alice bob n/desc
    rolodex extract email "ping bob@x.org tomorrow"
    rolodex --data people.jsonl find friends p/asc
    rolodex quick-add "John Doe 98765432 johnd@example.com, 311 Clementi Ave 2"
    rolodex usage
"#
)]
pub struct Cli {
    /// Output format (jsonl/json/md/text).
    #[arg(
        long,
        global = true,
        default_value = "jsonl",
        value_name = "FORMAT",
        long_help = "Select the output format for ResultSet.\n\n\
Supported values:\n\
- jsonl (default)\n\
- json\n\
- md (markdown)\n\
- text"
    )]
    pub format: String,

    /// Pretty-print JSON/JSONL output with indentation.
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Quiet mode (warnings and errors only on stderr).
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug diagnostics on stderr).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Contact data file (JSON Lines, one person per line).
    #[arg(
        long,
        global = true,
        env = "ROLODEX_DATA",
        value_name = "FILE",
        long_help = "Contact data file used by `find`.\n\n\
Each non-blank line is a JSON object with name, phone, email, address and\n\
an optional tags array. Can also be set with ROLODEX_DATA."
    )]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split arguments into keywords and sort arguments.
    #[command(long_about = "Classify ARGS into free-text keywords and sort arguments.\n\n\
Keywords must come first. A keyword after a sort argument rejects the line.\n\n\
Examples:\n\
  rolodex classify alice n/\n\
  rolodex classify alice bob p/desc e/asc\n")]
    Classify {
        /// Argument tokens.
        #[arg(value_name = "ARGS", num_args = 0.., allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Extract the first integer, phone or email from text.
    #[command(long_about = "Find the first token of KIND in TEXT and print it together\n\
with the text left after removing it.\n\n\
Examples:\n\
  rolodex extract int \"delete 3 please\"\n\
  rolodex extract phone \"call 98765432 now\"\n")]
    Extract {
        /// Token kind (int/phone/email).
        #[arg(value_name = "KIND")]
        kind: TokenKind,

        /// Text to scan.
        #[arg(value_name = "TEXT", allow_hyphen_values = true)]
        text: String,
    },

    /// Search the data file with keywords and sort arguments.
    Find {
        /// Keywords followed by sort arguments.
        #[arg(value_name = "ARGS", num_args = 0.., allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Parse a person from one line of free text.
    QuickAdd {
        /// "<name> <phone> <email>, <address>" in any token order.
        #[arg(value_name = "TEXT")]
        text: String,
    },

    /// Print every recognized sort argument.
    Usage,
}

impl Cli {
    /// Tracing level selected by --quiet / --verbose
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<ExitCode> {
    let format: OutputFormat = cli.format.parse().unwrap_or_default();
    let render_config = RenderConfig::with_pretty(format, cli.pretty);

    let result_set: ResultSet = match cli.command {
        Commands::Classify { args } => commands::args::classify_args(&args),
        Commands::Extract { kind, text } => commands::extract::extract_token(kind, &text),
        Commands::Find { args } => {
            let Some(data) = cli.data else {
                bail!("No data file given. Use --data <FILE> or set ROLODEX_DATA");
            };
            commands::find::find_records(&data, &args)?
        }
        Commands::QuickAdd { text } => commands::quick_add::quick_add(&text)?,
        Commands::Usage => commands::args::usage(),
    };

    let renderer = Renderer::with_config(render_config);
    renderer.render_to(&result_set, std::io::stdout().lock())?;

    if result_set.has_errors() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
