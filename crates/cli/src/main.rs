mod commands;
mod error;
mod input;

use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use crate::error::CliError;

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Inspect Projector remote-UI event batches.
#[derive(Parser)]
#[command(
    name = "projector-decode",
    version,
    about = "Inspect Projector remote-UI event batches"
)]
struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a batch and print its events
    Decode {
        /// Path to the batch file, or '-' for stdin
        input: PathBuf,
    },

    /// Decode a batch and report whether it is well-formed
    Check {
        /// Path to the batch file, or '-' for stdin
        input: PathBuf,
    },

    /// Count events and draw commands by kind
    Stats {
        /// Path to the batch file, or '-' for stdin
        input: PathBuf,
    },

    /// Write the PNG payloads of image data replies to a directory
    ExtractImages {
        /// Path to the batch file, or '-' for stdin
        input: PathBuf,
        /// Directory to write <image-id>.png files into
        #[arg(long, default_value = "./images")]
        out: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Decode { input } => {
            commands::decode::cmd_decode(&input, cli.output, cli.verbose > 0)
        }
        Commands::Check { input } => commands::check::cmd_check(&input, cli.output, cli.quiet),
        Commands::Stats { input } => commands::stats::cmd_stats(&input, cli.output),
        Commands::ExtractImages { input, out } => {
            commands::extract::cmd_extract_images(&input, &out, cli.output, cli.quiet)
        }
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        report_error(&e.to_string(), cli.output, cli.quiet);
        process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

pub(crate) fn report_error(msg: &str, output: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }
    match output {
        OutputFormat::Text => eprintln!("{}", msg),
        OutputFormat::Json => {
            let err_json = serde_json::json!({ "error": msg });
            eprintln!("{}", err_json);
        }
    }
}

pub(crate) type CmdResult = Result<(), CliError>;
