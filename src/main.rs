//! kitbox - command-line toolbox of everyday converters.
//!
//! Subcommands cover unit conversion, color space conversion, text
//! readability analysis and digest computation. Every subcommand supports
//! `--json` for machine-readable output.

use clap::{Parser, Subcommand};
use kitbox::cli::{CliResult, ColorArgs, ConfigArgs, ConvertArgs, HashArgs, ReadabilityArgs};
use kitbox::config::Config;
use kitbox::constants::APP_BINARY_NAME;

/// kitbox - everyday converters for the command line
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert a value between units of a measurement category
    Convert(ConvertArgs),
    /// Convert a color between hex, RGB and HSL representations
    Color(ColorArgs),
    /// Analyze text metrics and readability scores
    Readability(ReadabilityArgs),
    /// Compute a digest of text or a file
    Hash(HashArgs),
    /// Show or set configuration values
    Config(ConfigArgs),
}

fn main() {
    let cli = Cli::parse();

    // A broken config file should not block the tools; fall back to
    // defaults and tell the user.
    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Warning: Failed to load config: {e}");
        Config::new()
    });

    let result: CliResult<()> = match &cli.command {
        Commands::Convert(args) => args.execute(&config),
        Commands::Color(args) => args.execute(),
        Commands::Readability(args) => args.execute(&config),
        Commands::Hash(args) => args.execute(&config),
        Commands::Config(args) => args.execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}
