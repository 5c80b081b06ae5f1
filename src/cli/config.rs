//! Configuration management CLI commands.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::digest::Algorithm;
use clap::{Args, Subcommand};

/// Configuration management commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Debug, Args)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Debug, Args)]
pub struct ConfigSetArgs {
    /// Decimal places shown for conversion results
    #[arg(long, value_name = "DIGITS")]
    precision: Option<usize>,

    /// Silent-reading rate in words per minute
    #[arg(long, value_name = "WPM")]
    reading_wpm: Option<u32>,

    /// Speaking rate in words per minute
    #[arg(long, value_name = "WPM")]
    speaking_wpm: Option<u32>,

    /// Digest algorithm used when --algorithm is not given
    #[arg(long, value_name = "ALG")]
    hash_algorithm: Option<Algorithm>,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e}")))?;

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&config)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            let path = Config::config_file_path().map_err(|e| CliError::io(e.to_string()))?;
            if Config::exists() {
                println!("Config file: {}", path.display());
            } else {
                println!("Config file: {} (not created yet, defaults)", path.display());
            }
            println!();
            println!("Output:");
            println!("  Precision:         {}", config.output.precision);
            println!();
            println!("Text:");
            println!("  Reading rate:      {} wpm", config.text.reading_wpm);
            println!("  Speaking rate:     {} wpm", config.text.speaking_wpm);
            println!();
            println!("Hash:");
            println!("  Default algorithm: {}", config.hash.default_algorithm);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.precision.is_none()
            && self.reading_wpm.is_none()
            && self.speaking_wpm.is_none()
            && self.hash_algorithm.is_none()
        {
            return Err(CliError::usage(
                "Pass at least one of --precision, --reading-wpm, --speaking-wpm or --hash-algorithm",
            ));
        }

        // Start from the existing file so unrelated settings survive.
        let mut config = Config::load().unwrap_or_else(|_| Config::new());

        if let Some(precision) = self.precision {
            config.output.precision = precision;
        }
        if let Some(wpm) = self.reading_wpm {
            config.text.reading_wpm = wpm;
        }
        if let Some(wpm) = self.speaking_wpm {
            config.text.speaking_wpm = wpm;
        }
        if let Some(algorithm) = self.hash_algorithm {
            config.hash.default_algorithm = algorithm;
        }

        config
            .validate()
            .map_err(|e| CliError::validation(e.to_string()))?;
        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e}")))?;

        println!("Configuration updated successfully.");
        Ok(())
    }
}
