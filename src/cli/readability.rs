//! Readability analysis command.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::text;
use clap::Args;
use std::io::Read;
use std::path::PathBuf;

/// Analyze text metrics and readability scores
#[derive(Debug, Clone, Args)]
pub struct ReadabilityArgs {
    /// Text to analyze
    #[arg(short, long, value_name = "TEXT", conflicts_with = "file")]
    pub text: Option<String>,

    /// Read text from a file (stdin is used when neither flag is given)
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl ReadabilityArgs {
    /// Execute the readability command
    pub fn execute(&self, config: &Config) -> CliResult<()> {
        let input = self.read_input()?;
        let stats =
            text::analyze_with_rates(&input, config.text.reading_wpm, config.text.speaking_wpm);

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&stats)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            println!("Characters:    {}", stats.characters);
            println!("Words:         {}", stats.words);
            println!("Sentences:     {}", stats.sentences);
            println!("Syllables:     {}", stats.syllables);
            println!("Complex words: {}", stats.complex_words);
            println!();
            println!("Flesch-Kincaid grade:        {:.2}", stats.flesch_kincaid_grade);
            println!("Gunning Fog index:           {:.2}", stats.gunning_fog_index);
            println!("Coleman-Liau index:          {:.2}", stats.coleman_liau_index);
            println!("SMOG index:                  {:.2}", stats.smog_index);
            println!("Automated Readability Index: {:.2}", stats.automated_readability_index);
            println!();
            println!("Reading time:  {}", format_duration(stats.reading_time_secs));
            println!("Speaking time: {}", format_duration(stats.speaking_time_secs));
        }

        Ok(())
    }

    fn read_input(&self) -> CliResult<String> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }
        if let Some(path) = &self.file {
            return std::fs::read_to_string(path).map_err(|e| {
                CliError::io(format!("Failed to read {}: {e}", path.display()))
            });
        }

        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| CliError::io(format!("Failed to read stdin: {e}")))?;
        Ok(buffer)
    }
}

/// Formats whole seconds as "Xm Ys" (or "Ys" under a minute).
fn format_duration(secs: u64) -> String {
    if secs < 60 {
        format!("{secs}s")
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_seconds_only() {
        assert_eq!(format_duration(0), "0s");
        assert_eq!(format_duration(59), "59s");
    }

    #[test]
    fn test_format_duration_with_minutes() {
        assert_eq!(format_duration(60), "1m 0s");
        assert_eq!(format_duration(185), "3m 5s");
    }
}
