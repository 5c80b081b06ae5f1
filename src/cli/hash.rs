//! Digest computation command.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::digest::Algorithm;
use clap::{Args, ValueEnum};
use serde::Serialize;
use std::io::Read;
use std::path::PathBuf;

/// Compute a digest of text or a file
#[derive(Debug, Clone, Args)]
pub struct HashArgs {
    /// Text to hash (UTF-8 bytes)
    #[arg(short, long, value_name = "TEXT", conflicts_with = "file")]
    pub text: Option<String>,

    /// Hash the contents of a file (stdin is used when neither flag is given)
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Digest algorithm; the configured default applies when omitted
    #[arg(short, long, value_name = "ALG")]
    pub algorithm: Option<AlgorithmArg>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Algorithm selection, including "all".
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmArg {
    /// MD5 (128-bit, RFC 1321)
    Md5,
    /// SHA-1 (160-bit)
    Sha1,
    /// SHA-256 (256-bit)
    Sha256,
    /// SHA-512 (512-bit)
    Sha512,
    /// Every supported algorithm
    All,
}

impl AlgorithmArg {
    fn algorithms(self) -> Vec<Algorithm> {
        match self {
            Self::Md5 => vec![Algorithm::Md5],
            Self::Sha1 => vec![Algorithm::Sha1],
            Self::Sha256 => vec![Algorithm::Sha256],
            Self::Sha512 => vec![Algorithm::Sha512],
            Self::All => Algorithm::ALL.to_vec(),
        }
    }
}

#[derive(Debug, Serialize)]
struct DigestEntry {
    algorithm: Algorithm,
    digest: String,
}

impl HashArgs {
    /// Execute the hash command
    pub fn execute(&self, config: &Config) -> CliResult<()> {
        let data = self.read_input()?;

        let algorithms = self.algorithm.map_or_else(
            || vec![config.hash.default_algorithm],
            AlgorithmArg::algorithms,
        );

        let entries: Vec<DigestEntry> = algorithms
            .into_iter()
            .map(|algorithm| DigestEntry {
                algorithm,
                digest: algorithm.hex_digest(&data),
            })
            .collect();

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&entries)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            for entry in &entries {
                println!("{:<8} {}", entry.algorithm.to_string() + ":", entry.digest);
            }
        }

        Ok(())
    }

    fn read_input(&self) -> CliResult<Vec<u8>> {
        if let Some(text) = &self.text {
            return Ok(text.as_bytes().to_vec());
        }
        if let Some(path) = &self.file {
            return std::fs::read(path).map_err(|e| {
                CliError::io(format!("Failed to read {}: {e}", path.display()))
            });
        }

        let mut buffer = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buffer)
            .map_err(|e| CliError::io(format!("Failed to read stdin: {e}")))?;
        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_expands_to_every_algorithm() {
        assert_eq!(AlgorithmArg::All.algorithms(), Algorithm::ALL.to_vec());
    }

    #[test]
    fn test_single_algorithm_selection() {
        assert_eq!(AlgorithmArg::Md5.algorithms(), vec![Algorithm::Md5]);
        assert_eq!(AlgorithmArg::Sha512.algorithms(), vec![Algorithm::Sha512]);
    }
}
