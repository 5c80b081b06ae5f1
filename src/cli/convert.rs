//! Unit conversion command.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::units::Category;
use clap::Args;
use serde::Serialize;

/// Convert a value between units of a measurement category
#[derive(Debug, Clone, Args)]
pub struct ConvertArgs {
    /// Value to convert
    #[arg(short, long, value_name = "NUMBER", allow_hyphen_values = true)]
    pub value: Option<f64>,

    /// Source unit symbol (e.g., "m", "C", "km/h")
    #[arg(short, long, value_name = "UNIT")]
    pub from: Option<String>,

    /// Target unit symbol (e.g., "km", "F", "mph")
    #[arg(short, long, value_name = "UNIT")]
    pub to: Option<String>,

    /// Category name; inferred from the unit symbols when omitted
    #[arg(short, long, value_name = "NAME")]
    pub category: Option<String>,

    /// List known categories and units (optionally a single category)
    #[arg(long, value_name = "CATEGORY", num_args = 0..=1, default_missing_value = "")]
    pub list: Option<String>,

    /// Decimal places in human-readable output (overrides config)
    #[arg(short, long, value_name = "DIGITS")]
    pub precision: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ConvertResult<'a> {
    value: f64,
    from: &'a str,
    to: &'a str,
    category: &'a str,
    result: f64,
}

impl ConvertArgs {
    /// Execute the convert command
    pub fn execute(&self, config: &Config) -> CliResult<()> {
        if let Some(filter) = &self.list {
            return list_categories(filter);
        }

        let (Some(value), Some(from), Some(to)) = (self.value, &self.from, &self.to) else {
            return Err(CliError::usage(
                "--value, --from and --to are required (or use --list)",
            ));
        };

        if value.is_nan() {
            return Err(CliError::validation("Value must be a number"));
        }

        let category = match &self.category {
            Some(name) => Category::find(name)
                .ok_or_else(|| CliError::validation(format!("Unknown category '{name}'")))?,
            None => Category::infer(from, to).map_err(|e| CliError::validation(e.to_string()))?,
        };

        let result = category
            .convert(value, from, to)
            .map_err(|e| CliError::validation(e.to_string()))?;

        let output = ConvertResult {
            value,
            from,
            to,
            category: category.name,
            result,
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&output)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            let precision = self.precision.unwrap_or(config.output.precision);
            println!(
                "{} {} = {} {}",
                format_value(value, precision),
                from,
                format_value(result, precision),
                to
            );
        }

        Ok(())
    }
}

/// Prints categories and their units, filtered when a name is given.
fn list_categories(filter: &str) -> CliResult<()> {
    let categories: Vec<&Category> = if filter.is_empty() {
        Category::all().iter().collect()
    } else {
        let category = Category::find(filter)
            .ok_or_else(|| CliError::validation(format!("Unknown category '{filter}'")))?;
        vec![category]
    };

    for category in categories {
        println!("{} (base: {})", category.name, category.base);
        for unit in category.units {
            println!("  {:<8} {}", unit.symbol, unit.name);
        }
    }

    Ok(())
}

/// Formats a number with fixed precision, trimming trailing zeros.
fn format_value(value: f64, precision: usize) -> String {
    let formatted = format!("{value:.precision$}");
    if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value_trims_trailing_zeros() {
        assert_eq!(format_value(0.001, 6), "0.001");
        assert_eq!(format_value(212.0, 6), "212");
        assert_eq!(format_value(1.5, 2), "1.5");
    }

    #[test]
    fn test_format_value_zero_precision() {
        assert_eq!(format_value(212.4, 0), "212");
    }

    #[test]
    fn test_format_value_negative() {
        assert_eq!(format_value(-40.0, 6), "-40");
    }
}
