//! Color conversion command.

use crate::cli::common::{CliError, CliResult};
use crate::color::{HslColor, RgbColor};
use clap::Args;
use serde::Serialize;

/// Convert a color between hex, RGB and HSL representations
#[derive(Debug, Clone, Args)]
pub struct ColorArgs {
    /// Hex color string (e.g., "#336699")
    #[arg(long, value_name = "HEX")]
    pub hex: Option<String>,

    /// RGB triple as "R,G,B" with channels 0-255
    #[arg(long, value_name = "R,G,B")]
    pub rgb: Option<String>,

    /// HSL triple as "H,S,L" with H 0-359 and S,L 0-100
    #[arg(long, value_name = "H,S,L")]
    pub hsl: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ColorResult {
    hex: String,
    rgb: RgbColor,
    hsl: HslColor,
}

impl ColorArgs {
    /// Execute the color command
    pub fn execute(&self) -> CliResult<()> {
        let given = [
            self.hex.is_some(),
            self.rgb.is_some(),
            self.hsl.is_some(),
        ]
        .iter()
        .filter(|&&g| g)
        .count();
        if given != 1 {
            return Err(CliError::usage(
                "Pass exactly one of --hex, --rgb or --hsl",
            ));
        }

        let rgb = if let Some(hex) = &self.hex {
            RgbColor::from_hex(hex).map_err(|e| CliError::validation(e.to_string()))?
        } else if let Some(rgb) = &self.rgb {
            parse_rgb(rgb)?
        } else if let Some(hsl) = &self.hsl {
            parse_hsl(hsl)?.to_rgb()
        } else {
            unreachable!("exactly one input flag was checked above")
        };

        let result = ColorResult {
            hex: rgb.to_hex(),
            rgb,
            hsl: rgb.to_hsl(),
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&result)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            println!("Hex: {}", result.hex);
            println!("RGB: {}", result.rgb);
            println!("HSL: {}", result.hsl);
        }

        Ok(())
    }
}

/// Parses "R,G,B" with each channel in 0-255.
fn parse_rgb(input: &str) -> CliResult<RgbColor> {
    let [r, g, b] = parse_triple(input, "RGB")?;
    let parse = |part: &str, channel: &str| {
        part.trim().parse::<u8>().map_err(|_| {
            CliError::validation(format!(
                "Invalid {channel} channel '{}' (expected 0-255)",
                part.trim()
            ))
        })
    };
    Ok(RgbColor::new(
        parse(&r, "red")?,
        parse(&g, "green")?,
        parse(&b, "blue")?,
    ))
}

/// Parses "H,S,L" with hue in 0-359 and saturation/lightness in 0-100.
fn parse_hsl(input: &str) -> CliResult<HslColor> {
    let [h, s, l] = parse_triple(input, "HSL")?;
    let h: u16 = h
        .trim()
        .parse()
        .map_err(|_| CliError::validation(format!("Invalid hue '{}' (expected 0-359)", h.trim())))?;
    if h >= 360 {
        return Err(CliError::validation(format!(
            "Invalid hue '{h}' (expected 0-359)"
        )));
    }
    let parse_percent = |part: &str, component: &str| -> CliResult<u8> {
        let value: u8 = part.trim().parse().map_err(|_| {
            CliError::validation(format!(
                "Invalid {component} '{}' (expected 0-100)",
                part.trim()
            ))
        })?;
        if value > 100 {
            return Err(CliError::validation(format!(
                "Invalid {component} '{value}' (expected 0-100)"
            )));
        }
        Ok(value)
    };
    Ok(HslColor::new(
        h,
        parse_percent(&s, "saturation")?,
        parse_percent(&l, "lightness")?,
    ))
}

/// Splits a comma-separated triple.
fn parse_triple(input: &str, label: &str) -> CliResult<[String; 3]> {
    let parts: Vec<&str> = input.split(',').collect();
    if parts.len() != 3 {
        return Err(CliError::validation(format!(
            "Invalid {label} triple '{input}' (expected three comma-separated values)"
        )));
    }
    Ok([
        parts[0].to_string(),
        parts[1].to_string(),
        parts[2].to_string(),
    ])
}
