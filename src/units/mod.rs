//! Unit conversion across static measurement categories.
//!
//! Every category normalizes through a base unit (meters for Length, grams
//! for Mass, and so on). Units declare their relation to the base explicitly
//! via [`Scale`], so affine categories such as Temperature go through the
//! same code path as plain multiplicative ones.

mod tables;

pub use tables::{ANGLE, AREA, DATA, LENGTH, MASS, SPEED, TEMPERATURE, TIME, VOLUME};

use anyhow::{bail, Result};

/// Relation between a unit and its category's base unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scale {
    /// `base = value * factor`
    Linear(f64),
    /// `base = (value - offset) * num / den`
    ///
    /// The factor is kept as a ratio so that conversions like Celsius to
    /// Fahrenheit stay exact for common values (100 C -> 212 F).
    Affine {
        /// Numerator of the scale factor applied toward the base unit.
        num: f64,
        /// Denominator of the scale factor applied toward the base unit.
        den: f64,
        /// Value subtracted before scaling toward the base unit.
        offset: f64,
    },
}

impl Scale {
    /// Projects a value in this unit onto the category's base unit.
    #[must_use]
    pub fn to_base(self, value: f64) -> f64 {
        match self {
            Self::Linear(factor) => value * factor,
            Self::Affine { num, den, offset } => (value - offset) * num / den,
        }
    }

    /// Projects a value in the category's base unit into this unit.
    #[must_use]
    pub fn from_base(self, value: f64) -> f64 {
        match self {
            Self::Linear(factor) => value / factor,
            Self::Affine { num, den, offset } => value * den / num + offset,
        }
    }
}

/// A single unit within a conversion category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Unit {
    /// Human-readable unit name (e.g., "kilometer").
    pub name: &'static str,
    /// Short symbol used on the command line (e.g., "km").
    pub symbol: &'static str,
    /// Relation to the category's base unit.
    pub scale: Scale,
}

/// A measurement category: a named, immutable set of units sharing a base.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Category {
    /// Category name (e.g., "length").
    pub name: &'static str,
    /// Symbol of the base unit all conversions normalize through.
    pub base: &'static str,
    /// Units belonging to this category.
    pub units: &'static [Unit],
}

impl Category {
    /// All built-in categories.
    #[must_use]
    pub fn all() -> &'static [Self] {
        tables::CATEGORIES
    }

    /// Looks up a category by name (case-insensitive).
    #[must_use]
    pub fn find(name: &str) -> Option<&'static Self> {
        tables::CATEGORIES
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Looks up a unit by its symbol (exact match).
    #[must_use]
    pub fn unit(&self, symbol: &str) -> Option<&Unit> {
        self.units.iter().find(|u| u.symbol == symbol)
    }

    /// Returns true if this category contains a unit with the given symbol.
    #[must_use]
    pub fn contains(&self, symbol: &str) -> bool {
        self.unit(symbol).is_some()
    }

    /// Finds the single category containing both symbols.
    ///
    /// # Errors
    ///
    /// Returns an error when no category holds both symbols (including the
    /// cross-category case) or when more than one does.
    pub fn infer(from: &str, to: &str) -> Result<&'static Self> {
        let matches: Vec<&'static Self> = tables::CATEGORIES
            .iter()
            .filter(|c| c.contains(from) && c.contains(to))
            .collect();

        match matches.as_slice() {
            [category] => Ok(*category),
            [] => bail!("No category contains both '{from}' and '{to}'"),
            _ => {
                let names: Vec<&str> = matches.iter().map(|c| c.name).collect();
                bail!(
                    "Units '{from}' and '{to}' are ambiguous (found in: {}); pass --category",
                    names.join(", ")
                );
            }
        }
    }

    /// Converts a value between two units of this category.
    ///
    /// Identity conversions return the input unchanged, bit for bit.
    ///
    /// # Errors
    ///
    /// Returns an error when either symbol is not a unit of this category.
    pub fn convert(&self, value: f64, from: &str, to: &str) -> Result<f64> {
        let Some(from_unit) = self.unit(from) else {
            bail!("Unknown {} unit '{from}'", self.name);
        };
        let Some(to_unit) = self.unit(to) else {
            bail!("Unknown {} unit '{to}'", self.name);
        };

        if from == to {
            return Ok(value);
        }

        Ok(to_unit.scale.from_base(from_unit.scale.to_base(value)))
    }
}

/// Converts a value between two units of the given category.
///
/// # Errors
///
/// Returns an error when either symbol is not a unit of the category.
pub fn convert(value: f64, from: &str, to: &str, category: &Category) -> Result<f64> {
    category.convert(value, from, to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_meters_to_kilometers() {
        let result = convert(1.0, "m", "km", &LENGTH).unwrap();
        assert_eq!(result, 0.001);
    }

    #[test]
    fn test_length_miles_to_kilometers() {
        let result = convert(1.0, "mi", "km", &LENGTH).unwrap();
        assert!((result - 1.609_344).abs() < 1e-9);
    }

    #[test]
    fn test_temperature_boiling_point() {
        let result = convert(100.0, "C", "F", &TEMPERATURE).unwrap();
        assert_eq!(result, 212.0);
    }

    #[test]
    fn test_temperature_freezing_to_kelvin() {
        let result = convert(0.0, "C", "K", &TEMPERATURE).unwrap();
        assert_eq!(result, 273.15);
    }

    #[test]
    fn test_temperature_fahrenheit_to_celsius() {
        let result = convert(32.0, "F", "C", &TEMPERATURE).unwrap();
        assert_eq!(result, 0.0);
    }

    #[test]
    fn test_angle_degrees_to_radians() {
        let result = convert(180.0, "deg", "rad", &ANGLE).unwrap();
        assert!((result - std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn test_angle_gradians_to_degrees() {
        let result = convert(100.0, "grad", "deg", &ANGLE).unwrap();
        assert!((result - 90.0).abs() < 1e-12);
    }

    #[test]
    fn test_identity_conversion_is_exact() {
        // Identity must return the input unchanged for every unit,
        // including the awkward floating point cases.
        let values = [0.0, 1.0, -40.0, 0.1, 1e9, f64::MIN_POSITIVE];
        for category in Category::all() {
            for unit in category.units {
                for value in values {
                    let result = category.convert(value, unit.symbol, unit.symbol).unwrap();
                    assert_eq!(
                        result, value,
                        "identity failed for {} in {}",
                        unit.symbol, category.name
                    );
                }
            }
        }
    }

    #[test]
    fn test_roundtrip_all_categories() {
        // A -> B -> A must come back within floating error for every
        // unit pair, affine categories included.
        for category in Category::all() {
            for from in category.units {
                for to in category.units {
                    let there = category.convert(123.456, from.symbol, to.symbol).unwrap();
                    let back = category.convert(there, to.symbol, from.symbol).unwrap();
                    assert!(
                        (back - 123.456).abs() < 1e-6,
                        "round-trip failed for {} -> {} in {}: got {}",
                        from.symbol,
                        to.symbol,
                        category.name,
                        back
                    );
                }
            }
        }
    }

    #[test]
    fn test_unknown_unit_is_an_error() {
        assert!(convert(1.0, "m", "parsec", &LENGTH).is_err());
        assert!(convert(1.0, "furlong", "m", &LENGTH).is_err());
    }

    #[test]
    fn test_category_find_case_insensitive() {
        assert!(Category::find("Length").is_some());
        assert!(Category::find("TEMPERATURE").is_some());
        assert!(Category::find("plasma").is_none());
    }

    #[test]
    fn test_infer_unique_category() {
        let category = Category::infer("m", "km").unwrap();
        assert_eq!(category.name, "length");
    }

    #[test]
    fn test_infer_cross_category_fails() {
        assert!(Category::infer("m", "kg").is_err());
    }

    #[test]
    fn test_mass_kilograms_to_pounds() {
        let result = convert(1.0, "kg", "lb", &MASS).unwrap();
        assert!((result - 2.204_622_621_8).abs() < 1e-6);
    }

    #[test]
    fn test_volume_gallons_to_liters() {
        let result = convert(1.0, "gal", "L", &VOLUME).unwrap();
        assert!((result - 3.785_41).abs() < 1e-6);
    }

    #[test]
    fn test_speed_kmh_to_ms() {
        let result = convert(36.0, "km/h", "m/s", &SPEED).unwrap();
        assert!((result - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_data_kilobytes_to_bytes() {
        let result = convert(1.0, "KB", "B", &DATA).unwrap();
        assert_eq!(result, 1024.0);
    }

    #[test]
    fn test_time_hours_to_minutes() {
        let result = convert(2.0, "h", "min", &TIME).unwrap();
        assert_eq!(result, 120.0);
    }

    #[test]
    fn test_area_hectares_to_square_meters() {
        let result = convert(1.0, "ha", "m2", &AREA).unwrap();
        assert_eq!(result, 10_000.0);
    }

    #[test]
    fn test_every_category_has_a_base_unit() {
        for category in Category::all() {
            let base = category
                .unit(category.base)
                .unwrap_or_else(|| panic!("{} has no base unit", category.name));
            // The base unit must map onto itself.
            assert_eq!(base.scale.to_base(42.0), 42.0);
            assert_eq!(base.scale.from_base(42.0), 42.0);
        }
    }
}
