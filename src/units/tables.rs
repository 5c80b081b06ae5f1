//! Static conversion tables.
//!
//! Tables are constructed at compile time and never mutated. Factors for the
//! imperial units are the exact international definitions (1 in = 0.0254 m,
//! 1 lb = 453.59237 g).

use super::{Category, Scale, Unit};

const fn linear(name: &'static str, symbol: &'static str, factor: f64) -> Unit {
    Unit {
        name,
        symbol,
        scale: Scale::Linear(factor),
    }
}

const fn affine(name: &'static str, symbol: &'static str, num: f64, den: f64, offset: f64) -> Unit {
    Unit {
        name,
        symbol,
        scale: Scale::Affine { num, den, offset },
    }
}

/// Length units, normalized through meters.
pub const LENGTH: Category = Category {
    name: "length",
    base: "m",
    units: &[
        linear("millimeter", "mm", 0.001),
        linear("centimeter", "cm", 0.01),
        linear("meter", "m", 1.0),
        linear("kilometer", "km", 1000.0),
        linear("inch", "in", 0.0254),
        linear("foot", "ft", 0.3048),
        linear("yard", "yd", 0.9144),
        linear("mile", "mi", 1609.344),
    ],
};

/// Mass units, normalized through grams.
pub const MASS: Category = Category {
    name: "mass",
    base: "g",
    units: &[
        linear("milligram", "mg", 0.001),
        linear("gram", "g", 1.0),
        linear("kilogram", "kg", 1000.0),
        linear("metric ton", "t", 1_000_000.0),
        linear("ounce", "oz", 28.349_523_125),
        linear("pound", "lb", 453.592_37),
    ],
};

/// Volume units, normalized through liters.
pub const VOLUME: Category = Category {
    name: "volume",
    base: "L",
    units: &[
        linear("milliliter", "ml", 0.001),
        linear("liter", "L", 1.0),
        linear("cubic meter", "m3", 1000.0),
        linear("teaspoon", "tsp", 0.004_928_92),
        linear("tablespoon", "tbsp", 0.014_786_8),
        linear("fluid ounce", "fl-oz", 0.029_573_5),
        linear("cup", "cup", 0.236_588),
        linear("pint", "pt", 0.473_176),
        linear("quart", "qt", 0.946_353),
        linear("gallon", "gal", 3.785_41),
    ],
};

/// Temperature units, normalized through Celsius. Fahrenheit and Kelvin are
/// affine, not multiplicative.
pub const TEMPERATURE: Category = Category {
    name: "temperature",
    base: "C",
    units: &[
        linear("Celsius", "C", 1.0),
        affine("Fahrenheit", "F", 5.0, 9.0, 32.0),
        affine("Kelvin", "K", 1.0, 1.0, 273.15),
    ],
};

/// Angle units, normalized through degrees.
pub const ANGLE: Category = Category {
    name: "angle",
    base: "deg",
    units: &[
        linear("degree", "deg", 1.0),
        linear("radian", "rad", 57.295_779_513_082_32),
        linear("gradian", "grad", 0.9),
        linear("turn", "turn", 360.0),
        linear("arcminute", "arcmin", 1.0 / 60.0),
        linear("arcsecond", "arcsec", 1.0 / 3600.0),
    ],
};

/// Speed units, normalized through meters per second.
pub const SPEED: Category = Category {
    name: "speed",
    base: "m/s",
    units: &[
        linear("meter per second", "m/s", 1.0),
        linear("kilometer per hour", "km/h", 1.0 / 3.6),
        linear("mile per hour", "mph", 0.447_04),
        linear("foot per second", "ft/s", 0.3048),
        linear("knot", "kn", 0.514_444),
    ],
};

/// Area units, normalized through square meters.
pub const AREA: Category = Category {
    name: "area",
    base: "m2",
    units: &[
        linear("square millimeter", "mm2", 1e-6),
        linear("square centimeter", "cm2", 1e-4),
        linear("square meter", "m2", 1.0),
        linear("hectare", "ha", 10_000.0),
        linear("square kilometer", "km2", 1e6),
        linear("square inch", "in2", 0.000_645_16),
        linear("square foot", "ft2", 0.092_903_04),
        linear("acre", "ac", 4046.856_422_4),
    ],
};

/// Time units, normalized through seconds.
pub const TIME: Category = Category {
    name: "time",
    base: "s",
    units: &[
        linear("millisecond", "ms", 0.001),
        linear("second", "s", 1.0),
        linear("minute", "min", 60.0),
        linear("hour", "h", 3600.0),
        linear("day", "d", 86_400.0),
        linear("week", "wk", 604_800.0),
    ],
};

/// Digital storage units, normalized through bytes (binary multiples).
pub const DATA: Category = Category {
    name: "data",
    base: "B",
    units: &[
        linear("bit", "bit", 0.125),
        linear("byte", "B", 1.0),
        linear("kilobyte", "KB", 1024.0),
        linear("megabyte", "MB", 1_048_576.0),
        linear("gigabyte", "GB", 1_073_741_824.0),
        linear("terabyte", "TB", 1_099_511_627_776.0),
    ],
};

/// All built-in categories, in display order.
pub const CATEGORIES: &[Category] = &[
    LENGTH,
    MASS,
    VOLUME,
    TEMPERATURE,
    ANGLE,
    SPEED,
    AREA,
    TIME,
    DATA,
];
