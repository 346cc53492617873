// ISO 2955 unit table
// Arguments to Unit::new: name, international symbol, category, Form I,
// Form II single case lower, Form II single case upper

use crate::registry::types::{Category, Unit};

// Base SI units

pub static METRE: Unit = Unit::new("metre", "m", Category::Base, "m", "m", "M");
pub static KILOGRAM: Unit = Unit::new("kilogram", "kg", Category::Base, "kg", "kg", "KG");
pub static SECOND: Unit = Unit::new("second", "s", Category::Base, "s", "s", "S");
pub static AMPERE: Unit = Unit::new("ampere", "A", Category::Base, "A", "a", "A");
pub static KELVIN: Unit = Unit::new("kelvin", "K", Category::Base, "K", "k", "K");
pub static MOLE: Unit = Unit::new("mole", "mol", Category::Base, "mol", "mol", "MOL");
pub static CANDELA: Unit = Unit::new("candela", "cd", Category::Base, "cd", "cd", "CD");

// Supplementary SI units

pub static RADIAN: Unit = Unit::new(
    "radian",
    "rad",
    Category::Supplementary,
    "rad",
    "rad",
    "RAD",
);
pub static STERADIAN: Unit = Unit::new(
    "steradian",
    "sr",
    Category::Supplementary,
    "sr",
    "sr",
    "SR",
);

// Derived SI units with special names

pub static HERTZ: Unit = Unit::new("hertz", "Hz", Category::Derived, "Hz", "hz", "HZ");
pub static NEWTON: Unit = Unit::new("newton", "N", Category::Derived, "N", "n", "N");
pub static PASCAL: Unit = Unit::new("pascal", "Pa", Category::Derived, "Pa", "pal", "PAL");
pub static JOULE: Unit = Unit::new("joule", "J", Category::Derived, "J", "j", "J");
pub static WATT: Unit = Unit::new("watt", "W", Category::Derived, "W", "w", "W");
pub static COULOMB: Unit = Unit::new("coulomb", "C", Category::Derived, "C", "c", "C");
pub static VOLT: Unit = Unit::new("volt", "V", Category::Derived, "V", "v", "V");
pub static FARAD: Unit = Unit::new("farad", "F", Category::Derived, "F", "f", "F");
pub static OHM: Unit = Unit::new("ohm", "\u{03a9}", Category::Derived, "Ohm", "ohm", "OHM");
pub static SIEMENS: Unit = Unit::new("siemens", "S", Category::Derived, "S", "sie", "SIE");
pub static WEBER: Unit = Unit::new("weber", "Wb", Category::Derived, "Wb", "wb", "WB");
pub static TESLA: Unit = Unit::new("tesla", "T", Category::Derived, "T", "t", "T");
pub static HENRY: Unit = Unit::new("henry", "H", Category::Derived, "H", "h", "H");
pub static DEGREE_CELSIUS: Unit = Unit::new(
    "degree Celsius",
    "\u{2103}",
    Category::Derived,
    "Cel",
    "cel",
    "CEL",
);
pub static LUMEN: Unit = Unit::new("lumen", "lm", Category::Derived, "lm", "lm", "LM");
pub static LUX: Unit = Unit::new("lux", "lx", Category::Derived, "lx", "lx", "LX");
pub static BECQUEREL: Unit = Unit::new("becquerel", "Bq", Category::Derived, "Bq", "bq", "BQ");
pub static GRAY: Unit = Unit::new("gray", "Gy", Category::Derived, "Gy", "gy", "GY");
pub static SIEVERT: Unit = Unit::new("sievert", "Sv", Category::Derived, "Sv", "sv", "SV");

// Other units from ISO 1000

pub static ANGLE_GRADE: Unit = Unit::new(
    "grade (angle)",
    "\u{1da2}",
    Category::Other,
    "gon",
    "gon",
    "GON",
);
pub static ANGLE_DEGREE: Unit = Unit::new(
    "degree (angle)",
    "\u{00b0}",
    Category::Other,
    "deg",
    "deg",
    "DEG",
);
pub static ANGLE_MINUTE: Unit = Unit::new(
    "minute (angle)",
    "\u{2032}",
    Category::Other,
    "\u{2032}",
    "mnt",
    "MNT",
);
pub static ANGLE_SECOND: Unit = Unit::new(
    "second (angle)",
    "\u{2033}",
    Category::Other,
    "\u{2033}",
    "sec",
    "SEC",
);
pub static LITRE: Unit = Unit::new("litre", "l", Category::Other, "l", "l", "L");
pub static ARE: Unit = Unit::new("are", "a", Category::Other, "a", "are", "ARE");
pub static HECTARE: Unit = Unit::new("hectare", "ha", Category::Other, "ha", "har", "HAR");
pub static MINUTE: Unit = Unit::new("minute (time)", "min", Category::Other, "min", "min", "MIN");
pub static HOUR: Unit = Unit::new("hour", "h", Category::Other, "h", "hr", "HR");
pub static DAY: Unit = Unit::new("day", "d", Category::Other, "d", "d", "D");
// Year shares Form I "a" with the are; only Form II tells them apart
pub static YEAR: Unit = Unit::new("year", "a", Category::Other, "a", "ann", "ANN");
pub static GRAM: Unit = Unit::new("gram", "g", Category::Other, "g", "g", "G");
pub static TONNE: Unit = Unit::new("tonne", "t", Category::Other, "t", "tne", "TNE");
pub static BAR: Unit = Unit::new("bar", "bar", Category::Other, "bar", "bar", "BAR");
pub static POISE: Unit = Unit::new("poise", "P", Category::Other, "P", "p", "P");
pub static STOKES: Unit = Unit::new("stokes", "St", Category::Other, "St", "st", "ST");
pub static ELECTRONVOLT: Unit = Unit::new("electronvolt", "eV", Category::Other, "eV", "ev", "EV");
pub static ATOMIC_MASS_UNIT: Unit = Unit::new(
    "atomic mass unit",
    "u",
    Category::Other,
    "u",
    "u",
    "U",
);
pub static ASTRONOMIC_UNIT: Unit = Unit::new(
    "astronomic unit",
    "AU",
    Category::Other,
    "AU",
    "asu",
    "ASU",
);
pub static PARSEC: Unit = Unit::new("parsec", "pc", Category::Other, "pc", "prs", "PRS");

/// Every unit in table order
pub static UNITS: [&Unit; 48] = [
    &METRE,
    &KILOGRAM,
    &SECOND,
    &AMPERE,
    &KELVIN,
    &MOLE,
    &CANDELA,
    &RADIAN,
    &STERADIAN,
    &HERTZ,
    &NEWTON,
    &PASCAL,
    &JOULE,
    &WATT,
    &COULOMB,
    &VOLT,
    &FARAD,
    &OHM,
    &SIEMENS,
    &WEBER,
    &TESLA,
    &HENRY,
    &DEGREE_CELSIUS,
    &LUMEN,
    &LUX,
    &BECQUEREL,
    &GRAY,
    &SIEVERT,
    &ANGLE_GRADE,
    &ANGLE_DEGREE,
    &ANGLE_MINUTE,
    &ANGLE_SECOND,
    &LITRE,
    &ARE,
    &HECTARE,
    &MINUTE,
    &HOUR,
    &DAY,
    &YEAR,
    &GRAM,
    &TONNE,
    &BAR,
    &POISE,
    &STOKES,
    &ELECTRONVOLT,
    &ATOMIC_MASS_UNIT,
    &ASTRONOMIC_UNIT,
    &PARSEC,
];
