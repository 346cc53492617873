// ISO 2955 prefix table
// Arguments to PrefixRepresentation::new: prefix, multiplication factor,
// international symbol, Form I, Form II single case lower, Form II single case upper

use crate::registry::types::PrefixRepresentation;

pub static EXA: PrefixRepresentation = PrefixRepresentation::new("exa", 1e18, "E", "E", "ex", "EX");
pub static PETA: PrefixRepresentation =
    PrefixRepresentation::new("peta", 1e15, "P", "P", "pe", "PE");
pub static TERA: PrefixRepresentation = PrefixRepresentation::new("tera", 1e12, "T", "T", "t", "T");
pub static GIGA: PrefixRepresentation = PrefixRepresentation::new("giga", 1e9, "G", "G", "g", "G");
pub static MEGA: PrefixRepresentation =
    PrefixRepresentation::new("mega", 1e6, "M", "M", "ma", "MA");
pub static KILO: PrefixRepresentation = PrefixRepresentation::new("kilo", 1e3, "k", "k", "k", "K");
pub static HECTO: PrefixRepresentation =
    PrefixRepresentation::new("hecto", 1e2, "h", "h", "h", "H");
pub static DECA: PrefixRepresentation =
    PrefixRepresentation::new("deca", 1e1, "da", "da", "da", "DA");
pub static DECI: PrefixRepresentation = PrefixRepresentation::new("deci", 1e-1, "d", "d", "d", "D");
pub static CENTI: PrefixRepresentation =
    PrefixRepresentation::new("centi", 1e-2, "c", "c", "c", "C");
pub static MILLI: PrefixRepresentation =
    PrefixRepresentation::new("milli", 1e-3, "m", "m", "m", "M");
// Form I and Form II fall back to "u" for the micro sign
pub static MICRO: PrefixRepresentation =
    PrefixRepresentation::new("micro", 1e-6, "\u{00b5}", "u", "u", "U");
pub static NANO: PrefixRepresentation = PrefixRepresentation::new("nano", 1e-9, "n", "n", "n", "N");
pub static PICO: PrefixRepresentation =
    PrefixRepresentation::new("pico", 1e-12, "p", "p", "p", "P");
pub static FEMTO: PrefixRepresentation =
    PrefixRepresentation::new("femto", 1e-15, "f", "f", "f", "F");
pub static ATTO: PrefixRepresentation =
    PrefixRepresentation::new("atto", 1e-18, "a", "a", "a", "A");

/// Every prefix from the largest factor to the smallest
pub static PREFIXES: [&PrefixRepresentation; 16] = [
    &EXA, &PETA, &TERA, &GIGA, &MEGA, &KILO, &HECTO, &DECA, &DECI, &CENTI, &MILLI, &MICRO, &NANO,
    &PICO, &FEMTO, &ATTO,
];
