use crate::registry::error::RegistryError;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

lazy_static! {
    /// Accepted spellings of an encoding selector
    /// Examples: "i", "form-i", "FormI", "lower", "ii-lower", "form_ii_upper"
    static ref FORM_PATTERN: Regex =
        Regex::new(r"(?i)^(?:form[-_ ]?)?(?:(i)|(?:ii[-_ ]?)?(lower|upper))$").unwrap();
}

/// A unit of measurement and its ISO 2955 encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Unit {
    /// Human-readable name (e.g., "metre")
    pub name: &'static str,
    /// Conventional scientific symbol, may be non-ASCII (e.g., "Ω")
    pub international_symbol: &'static str,
    pub representation: Representation,
    /// Group of the table the unit belongs to
    pub category: Category,
}

/// Form I (mixed case) and Form II (single case) encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Representation {
    pub form_i: &'static str,
    pub form_ii: FormII,
}

/// Single case lower and single case upper encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormII {
    pub single_case_lower: &'static str,
    pub single_case_upper: &'static str,
}

/// An SI prefix and its ISO 2955 encodings
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PrefixRepresentation {
    /// Prefix name (e.g., "kilo")
    pub prefix: &'static str,
    /// Scale factor applied to the unit (e.g., 1e3 for kilo)
    pub multiplication_factor: f64,
    pub international_symbol: &'static str,
    pub form_i: &'static str,
    pub form_ii: FormII,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Base SI units
    Base,
    /// Supplementary SI units
    Supplementary,
    /// Derived SI units with special names
    Derived,
    /// Other units accepted by ISO 1000
    Other,
}

/// Selects one of the three encodings of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Form {
    #[default]
    FormI,
    FormIILower,
    FormIIUpper,
}

impl Unit {
    pub(crate) const fn new(
        name: &'static str,
        international_symbol: &'static str,
        category: Category,
        form_i: &'static str,
        single_case_lower: &'static str,
        single_case_upper: &'static str,
    ) -> Self {
        Self {
            name,
            international_symbol,
            representation: Representation {
                form_i,
                form_ii: FormII {
                    single_case_lower,
                    single_case_upper,
                },
            },
            category,
        }
    }

    /// Display form: "<name> (<symbol>)", e.g. "metre (m)"
    pub fn describe(&self) -> String {
        self.to_string()
    }

    pub fn encoding(&self, form: Form) -> &'static str {
        self.representation.encoding(form)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.international_symbol)
    }
}

impl Representation {
    pub fn encoding(&self, form: Form) -> &'static str {
        match form {
            Form::FormI => self.form_i,
            Form::FormIILower => self.form_ii.single_case_lower,
            Form::FormIIUpper => self.form_ii.single_case_upper,
        }
    }
}

impl PrefixRepresentation {
    pub(crate) const fn new(
        prefix: &'static str,
        multiplication_factor: f64,
        international_symbol: &'static str,
        form_i: &'static str,
        single_case_lower: &'static str,
        single_case_upper: &'static str,
    ) -> Self {
        Self {
            prefix,
            multiplication_factor,
            international_symbol,
            form_i,
            form_ii: FormII {
                single_case_lower,
                single_case_upper,
            },
        }
    }

    /// Display form: "<prefix> (<symbol>)", e.g. "kilo (k)"
    pub fn describe(&self) -> String {
        self.to_string()
    }

    pub fn encoding(&self, form: Form) -> &'static str {
        match form {
            Form::FormI => self.form_i,
            Form::FormIILower => self.form_ii.single_case_lower,
            Form::FormIIUpper => self.form_ii.single_case_upper,
        }
    }
}

impl fmt::Display for PrefixRepresentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.prefix, self.international_symbol)
    }
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Base,
        Category::Supplementary,
        Category::Derived,
        Category::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Base => "base",
            Category::Supplementary => "supplementary",
            Category::Derived => "derived",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| RegistryError::UnknownCategory(s.to_string()))
    }
}

impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Form::FormI => write!(f, "form-i"),
            Form::FormIILower => write!(f, "form-ii-lower"),
            Form::FormIIUpper => write!(f, "form-ii-upper"),
        }
    }
}

impl FromStr for Form {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = FORM_PATTERN
            .captures(s.trim())
            .ok_or_else(|| RegistryError::UnknownForm(s.to_string()))?;

        if caps.get(1).is_some() {
            return Ok(Form::FormI);
        }
        match caps.get(2).map(|m| m.as_str().to_ascii_lowercase()) {
            Some(case) if case == "lower" => Ok(Form::FormIILower),
            Some(_) => Ok(Form::FormIIUpper),
            None => Err(RegistryError::UnknownForm(s.to_string())),
        }
    }
}

impl Serialize for Form {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Form {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_spellings() {
        assert_eq!("i".parse::<Form>().unwrap(), Form::FormI);
        assert_eq!("form-i".parse::<Form>().unwrap(), Form::FormI);
        assert_eq!("FormI".parse::<Form>().unwrap(), Form::FormI);
        assert_eq!("lower".parse::<Form>().unwrap(), Form::FormIILower);
        assert_eq!("ii-lower".parse::<Form>().unwrap(), Form::FormIILower);
        assert_eq!("form_ii_upper".parse::<Form>().unwrap(), Form::FormIIUpper);
        assert_eq!("UPPER".parse::<Form>().unwrap(), Form::FormIIUpper);

        assert!("ii".parse::<Form>().is_err());
        assert!("form-iii".parse::<Form>().is_err());
        assert!("".parse::<Form>().is_err());
    }

    #[test]
    fn test_form_display_parses_back() {
        for form in [Form::FormI, Form::FormIILower, Form::FormIIUpper] {
            assert_eq!(form.to_string().parse::<Form>().unwrap(), form);
        }
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("base".parse::<Category>().unwrap(), Category::Base);
        assert_eq!(" Derived ".parse::<Category>().unwrap(), Category::Derived);
        assert!(matches!(
            "compound".parse::<Category>(),
            Err(RegistryError::UnknownCategory(s)) if s == "compound"
        ));
    }

    #[test]
    fn test_encoding_selects_field() {
        let unit = Unit::new("ohm", "Ω", Category::Derived, "Ohm", "ohm", "OHM");
        assert_eq!(unit.encoding(Form::FormI), "Ohm");
        assert_eq!(unit.encoding(Form::FormIILower), "ohm");
        assert_eq!(unit.encoding(Form::FormIIUpper), "OHM");
    }
}
