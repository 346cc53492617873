use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    UnknownUnit(String),
    UnknownPrefix(String),
    UnknownCategory(String),
    UnknownForm(String),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::UnknownUnit(name) => write!(f, "Unknown unit: {}", name),
            RegistryError::UnknownPrefix(name) => write!(f, "Unknown prefix: {}", name),
            RegistryError::UnknownCategory(name) => write!(
                f,
                "Unknown category: {} (expected base, supplementary, derived or other)",
                name
            ),
            RegistryError::UnknownForm(name) => write!(
                f,
                "Unknown form: {} (expected form-i, form-ii-lower or form-ii-upper)",
                name
            ),
        }
    }
}

impl std::error::Error for RegistryError {}
