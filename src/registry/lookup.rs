use crate::registry::error::RegistryError;
use crate::registry::prefixes::PREFIXES;
use crate::registry::types::{Category, PrefixRepresentation, Unit};
use crate::registry::units::UNITS;

/// Find a unit by its exact name (e.g., "degree Celsius")
pub fn find_unit(name: &str) -> Result<&'static Unit, RegistryError> {
    UNITS
        .iter()
        .copied()
        .find(|unit| unit.name == name)
        .ok_or_else(|| RegistryError::UnknownUnit(name.to_string()))
}

/// Find a prefix by its exact name (e.g., "kilo")
pub fn find_prefix(name: &str) -> Result<&'static PrefixRepresentation, RegistryError> {
    PREFIXES
        .iter()
        .copied()
        .find(|prefix| prefix.prefix == name)
        .ok_or_else(|| RegistryError::UnknownPrefix(name.to_string()))
}

/// Units of one group, in table order
pub fn units_in(category: Category) -> impl Iterator<Item = &'static Unit> {
    UNITS
        .iter()
        .copied()
        .filter(move |unit| unit.category == category)
}
