use crate::registry::{units_in, Category, PrefixRepresentation, Unit, PREFIXES, UNITS};
use serde::Serialize;

/// Serializable snapshot of the registry
#[derive(Debug, Clone, Serialize)]
pub struct TableExport {
    pub units: Vec<&'static Unit>,
    pub prefixes: Vec<&'static PrefixRepresentation>,
}

impl TableExport {
    /// All units and all prefixes in table order
    pub fn full() -> Self {
        Self {
            units: UNITS.to_vec(),
            prefixes: PREFIXES.to_vec(),
        }
    }

    /// Units of a single category, without prefixes
    pub fn category(category: Category) -> Self {
        Self {
            units: units_in(category).collect(),
            prefixes: Vec::new(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
