// WebAssembly bindings for the ISO 2955 table
use crate::registry;
use crate::table::TableExport;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct Iso2955Wasm {}

impl Default for Iso2955Wasm {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl Iso2955Wasm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {}
    }

    /// "<name> (<symbol>)" for a unit name, e.g. "ohm" -> "ohm (Ω)"
    #[wasm_bindgen]
    pub fn describe_unit(&self, name: &str) -> Result<String, JsValue> {
        registry::find_unit(name)
            .map(|unit| unit.describe())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen]
    pub fn describe_prefix(&self, name: &str) -> Result<String, JsValue> {
        registry::find_prefix(name)
            .map(|prefix| prefix.describe())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Encoding of a unit in the given form ("form-i", "lower", "upper", ...)
    #[wasm_bindgen]
    pub fn encode_unit(&self, name: &str, form: &str) -> Result<String, JsValue> {
        let form: registry::Form = form
            .parse()
            .map_err(|e: registry::RegistryError| JsValue::from_str(&e.to_string()))?;
        let unit = registry::find_unit(name).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(unit.encoding(form).to_string())
    }

    /// Returns JSON string of the full table
    #[wasm_bindgen]
    pub fn export_json(&self) -> Result<String, JsValue> {
        TableExport::full()
            .to_json()
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize table: {}", e)))
    }
}
