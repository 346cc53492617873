pub mod config;
pub mod logging;
pub mod registry;
pub mod table;

#[cfg(target_arch = "wasm32")]
pub mod wasm;
