// ISO 2955 unit and prefix registry
// Every record is a static, so the table is shared across threads without locking

pub mod error;
pub mod lookup;
pub mod prefixes;
pub mod types;
pub mod units;


pub use error::RegistryError;
pub use lookup::{find_prefix, find_unit, units_in};
pub use prefixes::*;
pub use types::{Category, Form, FormII, PrefixRepresentation, Representation, Unit};
pub use units::*;
