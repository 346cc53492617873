pub mod export;
pub mod formatter;

#[cfg(test)]
mod tests;

pub use export::*;
pub use formatter::*;
