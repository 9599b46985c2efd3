//! CLI command implementations.

pub mod check;
pub mod ensure;
pub mod generate;
pub mod version;
