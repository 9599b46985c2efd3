//! Common utility functions.

pub mod envfile;
pub mod fs;
pub mod process;

// Re-export commonly used items
pub use envfile::{read_var, upsert_var, validate_var_name};
pub use fs::expand_path;
pub use process::{run, ProcessOutput};
