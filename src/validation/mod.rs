//! Validation utilities
//!
//! Checks an existing store file without starting the shell.

mod store_file;

pub use store_file::{validate_store_file, ValidationReport};
