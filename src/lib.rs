// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod finder;
pub mod io;

// Re-export commonly used types
pub use crate::errors::{ConfigError, InputError};
pub use crate::finder::{find, second_largest_unique, TopTwo, NOT_FOUND};
pub use crate::io::output::{OutputFormat, Report};
