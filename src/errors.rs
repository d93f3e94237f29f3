//! Error types for the input and configuration layers.
//!
//! The finder itself is total and never fails. Everything that can go wrong
//! happens while reading the sequence or loading configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Input validation errors raised while reading the count and elements.
#[derive(Debug, Error)]
pub enum InputError {
    /// Input ended before the element count was read
    #[error("Input validation error: expected the number of elements, found end of input")]
    MissingCount,

    /// Element count is not a non-negative integer
    #[error("Input validation error: invalid element count '{token}'")]
    InvalidCount { token: String },

    /// An element is not an integer
    #[error("Input validation error: element {index} is not an integer: '{token}'")]
    InvalidElement { index: usize, token: String },

    /// Input ended before `expected` elements were read
    #[error("Input validation error: expected {expected} elements, found {found}")]
    MissingElements { expected: usize, found: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl InputError {
    pub fn invalid_count(token: impl Into<String>) -> Self {
        Self::InvalidCount {
            token: token.into(),
        }
    }

    pub fn invalid_element(index: usize, token: impl Into<String>) -> Self {
        Self::InvalidElement {
            index,
            token: token.into(),
        }
    }
}

/// Configuration file errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration error: failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
