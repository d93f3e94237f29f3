//! Configuration for prompts and output.
//!
//! Only the two input prompts and the output format are configurable. Values
//! come from a TOML file and are then overridden by command-line flags.
//!
//! ```toml
//! [prompts]
//! enabled = true
//! count = "Enter number of elements: "
//! elements = "Enter the elements:\n"
//!
//! [output]
//! format = "json"
//! ```

mod loader;

pub use loader::{load_config, parse_config, CONFIG_FILE_NAME};

use crate::io::OutputFormat;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecondmaxConfig {
    pub prompts: PromptConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    pub enabled: bool,
    /// Written before the element count is read. No trailing newline by default.
    pub count: String,
    /// Written before the elements are read.
    pub elements: String,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            count: default_count_prompt(),
            elements: default_elements_prompt(),
        }
    }
}

pub fn default_count_prompt() -> String {
    "Enter number of elements: ".to_string()
}

pub fn default_elements_prompt() -> String {
    "Enter the elements:\n".to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}
