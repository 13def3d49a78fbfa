//! Loading and validation of `phplit.toml`.
//!
//! ```toml
//! [dumper]
//! max_depth = 50
//! wrap_length = 120
//! indentation = "tab"   # or a number of spaces, 1 to 8
//! object_factory = '\Nette\PhpGenerator\Dumper::createObject'
//! ```
//!
//! Every field is optional. Errors are [`miette`] diagnostics pointing into
//! the file.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod validate;

use std::path::Path;

pub use config::{Config, DumperSection};
pub use error::{Error, Result};

/// Default configuration file name.
pub const CONFIG_FILE: &str = "phplit.toml";

/// Parse a phplit.toml file from the given path
pub fn parse_file(path: impl AsRef<Path>) -> Result<Config> {
    Config::from_file(path)
}

/// Parse a phplit.toml from a string (uses "phplit.toml" as default filename)
pub fn parse_str(content: &str) -> Result<Config> {
    parse_str_with_filename(content, CONFIG_FILE)
}

/// Parse a phplit.toml from a string with a custom filename for error reporting
pub fn parse_str_with_filename(content: &str, filename: &str) -> Result<Config> {
    Config::from_str_with_filename(content, filename)
}

/// Load `path` if it exists, otherwise fall back to the built-in defaults.
pub fn load_or_default(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }
    tracing::debug!(path = %path.display(), "loading config");
    parse_file(path)
}
