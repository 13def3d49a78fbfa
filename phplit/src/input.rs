//! Reading data documents to dump.

use std::{
    io::{self, Read},
    path::Path,
};

use clap::ValueEnum;
use eyre::{Context, Result};
use phplit_dumper::Value;

/// Format of an input document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    Json,
    Toml,
}

impl InputFormat {
    /// Guess the format from a file extension, defaulting to JSON.
    pub fn detect(path: Option<&Path>) -> Self {
        match path.and_then(|p| p.extension()).and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Json,
        }
    }

    /// Parse `text` into a value.
    pub fn parse(self, text: &str) -> Result<Value> {
        match self {
            Self::Json => {
                let json: serde_json::Value =
                    serde_json::from_str(text).wrap_err("Invalid JSON input")?;
                Ok(json.into())
            }
            Self::Toml => {
                let table: toml::Table = toml::from_str(text).wrap_err("Invalid TOML input")?;
                Ok(toml::Value::Table(table).into())
            }
        }
    }
}

/// Read `path`, or standard input when it is absent or `-`.
pub fn read(path: Option<&Path>) -> Result<String> {
    match path.filter(|p| *p != Path::new("-")) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "reading input file");
            std::fs::read_to_string(path)
                .wrap_err_with(|| format!("Failed to read {}", path.display()))
        }
        None => {
            tracing::debug!("reading input from stdin");
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .wrap_err("Failed to read standard input")?;
            Ok(text)
        }
    }
}
