use std::{path::Path, str::FromStr};

use phplit_core::Indent;
use phplit_dumper::{DEFAULT_OBJECT_FACTORY, DumperConfig};
use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    error::SourceContext,
    validate::{find_value_span, validate_callable},
};

/// Root of `phplit.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Settings for rendering values
    #[serde(default)]
    pub dumper: DumperSection,
}

/// The `[dumper]` table. Unset fields fall back to the dumper defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DumperSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrap_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indentation: Option<Indent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_factory: Option<String>,
}

impl DumperSection {
    /// Replace every field that `overrides` sets.
    pub fn merge(&mut self, overrides: DumperSection) {
        if overrides.max_depth.is_some() {
            self.max_depth = overrides.max_depth;
        }
        if overrides.wrap_length.is_some() {
            self.wrap_length = overrides.wrap_length;
        }
        if overrides.indentation.is_some() {
            self.indentation = overrides.indentation;
        }
        if overrides.object_factory.is_some() {
            self.object_factory = overrides.object_factory;
        }
    }
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, crate::CONFIG_FILE)
    }
}

impl Config {
    /// The configuration `phplit init` writes: every field spelled out.
    pub fn defaults() -> Self {
        let defaults = DumperConfig::default();
        Self {
            dumper: DumperSection {
                max_depth: Some(defaults.max_depth),
                wrap_length: Some(defaults.wrap_length),
                indentation: Some(defaults.indentation),
                object_factory: Some(DEFAULT_OBJECT_FACTORY.to_string()),
            },
        }
    }

    /// Parse a phplit.toml file from the given path
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse a phplit.toml from a string with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let config: Self = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
        config.validate(&ctx)?;
        Ok(config)
    }

    fn validate(&self, ctx: &SourceContext<'_>) -> Result<()> {
        let dumper = &self.dumper;

        if dumper.max_depth == Some(0) {
            return Err(ctx.validation_error(
                "max_depth must be at least 1",
                find_value_span(ctx.src(), "max_depth"),
            ));
        }
        if dumper.wrap_length == Some(0) {
            return Err(ctx.validation_error(
                "wrap_length must be at least 1",
                find_value_span(ctx.src(), "wrap_length"),
            ));
        }
        if let Some(reason) = dumper.object_factory.as_deref().and_then(validate_callable) {
            return Err(ctx.validation_error(
                reason,
                find_value_span(ctx.src(), "object_factory"),
            ));
        }
        Ok(())
    }

    /// Resolve the dumper settings, filling unset fields with defaults.
    pub fn dumper_config(&self) -> DumperConfig {
        let mut config = DumperConfig::default();
        let dumper = &self.dumper;
        if let Some(max_depth) = dumper.max_depth {
            config.max_depth = max_depth;
        }
        if let Some(wrap_length) = dumper.wrap_length {
            config.wrap_length = wrap_length;
        }
        if let Some(indentation) = dumper.indentation {
            config.indentation = indentation;
        }
        if let Some(factory) = &dumper.object_factory {
            config.object_factory = factory.clone();
        }
        config
    }

    /// Render as TOML.
    pub fn to_toml_string(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string(self)
    }
}
