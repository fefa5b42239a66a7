//! Parser configuration
//!
//! `defaults/parser.default.yaml` is embedded into the crate so the documented
//! defaults and runtime behavior stay in sync. User documents are layered on
//! top of it with the `config` crate: any key they leave out keeps its default.

use config::{Config, ConfigError, File, FileFormat};
use serde::Deserialize;

use super::error::{Result, TemplateError};
use super::grammar::DEFAULT_TOKEN_CAPACITY;

const DEFAULT_YAML: &str = include_str!("../../defaults/parser.default.yaml");

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParserConfig {
    /// Colour rule names in parse errors and syntax tree dumps
    pub pretty: bool,
    /// Initial size of the token table
    pub token_capacity: usize,
}

impl ParserConfig {
    /// The embedded defaults
    pub fn load_defaults() -> Result<Self> {
        Self::from_yaml_str("")
    }

    /// Layers a (possibly partial) YAML document over the embedded defaults
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_YAML, FileFormat::Yaml));
        if !text.trim().is_empty() {
            builder = builder.add_source(File::from_str(text, FileFormat::Yaml));
        }

        builder
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(config_error)
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn with_token_capacity(mut self, token_capacity: usize) -> Self {
        self.token_capacity = token_capacity;
        self
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            pretty: false,
            token_capacity: DEFAULT_TOKEN_CAPACITY,
        }
    }
}

fn config_error(err: ConfigError) -> TemplateError {
    TemplateError::Config(err.to_string())
}
