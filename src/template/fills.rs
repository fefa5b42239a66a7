//! Fill maps: values for holes and references
//!
//! Fill documents are flat mappings from names to strings or integers, e.g.
//!
//! ```yaml
//! instname: web-1
//! count: 3
//! ```

use std::collections::BTreeMap;

use super::ast::Value;
use super::error::{Result, TemplateError};

pub type Fills = BTreeMap<String, Value>;

pub fn from_json(text: &str) -> Result<Fills> {
    serde_json::from_str(text).map_err(|err| TemplateError::Fills(err.to_string()))
}

/// An empty document yields an empty map
pub fn from_yaml(text: &str) -> Result<Fills> {
    if text.trim().is_empty() {
        return Ok(Fills::new());
    }
    serde_yaml::from_str(text).map_err(|err| TemplateError::Fills(err.to_string()))
}
