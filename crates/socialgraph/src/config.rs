//! Graph behavior configuration.

use crate::error::{GraphError, Result};
use serde::{Deserialize, Serialize};

/// Configuration for identity resolution and friendship rules
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Accept `add_friend(a, a)`; when false it is a silent no-op
    pub allow_self_friendship: bool,

    /// Trim surrounding whitespace from every incoming name
    pub trim_names: bool,
}

impl GraphConfig {
    /// Reject self friendships, keep names byte-exact
    pub fn strict() -> Self {
        Self::default()
    }

    /// Accept self friendships and trim names
    pub fn permissive() -> Self {
        Self {
            allow_self_friendship: true,
            trim_names: true,
        }
    }

    /// Allow or reject self friendships
    pub fn with_self_friendship(mut self, allow: bool) -> Self {
        self.allow_self_friendship = allow;
        self
    }

    /// Enable or disable name trimming
    pub fn with_trim_names(mut self, trim: bool) -> Self {
        self.trim_names = trim;
        self
    }

    /// Load a config from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Serialization`] if the text is not valid JSON
    /// and [`GraphError::InvalidConfig`] if it is not a JSON object.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(text)
            .map_err(|e| GraphError::serialization("Failed to parse config", Some(e)))?;

        if !value.is_object() {
            return Err(GraphError::InvalidConfig {
                message: format!("expected a JSON object, got {value}"),
            });
        }

        serde_json::from_value(value)
            .map_err(|e| GraphError::serialization("Failed to deserialize config", Some(e)))
    }

    /// Canonical form of a name under this config.
    pub(crate) fn canonical<'a>(&self, name: &'a str) -> &'a str {
        if self.trim_names {
            name.trim()
        } else {
            name
        }
    }
}
