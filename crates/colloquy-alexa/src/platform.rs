//! Alexa platform plugin configuration and request-acceptance glue.
//!
//! The router consults [`AlexaPlatform::accepts`] before considering any
//! Alexa handle records, and resolves intent names through the configured
//! intent map.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use colloquy_core::error::{Error, Result};

use crate::request::AlexaRequest;

/// Alexa plugin configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlexaConfig {
    /// When set, requests addressed to a different skill id are rejected.
    pub skill_id: Option<String>,
    /// Wire intent name -> app intent name.
    pub intent_map: HashMap<String, String>,
}

impl AlexaConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read config file {}: {e}", path.display()))
        })?;
        serde_json::from_str(&content).map_err(|e| {
            Error::Config(format!("Failed to parse config file {}: {e}", path.display()))
        })
    }
}

/// The Alexa platform plugin.
#[derive(Debug, Clone, Default)]
pub struct AlexaPlatform {
    config: AlexaConfig,
}

impl AlexaPlatform {
    /// Create a plugin with the given configuration.
    pub fn new(config: AlexaConfig) -> Self {
        Self { config }
    }

    /// The plugin configuration.
    pub fn config(&self) -> &AlexaConfig {
        &self.config
    }

    /// Whether this plugin accepts the request. Without a configured skill
    /// id every request is accepted.
    pub fn accepts(&self, request: &AlexaRequest) -> bool {
        let Some(expected) = self.config.skill_id.as_deref() else {
            return true;
        };
        match request.application_id() {
            Some(id) if id == expected => true,
            application_id => {
                debug!(expected, ?application_id, "Rejecting request for foreign skill id");
                false
            }
        }
    }

    /// Intent name after applying the configured intent map. Unmapped
    /// intents pass through unchanged.
    pub fn mapped_intent(&self, request: &AlexaRequest) -> Option<String> {
        let name = request.intent_name()?;
        Some(
            self.config
                .intent_map
                .get(name)
                .cloned()
                .unwrap_or_else(|| name.to_string()),
        )
    }
}
