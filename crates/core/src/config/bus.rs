// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event bus configuration
//!
//! ```toml
//! log_events = true
//! quiet_events = ["log", "api_metric"]
//! ```

use crate::error::ConfigError;
use sb_names::event_type;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Controls diagnostic logging of triggered events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusConfig {
    /// Emit a diagnostic entry for every triggered event
    pub log_events: bool,
    /// Events never logged, even with `log_events` on. These are the events
    /// the logging pipeline itself triggers.
    pub quiet_events: Vec<String>,
}

/// Events whose diagnostics would feed back into the logging pipeline
pub fn default_quiet_events() -> Vec<String> {
    [
        event_type::LOG,
        event_type::MASTER_RESPONSE,
        event_type::API_METRIC,
        event_type::SERVER_BOUND_INTERNAL_LOG,
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Default for BusConfig {
    fn default() -> Self {
        Self {
            log_events: false,
            quiet_events: default_quiet_events(),
        }
    }
}

impl BusConfig {
    pub fn with_log_events(mut self, log_events: bool) -> Self {
        self.log_events = log_events;
        self
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

#[cfg(test)]
#[path = "bus_tests.rs"]
mod tests;
