// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Validated event-name registry
//!
//! Event names from every family must be unique across the whole registry,
//! otherwise two unrelated producers could trigger each other's subscribers.

use crate::sets::{
    agent, channel_view, configuration, connection, contact, disaster_recovery, event_type,
    master, task, voice_id, web_socket,
};
use crate::{NAMESPACE_SEPARATOR, WILDCARD};
use std::collections::HashMap;
use thiserror::Error;

/// Label used in errors for names registered without a namespace
const PLAIN: &str = "<plain>";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("event name {name} registered by both {first} and {second}")]
    Collision {
        name: String,
        first: String,
        second: String,
    },
    #[error("empty event name in {namespace}")]
    EmptyName { namespace: String },
    #[error("event name is reserved: {0}")]
    Reserved(String),
}

/// Accumulates event-name sets and validates them on [`build`](Self::build)
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    entries: Vec<(Option<String>, String)>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add names that are used verbatim
    pub fn plain(mut self, values: &[&str]) -> Self {
        self.entries
            .extend(values.iter().map(|v| (None, (*v).to_string())));
        self
    }

    /// Add names rendered as `<prefix>::<value>`
    pub fn namespace(mut self, prefix: &str, values: &[&str]) -> Self {
        self.entries.extend(
            values
                .iter()
                .map(|v| (Some(prefix.to_string()), (*v).to_string())),
        );
        self
    }

    pub fn build(self) -> Result<Registry, RegistryError> {
        let mut names: HashMap<String, Option<String>> = HashMap::new();

        for (namespace, value) in self.entries {
            if value.is_empty() {
                return Err(RegistryError::EmptyName {
                    namespace: namespace.unwrap_or_else(|| PLAIN.to_string()),
                });
            }

            let name = match &namespace {
                Some(prefix) => format!("{}{}{}", prefix, NAMESPACE_SEPARATOR, value),
                None => value,
            };
            if name == WILDCARD {
                return Err(RegistryError::Reserved(name));
            }

            if let Some(existing) = names.get(&name) {
                return Err(RegistryError::Collision {
                    name,
                    first: existing.clone().unwrap_or_else(|| PLAIN.to_string()),
                    second: namespace.unwrap_or_else(|| PLAIN.to_string()),
                });
            }
            names.insert(name, namespace);
        }

        Ok(Registry { names })
    }
}

/// Set of known event names, each mapped to the namespace that owns it
#[derive(Debug, Clone)]
pub struct Registry {
    names: HashMap<String, Option<String>>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Registry of every standard event family
    pub fn standard() -> Result<Self, RegistryError> {
        Self::builder()
            .plain(event_type::VALUES)
            .namespace(master::NAMESPACE, master::VALUES)
            .namespace(agent::NAMESPACE, agent::VALUES)
            .namespace(web_socket::NAMESPACE, web_socket::VALUES)
            .namespace(contact::NAMESPACE, contact::VALUES)
            .namespace(channel_view::NAMESPACE, channel_view::VALUES)
            .namespace(task::NAMESPACE, task::VALUES)
            .namespace(connection::NAMESPACE, connection::VALUES)
            .namespace(configuration::NAMESPACE, configuration::VALUES)
            .namespace(disaster_recovery::NAMESPACE, disaster_recovery::VALUES)
            .namespace(voice_id::NAMESPACE, voice_id::VALUES)
            .build()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    /// Namespace that registered `name`; `Some(None)` for plain names
    pub fn namespace_of(&self, name: &str) -> Option<Option<&str>> {
        self.names.get(name).map(|ns| ns.as_deref())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.keys().map(String::as_str)
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
