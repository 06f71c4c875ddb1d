// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the event bus

use thiserror::Error;

/// Error a handler may return; anything `?`-convertible fits
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Argument validation failures on subscribe and trigger
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BusError {
    #[error("event name must not be empty")]
    EmptyEventName,
    #[error("event name is reserved for the wildcard channel: {0}")]
    ReservedEventName(String),
}

/// A handler failure caught during dispatch
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("handler failed: {0}")]
    Failed(#[source] BoxError),
    #[error("handler panicked: {0}")]
    Panicked(String),
}

/// Errors loading bus configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}
