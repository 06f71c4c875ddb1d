// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dispatch observers: the bus's only route to logging
//!
//! The bus reports two things: a diagnostic entry per published event (when
//! enabled) and every handler failure. [`TracingObserver`] writes both to
//! `tracing` and can forward them to a remote [`LogSink`].

use super::subscription::SubscriptionId;
use crate::error::DispatchError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Receives dispatch diagnostics from an [`EventBus`](super::EventBus)
pub trait DispatchObserver: Send + Sync {
    /// An event is about to be dispatched
    fn on_publish(&self, event_name: &str);

    /// A handler returned an error or panicked
    fn on_handler_failed(&self, event_name: &str, id: &SubscriptionId, error: &DispatchError);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Error,
}

/// A log entry as forwarded to a remote sink
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    pub level: LogLevel,
    pub message: String,
    pub event: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Destination for forwarded log records (e.g. a server-bound log buffer)
pub trait LogSink: Send + Sync {
    fn send(&self, record: LogRecord);
}

/// Observer backed by `tracing`, optionally forwarding to a [`LogSink`]
#[derive(Clone, Default)]
pub struct TracingObserver {
    sink: Option<Arc<dyn LogSink>>,
}

impl TracingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sink(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    fn forward(&self, record: LogRecord) {
        if let Some(sink) = &self.sink {
            sink.send(record);
        }
    }
}

impl DispatchObserver for TracingObserver {
    fn on_publish(&self, event_name: &str) {
        tracing::trace!(event = event_name, "publishing event");
        self.forward(LogRecord {
            level: LogLevel::Trace,
            message: format!("Publishing event: {}", event_name),
            event: event_name.to_string(),
            error: None,
        });
    }

    fn on_handler_failed(&self, event_name: &str, id: &SubscriptionId, error: &DispatchError) {
        tracing::error!(
            event = event_name,
            subscription = %id,
            error = %error,
            "event handler failed"
        );
        self.forward(LogRecord {
            level: LogLevel::Error,
            message: format!("'{}' event handler failed.", event_name),
            event: event_name.to_string(),
            error: Some(error.to_string()),
        });
    }
}

#[cfg(test)]
#[path = "observer_tests.rs"]
mod tests;
