// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pluggable payload adapters applied before dispatch

use serde_json::{json, Value};
use std::sync::Arc;

/// `kind` tag stamped on payloads wrapped by [`contact_accepted_adapter`]
pub const CONTACT_KIND: &str = "contact";

/// Rewrites the payload of matching events before handlers see it
pub trait PayloadAdapter: Send + Sync {
    /// Whether this adapter handles `event_name` carrying `payload`
    fn applies(&self, event_name: &str, payload: &Value) -> bool;

    fn adapt(&self, payload: Value) -> Value;
}

/// Adapter built from a predicate and a transform
pub struct FnAdapter<P, T> {
    predicate: P,
    transform: T,
}

impl<P, T> FnAdapter<P, T>
where
    P: Fn(&str, &Value) -> bool + Send + Sync,
    T: Fn(Value) -> Value + Send + Sync,
{
    pub fn new(predicate: P, transform: T) -> Self {
        Self {
            predicate,
            transform,
        }
    }
}

impl<P, T> PayloadAdapter for FnAdapter<P, T>
where
    P: Fn(&str, &Value) -> bool + Send + Sync,
    T: Fn(Value) -> Value + Send + Sync,
{
    fn applies(&self, event_name: &str, payload: &Value) -> bool {
        (self.predicate)(event_name, payload)
    }

    fn adapt(&self, payload: Value) -> Value {
        (self.transform)(payload)
    }
}

/// Wraps bare `{"contactId": ..}` payloads of accepted-contact events into a
/// contact handle `{"kind": "contact", "contactId": ..}`.
///
/// Matches any event name starting with `contact::accepted`. Payloads that
/// already carry a `kind`, or whose `contactId` is missing or null, pass
/// through untouched.
pub fn contact_accepted_adapter() -> impl PayloadAdapter {
    FnAdapter::new(
        |event_name: &str, payload: &Value| {
            event_name.starts_with(sb_names::contact::ACCEPTED)
                && payload.get("contactId").is_some_and(|id| !id.is_null())
                && payload.get("kind").is_none()
        },
        |payload: Value| {
            json!({
                "kind": CONTACT_KIND,
                "contactId": payload["contactId"].clone(),
            })
        },
    )
}

/// Ordered adapters; the first one that applies wins
#[derive(Clone, Default)]
pub struct AdapterRegistry {
    adapters: Vec<Arc<dyn PayloadAdapter>>,
}

impl AdapterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, adapter: impl PayloadAdapter + 'static) {
        self.adapters.push(Arc::new(adapter));
    }

    pub fn with(mut self, adapter: impl PayloadAdapter + 'static) -> Self {
        self.register(adapter);
        self
    }

    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }

    /// Run the first applicable adapter, or hand the payload back untouched
    pub fn apply(&self, event_name: &str, payload: Value) -> Value {
        match self
            .adapters
            .iter()
            .find(|a| a.applies(event_name, &payload))
        {
            Some(adapter) => {
                tracing::debug!(event = event_name, "adapting payload");
                adapter.adapt(payload)
            }
            None => payload,
        }
    }
}

#[cfg(test)]
#[path = "adapter_tests.rs"]
mod tests;
