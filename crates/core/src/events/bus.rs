// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event bus for synchronous, in-process fan-out
//!
//! `trigger` snapshots the matching subscriptions (wildcard channel first,
//! then the event's own, each in registration order) and runs every handler
//! to completion before returning. Handlers may subscribe, unsubscribe or
//! trigger again while running; none of that changes the snapshot already
//! being dispatched.

use super::adapter::AdapterRegistry;
use super::observer::{DispatchObserver, TracingObserver};
use super::subscription::{handler, Subscription, SubscriptionMap};
use crate::config::BusConfig;
use crate::error::{BoxError, BusError, DispatchError};
use crate::id::{default_id_gen, SharedIdGen};
use sb_names::WILDCARD;
use serde_json::Value;
use std::any::Any;
use std::collections::HashSet;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Weak};

struct BusInner {
    subs: SubscriptionMap,
    log_events: bool,
    quiet_events: HashSet<String>,
    observer: Option<Arc<dyn DispatchObserver>>,
    adapters: AdapterRegistry,
}

/// Routes triggered events to subscribed handlers.
///
/// Clones share the same subscriptions and settings.
#[derive(Clone)]
pub struct EventBus {
    inner: Arc<BusInner>,
}

/// Assembles an [`EventBus`] with non-default collaborators
pub struct EventBusBuilder {
    config: BusConfig,
    observer: Option<Arc<dyn DispatchObserver>>,
    adapters: AdapterRegistry,
    id_gen: SharedIdGen,
}

impl EventBusBuilder {
    fn new() -> Self {
        Self {
            config: BusConfig::default(),
            observer: Some(Arc::new(TracingObserver::new())),
            adapters: AdapterRegistry::new(),
            id_gen: default_id_gen(),
        }
    }

    pub fn with_config(mut self, config: BusConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_observer(mut self, observer: Arc<dyn DispatchObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Drop all diagnostics, including handler failure reports
    pub fn without_observer(mut self) -> Self {
        self.observer = None;
        self
    }

    pub fn with_adapters(mut self, adapters: AdapterRegistry) -> Self {
        self.adapters = adapters;
        self
    }

    pub fn with_id_gen(mut self, id_gen: SharedIdGen) -> Self {
        self.id_gen = id_gen;
        self
    }

    pub fn build(self) -> EventBus {
        EventBus {
            inner: Arc::new(BusInner {
                subs: SubscriptionMap::with_id_gen(self.id_gen),
                log_events: self.config.log_events,
                quiet_events: self.config.quiet_events.into_iter().collect(),
                observer: self.observer,
                adapters: self.adapters,
            }),
        }
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> EventBusBuilder {
        EventBusBuilder::new()
    }

    pub fn from_config(config: &BusConfig) -> Self {
        Self::builder().with_config(config.clone()).build()
    }

    /// Register `f` for events named `event_name`
    pub fn subscribe<F>(&self, event_name: &str, f: F) -> Result<Subscription, BusError>
    where
        F: Fn(&Value, &str, &EventBus) -> Result<(), BoxError> + Send + Sync + 'static,
    {
        validate(event_name)?;
        let sub = self.inner.subs.subscribe(event_name, handler(f));
        tracing::debug!(event = event_name, subscription = %sub.id(), "subscribed");
        Ok(sub)
    }

    /// Register `f` for every event, ahead of event-specific handlers
    pub fn subscribe_all<F>(&self, f: F) -> Subscription
    where
        F: Fn(&Value, &str, &EventBus) -> Result<(), BoxError> + Send + Sync + 'static,
    {
        let sub = self.inner.subs.subscribe(WILDCARD, handler(f));
        tracing::debug!(subscription = %sub.id(), "subscribed to all events");
        sub
    }

    pub fn get_subscriptions(&self, event_name: &str) -> Vec<Subscription> {
        self.inner.subs.get_subscriptions(event_name)
    }

    /// Dispatch `data` to every handler registered for `event_name`.
    ///
    /// Pass `Value::Null` when there is no payload. Other falsy values such
    /// as `0`, `""` or `false` are delivered unchanged. Handler failures are
    /// reported to the observer and never returned; only an invalid event
    /// name is an error.
    pub fn trigger(&self, event_name: &str, data: Value) -> Result<(), BusError> {
        validate(event_name)?;

        let mut targets = self.inner.subs.get_subscriptions(WILDCARD);
        targets.extend(self.inner.subs.get_subscriptions(event_name));

        if self.inner.log_events && !self.inner.quiet_events.contains(event_name) {
            if let Some(observer) = &self.inner.observer {
                observer.on_publish(event_name);
            }
        }

        let data = self.inner.adapters.apply(event_name, data);

        for sub in &targets {
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
                sub.invoke(&data, event_name, self)
            }));
            let error = match outcome {
                Ok(Ok(())) => continue,
                Ok(Err(e)) => DispatchError::Failed(e),
                Err(payload) => DispatchError::Panicked(panic_message(payload.as_ref())),
            };
            if let Some(observer) = &self.inner.observer {
                observer.on_handler_failed(event_name, sub.id(), &error);
            }
        }

        Ok(())
    }

    /// A handler that re-triggers whatever it receives on this bus.
    ///
    /// Subscribe it on another bus to chain that bus's events into this one.
    /// It holds this bus weakly and does nothing once the bus is dropped.
    pub fn bridge(
        &self,
    ) -> impl Fn(&Value, &str, &EventBus) -> Result<(), BoxError> + Send + Sync + 'static {
        let target: Weak<BusInner> = Arc::downgrade(&self.inner);
        move |data: &Value, event_name: &str, _source: &EventBus| -> Result<(), BoxError> {
            if let Some(inner) = target.upgrade() {
                EventBus { inner }.trigger(event_name, data.clone())?;
            }
            Ok(())
        }
    }

    /// Unsubscribe every current subscription. The bus stays usable.
    pub fn unsubscribe_all(&self) {
        let subs = self.inner.subs.get_all_subscriptions();
        tracing::debug!(count = subs.len(), "unsubscribing all");
        for sub in subs {
            sub.unsubscribe();
        }
    }

    /// Number of live subscriptions, wildcard ones included
    pub fn len(&self) -> usize {
        self.inner.subs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.subs.is_empty()
    }

    /// Whether both handles refer to the same bus
    pub fn ptr_eq(&self, other: &EventBus) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("subscriptions", &self.inner.subs.len())
            .field("log_events", &self.inner.log_events)
            .field("adapters", &self.inner.adapters.len())
            .finish_non_exhaustive()
    }
}

fn validate(event_name: &str) -> Result<(), BusError> {
    if event_name.is_empty() {
        return Err(BusError::EmptyEventName);
    }
    if event_name == WILDCARD {
        return Err(BusError::ReservedEventName(event_name.to_string()));
    }
    Ok(())
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

#[cfg(test)]
#[path = "bus_tests.rs"]
mod tests;
