// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Subscriptions and the map that indexes them

use super::bus::EventBus;
use crate::error::BoxError;
use crate::id::{default_id_gen, SharedIdGen};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock, Weak};

/// Callback invoked with `(data, event_name, bus)` for each matching trigger
pub type Handler = Arc<dyn Fn(&Value, &str, &EventBus) -> Result<(), BoxError> + Send + Sync>;

/// Wrap a closure as a [`Handler`]
pub fn handler<F>(f: F) -> Handler
where
    F: Fn(&Value, &str, &EventBus) -> Result<(), BoxError> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Identifier of one registration
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub String);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One handler registered under one event name.
///
/// Cloning yields another handle to the same registration. The handle only
/// holds a weak reference to the map it came from, so it never keeps the map
/// alive and can outlive it.
#[derive(Clone)]
pub struct Subscription {
    id: SubscriptionId,
    event_name: String,
    handler: Handler,
    map: Weak<RwLock<MapState>>,
}

impl Subscription {
    pub fn id(&self) -> &SubscriptionId {
        &self.id
    }

    pub fn event_name(&self) -> &str {
        &self.event_name
    }

    /// Remove this registration from its map. Repeat calls are no-ops.
    pub fn unsubscribe(&self) {
        if let Some(state) = self.map.upgrade() {
            remove(&state, &self.event_name, &self.id);
        }
    }

    /// Whether the registration is still present in its map
    pub fn is_active(&self) -> bool {
        self.map.upgrade().is_some_and(|state| {
            state
                .read()
                .unwrap_or_else(|e| e.into_inner())
                .by_id
                .contains_key(&self.id)
        })
    }

    pub(crate) fn invoke(
        &self,
        data: &Value,
        event_name: &str,
        bus: &EventBus,
    ) -> Result<(), BoxError> {
        (self.handler)(data, event_name, bus)
    }
}

impl PartialEq for Subscription {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Subscription {}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("event_name", &self.event_name)
            .finish_non_exhaustive()
    }
}

/// Both indexes always describe the same set of subscriptions
#[derive(Default)]
struct MapState {
    by_event: HashMap<String, Vec<Subscription>>,
    by_id: HashMap<SubscriptionId, Subscription>,
}

fn remove(state: &RwLock<MapState>, event_name: &str, id: &SubscriptionId) {
    let mut state = state.write().unwrap_or_else(|e| e.into_inner());

    let Some(list) = state.by_event.get_mut(event_name) else {
        return;
    };
    let before = list.len();
    list.retain(|s| &s.id != id);
    if list.len() == before {
        // id belongs to another event (or none); leave both indexes alone
        return;
    }
    if list.is_empty() {
        state.by_event.remove(event_name);
    }
    state.by_id.remove(id);
}

/// Subscriptions indexed by event name (in registration order) and by id
#[derive(Clone)]
pub struct SubscriptionMap {
    state: Arc<RwLock<MapState>>,
    id_gen: SharedIdGen,
}

impl SubscriptionMap {
    pub fn new() -> Self {
        Self::with_id_gen(default_id_gen())
    }

    pub fn with_id_gen(id_gen: SharedIdGen) -> Self {
        Self {
            state: Arc::new(RwLock::new(MapState::default())),
            id_gen,
        }
    }

    /// Register `handler` under `event_name`.
    ///
    /// Registering the same handler twice yields two independent
    /// subscriptions, each invoked once per trigger.
    pub fn subscribe(&self, event_name: &str, handler: Handler) -> Subscription {
        let sub = Subscription {
            id: SubscriptionId(self.id_gen.next_id()),
            event_name: event_name.to_string(),
            handler,
            map: Arc::downgrade(&self.state),
        };

        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        state.by_id.insert(sub.id.clone(), sub.clone());
        state
            .by_event
            .entry(event_name.to_string())
            .or_default()
            .push(sub.clone());

        sub
    }

    /// Remove the subscription matching `event_name` and `id`, if present
    pub fn unsubscribe(&self, event_name: &str, id: &SubscriptionId) {
        remove(&self.state, event_name, id);
    }

    /// Snapshot of the subscriptions for `event_name` in registration order
    pub fn get_subscriptions(&self, event_name: &str) -> Vec<Subscription> {
        self.state
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .by_event
            .get(event_name)
            .cloned()
            .unwrap_or_default()
    }

    /// Snapshot of every subscription.
    ///
    /// Order across event names is unspecified; within one name it is
    /// registration order.
    pub fn get_all_subscriptions(&self) -> Vec<Subscription> {
        self.state
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .by_event
            .values()
            .flatten()
            .cloned()
            .collect()
    }

    pub fn contains(&self, id: &SubscriptionId) -> bool {
        self.state
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .by_id
            .contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.state
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .by_id
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[cfg(test)]
    fn is_consistent(&self) -> bool {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        let listed: usize = state.by_event.values().map(Vec::len).sum();

        listed == state.by_id.len()
            && state.by_event.values().all(|list| !list.is_empty())
            && state.by_event.iter().all(|(name, list)| {
                list.iter()
                    .all(|s| &s.event_name == name && state.by_id.contains_key(&s.id))
            })
    }
}

impl Default for SubscriptionMap {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "subscription_tests.rs"]
mod tests;
