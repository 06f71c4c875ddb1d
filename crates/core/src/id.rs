// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Unique identifier generation for subscriptions and request envelopes

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Produces identifiers unique within the process lifetime.
///
/// Uniqueness is assumed by the bus and the envelope factory, never checked.
pub trait IdGen: Send + Sync {
    fn next_id(&self) -> String;
}

/// Shared, type-erased generator as held by the bus and the envelope factory
pub type SharedIdGen = Arc<dyn IdGen>;

/// Random v4 UUIDs
#[derive(Clone, Debug, Default)]
pub struct UuidIdGen;

impl IdGen for UuidIdGen {
    fn next_id(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Predictable `<prefix>-<n>` identifiers for tests.
///
/// Clones share the counter.
#[derive(Clone, Debug)]
pub struct SequentialIdGen {
    prefix: String,
    counter: Arc<AtomicU64>,
}

impl SequentialIdGen {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: Arc::new(AtomicU64::new(1)),
        }
    }
}

impl Default for SequentialIdGen {
    fn default() -> Self {
        Self::new("id")
    }
}

impl IdGen for SequentialIdGen {
    fn next_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::SeqCst);
        format!("{}-{}", self.prefix, n)
    }
}

/// Default generator used when none is injected
pub fn default_id_gen() -> SharedIdGen {
    Arc::new(UuidIdGen)
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
