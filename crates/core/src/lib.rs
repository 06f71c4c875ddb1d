//! sb-core: In-process publish/subscribe event bus
//!
//! This crate provides:
//! - A synchronous event bus with wildcard subscriptions and per-handler
//!   fault isolation
//! - Subscription bookkeeping with idempotent unsubscribe
//! - Correlated request/response envelopes carried as event payloads
//! - Pluggable observers (logging) and payload adapters

pub mod config;
pub mod envelope;
pub mod error;
pub mod events;
pub mod id;

// Re-exports
pub use config::BusConfig;
pub use envelope::{Envelope, EnvelopeFactory, Request, Response};
pub use error::{BoxError, BusError, ConfigError, DispatchError};
pub use events::{
    contact_accepted_adapter, AdapterRegistry, DispatchObserver, EventBus, EventBusBuilder,
    FnAdapter, LogSink, PayloadAdapter, Subscription, SubscriptionId, SubscriptionMap,
    TracingObserver,
};
pub use id::{IdGen, SequentialIdGen, UuidIdGen};

pub use serde_json::Value;
