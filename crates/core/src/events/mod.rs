// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Events system for loose coupling between SDK components
//!
//! This module provides:
//! - `EventBus` - Synchronous fan-out of named events to subscribed handlers
//! - `SubscriptionMap` / `Subscription` - Registration bookkeeping
//! - `DispatchObserver` - Diagnostics and handler failure reporting
//! - `AdapterRegistry` - Payload rewriting before dispatch

mod adapter;
mod bus;
mod observer;
mod subscription;

pub use adapter::{
    contact_accepted_adapter, AdapterRegistry, FnAdapter, PayloadAdapter, CONTACT_KIND,
};
pub use bus::{EventBus, EventBusBuilder};
pub use observer::{DispatchObserver, LogLevel, LogRecord, LogSink, TracingObserver};
pub use subscription::{handler, Handler, Subscription, SubscriptionId, SubscriptionMap};
