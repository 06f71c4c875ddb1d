//! sb-names: Event-name registry for the Switchboard event bus
//!
//! This crate provides:
//! - Compile-time constant sets for the standard event families
//! - A registry builder that rejects cross-namespace collisions

pub mod registry;
pub mod sets;

pub use registry::{Registry, RegistryBuilder, RegistryError};
pub use sets::{
    agent, channel_view, configuration, connection, contact, disaster_recovery, event_type,
    master, task, voice_id, web_socket,
};

/// Separator between a namespace prefix and the event name
pub const NAMESPACE_SEPARATOR: &str = "::";

/// Channel name the bus reserves for "all events" subscriptions.
///
/// Never a valid event name; the registry rejects it.
#[doc(hidden)]
pub const WILDCARD: &str = "<<all>>";
