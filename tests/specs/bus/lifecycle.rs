//! Lifecycle specs
//!
//! Verify unsubscribe semantics, teardown and bridging between buses.

use crate::prelude::*;
use sb_core::BusError;
use similar_asserts::assert_eq;

#[test]
fn unsubscribe_twice_is_harmless() {
    let bus = EventBus::new();
    let journal = Journal::new();
    let sub = bus.subscribe("foo", journal.handler("H")).unwrap();

    sub.unsubscribe();
    sub.unsubscribe();
    bus.trigger("foo", Value::Null).unwrap();

    assert!(journal.take().is_empty());
    assert!(!sub.is_active());
}

#[test]
fn unsubscribe_all_empties_every_channel() {
    let bus = EventBus::new();
    let journal = Journal::new();
    bus.subscribe("foo", journal.handler("foo")).unwrap();
    bus.subscribe("bar", journal.handler("bar")).unwrap();
    bus.subscribe_all(journal.handler("all"));

    bus.unsubscribe_all();

    for name in ["foo", "bar", "baz"] {
        assert!(bus.get_subscriptions(name).is_empty());
        bus.trigger(name, json!(name)).unwrap();
    }
    assert!(journal.take().is_empty());
}

#[test]
fn bus_accepts_work_after_teardown() {
    let bus = EventBus::new();
    let journal = Journal::new();
    bus.subscribe("foo", journal.handler("old")).unwrap();
    bus.unsubscribe_all();

    bus.subscribe("foo", journal.handler("new")).unwrap();
    bus.trigger("foo", json!(1)).unwrap();

    assert_eq!(journal.take(), vec!["new(1,foo)"]);
}

#[test]
fn empty_event_name_is_rejected() {
    let bus = EventBus::new();

    assert_eq!(
        bus.subscribe("", |_, _, _| Ok(())).unwrap_err(),
        BusError::EmptyEventName
    );
    assert_eq!(
        bus.trigger("", Value::Null).unwrap_err(),
        BusError::EmptyEventName
    );
}

#[test]
fn bridge_chains_one_bus_into_another() {
    let source = EventBus::new();
    let target = EventBus::new();
    let journal = Journal::new();
    target.subscribe_all(journal.handler("target"));
    source.subscribe_all(target.bridge());

    source
        .trigger(sb_names::agent::UPDATE, json!({"state": "Available"}))
        .unwrap();

    assert_eq!(
        journal.take(),
        vec![r#"target({"state":"Available"},agent::update)"#]
    );
}
