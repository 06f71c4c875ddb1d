//! Dispatch specs
//!
//! Verify delivery order, wildcard precedence and fault isolation.

use crate::prelude::*;
use similar_asserts::assert_eq;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[test]
fn handler_receives_payload_event_and_bus() {
    let bus = EventBus::new();
    let same_bus = bus.clone();
    let journal = Journal::new();
    let record = journal.handler("H");
    let saw_same_bus = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&saw_same_bus);

    bus.subscribe("foo", move |data, event_name, source| {
        flag.store(source.ptr_eq(&same_bus), Ordering::SeqCst);
        record(data, event_name, source)
    })
    .unwrap();
    bus.trigger("foo", json!("P")).unwrap();

    assert_eq!(journal.take(), vec![r#"H("P",foo)"#]);
    assert!(saw_same_bus.load(Ordering::SeqCst));
}

#[test]
fn wildcard_then_specific_then_unsubscribe() {
    let bus = EventBus::new();
    let journal = Journal::new();

    let a = bus.subscribe("foo", journal.handler("A")).unwrap();
    bus.subscribe_all(journal.handler("B"));

    bus.trigger("foo", json!("X")).unwrap();
    assert_eq!(journal.take(), vec![r#"B("X",foo)"#, r#"A("X",foo)"#]);

    a.unsubscribe();
    bus.trigger("foo", json!("Y")).unwrap();
    assert_eq!(journal.take(), vec![r#"B("Y",foo)"#]);
}

#[test]
fn handlers_for_one_event_run_in_subscription_order() {
    let bus = EventBus::new();
    let journal = Journal::new();
    bus.subscribe("foo", journal.handler("H1")).unwrap();
    bus.subscribe("foo", journal.handler("H2")).unwrap();

    bus.trigger("foo", Value::Null).unwrap();

    assert_eq!(journal.take(), vec!["H1(null,foo)", "H2(null,foo)"]);
}

#[test]
fn failing_and_panicking_handlers_do_not_stop_delivery() {
    let bus = EventBus::new();
    let journal = Journal::new();
    bus.subscribe("foo", |_, _, _| Err("nope".into())).unwrap();
    bus.subscribe("foo", |_, _, _| panic!("handler exploded"))
        .unwrap();
    bus.subscribe("foo", journal.handler("last")).unwrap();

    bus.trigger("foo", json!(1)).unwrap();

    assert_eq!(journal.take(), vec!["last(1,foo)"]);
}

#[test]
fn trigger_with_no_subscribers_returns_normally() {
    let bus = EventBus::new();
    assert!(bus.trigger("nobody::listens", json!({})).is_ok());
}

#[test]
fn nested_triggers_do_not_disturb_outer_dispatch() {
    let bus = EventBus::new();
    let journal = Journal::new();

    bus.subscribe("outer", |_, _, source| {
        source.subscribe("outer", nested_noop())?;
        source.trigger("inner", json!("i"))?;
        Ok(())
    })
    .unwrap();
    bus.subscribe("inner", journal.handler("nested")).unwrap();
    bus.subscribe("outer", journal.handler("tail")).unwrap();

    bus.trigger("outer", json!("o")).unwrap();

    assert_eq!(
        journal.take(),
        vec![r#"nested("i",inner)"#, r#"tail("o",outer)"#]
    );
}

fn nested_noop(
) -> impl Fn(&Value, &str, &EventBus) -> Result<(), BoxError> + Send + Sync + 'static {
    |_: &Value, _: &str, _: &EventBus| Ok(())
}
