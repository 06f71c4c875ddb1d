//! Observability specs
//!
//! Verify diagnostic logging and handler failure reporting reach the
//! configured log sink.

use crate::prelude::*;
use sb_core::events::{LogLevel, LogRecord};
use sb_core::{BusConfig, LogSink, TracingObserver};
use similar_asserts::assert_eq;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct MemorySink {
    records: Mutex<Vec<LogRecord>>,
}

impl LogSink for MemorySink {
    fn send(&self, record: LogRecord) {
        self.records.lock().unwrap().push(record);
    }
}

fn logging_bus(sink: &Arc<MemorySink>, log_events: bool) -> EventBus {
    EventBus::builder()
        .with_config(BusConfig::default().with_log_events(log_events))
        .with_observer(Arc::new(TracingObserver::new().with_sink(sink.clone())))
        .build()
}

#[test]
fn published_events_are_forwarded_when_enabled() {
    let sink = Arc::new(MemorySink::default());
    let bus = logging_bus(&sink, true);

    bus.trigger(sb_names::agent::REFRESH, Value::Null).unwrap();
    bus.trigger(sb_names::event_type::SERVER_BOUND_INTERNAL_LOG, Value::Null)
        .unwrap();

    let records = sink.records.lock().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].level, LogLevel::Trace);
    assert_eq!(records[0].event, "agent::refresh");
}

#[test]
fn nothing_is_forwarded_for_healthy_dispatch_when_disabled() {
    let sink = Arc::new(MemorySink::default());
    let bus = logging_bus(&sink, false);
    bus.subscribe("foo", |_, _, _| Ok(())).unwrap();

    bus.trigger("foo", Value::Null).unwrap();

    assert!(sink.records.lock().unwrap().is_empty());
}

#[test]
fn handler_failures_are_forwarded_with_event_name() {
    let sink = Arc::new(MemorySink::default());
    let bus = logging_bus(&sink, false);
    bus.subscribe("foo", |_, _, _| Err("broken".into())).unwrap();

    bus.trigger("foo", Value::Null).unwrap();

    let records = sink.records.lock().unwrap();
    assert_eq!(
        *records,
        vec![LogRecord {
            level: LogLevel::Error,
            message: "'foo' event handler failed.".to_string(),
            event: "foo".to_string(),
            error: Some("handler failed: broken".to_string()),
        }]
    );
}
