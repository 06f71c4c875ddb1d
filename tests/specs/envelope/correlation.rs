//! Envelope correlation specs
//!
//! Verify request/response envelopes stay correlated when carried as event
//! payloads.

use crate::prelude::*;
use sb_core::{Envelope, EnvelopeFactory, Response};
use sb_names::event_type;
use similar_asserts::assert_eq;
use std::sync::{Arc, Mutex};

#[test]
fn response_copies_request_id() {
    let factory = EnvelopeFactory::default();
    let request = factory.create_request(event_type::MASTER_REQUEST, "becomeMaster", json!({}));
    let response =
        factory.create_response(event_type::MASTER_RESPONSE, &request, json!(true), None);

    assert_eq!(response.request_id, request.request_id);
    assert!(!response.is_error());
}

#[test]
fn responses_travel_back_over_the_bus() {
    let bus = EventBus::new();
    let factory = EnvelopeFactory::default();
    let received: Arc<Mutex<Vec<Response>>> = Arc::default();

    let responder = factory.clone();
    bus.subscribe(event_type::MASTER_REQUEST, move |data, _, source| {
        if let Envelope::Request(request) = Envelope::from_payload(data)? {
            let response = responder.create_response(
                event_type::MASTER_RESPONSE,
                &request,
                Value::Null,
                Some(json!("not master")),
            );
            source.trigger(event_type::MASTER_RESPONSE, response.to_payload()?)?;
        }
        Ok(())
    })
    .unwrap();

    let sink = Arc::clone(&received);
    bus.subscribe(event_type::MASTER_RESPONSE, move |data, _, _| {
        if let Envelope::Response(response) = Envelope::from_payload(data)? {
            sink.lock().unwrap().push(response);
        }
        Ok(())
    })
    .unwrap();

    let request = factory.create_request(event_type::MASTER_REQUEST, "checkMaster", Value::Null);
    bus.trigger(event_type::MASTER_REQUEST, request.to_payload().unwrap())
        .unwrap();

    let received = received.lock().unwrap();
    assert_eq!(received.len(), 1);
    assert!(received[0].correlates(&request));
    assert!(received[0].is_error());
}
