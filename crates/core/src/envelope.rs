// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Request/response envelopes carried as event payloads
//!
//! Envelopes are plain values: the bus never inspects them. A response is
//! correlated to its request by copying the request's `requestId`.

use crate::id::{default_id_gen, SharedIdGen};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    pub event: String,
    pub request_id: String,
    pub method: String,
    #[serde(default)]
    pub params: Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Response {
    pub event: String,
    pub request_id: String,
    #[serde(default)]
    pub data: Value,
    /// Error value, if any. Not exclusive with `data`.
    #[serde(default)]
    pub err: Option<Value>,
}

impl Request {
    pub fn to_payload(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

impl Response {
    pub fn is_error(&self) -> bool {
        self.err.as_ref().is_some_and(|e| !e.is_null())
    }

    /// Whether this response answers `request`
    pub fn correlates(&self, request: &Request) -> bool {
        self.request_id == request.request_id
    }

    pub fn to_payload(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

/// Either envelope kind, as decoded from an event payload.
///
/// Anything carrying a `method` decodes as a request; responses reject
/// unknown keys so the two never overlap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Envelope {
    Request(Request),
    Response(Response),
}

impl Envelope {
    pub fn from_payload(payload: &Value) -> Result<Self, serde_json::Error> {
        Self::deserialize(payload)
    }

    pub fn request_id(&self) -> &str {
        match self {
            Envelope::Request(r) => &r.request_id,
            Envelope::Response(r) => &r.request_id,
        }
    }
}

/// Builds correlated envelopes, stamping requests with fresh ids
#[derive(Clone)]
pub struct EnvelopeFactory {
    id_gen: SharedIdGen,
}

impl EnvelopeFactory {
    pub fn new(id_gen: SharedIdGen) -> Self {
        Self { id_gen }
    }

    pub fn create_request(&self, event: &str, method: &str, params: Value) -> Request {
        Request {
            event: event.to_string(),
            request_id: self.id_gen.next_id(),
            method: method.to_string(),
            params,
        }
    }

    pub fn create_response(
        &self,
        event: &str,
        request: &Request,
        data: Value,
        err: Option<Value>,
    ) -> Response {
        Response {
            event: event.to_string(),
            request_id: request.request_id.clone(),
            data,
            err,
        }
    }
}

impl Default for EnvelopeFactory {
    fn default() -> Self {
        Self::new(default_id_gen())
    }
}

#[cfg(test)]
#[path = "envelope_tests.rs"]
mod tests;
