//! Feedback records.
//!
//! Feedback is opaque to the desk core: the remote collaborator defines its
//! shape and the desk only stores, forwards, and lists the payloads.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An opaque feedback payload as the remote collaborator supplies it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feedback(Value);

impl Feedback {
    /// Wrap a raw payload.
    pub const fn new(payload: Value) -> Self {
        Self(payload)
    }

    /// The raw payload.
    pub const fn payload(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for Feedback {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
