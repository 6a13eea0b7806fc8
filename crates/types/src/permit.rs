use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Maximum number of JSON decode passes applied to raw permit data before
/// giving up. The order script emits the payload encoded once or twice;
/// anything deeper is malformed.
const MAX_DECODE_DEPTH: usize = 4;

/// An error that can occur when decoding raw permit data.
#[derive(Debug, thiserror::Error)]
pub enum PermitDecodeError {
    /// A decode pass produced something that is not valid JSON.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    /// The payload was still a JSON string after the maximum number of
    /// decode passes.
    #[error("permit data still string-encoded after {limit} decode passes")]
    DepthExceeded {
        /// The number of passes that were applied.
        limit: usize,
    },
}

/// The Permit2 authorization payload attached to a [`SignedOrder`].
///
/// The payload is opaque to the SDK: it is produced by the order script and
/// consumed verbatim by the settlement flow, so it is carried as plain JSON
/// rather than a typed structure.
///
/// The script emits the payload as a JSON string that may itself be
/// JSON-encoded a second time. [`PermitData::from_raw`] strips every layer of
/// string encoding, so the wrapped value is always the decoded object.
///
/// [`SignedOrder`]: crate::SignedOrder
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(transparent)]
pub struct PermitData(Value);

impl PermitData {
    /// Decode raw permit data emitted by the order script.
    ///
    /// Parses `raw` as JSON, then keeps parsing while the result is still a
    /// JSON string. Decoding is bounded by a fixed depth so malformed
    /// nested-string input fails instead of looping.
    pub fn from_raw(raw: &str) -> Result<Self, PermitDecodeError> {
        let mut value: Value = serde_json::from_str(raw)?;

        for _ in 0..MAX_DECODE_DEPTH {
            match value {
                Value::String(inner) => value = serde_json::from_str(&inner)?,
                other => return Ok(Self(other)),
            }
        }

        Err(PermitDecodeError::DepthExceeded { limit: MAX_DECODE_DEPTH })
    }

    /// Get the decoded payload.
    pub const fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consume the wrapper, returning the decoded payload.
    pub fn into_inner(self) -> Value {
        self.0
    }
}

impl From<Value> for PermitData {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
