//! Normalized result of a single backend call.

use serde_json::Value;

use crate::error::TransportError;

/// What one call to the forecast backend produced.
///
/// The client never returns a bare error: every outcome, including
/// transport-level failures, arrives as a variant of this enum for the
/// caller to match on.
#[derive(Debug)]
pub enum ApiOutcome<T> {
    /// Status 200; the envelope has been unwrapped to the inner payload.
    Success(T),

    /// Another 2xx status: the backend had nothing to return. Absence of
    /// data, not an error.
    Empty,

    /// The server answered with a failure status and a JSON body.
    BusinessFault {
        status: u16,
        body: Value,
    },

    /// No usable response arrived.
    TransportFault(TransportError),
}

impl<T> ApiOutcome<T> {
    /// Check if this outcome carries a payload.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Check if the backend reported absence of data.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The payload, if the call succeeded.
    pub fn success(self) -> Option<T> {
        match self {
            Self::Success(payload) => Some(payload),
            _ => None,
        }
    }

    /// The fault status and body, if the server reported a failure.
    pub fn business_fault(&self) -> Option<(u16, &Value)> {
        match self {
            Self::BusinessFault { status, body } => Some((*status, body)),
            _ => None,
        }
    }
}
