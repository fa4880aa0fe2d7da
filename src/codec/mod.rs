//! Serialization bridge.
//!
//! Both containers serialize to a tagged record: a discriminant field
//! followed by one payload field whose name depends on the variant.
//!
//! | Value | Encoding |
//! |---|---|
//! | `Maybe::Present(v)` | `{"_tag":"Just","_value":v}` |
//! | `Maybe::Absent` | `{"_tag":"Nothing"}` |
//! | `Outcome::Success(v)` | `{"_tag":"Ok","_value":v}` |
//! | `Outcome::Failure(e)` | `{"_tag":"Err","_msg":e}` |
//!
//! Field names and order are part of the contract. Encoding goes through the
//! containers' [`serde::Serialize`] impls, so any serde format works; the
//! decode functions below work on JSON and never panic. Each returns an
//! [`Outcome`] whose `Failure` carries a human-readable diagnostic:
//!
//! 1. text that is not JSON fails with the parser's message;
//! 2. a missing, non-string, or unknown `_tag` fails with
//!    `"Cannot parse to a Maybe"` / `"Cannot parse to a Result"`;
//! 3. otherwise the payload field is read into the requested type. Only the
//!    discriminant is validated: a missing payload is read as `null`, which
//!    succeeds for payload types that accept `null` (`()`, `Option<_>`,
//!    [`serde_json::Value`]).
//!
//! # Examples
//!
//! ```rust
//! use maybe_result::codec::{decode_maybe_from_text, encode_to_text};
//! use maybe_result::control::Maybe;
//!
//! let text = encode_to_text(&Maybe::present(1)).unwrap();
//! assert_eq!(text, r#"{"_tag":"Just","_value":1}"#);
//!
//! let decoded = decode_maybe_from_text::<i32>(&text);
//! assert_eq!(decoded.unwrap().unwrap(), 1);
//!
//! let rejected = decode_maybe_from_text::<i32>(r#"{"_tag":"bogus"}"#);
//! assert_eq!(rejected.unwrap_err(), "Cannot parse to a Maybe");
//! ```

mod error;
mod maybe;
mod outcome;

pub use error::CodecError;
pub use maybe::{decode_maybe_from_record, decode_maybe_from_text};
pub use outcome::{decode_outcome_from_record, decode_outcome_from_text};

use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::control::Outcome;

/// Name of the discriminant field.
pub const TAG_FIELD: &str = "_tag";
/// Name of the payload field of `Present` and `Success` records.
pub const VALUE_FIELD: &str = "_value";
/// Name of the payload field of `Failure` records.
pub const ERROR_FIELD: &str = "_msg";

/// Discriminant of a present `Maybe`.
pub const MAYBE_PRESENT_TAG: &str = "Just";
/// Discriminant of an absent `Maybe`.
pub const MAYBE_ABSENT_TAG: &str = "Nothing";
/// Discriminant of a successful `Outcome`.
pub const OUTCOME_SUCCESS_TAG: &str = "Ok";
/// Discriminant of a failed `Outcome`.
pub const OUTCOME_FAILURE_TAG: &str = "Err";

pub(crate) const MAYBE_TYPE_NAME: &str = "Maybe";
pub(crate) const OUTCOME_TYPE_NAME: &str = "Result";

/// Serializes any value into a JSON record.
///
/// Fails only when a payload's own `Serialize` implementation fails.
pub fn encode_to_record<S>(value: &S) -> Outcome<Value, CodecError>
where
    S: Serialize + ?Sized,
{
    serde_json::to_value(value)
        .map_err(|error| CodecError::Encode {
            diagnostic: error.to_string(),
        })
        .into()
}

/// Serializes any value into compact JSON text.
///
/// Output is deterministic: the discriminant always precedes the payload.
pub fn encode_to_text<S>(value: &S) -> Outcome<String, CodecError>
where
    S: Serialize + ?Sized,
{
    serde_json::to_string(value)
        .map_err(|error| CodecError::Encode {
            diagnostic: error.to_string(),
        })
        .into()
}

// =============================================================================
// Shared decoding steps
// =============================================================================

fn parse_text(text: &str) -> Result<Value, CodecError> {
    serde_json::from_str(text).map_err(|error| CodecError::MalformedText {
        diagnostic: error.to_string(),
    })
}

/// Reads the discriminant, rejecting anything that is not a string.
fn read_tag<'a>(record: &'a Value, type_name: &'static str) -> Result<&'a str, CodecError> {
    record
        .get(TAG_FIELD)
        .and_then(Value::as_str)
        .ok_or(CodecError::UnrecognizedTag { type_name })
}

/// Reads a payload field; a missing field is read as `null`.
fn read_payload<P>(
    record: &Value,
    field: &'static str,
    type_name: &'static str,
) -> Result<P, CodecError>
where
    P: DeserializeOwned,
{
    let payload = record.get(field).cloned().unwrap_or(Value::Null);
    serde_json::from_value(payload).map_err(|error| CodecError::InvalidPayload {
        type_name,
        field,
        diagnostic: error.to_string(),
    })
}

/// Builds a payload buffered by a visitor; a missing field is read as `null`.
///
/// Payloads are buffered until the tag is known so that only the field the
/// tag selects is ever interpreted.
fn payload_from<'de, P, Error>(payload: Option<Value>) -> Result<P, Error>
where
    P: Deserialize<'de>,
    Error: de::Error,
{
    P::deserialize(payload.unwrap_or(Value::Null)).map_err(Error::custom)
}

/// Renders a decode failure into the `String` contract.
fn reject(error: &CodecError) -> String {
    #[cfg(feature = "tracing")]
    tracing::debug!(reason = %error, "rejected serialized record");
    error.to_string()
}
