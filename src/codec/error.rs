//! Error type for the serialization bridge.

use std::fmt;

/// Why a serialized container could not be read or written.
///
/// The public decode functions render this into the `String` failure
/// payload; its `Display` output is therefore part of the wire contract for
/// the [`CodecError::UnrecognizedTag`] case.
///
/// # Examples
///
/// ```rust
/// use maybe_result::codec::CodecError;
///
/// let error = CodecError::UnrecognizedTag { type_name: "Maybe" };
/// assert_eq!(error.to_string(), "Cannot parse to a Maybe");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The input text is not valid JSON. Carries the parser's diagnostic.
    MalformedText {
        /// The diagnostic produced by the JSON parser.
        diagnostic: String,
    },
    /// The `_tag` field is missing, not a string, or not a known literal.
    UnrecognizedTag {
        /// `"Maybe"` or `"Result"`.
        type_name: &'static str,
    },
    /// The payload field could not be read as the requested Rust type.
    InvalidPayload {
        /// `"Maybe"` or `"Result"`.
        type_name: &'static str,
        /// The payload field that was read.
        field: &'static str,
        /// The diagnostic produced by the deserializer.
        diagnostic: String,
    },
    /// A payload's own `Serialize` implementation failed.
    Encode {
        /// The diagnostic produced by the serializer.
        diagnostic: String,
    },
}

impl fmt::Display for CodecError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedText { diagnostic } => write!(formatter, "{diagnostic}"),
            Self::UnrecognizedTag { type_name } => write!(formatter, "Cannot parse to a {type_name}"),
            Self::InvalidPayload {
                type_name,
                field,
                diagnostic,
            } => write!(
                formatter,
                "Cannot parse the {field} payload of a {type_name}: {diagnostic}"
            ),
            Self::Encode { diagnostic } => write!(formatter, "Cannot encode: {diagnostic}"),
        }
    }
}

impl std::error::Error for CodecError {}
