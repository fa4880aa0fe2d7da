//! Wire format of [`Outcome`].

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, DeserializeOwned, IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::{
    CodecError, ERROR_FIELD, OUTCOME_FAILURE_TAG, OUTCOME_SUCCESS_TAG, OUTCOME_TYPE_NAME,
    TAG_FIELD, VALUE_FIELD, parse_text, payload_from, read_payload, read_tag, reject,
};
use crate::control::Outcome;

impl<T: Serialize, E: Serialize> Serialize for Outcome<T, E> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut record = serializer.serialize_struct(OUTCOME_TYPE_NAME, 2)?;
        match self {
            Self::Success(value) => {
                record.serialize_field(TAG_FIELD, OUTCOME_SUCCESS_TAG)?;
                record.serialize_field(VALUE_FIELD, value)?;
            }
            Self::Failure(error) => {
                record.serialize_field(TAG_FIELD, OUTCOME_FAILURE_TAG)?;
                record.serialize_field(ERROR_FIELD, error)?;
            }
        }
        record.end()
    }
}

impl<'de, T: Deserialize<'de>, E: Deserialize<'de>> Deserialize<'de> for Outcome<T, E> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_struct(
            OUTCOME_TYPE_NAME,
            &[TAG_FIELD, VALUE_FIELD, ERROR_FIELD],
            OutcomeVisitor(PhantomData),
        )
    }
}

struct OutcomeVisitor<T, E>(PhantomData<(T, E)>);

impl<'de, T: Deserialize<'de>, E: Deserialize<'de>> Visitor<'de> for OutcomeVisitor<T, E> {
    type Value = Outcome<T, E>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a record tagged \"Ok\" or \"Err\"")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Outcome<T, E>, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut tag: Option<Value> = None;
        let mut value: Option<Value> = None;
        let mut error: Option<Value> = None;
        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                TAG_FIELD => tag = Some(map.next_value()?),
                VALUE_FIELD => value = Some(map.next_value()?),
                ERROR_FIELD => error = Some(map.next_value()?),
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        match tag.as_ref().and_then(Value::as_str) {
            Some(OUTCOME_SUCCESS_TAG) => payload_from(value).map(Outcome::Success),
            Some(OUTCOME_FAILURE_TAG) => payload_from(error).map(Outcome::Failure),
            _ => Err(de::Error::custom(CodecError::UnrecognizedTag {
                type_name: OUTCOME_TYPE_NAME,
            })),
        }
    }
}

fn read_outcome<T, E>(record: &Value) -> Result<Outcome<T, E>, CodecError>
where
    T: DeserializeOwned,
    E: DeserializeOwned,
{
    match read_tag(record, OUTCOME_TYPE_NAME)? {
        OUTCOME_SUCCESS_TAG => {
            read_payload(record, VALUE_FIELD, OUTCOME_TYPE_NAME).map(Outcome::Success)
        }
        OUTCOME_FAILURE_TAG => {
            read_payload(record, ERROR_FIELD, OUTCOME_TYPE_NAME).map(Outcome::Failure)
        }
        _ => Err(CodecError::UnrecognizedTag {
            type_name: OUTCOME_TYPE_NAME,
        }),
    }
}

/// Decodes an `Outcome` from an already-parsed JSON record.
///
/// The outer `Outcome` reports whether decoding worked; the inner one is the
/// decoded value.
///
/// # Examples
///
/// ```rust
/// use maybe_result::codec::decode_outcome_from_record;
/// use maybe_result::control::Outcome;
/// use serde_json::json;
///
/// let decoded = decode_outcome_from_record::<i32, String>(&json!({"_tag": "Err", "_msg": "boom"}));
/// assert_eq!(decoded.unwrap(), Outcome::failure("boom".to_string()));
/// ```
pub fn decode_outcome_from_record<T, E>(record: &Value) -> Outcome<Outcome<T, E>, String>
where
    T: DeserializeOwned,
    E: DeserializeOwned,
{
    read_outcome(record)
        .map_err(|error| reject(&error))
        .into()
}

/// Decodes an `Outcome` from JSON text.
///
/// Text that is not JSON fails with the parser's diagnostic.
pub fn decode_outcome_from_text<T, E>(text: &str) -> Outcome<Outcome<T, E>, String>
where
    T: DeserializeOwned,
    E: DeserializeOwned,
{
    parse_text(text)
        .and_then(|record| read_outcome(&record))
        .map_err(|error| reject(&error))
        .into()
}
