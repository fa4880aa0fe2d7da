//! Wire format of [`Maybe`].

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, DeserializeOwned, IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::{
    CodecError, MAYBE_ABSENT_TAG, MAYBE_PRESENT_TAG, MAYBE_TYPE_NAME, TAG_FIELD, VALUE_FIELD,
    parse_text, payload_from, read_payload, read_tag, reject,
};
use crate::control::{Maybe, Outcome};

impl<T: Serialize> Serialize for Maybe<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Present(value) => {
                let mut record = serializer.serialize_struct(MAYBE_TYPE_NAME, 2)?;
                record.serialize_field(TAG_FIELD, MAYBE_PRESENT_TAG)?;
                record.serialize_field(VALUE_FIELD, value)?;
                record.end()
            }
            Self::Absent => {
                let mut record = serializer.serialize_struct(MAYBE_TYPE_NAME, 1)?;
                record.serialize_field(TAG_FIELD, MAYBE_ABSENT_TAG)?;
                record.end()
            }
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Maybe<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_struct(
            MAYBE_TYPE_NAME,
            &[TAG_FIELD, VALUE_FIELD],
            MaybeVisitor(PhantomData),
        )
    }
}

struct MaybeVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for MaybeVisitor<T> {
    type Value = Maybe<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a record tagged \"Just\" or \"Nothing\"")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Maybe<T>, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut tag: Option<Value> = None;
        let mut value: Option<Value> = None;
        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                TAG_FIELD => tag = Some(map.next_value()?),
                VALUE_FIELD => value = Some(map.next_value()?),
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        match tag.as_ref().and_then(Value::as_str) {
            Some(MAYBE_PRESENT_TAG) => payload_from(value).map(Maybe::Present),
            Some(MAYBE_ABSENT_TAG) => Ok(Maybe::Absent),
            _ => Err(de::Error::custom(CodecError::UnrecognizedTag {
                type_name: MAYBE_TYPE_NAME,
            })),
        }
    }
}

fn read_maybe<T>(record: &Value) -> Result<Maybe<T>, CodecError>
where
    T: DeserializeOwned,
{
    match read_tag(record, MAYBE_TYPE_NAME)? {
        MAYBE_PRESENT_TAG => read_payload(record, VALUE_FIELD, MAYBE_TYPE_NAME).map(Maybe::Present),
        MAYBE_ABSENT_TAG => Ok(Maybe::Absent),
        _ => Err(CodecError::UnrecognizedTag {
            type_name: MAYBE_TYPE_NAME,
        }),
    }
}

/// Decodes a `Maybe` from an already-parsed JSON record.
///
/// # Examples
///
/// ```rust
/// use maybe_result::codec::decode_maybe_from_record;
/// use maybe_result::control::Maybe;
/// use serde_json::json;
///
/// let decoded = decode_maybe_from_record::<i32>(&json!({"_tag": "Nothing"}));
/// assert_eq!(decoded.unwrap(), Maybe::absent());
///
/// let rejected = decode_maybe_from_record::<i32>(&json!({"_tag": 3}));
/// assert_eq!(rejected.unwrap_err(), "Cannot parse to a Maybe");
/// ```
pub fn decode_maybe_from_record<T>(record: &Value) -> Outcome<Maybe<T>, String>
where
    T: DeserializeOwned,
{
    read_maybe(record)
        .map_err(|error| reject(&error))
        .into()
}

/// Decodes a `Maybe` from JSON text.
///
/// Text that is not JSON fails with the parser's diagnostic.
pub fn decode_maybe_from_text<T>(text: &str) -> Outcome<Maybe<T>, String>
where
    T: DeserializeOwned,
{
    parse_text(text)
        .and_then(|record| read_maybe(&record))
        .map_err(|error| reject(&error))
        .into()
}
