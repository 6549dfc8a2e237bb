//! JSON conversion over a generic document model.
//!
//! [`Json`] is implemented per aggregate by
//! [`json_fields!`](crate::json_fields): serialization writes one key per
//! declared field, keyed by field name; deserialization reads each key by
//! name, and a missing key falls back to that field's value in a freshly
//! default-constructed instance. Missing keys never fail — this is a
//! deliberate leniency policy. Malformed JSON text propagates from the
//! underlying parser as [`Error::Json`](crate::Error).
//!
//! Field values use the document model's own type mapping (JSON numbers,
//! strings, arrays), not this crate's text or binary rules.
//!
//! Output is pretty-printed with 4-space indentation.

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Conversion to and from a JSON document.
///
/// Implemented per aggregate through [`json_fields!`](crate::json_fields);
/// custom aggregates may implement it by hand.
pub trait Json {
    /// Renders this value as a pretty-printed JSON document.
    fn to_json_string(&self) -> Result<String>;

    /// Replaces this value with one deserialized from `text`.
    ///
    /// Keys absent from the document leave the corresponding field at its
    /// default-constructed value.
    fn from_json_string(&mut self, text: &str) -> Result<()>;
}

/// Serializes a value as JSON with 4-space indentation.
pub fn to_pretty_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let mut out = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8(out)?)
}

/// Deserializes a value from JSON document text.
pub fn from_document_str<T: DeserializeOwned>(text: &str) -> Result<T> {
    Ok(serde_json::from_str(text)?)
}
