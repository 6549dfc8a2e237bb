//! # triform
//!
//! Equip value types with three interchangeable serialization forms:
//! delimited text (space/comma/tab separated values with header generation),
//! fixed big-endian binary, and JSON.
//!
//! ## How it works
//!
//! Each form is a trait — [`Delimited`], [`Binary`], [`Json`] — implemented
//! for every supported category of value: strings, booleans, integers,
//! floats, registered enums, sequences of supported elements, and
//! aggregates. An aggregate opts into all three forms by listing its fields
//! once with [`convert_fields!`]; every derived method is a fold over that
//! field list, so the three outputs stay structurally consistent: the same
//! declaration order drives textual field order, wire byte order, and JSON
//! key order.
//!
//! ## Quick Start
//!
//! ```rust
//! use triform::{convert_fields, Binary, Delimited, Json};
//!
//! #[derive(Default)]
//! struct Telemetry {
//!     flags: u8,
//!     temperature: i16,
//! }
//!
//! convert_fields!(Telemetry { flags, temperature });
//!
//! let t = Telemetry { flags: 1, temperature: 2 };
//!
//! // Delimited text, with a positionally matching header row
//! assert_eq!(t.to_ssv(false).unwrap(), "1 2");
//! assert_eq!(t.ssv_header(false).unwrap(), "flags temperature");
//!
//! // Big-endian binary: field declaration order is byte order
//! assert_eq!(t.size(), 3);
//! assert_eq!(t.to_bytes().unwrap(), vec![0x01, 0x00, 0x02]);
//!
//! // JSON, one key per declared field
//! let json = t.to_json_string().unwrap();
//! assert!(json.contains("\"temperature\": 2"));
//! ```
//!
//! ## Nesting and sequences
//!
//! Registered aggregates nest: a field whose type is itself registered
//! recurses through the same traits, and its header labels become dotted
//! paths (`imu.temp`). Sequences (`Vec<T>`, `[T; N]`) render element-wise
//! with indexed labels (`samples[0]`, `samples[1]`, …) and contiguous wire
//! bytes with no length prefix — the reader pre-sizes the destination.
//!
//! ## Wire format
//!
//! Binary output is big-endian regardless of host order: a scalar occupies
//! its fixed width, a sequence its element width times its length, an
//! aggregate the concatenation of its fields. No framing, no magic numbers,
//! no padding. The byte-order primitives are exposed in [`endian`].
//!
//! ## Error model
//!
//! Operations return [`Result`]. The failure set is closed: unsupported
//! roles in hand-written implementations, undersized binary buffers, and
//! errors propagated from the underlying JSON parser and UTF-8 decoder.
//! There is no retry and no partial-write rollback.

pub mod binary;
pub mod endian;
pub mod error;
pub mod json;
pub mod macros;
pub mod options;
pub mod text;

pub use binary::Binary;
pub use endian::{to_big_endian, to_little_endian, Scalar};
pub use error::{Error, Result};
pub use json::Json;
pub use options::Delimiter;
pub use text::Delimited;

// Support crates referenced from macro expansions.
#[doc(hidden)]
pub mod __private {
    pub use serde;
    pub use serde_json;
}

/// Renders a value as space-separated text.
///
/// # Examples
///
/// ```rust
/// let samples = vec![1u8, 2, 3];
/// assert_eq!(triform::to_ssv(&samples).unwrap(), "1 2 3");
/// ```
///
/// # Errors
///
/// Returns an error if a hand-written [`Delimited`] implementation rejects
/// one of the value's members.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_ssv<T: Delimited + ?Sized>(value: &T) -> Result<String> {
    value.to_ssv(false)
}

/// Renders a value as comma-separated text.
///
/// # Errors
///
/// Returns an error if a hand-written [`Delimited`] implementation rejects
/// one of the value's members.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_csv<T: Delimited + ?Sized>(value: &T) -> Result<String> {
    value.to_csv(false)
}

/// Renders a value as tab-separated text.
///
/// # Errors
///
/// Returns an error if a hand-written [`Delimited`] implementation rejects
/// one of the value's members.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_tsv<T: Delimited + ?Sized>(value: &T) -> Result<String> {
    value.to_tsv(false)
}

/// Renders a value as delimited text with an explicit delimiter policy.
///
/// # Examples
///
/// ```rust
/// use triform::Delimiter;
///
/// let samples = vec![1u8, 2, 3];
/// assert_eq!(
///     triform::to_delimited_string(&samples, Delimiter::Comma).unwrap(),
///     "1,2,3"
/// );
/// ```
///
/// # Errors
///
/// Returns an error if a hand-written [`Delimited`] implementation rejects
/// one of the value's members.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_delimited_string<T: Delimited + ?Sized>(
    value: &T,
    delimiter: Delimiter,
) -> Result<String> {
    value.to_delimited(delimiter, false)
}

/// Renders a value's header row with an explicit delimiter policy.
///
/// The header has the same token count and delimiter placement as the value
/// row, so the two zip positionally.
///
/// # Errors
///
/// Returns an error if a hand-written [`Delimited`] implementation rejects
/// one of the value's members.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn header<T: Delimited + ?Sized>(value: &T, delimiter: Delimiter) -> Result<String> {
    value.make_header("", delimiter, false)
}

/// Renders a value as its big-endian wire-form bytes.
///
/// # Examples
///
/// ```rust
/// assert_eq!(triform::to_bytes(&3i32).unwrap(), [0x00, 0x00, 0x00, 0x03]);
/// ```
///
/// # Errors
///
/// Returns an error if a hand-written [`Binary`] implementation rejects one
/// of the value's members.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_bytes<T: Binary + ?Sized>(value: &T) -> Result<Vec<u8>> {
    value.to_bytes()
}

/// Reads a value from its big-endian wire-form bytes.
///
/// The destination starts default-constructed, so sequence fields read as
/// many elements as the default declares (none, for a `Vec`); callers
/// needing a sized sequence should construct the destination themselves and
/// use [`Binary::read_at`].
///
/// # Examples
///
/// ```rust
/// let value: i32 = triform::from_bytes(&[0x00, 0x00, 0x00, 0x05]).unwrap();
/// assert_eq!(value, 5);
/// ```
///
/// # Errors
///
/// Returns [`Error::BufferTooSmall`] if `src` is shorter than the
/// destination's declared size.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_bytes<T: Binary + Default>(src: &[u8]) -> Result<T> {
    let mut value = T::default();
    value.read_at(src, 0)?;
    Ok(value)
}

/// Renders a registered aggregate as a pretty-printed JSON document.
///
/// # Errors
///
/// Returns an error if a member cannot be represented in the document
/// model.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_json_string<T: Json + ?Sized>(value: &T) -> Result<String> {
    value.to_json_string()
}

/// Reads a registered aggregate from JSON document text.
///
/// Keys absent from the document leave the corresponding field at its
/// default-constructed value.
///
/// # Errors
///
/// Returns [`Error::Json`] if the text is not a well-formed document or a
/// present key holds an incompatible value.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_json_string<T: Json + Default>(text: &str) -> Result<T> {
    let mut value = T::default();
    value.from_json_string(text)?;
    Ok(value)
}
