//! Error types for the three conversion forms.
//!
//! The taxonomy is a closed set:
//!
//! - [`Error::Unsupported`]: a value's role has no conversion defined. The
//!   registered (macro-generated) implementations never produce this —
//!   unsupported types fail to compile instead — but hand-written
//!   implementations of the conversion traits need a runtime channel for
//!   members they cannot convert.
//! - [`Error::BufferTooSmall`]: a binary transfer was asked to read from (or
//!   write into) fewer bytes than the value occupies on the wire.
//! - [`Error::Json`]: malformed JSON text, propagated from the underlying
//!   parser.
//! - [`Error::Utf8`]: binary-decoded string bytes that are not valid UTF-8,
//!   propagated from the underlying decoder.
//!
//! All failures are synchronous and local. There is no retry and no
//! cross-field atomicity: a failure partway through an aggregate leaves the
//! destination in an unspecified state.
//!
//! ## Examples
//!
//! ```rust
//! use triform::{Binary, Error};
//!
//! let mut value = 0i32;
//! let short = [0u8; 3];
//! match value.read_at(&short, 0) {
//!     Err(Error::BufferTooSmall { needed, available }) => {
//!         assert_eq!(needed, 4);
//!         assert_eq!(available, 3);
//!     }
//!     other => panic!("expected BufferTooSmall, got {:?}", other),
//! }
//! ```

use thiserror::Error;

/// Represents all possible errors produced by the conversion traits.
#[derive(Debug, Error)]
pub enum Error {
    /// No conversion is defined for a value in this role.
    #[error("no conversion defined for {role}")]
    Unsupported { role: &'static str },

    /// A binary buffer is shorter than the requested transfer.
    #[error("buffer too small: needed {needed} bytes, available {available}")]
    BufferTooSmall { needed: usize, available: usize },

    /// Malformed JSON text, from the underlying parser.
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    /// Decoded string bytes that are not valid UTF-8.
    #[error("invalid utf-8 in decoded string: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

impl Error {
    /// Creates an unsupported-conversion error naming the failing role.
    ///
    /// Intended for hand-written implementations of the conversion traits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triform::Error;
    ///
    /// let err = Error::unsupported("RawHandle field");
    /// assert!(err.to_string().contains("RawHandle"));
    /// ```
    pub fn unsupported(role: &'static str) -> Self {
        Error::Unsupported { role }
    }

    /// Creates a buffer-shortfall error from a requested span and the bytes
    /// actually available.
    pub fn buffer_too_small(needed: usize, available: usize) -> Self {
        Error::BufferTooSmall { needed, available }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
