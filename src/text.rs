//! Delimited text conversion: value tokens and header labels.
//!
//! [`Delimited`] renders a value as a stream of delimiter-separated tokens
//! and, symmetrically, renders a header row of labels for those tokens. The
//! two streams always have the same token count and the same delimiter
//! placement, so splitting both by the delimiter zips them positionally.
//!
//! The delimiter placement rule: interior tokens are always followed by the
//! delimiter; the *last* token is followed by one only when `trailing` is
//! requested. This asymmetry lets callers concatenate several rendered
//! fields without doubling or dropping the seam delimiter.
//!
//! ## Examples
//!
//! ```rust
//! use triform::{Delimited, Delimiter};
//!
//! let samples = vec![1i16, 2, 3];
//! assert_eq!(samples.to_csv(false).unwrap(), "1,2,3");
//! assert_eq!(samples.to_csv(true).unwrap(), "1,2,3,");
//! assert_eq!(
//!     samples.make_header("s", Delimiter::Comma, false).unwrap(),
//!     "s[0],s[1],s[2]"
//! );
//! ```

use crate::error::Result;
use crate::options::{element_label, Delimiter};

/// Conversion to delimited text, with matching header generation.
///
/// Implementations exist for every supported category: strings, booleans,
/// integers, floats, sequences of supported elements, and aggregates
/// registered through [`delimited_fields!`](crate::delimited_fields). The
/// trait is public so custom aggregates can implement it by hand; such
/// implementations may return [`Error::Unsupported`](crate::Error) for
/// members they cannot convert.
pub trait Delimited {
    /// Renders this value as delimiter-separated tokens.
    fn to_delimited(&self, delimiter: Delimiter, trailing: bool) -> Result<String>;

    /// Renders the header labels matching [`Delimited::to_delimited`].
    ///
    /// Scalar categories yield `name`; sequences yield one `name[i]` label
    /// per element; registered aggregates yield dotted `name.member` paths.
    fn make_header(&self, name: &str, delimiter: Delimiter, trailing: bool) -> Result<String>;

    /// Renders space-separated values.
    fn to_ssv(&self, trailing: bool) -> Result<String> {
        self.to_delimited(Delimiter::Space, trailing)
    }

    /// Renders comma-separated values.
    fn to_csv(&self, trailing: bool) -> Result<String> {
        self.to_delimited(Delimiter::Comma, trailing)
    }

    /// Renders tab-separated values.
    fn to_tsv(&self, trailing: bool) -> Result<String> {
        self.to_delimited(Delimiter::Tab, trailing)
    }

    /// Renders the space-separated header row.
    fn ssv_header(&self, trailing: bool) -> Result<String> {
        self.make_header("", Delimiter::Space, trailing)
    }

    /// Renders the comma-separated header row.
    fn csv_header(&self, trailing: bool) -> Result<String> {
        self.make_header("", Delimiter::Comma, trailing)
    }

    /// Renders the tab-separated header row.
    fn tsv_header(&self, trailing: bool) -> Result<String> {
        self.make_header("", Delimiter::Tab, trailing)
    }
}

/// Joins two rendered records with a single seam delimiter.
///
/// Empty sides pass through untouched, so the helper can fold over a list of
/// records without special-casing the first.
///
/// # Examples
///
/// ```rust
/// use triform::{text::concat, Delimiter};
///
/// assert_eq!(concat("1 2", "3 4", Delimiter::Space), "1 2 3 4");
/// assert_eq!(concat("", "3 4", Delimiter::Space), "3 4");
/// ```
#[must_use]
pub fn concat(left: &str, right: &str, delimiter: Delimiter) -> String {
    if left.is_empty() {
        right.to_string()
    } else if right.is_empty() {
        left.to_string()
    } else {
        format!("{}{}{}", left, delimiter.as_str(), right)
    }
}

fn close_token(mut token: String, delimiter: Delimiter, trailing: bool) -> String {
    if trailing {
        token.push_str(delimiter.as_str());
    }
    token
}

fn scalar_label(name: &str, delimiter: Delimiter, trailing: bool) -> String {
    close_token(name.to_string(), delimiter, trailing)
}

fn seq_values<T: Delimited>(items: &[T], delimiter: Delimiter, trailing: bool) -> Result<String> {
    let mut out = String::new();
    let last = items.len().saturating_sub(1);
    for (i, item) in items.iter().enumerate() {
        out.push_str(&item.to_delimited(delimiter, false)?);
        if i != last || trailing {
            out.push_str(delimiter.as_str());
        }
    }
    Ok(out)
}

fn seq_headers<T: Delimited>(
    items: &[T],
    name: &str,
    delimiter: Delimiter,
    trailing: bool,
) -> Result<String> {
    let mut out = String::new();
    let last = items.len().saturating_sub(1);
    for (i, item) in items.iter().enumerate() {
        out.push_str(&item.make_header(&element_label(name, i), delimiter, false)?);
        if i != last || trailing {
            out.push_str(delimiter.as_str());
        }
    }
    Ok(out)
}

impl Delimited for String {
    fn to_delimited(&self, delimiter: Delimiter, trailing: bool) -> Result<String> {
        Ok(close_token(self.clone(), delimiter, trailing))
    }

    fn make_header(&self, name: &str, delimiter: Delimiter, trailing: bool) -> Result<String> {
        Ok(scalar_label(name, delimiter, trailing))
    }
}

impl Delimited for bool {
    fn to_delimited(&self, delimiter: Delimiter, trailing: bool) -> Result<String> {
        let literal = if *self { "true" } else { "false" };
        Ok(close_token(literal.to_string(), delimiter, trailing))
    }

    fn make_header(&self, name: &str, delimiter: Delimiter, trailing: bool) -> Result<String> {
        Ok(scalar_label(name, delimiter, trailing))
    }
}

// Integers render through standard decimal formatting.
macro_rules! impl_delimited_decimal {
    ($($t:ty),+ $(,)?) => {$(
        impl Delimited for $t {
            fn to_delimited(&self, delimiter: Delimiter, trailing: bool) -> Result<String> {
                Ok(close_token(self.to_string(), delimiter, trailing))
            }

            fn make_header(
                &self,
                name: &str,
                delimiter: Delimiter,
                trailing: bool,
            ) -> Result<String> {
                Ok(scalar_label(name, delimiter, trailing))
            }
        }
    )+};
}

// Floats render in scientific notation with six fractional digits. The
// precision is a fixed policy, not configurable per call.
macro_rules! impl_delimited_scientific {
    ($($t:ty),+ $(,)?) => {$(
        impl Delimited for $t {
            fn to_delimited(&self, delimiter: Delimiter, trailing: bool) -> Result<String> {
                Ok(close_token(format!("{:.6e}", self), delimiter, trailing))
            }

            fn make_header(
                &self,
                name: &str,
                delimiter: Delimiter,
                trailing: bool,
            ) -> Result<String> {
                Ok(scalar_label(name, delimiter, trailing))
            }
        }
    )+};
}

impl_delimited_decimal!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);
impl_delimited_scientific!(f32, f64);

impl<T: Delimited> Delimited for Vec<T> {
    fn to_delimited(&self, delimiter: Delimiter, trailing: bool) -> Result<String> {
        seq_values(self, delimiter, trailing)
    }

    fn make_header(&self, name: &str, delimiter: Delimiter, trailing: bool) -> Result<String> {
        seq_headers(self, name, delimiter, trailing)
    }
}

impl<T: Delimited, const N: usize> Delimited for [T; N] {
    fn to_delimited(&self, delimiter: Delimiter, trailing: bool) -> Result<String> {
        seq_values(self, delimiter, trailing)
    }

    fn make_header(&self, name: &str, delimiter: Delimiter, trailing: bool) -> Result<String> {
        seq_headers(self, name, delimiter, trailing)
    }
}
