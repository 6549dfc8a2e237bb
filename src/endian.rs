//! Byte-order normalization for wire scalars.
//!
//! Everything this crate puts on the wire is big-endian, regardless of the
//! host's native order. This module defines the closed set of fixed-width
//! scalars ([`Scalar`]) and the order-conversion functions over them.
//!
//! Conversion is defined purely by byte layout: reversing the bytes of a
//! value is the same operation whether the value is signed, unsigned, or a
//! float, so no range checks apply. Each conversion is an identity or a
//! reversal, so applying one twice restores the original.
//!
//! `usize` and `isize` are deliberately not scalars — their width differs
//! across platforms, so they have no portable wire encoding.
//!
//! ## Examples
//!
//! ```rust
//! use triform::endian::to_big_endian;
//!
//! let v = 0x1122_3344u32;
//! assert_eq!(to_big_endian(to_big_endian(v)), v);
//! assert_eq!(to_big_endian(v).to_ne_bytes(), v.to_be_bytes());
//! ```

use std::mem::size_of;

/// A fixed-width scalar with a defined big-endian wire form.
///
/// Implemented for `u8`–`u128`, `i8`–`i128`, `f32`, and `f64`. The byte
/// conversions go through the standard `to_be_bytes`/`from_be_bytes`
/// family — a typed byte view, never a raw memory reinterpretation.
pub trait Scalar: Copy {
    /// Number of bytes this scalar occupies on the wire.
    const WIDTH: usize;

    /// The byte-array form of this scalar (`[u8; WIDTH]`).
    type Bytes: AsRef<[u8]> + AsMut<[u8]> + Default;

    /// Returns the big-endian byte form of this value.
    fn to_wire(self) -> Self::Bytes;

    /// Reconstructs a value from its big-endian byte form.
    fn from_wire(bytes: Self::Bytes) -> Self;

    /// Returns this value with its byte order reversed.
    fn swapped(self) -> Self;
}

macro_rules! impl_scalar_int {
    ($($t:ty),+ $(,)?) => {$(
        impl Scalar for $t {
            const WIDTH: usize = size_of::<$t>();
            type Bytes = [u8; size_of::<$t>()];

            #[inline]
            fn to_wire(self) -> Self::Bytes {
                self.to_be_bytes()
            }

            #[inline]
            fn from_wire(bytes: Self::Bytes) -> Self {
                <$t>::from_be_bytes(bytes)
            }

            #[inline]
            fn swapped(self) -> Self {
                self.swap_bytes()
            }
        }
    )+};
}

macro_rules! impl_scalar_float {
    ($($t:ty),+ $(,)?) => {$(
        impl Scalar for $t {
            const WIDTH: usize = size_of::<$t>();
            type Bytes = [u8; size_of::<$t>()];

            #[inline]
            fn to_wire(self) -> Self::Bytes {
                self.to_be_bytes()
            }

            #[inline]
            fn from_wire(bytes: Self::Bytes) -> Self {
                <$t>::from_be_bytes(bytes)
            }

            #[inline]
            fn swapped(self) -> Self {
                <$t>::from_bits(self.to_bits().swap_bytes())
            }
        }
    )+};
}

impl_scalar_int!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);
impl_scalar_float!(f32, f64);

/// Converts a scalar from native to big-endian order.
///
/// A no-op on big-endian hosts, a byte reversal on little-endian hosts.
#[inline]
#[must_use]
pub fn to_big_endian<T: Scalar>(value: T) -> T {
    if cfg!(target_endian = "little") {
        value.swapped()
    } else {
        value
    }
}

/// Converts a scalar from native to little-endian order.
///
/// A no-op on little-endian hosts, a byte reversal on big-endian hosts.
#[inline]
#[must_use]
pub fn to_little_endian<T: Scalar>(value: T) -> T {
    if cfg!(target_endian = "big") {
        value.swapped()
    } else {
        value
    }
}

/// Converts a fixed-size sequence of scalars to big-endian order.
///
/// # Panics
///
/// Panics if `input` and `output` differ in length; matching lengths are a
/// precondition of the fixed-size form.
pub fn to_big_endian_slice<T: Scalar>(input: &[T], output: &mut [T]) {
    assert_eq!(input.len(), output.len(), "sequence lengths must match");
    for (out, value) in output.iter_mut().zip(input) {
        *out = to_big_endian(*value);
    }
}

/// Converts a fixed-size sequence of scalars to little-endian order.
///
/// # Panics
///
/// Panics if `input` and `output` differ in length.
pub fn to_little_endian_slice<T: Scalar>(input: &[T], output: &mut [T]) {
    assert_eq!(input.len(), output.len(), "sequence lengths must match");
    for (out, value) in output.iter_mut().zip(input) {
        *out = to_little_endian(*value);
    }
}

/// Converts a growable sequence of scalars to big-endian order, resizing the
/// destination to match the source length first.
pub fn to_big_endian_vec<T: Scalar>(input: &[T], output: &mut Vec<T>) {
    output.clear();
    output.extend(input.iter().map(|value| to_big_endian(*value)));
}

/// Converts a growable sequence of scalars to little-endian order, resizing
/// the destination to match the source length first.
pub fn to_little_endian_vec<T: Scalar>(input: &[T], output: &mut Vec<T>) {
    output.clear();
    output.extend(input.iter().map(|value| to_little_endian(*value)));
}
