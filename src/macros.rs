//! Field and enum registration macros.
//!
//! An aggregate lists its fields once and gains every conversion from that
//! single declaration. Each generated method body is a left-to-right fold
//! over the field list, so declaration order determines textual field order,
//! wire byte order, JSON key order, and header/value positional
//! correspondence — the invariant that keeps the three formats structurally
//! consistent with each other.

/// Implements [`Delimited`](crate::Delimited) (and `Display`, rendering the
/// default space-separated form) for an aggregate by folding over its
/// declared fields.
///
/// Nested members label their headers with dotted `name.member` paths.
///
/// # Examples
///
/// ```rust
/// use triform::{delimited_fields, Delimited};
///
/// #[derive(Default)]
/// struct Reading {
///     channel: u8,
///     volts: f32,
/// }
///
/// delimited_fields!(Reading { channel, volts });
///
/// let r = Reading { channel: 2, volts: 1.5 };
/// assert_eq!(r.to_ssv(false).unwrap(), "2 1.500000e0");
/// assert_eq!(r.ssv_header(false).unwrap(), "channel volts");
/// assert_eq!(r.to_string(), "2 1.500000e0");
/// ```
#[macro_export]
macro_rules! delimited_fields {
    ($ty:ident { $($field:ident),+ $(,)? }) => {
        impl $crate::Delimited for $ty {
            fn to_delimited(
                &self,
                delimiter: $crate::Delimiter,
                trailing: bool,
            ) -> $crate::Result<::std::string::String> {
                let mut out = ::std::string::String::new();
                $(
                    out.push_str(&$crate::Delimited::to_delimited(
                        &self.$field,
                        delimiter,
                        true,
                    )?);
                )+
                if !trailing && out.ends_with(delimiter.as_str()) {
                    out.truncate(out.len() - delimiter.as_str().len());
                }
                ::core::result::Result::Ok(out)
            }

            fn make_header(
                &self,
                name: &str,
                delimiter: $crate::Delimiter,
                trailing: bool,
            ) -> $crate::Result<::std::string::String> {
                let mut out = ::std::string::String::new();
                $(
                    out.push_str(&$crate::Delimited::make_header(
                        &self.$field,
                        &$crate::options::member_label(name, stringify!($field)),
                        delimiter,
                        true,
                    )?);
                )+
                if !trailing && out.ends_with(delimiter.as_str()) {
                    out.truncate(out.len() - delimiter.as_str().len());
                }
                ::core::result::Result::Ok(out)
            }
        }

        impl ::core::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                match $crate::Delimited::to_ssv(self, false) {
                    ::core::result::Result::Ok(text) => f.write_str(&text),
                    ::core::result::Result::Err(_) => ::core::result::Result::Err(::core::fmt::Error),
                }
            }
        }
    };
}

/// Implements [`Binary`](crate::Binary) for an aggregate by folding over its
/// declared fields: the size is the sum of the field sizes, and reads and
/// writes advance one shared offset across the fields in declaration order.
///
/// # Examples
///
/// ```rust
/// use triform::{binary_fields, Binary};
///
/// #[derive(Default)]
/// struct Packet {
///     kind: i8,
///     length: i16,
/// }
///
/// binary_fields!(Packet { kind, length });
///
/// let p = Packet { kind: 1, length: 2 };
/// assert_eq!(p.size(), 3);
/// assert_eq!(p.to_bytes().unwrap(), [0x01, 0x00, 0x02]);
/// ```
#[macro_export]
macro_rules! binary_fields {
    ($ty:ident { $($field:ident),+ $(,)? }) => {
        impl $crate::Binary for $ty {
            fn size(&self) -> usize {
                let mut total = 0usize;
                $(
                    total += $crate::Binary::size(&self.$field);
                )+
                total
            }

            fn write_at(&self, out: &mut [u8], offset: usize) -> $crate::Result<usize> {
                let mut cursor = offset;
                $(
                    cursor += $crate::Binary::write_at(&self.$field, out, cursor)?;
                )+
                ::core::result::Result::Ok(cursor - offset)
            }

            fn read_at(&mut self, src: &[u8], offset: usize) -> $crate::Result<usize> {
                let mut cursor = offset;
                $(
                    cursor += $crate::Binary::read_at(&mut self.$field, src, cursor)?;
                )+
                ::core::result::Result::Ok(cursor - offset)
            }
        }
    };
}

/// Implements [`Json`](crate::Json) for an aggregate, along with the serde
/// `Serialize`/`Deserialize` impls that let registered aggregates nest
/// inside one another.
///
/// Serialization writes one key per declared field; deserialization looks
/// each key up by name and leaves missing keys at the field's
/// default-constructed value. The type must implement `Default` and must
/// not also derive the serde traits.
///
/// # Examples
///
/// ```rust
/// use triform::{json_fields, Json};
///
/// #[derive(Default)]
/// struct Config {
///     retries: u32,
///     label: String,
/// }
///
/// json_fields!(Config { retries, label });
///
/// let mut c = Config::default();
/// c.from_json_string(r#"{ "retries": 3 }"#).unwrap();
/// assert_eq!(c.retries, 3);
/// assert_eq!(c.label, ""); // missing key falls back to the default
/// ```
#[macro_export]
macro_rules! json_fields {
    ($ty:ident { $($field:ident),+ $(,)? }) => {
        impl $crate::__private::serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                use $crate::__private::serde::ser::SerializeMap;
                let count = [$(stringify!($field)),+].len();
                let mut map = serializer.serialize_map(::core::option::Option::Some(count))?;
                $(
                    map.serialize_entry(stringify!($field), &self.$field)?;
                )+
                map.end()
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let document =
                    <$crate::__private::serde_json::Value as $crate::__private::serde::Deserialize>::deserialize(
                        deserializer,
                    )?;
                let mut value = <$ty as ::core::default::Default>::default();
                $(
                    if let ::core::option::Option::Some(entry) = document.get(stringify!($field)) {
                        value.$field = $crate::__private::serde_json::from_value(entry.clone())
                            .map_err($crate::__private::serde::de::Error::custom)?;
                    }
                )+
                ::core::result::Result::Ok(value)
            }
        }

        impl $crate::Json for $ty {
            fn to_json_string(&self) -> $crate::Result<::std::string::String> {
                $crate::json::to_pretty_string(self)
            }

            fn from_json_string(&mut self, text: &str) -> $crate::Result<()> {
                *self = $crate::json::from_document_str(text)?;
                ::core::result::Result::Ok(())
            }
        }
    };
}

/// Implements all three conversion forms for an aggregate from one field
/// list: [`Delimited`](crate::Delimited), [`Binary`](crate::Binary), and
/// [`Json`](crate::Json).
///
/// # Examples
///
/// ```rust
/// use triform::{convert_fields, Binary, Delimited};
///
/// #[derive(Default)]
/// struct Sample {
///     a: i8,
///     b: i16,
/// }
///
/// convert_fields!(Sample { a, b });
///
/// let s = Sample { a: 1, b: 2 };
/// assert_eq!(s.to_ssv(false).unwrap(), "1 2");
/// assert_eq!(s.ssv_header(false).unwrap(), "a b");
/// assert_eq!(s.to_bytes().unwrap(), [0x01, 0x00, 0x02]);
/// ```
#[macro_export]
macro_rules! convert_fields {
    ($ty:ident { $($field:ident),+ $(,)? }) => {
        $crate::delimited_fields!($ty { $($field),+ });
        $crate::binary_fields!($ty { $($field),+ });
        $crate::json_fields!($ty { $($field),+ });
    };
}

/// Implements every conversion form for a unit enum over its explicit
/// underlying representation.
///
/// The enum must be `Copy` and list each variant with its value. All forms
/// render the underlying integer; decoding a value that matches no listed
/// variant yields the *first* listed variant.
///
/// # Examples
///
/// ```rust
/// use triform::{convert_enum, Binary, Delimited};
///
/// #[derive(Clone, Copy, Debug, PartialEq, Default)]
/// enum Mode {
///     #[default]
///     Idle = 0,
///     Run = 1,
///     Fault = 2,
/// }
///
/// convert_enum!(Mode as u8 { Idle = 0, Run = 1, Fault = 2 });
///
/// assert_eq!(Mode::Run.to_ssv(false).unwrap(), "1");
/// assert_eq!(Mode::Fault.to_bytes().unwrap(), [0x02]);
///
/// let mut mode = Mode::Idle;
/// mode.read_at(&[0x09], 0).unwrap(); // unlisted value
/// assert_eq!(mode, Mode::Idle);
/// ```
#[macro_export]
macro_rules! convert_enum {
    ($ty:ident as $repr:ty { $first:ident = $first_value:expr $(, $variant:ident = $value:expr)* $(,)? }) => {
        impl $crate::Delimited for $ty {
            fn to_delimited(
                &self,
                delimiter: $crate::Delimiter,
                trailing: bool,
            ) -> $crate::Result<::std::string::String> {
                $crate::Delimited::to_delimited(&(*self as $repr), delimiter, trailing)
            }

            fn make_header(
                &self,
                name: &str,
                delimiter: $crate::Delimiter,
                trailing: bool,
            ) -> $crate::Result<::std::string::String> {
                $crate::Delimited::make_header(&(*self as $repr), name, delimiter, trailing)
            }
        }

        impl $crate::Binary for $ty {
            fn size(&self) -> usize {
                ::core::mem::size_of::<$repr>()
            }

            fn write_at(&self, out: &mut [u8], offset: usize) -> $crate::Result<usize> {
                $crate::Binary::write_at(&(*self as $repr), out, offset)
            }

            fn read_at(&mut self, src: &[u8], offset: usize) -> $crate::Result<usize> {
                let mut raw: $repr = *self as $repr;
                let count = $crate::Binary::read_at(&mut raw, src, offset)?;
                *self = match raw {
                    v if v == $first_value => $ty::$first,
                    $(v if v == $value => $ty::$variant,)*
                    _ => $ty::$first,
                };
                ::core::result::Result::Ok(count)
            }
        }

        impl $crate::__private::serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                $crate::__private::serde::Serialize::serialize(&(*self as $repr), serializer)
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let raw = <$repr as $crate::__private::serde::Deserialize>::deserialize(deserializer)?;
                ::core::result::Result::Ok(match raw {
                    v if v == $first_value => $ty::$first,
                    $(v if v == $value => $ty::$variant,)*
                    _ => $ty::$first,
                })
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::{Binary, Delimited, Json};

    #[derive(Default)]
    struct Inner {
        x: u8,
        y: u8,
    }

    convert_fields!(Inner { x, y });

    #[derive(Default)]
    struct Outer {
        id: u16,
        inner: Inner,
    }

    convert_fields!(Outer { id, inner });

    #[test]
    fn test_fold_is_declaration_ordered() {
        let outer = Outer {
            id: 0x0102,
            inner: Inner { x: 3, y: 4 },
        };
        assert_eq!(outer.to_ssv(false).unwrap(), "258 3 4");
        assert_eq!(outer.to_bytes().unwrap(), [0x01, 0x02, 0x03, 0x04]);
    }

    #[test]
    fn test_nested_headers_use_dotted_paths() {
        let outer = Outer::default();
        assert_eq!(
            outer.ssv_header(false).unwrap(),
            "id inner.x inner.y"
        );
    }

    #[test]
    fn test_json_missing_key_defaults() {
        let mut outer = Outer::default();
        outer
            .from_json_string(r#"{ "inner": { "y": 9 } }"#)
            .unwrap();
        assert_eq!(outer.id, 0);
        assert_eq!(outer.inner.x, 0);
        assert_eq!(outer.inner.y, 9);
    }

    #[test]
    fn test_display_matches_default_form() {
        let outer = Outer {
            id: 7,
            inner: Inner { x: 1, y: 2 },
        };
        assert_eq!(outer.to_string(), outer.to_ssv(false).unwrap());
    }
}
