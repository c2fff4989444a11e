//! Bound value unions.
//!
//! Two closed enums drive the whole builder:
//!
//! - [`SqlValue`] is the scalar union stored in a fragment's parameter list.
//!   Values are carried opaquely: no coercion, no quoting.
//! - [`Bound`] is the union of everything that can be interpolated into a
//!   template: a scalar, an array, a nested [`Fragment`], an [`Ident`], a
//!   [`Raw`], or the absent marker.
//!
//! `Bound::Absent` means "omit this interpolation entirely" and is distinct
//! from binding SQL NULL (`SqlValue::Null`). `Option::None` converts to
//! `Absent`; NULL is explicit via [`null`](crate::null).

use crate::fragment::Fragment;
use crate::ident::Ident;
use crate::raw::Raw;
use bytes::Bytes;
use serde::ser::{Serialize, SerializeSeq, Serializer};

/// A primitive scalar bound as a single `?` placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    /// SQL NULL (a bound parameter, not an omitted one).
    Null,
    /// Boolean.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit float.
    Float(f64),
    /// Text.
    Text(String),
    /// Arbitrary-precision integer, carried as its decimal digit string to
    /// avoid precision loss.
    BigInt(String),
    /// Binary data.
    Bytes(Bytes),
}

/// Debug-serialization rules for parameter values:
/// big integers render as their decimal digits suffixed with `n` (so they
/// stay distinguishable from plain numeric strings), byte buffers render
/// structurally as a sequence of byte values.
impl Serialize for SqlValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            SqlValue::Null => serializer.serialize_unit(),
            SqlValue::Bool(b) => serializer.serialize_bool(*b),
            SqlValue::Int(n) => serializer.serialize_i64(*n),
            SqlValue::Float(x) => serializer.serialize_f64(*x),
            SqlValue::Text(s) => serializer.serialize_str(s),
            SqlValue::BigInt(digits) => serializer.serialize_str(&format!("{digits}n")),
            SqlValue::Bytes(bytes) => {
                let mut seq = serializer.serialize_seq(Some(bytes.len()))?;
                for byte in bytes.iter() {
                    seq.serialize_element(byte)?;
                }
                seq.end()
            }
        }
    }
}

macro_rules! impl_sql_value_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for SqlValue {
                fn from(value: $ty) -> Self {
                    SqlValue::Int(value.into())
                }
            }
        )*
    };
}

impl_sql_value_int!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! impl_sql_value_bigint {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for SqlValue {
                fn from(value: $ty) -> Self {
                    SqlValue::BigInt(value.to_string())
                }
            }
        )*
    };
}

impl_sql_value_bigint!(i128, u128);

impl From<u64> for SqlValue {
    fn from(value: u64) -> Self {
        // Values beyond i64 promote to the lossless big-integer kind.
        match i64::try_from(value) {
            Ok(n) => SqlValue::Int(n),
            Err(_) => SqlValue::BigInt(value.to_string()),
        }
    }
}

impl From<bool> for SqlValue {
    fn from(value: bool) -> Self {
        SqlValue::Bool(value)
    }
}

impl From<f32> for SqlValue {
    fn from(value: f32) -> Self {
        SqlValue::Float(value.into())
    }
}

impl From<f64> for SqlValue {
    fn from(value: f64) -> Self {
        SqlValue::Float(value)
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(value.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Text(value)
    }
}

impl From<Bytes> for SqlValue {
    fn from(value: Bytes) -> Self {
        SqlValue::Bytes(value)
    }
}

/// Everything that can be interpolated into a fragment template.
///
/// The fragment builder classifies each interpolation by matching on this
/// enum (exhaustively, so a new kind cannot be forgotten):
///
/// - `Absent` emits nothing, neither text nor parameter.
/// - `Value` emits one `?` and pushes the scalar onto the parameter list.
/// - `Array` emits a parenthesized, comma-joined sub-fragment, recursively.
/// - `Fragment` splices query text and appends its parameters in order.
/// - `Ident` / `Raw` splice their rendering; no parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum Bound {
    /// Omit this interpolation entirely.
    Absent,
    /// A scalar bound as a placeholder.
    Value(SqlValue),
    /// An ordered sequence of bound values.
    Array(Vec<Bound>),
    /// A nested fragment.
    Fragment(Fragment),
    /// A quoted identifier.
    Ident(Ident),
    /// Verbatim text.
    Raw(Raw),
}

impl Bound {
    /// Whether this is the absent marker.
    pub fn is_absent(&self) -> bool {
        matches!(self, Bound::Absent)
    }
}

impl From<SqlValue> for Bound {
    fn from(value: SqlValue) -> Self {
        Bound::Value(value)
    }
}

impl From<Fragment> for Bound {
    fn from(fragment: Fragment) -> Self {
        Bound::Fragment(fragment)
    }
}

impl From<Ident> for Bound {
    fn from(ident: Ident) -> Self {
        Bound::Ident(ident)
    }
}

impl From<Raw> for Bound {
    fn from(raw: Raw) -> Self {
        Bound::Raw(raw)
    }
}

macro_rules! impl_bound_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Bound {
                fn from(value: $ty) -> Self {
                    Bound::Value(SqlValue::from(value))
                }
            }
        )*
    };
}

impl_bound_scalar!(
    bool, i8, i16, i32, i64, i128, u8, u16, u32, u64, u128, f32, f64, &str, String, Bytes,
);

impl<T> From<Option<T>> for Bound
where
    T: Into<Bound>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => Bound::Absent,
        }
    }
}

impl<T> From<Vec<T>> for Bound
where
    T: Into<Bound>,
{
    fn from(values: Vec<T>) -> Self {
        Bound::Array(values.into_iter().map(Into::into).collect())
    }
}

impl<T, const N: usize> From<[T; N]> for Bound
where
    T: Into<Bound>,
{
    fn from(values: [T; N]) -> Self {
        Bound::Array(values.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_json(value: &SqlValue) -> String {
        serde_json::to_string(value).unwrap()
    }

    #[test]
    fn scalar_serialization() {
        assert_eq!(to_json(&SqlValue::Null), "null");
        assert_eq!(to_json(&SqlValue::Bool(true)), "true");
        assert_eq!(to_json(&SqlValue::Int(7)), "7");
        assert_eq!(to_json(&SqlValue::Float(1.5)), "1.5");
        assert_eq!(to_json(&SqlValue::Text("a".into())), "\"a\"");
    }

    #[test]
    fn bigint_serializes_with_n_suffix() {
        assert_eq!(to_json(&SqlValue::from(10i128)), "\"10n\"");
        assert_eq!(
            to_json(&SqlValue::from(170141183460469231731687303715884105727i128)),
            "\"170141183460469231731687303715884105727n\""
        );
    }

    #[test]
    fn bytes_serialize_structurally() {
        assert_eq!(to_json(&SqlValue::Bytes(Bytes::from_static(&[1, 2, 3]))), "[1,2,3]");
        assert_eq!(to_json(&SqlValue::Bytes(Bytes::new())), "[]");
    }

    #[test]
    fn u64_promotes_past_i64_range() {
        assert_eq!(SqlValue::from(5u64), SqlValue::Int(5));
        assert_eq!(SqlValue::from(u64::MAX), SqlValue::BigInt(u64::MAX.to_string()));
    }

    #[test]
    fn option_maps_none_to_absent() {
        assert_eq!(Bound::from(None::<i32>), Bound::Absent);
        assert_eq!(Bound::from(Some(1)), Bound::Value(SqlValue::Int(1)));
    }

    #[test]
    fn collections_become_arrays() {
        let expected = Bound::Array(vec![
            Bound::Value(SqlValue::Int(1)),
            Bound::Value(SqlValue::Int(2)),
        ]);
        assert_eq!(Bound::from(vec![1, 2]), expected);
        assert_eq!(Bound::from([1, 2]), expected);
    }
}
