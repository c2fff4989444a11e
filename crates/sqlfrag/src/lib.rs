//! # sqlfrag
//!
//! A composable, driver-agnostic SQL fragment builder.
//!
//! `sqlfrag` turns a template of literal text and interpolated values into a
//! parameterized query string plus an ordered list of bound parameters,
//! keeping untrusted data out of SQL syntax without tying you to any
//! database driver. Placeholders are always the positional `?`; mapping to a
//! driver's own style (`$1`, `:name`, ...) is the caller's concern.
//!
//! ## Features
//!
//! - **Template entry point**: the [`sql!`] macro interleaves literals and
//!   `{...}` interpolations in source order
//! - **Recursive composition**: fragments nest inside fragments; query text
//!   splices and parameters concatenate in placeholder order
//! - **Value kinds**: scalars bind as `?`, arrays render as parenthesized
//!   comma-joined lists, [`Ident`] quotes dotted names, [`Raw`] splices
//!   verbatim, and [`Bound::Absent`] omits an interpolation entirely
//! - **Combinators**: [`join`], [`eq`], [`join_object`], [`set`],
//!   [`insert`], [`when`], [`branch`] build lists, assignments, and tuples
//! - **Debug rendering**: [`Fragment::to_json`] serializes
//!   `{query, params}` for logs and tests
//!
//! ## Example
//!
//! ```
//! use sqlfrag::{sql, id, when};
//!
//! let min_age = Some(21);
//! let q = sql!(
//!     "select * from " {id("public.users")}
//!     " where active = " {true}
//!     {when(min_age.is_some(), || sql!(" and age >= " {min_age}))}
//! );
//!
//! assert_eq!(
//!     q.query(),
//!     r#"select * from "public"."users" where active = ? and age >= ?"#
//! );
//! assert_eq!(q.params().len(), 2);
//! ```

pub mod error;
pub mod fragment;
pub mod ident;
pub mod ops;
pub mod prelude;
pub mod raw;
pub mod value;

mod macros;


pub use error::{FragError, FragResult};
pub use fragment::{Builder, Fragment};
pub use ident::Ident;
pub use ops::{
    branch, branch_lazy, eq, eq_pair, insert, join, join_args, join_object, join_object_with,
    join_with, set, when, when_lazy,
};
pub use raw::Raw;
pub use value::{Bound, SqlValue};

use bytes::Bytes;

/// Shorthand for [`Ident::new`].
pub fn id(name: impl Into<String>) -> Ident {
    Ident::new(name)
}

/// Shorthand for constructing a [`Raw`] value.
pub fn raw(value: impl Into<Raw>) -> Raw {
    value.into()
}

/// A bound SQL NULL.
///
/// Distinct from [`Bound::Absent`]: NULL binds a `?` placeholder with a null
/// parameter, absent omits the interpolation entirely.
pub fn null() -> Bound {
    Bound::Value(SqlValue::Null)
}

/// A bound binary parameter.
pub fn bytes(value: impl Into<Bytes>) -> Bound {
    Bound::Value(SqlValue::Bytes(value.into()))
}
