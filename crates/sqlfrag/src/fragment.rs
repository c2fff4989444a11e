//! Fragment construction.
//!
//! This module complements the [`sql!`](crate::sql) macro:
//! - `sql!` is great when the template is written out in source.
//! - [`Builder`] is great when you want to *compose* SQL piece by piece
//!   without manually tracking placeholders.
//!
//! # Example
//!
//! ```
//! use sqlfrag::{Builder, Ident};
//!
//! let mut q = Builder::new();
//! q.text("SELECT id, username FROM ");
//! q.bind(Ident::new("users"));
//! q.text(" WHERE status = ");
//! q.bind("active");
//!
//! let fragment = q.finish();
//! assert_eq!(fragment.query(), "SELECT id, username FROM \"users\" WHERE status = ?");
//! assert_eq!(fragment.params().len(), 1);
//! ```

use crate::ops;
use crate::value::{Bound, SqlValue};
use serde::Serialize;
use std::fmt;

/// An immutable piece of parameterized SQL: query text with one `?`
/// placeholder per bound parameter, plus the parameters in left-to-right
/// placeholder order.
///
/// Fragments are only created by [`Builder`], [`Fragment::build`], the
/// [`sql!`](crate::sql) macro, or a combinator, and never mutated afterwards.
/// Interpolating a fragment into another template splices its query text and
/// appends its parameters in order, so composition is flattening all the way
/// down.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Fragment {
    query: String,
    params: Vec<SqlValue>,
}

impl Fragment {
    /// The empty fragment: no text, no parameters.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a fragment from the template-literal shape: literal segments
    /// interleaved with interpolated values, `segments.len() == values.len() + 1`.
    ///
    /// The walk is tolerant of the trailing position: each segment is
    /// appended verbatim, then the value at the same index (if any) is
    /// classified and appended. Surplus values past the last segment are
    /// ignored.
    pub fn build<S>(segments: &[S], values: Vec<Bound>) -> Self
    where
        S: AsRef<str>,
    {
        let mut builder = Builder::new();
        let mut values = values.into_iter();
        for segment in segments {
            builder.text(segment.as_ref());
            if let Some(value) = values.next() {
                builder.bind(value);
            }
        }
        builder.finish()
    }

    /// The query text, with one `?` per bound parameter.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The bound parameters, in placeholder order.
    pub fn params(&self) -> &[SqlValue] {
        &self.params
    }

    /// Whether this fragment has neither text nor parameters.
    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.params.is_empty()
    }

    /// Render `{query, params}` as compact JSON for debugging.
    ///
    /// Big integers render as `"<digits>n"`, byte buffers as arrays of byte
    /// values (see [`SqlValue`]'s serialization).
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Render `{query, params}` as pretty-printed JSON for debugging.
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    pub(crate) fn into_parts(self) -> (String, Vec<SqlValue>) {
        (self.query, self.params)
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_json())
    }
}

/// An incremental fragment builder.
///
/// `Builder` accumulates query text and parameters separately. [`bind`]
/// classifies each value by kind and appends accordingly; this is the single
/// classification code path used by the [`sql!`](crate::sql) macro and every
/// combinator.
///
/// [`bind`]: Builder::bind
#[must_use]
#[derive(Debug, Default)]
pub struct Builder {
    query: String,
    params: Vec<SqlValue>,
}

impl Builder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append literal SQL text verbatim.
    pub fn text(&mut self, sql: &str) -> &mut Self {
        self.query.push_str(sql);
        self
    }

    /// Classify a value and append it.
    ///
    /// - absent: nothing is appended, neither text nor parameter. This can
    ///   leave doubled separators or dangling operators in the surrounding
    ///   text; callers compose with [`when`](crate::when) or
    ///   [`join`](crate::join) when that matters.
    /// - fragment: query text is spliced and its parameters appended in order.
    /// - identifier / raw: the rendering is spliced; no parameters.
    /// - array: a parenthesized, comma-joined sub-fragment is built from the
    ///   elements (recursively) and spliced.
    /// - scalar: one `?` is appended and the value pushed onto the parameters,
    ///   unchanged.
    pub fn bind(&mut self, value: impl Into<Bound>) -> &mut Self {
        match value.into() {
            Bound::Absent => {}
            Bound::Value(value) => {
                self.query.push('?');
                self.params.push(value);
            }
            Bound::Fragment(fragment) => self.splice(fragment),
            Bound::Ident(ident) => ident.write_sql(&mut self.query),
            Bound::Raw(raw) => self.query.push_str(&raw.render()),
            Bound::Array(items) => {
                self.query.push('(');
                self.splice(ops::join(items));
                self.query.push(')');
            }
        }
        self
    }

    /// Append another fragment, consuming it.
    pub fn append(&mut self, fragment: Fragment) -> &mut Self {
        self.splice(fragment);
        self
    }

    fn splice(&mut self, fragment: Fragment) {
        let (query, params) = fragment.into_parts();
        self.query.push_str(&query);
        self.params.extend(params);
    }

    /// Finalize into an immutable [`Fragment`].
    pub fn finish(self) -> Fragment {
        #[cfg(feature = "tracing")]
        tracing::trace!(query = %self.query, params = self.params.len(), "fragment built");

        Fragment {
            query: self.query,
            params: self.params,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::SqlValue;

    #[test]
    fn empty_fragment() {
        let fragment = Fragment::empty();
        assert_eq!(fragment.query(), "");
        assert!(fragment.params().is_empty());
        assert!(fragment.is_empty());
    }

    #[test]
    fn build_walks_segments_and_values() {
        let fragment = Fragment::build(
            &["a = ", " and b = ", ""],
            vec![Bound::from(1), Bound::from("x")],
        );
        assert_eq!(fragment.query(), "a = ? and b = ?");
        assert_eq!(
            fragment.params(),
            &[SqlValue::Int(1), SqlValue::Text("x".into())]
        );
    }

    #[test]
    fn build_ignores_surplus_values() {
        let fragment = Fragment::build(&["only text"], vec![Bound::from(1), Bound::from(2)]);
        assert_eq!(fragment.query(), "only text?");
        assert_eq!(fragment.params(), &[SqlValue::Int(1)]);
    }

    #[test]
    fn absent_appends_nothing() {
        let fragment = Fragment::build(&["a = ", " or 1"], vec![Bound::Absent]);
        assert_eq!(fragment.query(), "a =  or 1");
        assert!(fragment.params().is_empty());
    }

    #[test]
    fn placeholder_count_matches_params() {
        let inner = Fragment::build(&["x in ", ""], vec![Bound::from(vec![1, 2, 3])]);
        let fragment = Fragment::build(
            &["select 1 where ", " and y = ", ""],
            vec![Bound::Fragment(inner), Bound::from("y")],
        );
        assert_eq!(
            fragment.query().matches('?').count(),
            fragment.params().len()
        );
    }
}
