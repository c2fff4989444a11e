//! SQL identifier quoting.
//!
//! [`Ident`] wraps a (possibly dotted) name and renders it as a quoted,
//! dot-separated SQL identifier. Identifiers cannot be parameterized, so this
//! is the escape hatch for dynamic schema/table/column names.
//!
//! Escaping is by stripping: embedded `"` characters are removed from each
//! segment rather than doubled, and each segment is wrapped in `"`. Dots are
//! always treated as path separators, never as part of a segment.

use std::fmt;

/// A SQL identifier (column, table, or schema name).
///
/// Supports dotted notation (e.g. `schema.table.column`). Any string is
/// accepted; rendering never fails. An `Ident` never contributes bound
/// parameters.
///
/// ```
/// use sqlfrag::Ident;
///
/// assert_eq!(Ident::new("users").render(), r#""users""#);
/// assert_eq!(Ident::new("public.users").render(), r#""public"."users""#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    name: String,
}

impl Ident {
    /// Create an identifier from a raw name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The raw, unescaped name this identifier was created from.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Render the identifier as quoted SQL.
    ///
    /// Splits on `.`, then per segment: trims whitespace, strips all `"`
    /// characters, and wraps the remainder in double quotes. Segments are
    /// rejoined with `.`. The empty name renders as `""`.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.name.len() + 2);
        self.write_sql(&mut out);
        out
    }

    pub(crate) fn write_sql(&self, out: &mut String) {
        for (i, segment) in self.name.split('.').enumerate() {
            if i > 0 {
                out.push('.');
            }
            out.push('"');
            for ch in segment.trim().chars() {
                if ch != '"' {
                    out.push(ch);
                }
            }
            out.push('"');
        }
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<&str> for Ident {
    fn from(name: &str) -> Self {
        Ident::new(name)
    }
}

impl From<String> for Ident {
    fn from(name: String) -> Self {
        Ident::new(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ident_empty() {
        assert_eq!(Ident::new("").render(), r#""""#);
    }

    #[test]
    fn ident_simple() {
        assert_eq!(Ident::new("a").render(), r#""a""#);
    }

    #[test]
    fn ident_dotted() {
        assert_eq!(Ident::new("a.b").render(), r#""a"."b""#);
    }

    #[test]
    fn ident_trailing_dot_keeps_empty_segment() {
        assert_eq!(Ident::new("a.").render(), "\"a\".\"\"");
    }

    #[test]
    fn ident_strips_embedded_quotes() {
        assert_eq!(Ident::new(r#""a"#).render(), r#""a""#);
        assert_eq!(Ident::new(r#"a".b"#).render(), r#""a"."b""#);
        assert_eq!(Ident::new(r#"a"."b""#).render(), r#""a"."b""#);
    }

    #[test]
    fn ident_trims_segments() {
        assert_eq!(Ident::new(" a . b ").render(), r#""a"."b""#);
    }

    #[test]
    fn ident_three_parts() {
        assert_eq!(Ident::new("a.b.c").render(), r#""a"."b"."c""#);
    }

    #[test]
    fn ident_display_matches_render() {
        let ident = Ident::new("public.users");
        assert_eq!(ident.to_string(), ident.render());
    }
}
