//! Verbatim SQL substitution.
//!
//! [`Raw`] opts a value out of parameterization entirely: its rendering is
//! spliced into the query text unescaped and unvalidated, and it never
//! contributes bound parameters. The caller is responsible for safety.

use std::fmt;

/// A value included in query text verbatim.
///
/// ```
/// use sqlfrag::Raw;
///
/// assert_eq!(Raw::from("now()").render(), "now()");
/// assert_eq!(Raw::from(42).render(), "42");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Raw(RawValue);

#[derive(Debug, Clone, PartialEq)]
enum RawValue {
    Text(String),
    Int(i64),
    Float(f64),
}

impl Raw {
    /// Render the value as text: strings pass through unchanged, numbers in
    /// decimal form.
    pub fn render(&self) -> String {
        match &self.0 {
            RawValue::Text(text) => text.clone(),
            RawValue::Int(n) => n.to_string(),
            RawValue::Float(x) => x.to_string(),
        }
    }
}

impl fmt::Display for Raw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            RawValue::Text(text) => f.write_str(text),
            RawValue::Int(n) => write!(f, "{n}"),
            RawValue::Float(x) => write!(f, "{x}"),
        }
    }
}

impl From<&str> for Raw {
    fn from(value: &str) -> Self {
        Raw(RawValue::Text(value.to_string()))
    }
}

impl From<String> for Raw {
    fn from(value: String) -> Self {
        Raw(RawValue::Text(value))
    }
}

impl From<i32> for Raw {
    fn from(value: i32) -> Self {
        Raw(RawValue::Int(value.into()))
    }
}

impl From<i64> for Raw {
    fn from(value: i64) -> Self {
        Raw(RawValue::Int(value))
    }
}

impl From<f64> for Raw {
    fn from(value: f64) -> Self {
        Raw(RawValue::Float(value))
    }
}
