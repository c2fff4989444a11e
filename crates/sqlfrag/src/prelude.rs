//! Convenient imports for typical `sqlfrag` usage.
//!
//! This module is intentionally small and focused on the most common APIs so
//! callers can start with:
//!
//! ```
//! use sqlfrag::prelude::*;
//! ```

pub use crate::{Bound, Builder, FragError, FragResult, Fragment, Ident, Raw, SqlValue};

pub use crate::{
    branch, bytes, eq, id, insert, join, join_object, join_with, null, raw, set, sql, when,
};
