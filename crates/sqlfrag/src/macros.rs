//! The `sql!` template macro.

/// Build a [`Fragment`](crate::Fragment) from literal text interleaved with
/// `{...}` interpolations, in source order.
///
/// Literal segments are string literals; interpolations are brace-wrapped
/// expressions of any type convertible to [`Bound`](crate::Bound). Adjacent
/// interpolations and leading/trailing interpolations need no empty literal
/// between them.
///
/// ```
/// use sqlfrag::{sql, id};
///
/// let q = sql!("select * from " {id("users")} " where a = " {1} " and b in " {[1, 2, 3]});
/// assert_eq!(q.query(), r#"select * from "users" where a = ? and b in (?, ?, ?)"#);
/// assert_eq!(q.params().len(), 4);
/// ```
#[macro_export]
macro_rules! sql {
    () => {
        $crate::Fragment::empty()
    };
    ($($tt:tt)+) => {{
        let mut builder = $crate::Builder::new();
        $crate::__sql_piece!(builder, $($tt)+);
        builder.finish()
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __sql_piece {
    ($builder:ident,) => {};
    ($builder:ident, $text:literal $($rest:tt)*) => {
        $builder.text($text);
        $crate::__sql_piece!($builder, $($rest)*);
    };
    ($builder:ident, {$value:expr} $($rest:tt)*) => {
        $builder.bind($value);
        $crate::__sql_piece!($builder, $($rest)*);
    };
}
