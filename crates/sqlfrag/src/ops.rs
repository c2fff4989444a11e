//! Fragment combinators.
//!
//! Higher-order helpers that build common SQL shapes (lists, assignments,
//! insert tuples, conditional pieces) by composing fragments. Absent values
//! are filtered before any separator placement, so they never produce
//! doubled glue.
//!
//! The original call surface overloaded `join` over two argument shapes; here
//! each shape is a named function ([`join`], [`join_with`]) unified behind
//! one shape-dispatching entry ([`join_args`]), which is also the crate's
//! only fallible operation.

use crate::error::{FragError, FragResult};
use crate::fragment::Fragment;
use crate::ident::Ident;
use crate::value::{Bound, SqlValue};

fn comma() -> Fragment {
    crate::sql!(", ")
}

/// Join values with the default `", "` glue.
///
/// Absent values are filtered out first and do not count toward boundary
/// positions. An empty input produces the empty fragment; a single value
/// renders alone, unglued.
///
/// ```
/// use sqlfrag::{join, Bound};
///
/// let list = join(vec![Bound::from(1), Bound::Absent, Bound::from(2)]);
/// assert_eq!(list.query(), "?, ?");
/// ```
pub fn join<I, T>(values: I) -> Fragment
where
    I: IntoIterator<Item = T>,
    T: Into<Bound>,
{
    join_with(values, &comma())
}

/// Join values with a custom glue fragment.
///
/// Folds left-to-right: the accumulator starts absent so the first present
/// value takes no leading glue; each subsequent present value is spliced
/// after one copy of `glue`. No leading or trailing glue is ever emitted.
pub fn join_with<I, T>(values: I, glue: &Fragment) -> Fragment
where
    I: IntoIterator<Item = T>,
    T: Into<Bound>,
{
    let mut acc = Bound::Absent;
    let mut first = true;
    for value in values {
        let value = value.into();
        if value.is_absent() {
            continue;
        }
        let glue_slot = if first {
            Bound::Absent
        } else {
            Bound::Fragment(glue.clone())
        };
        first = false;
        acc = Bound::Fragment(Fragment::build(
            &["", "", "", ""],
            vec![acc, glue_slot, value],
        ));
    }

    match acc {
        Bound::Fragment(fragment) => fragment,
        _ => Fragment::empty(),
    }
}

/// Join with the first argument's shape deciding the call form.
///
/// - `Array` first argument: join its elements; `rest` may carry a glue
///   fragment in its first slot, otherwise `", "` is used.
/// - `Fragment` first argument: it is the glue, `rest` are the values.
/// - `Absent` first argument: default glue, `rest` are the values.
/// - Anything else is an error — the only one this crate raises.
pub fn join_args<I>(first: impl Into<Bound>, rest: I) -> FragResult<Fragment>
where
    I: IntoIterator<Item = Bound>,
{
    match first.into() {
        Bound::Array(items) => {
            let glue = match rest.into_iter().next() {
                Some(Bound::Fragment(fragment)) => fragment,
                _ => comma(),
            };
            Ok(join_with(items, &glue))
        }
        Bound::Absent => Ok(join(rest)),
        Bound::Fragment(glue) => Ok(join_with(rest, &glue)),
        _ => Err(FragError::invalid_arguments(
            "join: first argument must be a value list, a glue fragment, or absent",
        )),
    }
}

/// `<left> = <right>` via fragment composition.
///
/// An absent side renders as empty text, producing ` = <right>` or
/// `<left> = `. This is a documented quirk of the surface, kept on purpose:
/// downstream callers rely on the exact text shape, so an absent side is not
/// an error and the ` = ` stays.
pub fn eq(left: impl Into<Bound>, right: impl Into<Bound>) -> Fragment {
    Fragment::build(&["", " = ", ""], vec![left.into(), right.into()])
}

/// Pair-shaped equivalent of [`eq`].
pub fn eq_pair<L, R>(pair: (L, R)) -> Fragment
where
    L: Into<Bound>,
    R: Into<Bound>,
{
    eq(pair.0, pair.1)
}

/// Map entries to `<key> = <value>` pairs and join with `", "`.
///
/// Keys are bound as plain text parameters (use [`set`] when keys should be
/// quoted identifiers). Entries with absent values are dropped; entry order
/// follows the input's iteration order.
pub fn join_object<I, K, V>(entries: I) -> Fragment
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Bound>,
{
    join_object_with(entries, &comma())
}

/// [`join_object`] with a custom glue fragment.
pub fn join_object_with<I, K, V>(entries: I, glue: &Fragment) -> Fragment
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Bound>,
{
    let pairs = entries
        .into_iter()
        .map(|(key, value)| (key.into(), value.into()))
        .filter(|(_, value)| !value.is_absent())
        .map(|(key, value)| Bound::Fragment(eq(SqlValue::Text(key), value)));
    join_with(pairs, glue)
}

/// Build an UPDATE-style assignment list: `"key" = <value>, ...`.
///
/// Like [`join_object`] but each key renders as a quoted [`Ident`] instead of
/// a bound parameter.
///
/// ```
/// use sqlfrag::{set, raw, Bound};
///
/// let assignments = set(vec![("a", Bound::from(1)), ("b", Bound::from(raw(2)))]);
/// assert_eq!(assignments.query(), r#""a" = ?, "b" = 2"#);
/// assert_eq!(assignments.params().len(), 1);
/// ```
pub fn set<I, K, V>(entries: I) -> Fragment
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Bound>,
{
    let pairs = entries
        .into_iter()
        .map(|(key, value)| (key.into(), value.into()))
        .filter(|(_, value)| !value.is_absent())
        .map(|(key, value)| Bound::Fragment(eq(Ident::new(key), value)));
    join(pairs)
}

/// Build an insert tuple: `("key", ...) values (<value>, ...)`.
///
/// Entries with absent values are dropped first, so the identifier list and
/// the value list always stay in matching order.
///
/// ```
/// use sqlfrag::{insert, raw, Bound};
///
/// let tuple = insert(vec![("a", Bound::from(1)), ("b", Bound::from(raw(2)))]);
/// assert_eq!(tuple.query(), r#"("a", "b") values (?, 2)"#);
/// assert_eq!(tuple.params().len(), 1);
/// ```
pub fn insert<I, K, V>(entries: I) -> Fragment
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Bound>,
{
    let entries: Vec<(String, Bound)> = entries
        .into_iter()
        .map(|(key, value)| (key.into(), value.into()))
        .filter(|(_, value)| !value.is_absent())
        .collect();

    let columns = join(entries.iter().map(|(key, _)| Ident::new(key.as_str())));
    let values = join(entries.into_iter().map(|(_, value)| value));

    Fragment::build(
        &["(", ") values (", ")"],
        vec![Bound::Fragment(columns), Bound::Fragment(values)],
    )
}

/// Include a value only when `cond` holds, otherwise yield the absent marker.
///
/// `produce` is only invoked on the true branch.
pub fn when<T, F>(cond: bool, produce: F) -> Bound
where
    T: Into<Bound>,
    F: FnOnce() -> T,
{
    if cond { produce().into() } else { Bound::Absent }
}

/// [`when`] with a lazily evaluated condition.
pub fn when_lazy<C, T, F>(cond: C, produce: F) -> Bound
where
    C: FnOnce() -> bool,
    T: Into<Bound>,
    F: FnOnce() -> T,
{
    when(cond(), produce)
}

/// Pick between two value producers; exactly one of `left`/`right` runs.
pub fn branch<L, R, LT, RT>(cond: bool, left: L, right: R) -> Bound
where
    L: FnOnce() -> LT,
    R: FnOnce() -> RT,
    LT: Into<Bound>,
    RT: Into<Bound>,
{
    if cond { left().into() } else { right().into() }
}

/// [`branch`] with a lazily evaluated condition.
pub fn branch_lazy<C, L, R, LT, RT>(cond: C, left: L, right: R) -> Bound
where
    C: FnOnce() -> bool,
    L: FnOnce() -> LT,
    R: FnOnce() -> RT,
    LT: Into<Bound>,
    RT: Into<Bound>,
{
    branch(cond(), left, right)
}
