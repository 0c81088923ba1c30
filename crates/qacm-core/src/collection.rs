//! Identifier-based collection helpers used by selection controls.

use std::borrow::Cow;
use std::collections::HashSet;

use crate::domain::Identified;

/// Two optional entities refer to the same record.
///
/// Comparison is by identifier, never by value or address, so a stale copy of
/// a record still matches the fresh one. Two transient entities never match.
pub fn same_identity<A, B>(a: Option<&A>, b: Option<&B>) -> bool
where
    A: Identified + ?Sized,
    B: Identified + ?Sized,
{
    match (a.and_then(|a| a.id()), b.and_then(|b| b.id())) {
        (Some(left), Some(right)) => left == right,
        _ => false,
    }
}

/// Return `collection` extended with every candidate whose identifier it does
/// not already contain.
///
/// - `None` candidates are skipped, so an unset relation can be passed as is.
/// - Transient candidates (no id) are skipped as well; like [`same_identity`],
///   they never match anything and so are never "missing".
/// - Existing order is kept; new items are appended in candidate order.
/// - A candidate repeated in `candidates` is added once.
/// - When nothing is added the original slice comes back as
///   [`Cow::Borrowed`], so callers can skip replacing their collection.
pub fn add_to_collection_if_missing<'a, 'c, T, I>(
    collection: &'a [T],
    candidates: I,
) -> Cow<'a, [T]>
where
    T: Identified + Clone + 'c,
    I: IntoIterator<Item = Option<&'c T>>,
{
    let mut seen: HashSet<&str> = collection.iter().filter_map(|item| item.id()).collect();
    let mut added: Vec<T> = Vec::new();

    for candidate in candidates.into_iter().flatten() {
        let Some(id) = candidate.id() else {
            continue;
        };
        if seen.insert(id) {
            added.push(candidate.clone());
        }
    }

    if added.is_empty() {
        return Cow::Borrowed(collection);
    }

    let mut merged = Vec::with_capacity(collection.len() + added.len());
    merged.extend_from_slice(collection);
    merged.extend(added);
    Cow::Owned(merged)
}
