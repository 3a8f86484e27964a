// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::hash::Hash;
use std::sync::Arc;

use indexmap::IndexMap;

/// Collapses items with the same key. The last item wins but keeps the position of the first.
pub(super) fn dedup_by_key<T, K, F>(items: impl IntoIterator<Item = T>, key: F) -> Vec<T>
where
    K: Hash + Eq,
    F: Fn(&T) -> K,
{
    let mut unique = IndexMap::new();
    for item in items {
        unique.insert(key(&item), item);
    }
    unique.into_values().collect()
}

/// Merges `changes` into `existing`. Changed items replace the existing item with the same key
/// in place, unknown items are appended. Untouched items are kept as they are.
pub(super) fn merge_by_key<T, K, F>(
    existing: Option<&Vec<Arc<T>>>,
    changes: &[Arc<T>],
    key: F,
) -> Vec<Arc<T>>
where
    K: Hash + Eq,
    F: Fn(&T) -> &K,
{
    let mut changes = changes
        .iter()
        .map(|item| (key(item), item))
        .collect::<IndexMap<_, _>>();

    let mut merged = existing
        .map(|items| {
            items
                .iter()
                .map(|item| match changes.shift_remove(key(item)) {
                    Some(changed) => changed.clone(),
                    None => item.clone(),
                })
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();

    merged.extend(changes.into_values().cloned());
    merged
}
