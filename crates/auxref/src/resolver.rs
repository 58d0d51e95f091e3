//! Cross-referencing of extracted keys against the master bibliography.

use crate::bibliography::Bibliography;
use hashlink::LinkedHashSet;
use std::collections::VecDeque;

/// Outcome of matching the aggregated key set against the master
/// bibliography.
#[derive(Debug)]
pub(crate) struct Resolution {
    /// Entries matched by a discovered key, plus their crossref parents.
    pub(crate) generated: Bibliography,
    /// Keys with no matching entry, in first-encounter order.
    pub(crate) unresolved: Vec<String>,
    /// Keys that matched an entry directly.
    pub(crate) resolved_count: usize,
    /// Entries pulled in through `crossref` fields.
    pub(crate) crossref_count: usize,
}

/// Partition keys into resolved entries and unresolved keys.
///
/// Lookup is a direct, case-sensitive equality match. Resolved entries are
/// copied into the generated bibliography in the keys' first-encounter
/// order. After the direct pass, entries whose `crossref` field names
/// another key pull the referenced parent in as well (inproceedings papers
/// pointing at their proceedings volume, typically); parents are appended
/// after the direct entries, each at most once, chains followed. A crossref
/// target missing from the master bibliography is not an unresolved key; the
/// document never cited it.
pub(crate) fn resolve(keys: &LinkedHashSet<String>, master: &Bibliography) -> Resolution {
    let mut generated = Bibliography::new();
    let mut unresolved = Vec::new();

    for key in keys {
        match master.get(key) {
            Some(entry) => generated.insert(entry.clone()),
            None => unresolved.push(key.clone()),
        }
    }
    let resolved_count = generated.entry_count();

    let mut pending: VecDeque<String> = generated
        .iter()
        .filter_map(|entry| entry.crossref_target().map(str::to_string))
        .collect();
    let mut crossref_count = 0;
    while let Some(target) = pending.pop_front() {
        // The generated set doubles as the cycle guard for crossref chains.
        if generated.contains(&target) {
            continue;
        }
        match master.get(&target) {
            Some(parent) => {
                if let Some(next) = parent.crossref_target() {
                    pending.push_back(next.to_string());
                }
                generated.insert(parent.clone());
                crossref_count += 1;
            }
            None => {
                tracing::debug!(key = %target, "crossref target not in master bibliography");
            }
        }
    }

    Resolution {
        generated,
        unresolved,
        resolved_count,
        crossref_count,
    }
}
