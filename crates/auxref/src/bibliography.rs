//! Minimal in-memory bibliography model.
//!
//! The parser only needs key-based lookup and insertion-order iteration, so
//! entries are stored in a [`LinkedHashMap`] keyed by citation key. Entry
//! payloads are opaque to the parser apart from the key and the `crossref`
//! field; everything else is copied verbatim into the generated
//! sub-bibliography.

use hashlink::LinkedHashMap;
use serde::{Deserialize, Serialize};

/// A single bibliography entry: an entry type, a citation key, and a set of
/// named fields in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BibEntry {
    /// Entry type, e.g. `article` or `inproceedings`.
    #[serde(rename = "type")]
    entry_type: String,

    /// The key a document cites this entry by. Case-sensitive.
    #[serde(rename = "key")]
    citation_key: String,

    /// Named fields (`author`, `title`, `crossref`, ...), insertion order
    /// preserved.
    #[serde(default)]
    fields: LinkedHashMap<String, String>,
}

impl BibEntry {
    /// Create an entry with no fields.
    pub fn new(entry_type: impl Into<String>, citation_key: impl Into<String>) -> Self {
        Self {
            entry_type: entry_type.into(),
            citation_key: citation_key.into(),
            fields: LinkedHashMap::new(),
        }
    }

    /// Builder-style field assignment.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// The key this entry is cited by.
    pub fn citation_key(&self) -> &str {
        &self.citation_key
    }

    /// The entry type, e.g. `article`.
    pub fn entry_type(&self) -> &str {
        &self.entry_type
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// The citation key of the entry this one crossrefs, if any.
    ///
    /// BibTeX's `crossref` field names a parent entry (typically the
    /// proceedings volume of a conference paper) whose fields complete this
    /// one; a sub-bibliography must carry the parent along.
    pub fn crossref_target(&self) -> Option<&str> {
        self.field("crossref")
    }
}

/// An insertion-ordered collection of [`BibEntry`] keyed by citation key.
///
/// The parser consumes the master bibliography read-only; the generated
/// sub-bibliography is built through [`Bibliography::insert`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bibliography {
    entries: LinkedHashMap<String, BibEntry>,
}

impl Bibliography {
    /// Create an empty bibliography.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a bibliography from entries, in iteration order.
    pub fn from_entries(entries: impl IntoIterator<Item = BibEntry>) -> Self {
        let mut bibliography = Self::new();
        for entry in entries {
            bibliography.insert(entry);
        }
        bibliography
    }

    /// Insert an entry under its citation key.
    ///
    /// A second insert with the same key replaces the payload but keeps the
    /// key's original position.
    pub fn insert(&mut self, entry: BibEntry) {
        self.entries.insert(entry.citation_key.clone(), entry);
    }

    /// Look up an entry by citation key. Exact, case-sensitive match.
    pub fn get(&self, citation_key: &str) -> Option<&BibEntry> {
        self.entries.get(citation_key)
    }

    /// Whether an entry exists for `citation_key`.
    pub fn contains(&self, citation_key: &str) -> bool {
        self.entries.contains_key(citation_key)
    }

    /// Number of entries.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Whether the bibliography holds any entries at all.
    pub fn has_entries(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &BibEntry> {
        self.entries.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_is_preserved() {
        let bibliography = Bibliography::from_entries([
            BibEntry::new("article", "zeta99"),
            BibEntry::new("book", "alpha01"),
            BibEntry::new("misc", "mid05"),
        ]);

        let keys: Vec<&str> = bibliography.iter().map(BibEntry::citation_key).collect();
        assert_eq!(keys, vec!["zeta99", "alpha01", "mid05"]);
    }

    #[test]
    fn test_reinsert_replaces_without_duplicating() {
        let mut bibliography = Bibliography::new();
        bibliography.insert(BibEntry::new("article", "smith2020"));
        bibliography.insert(BibEntry::new("book", "smith2020"));

        assert_eq!(bibliography.entry_count(), 1);
        assert_eq!(bibliography.get("smith2020").unwrap().entry_type(), "book");
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let mut bibliography = Bibliography::new();
        bibliography.insert(BibEntry::new("article", "Smith2020"));

        assert!(bibliography.contains("Smith2020"));
        assert!(!bibliography.contains("smith2020"));
    }

    #[test]
    fn test_crossref_target() {
        let paper = BibEntry::new("inproceedings", "jones2021")
            .with_field("title", "A Paper")
            .with_field("crossref", "icse2021");
        assert_eq!(paper.crossref_target(), Some("icse2021"));

        let standalone = BibEntry::new("article", "smith2020");
        assert_eq!(standalone.crossref_target(), None);
    }

    #[test]
    fn test_entry_deserializes_from_json() {
        let entry: BibEntry = serde_json::from_str(
            r#"{
                "type": "article",
                "key": "smith2020",
                "fields": {"author": "Smith, John", "year": "2020"}
            }"#,
        )
        .unwrap();

        assert_eq!(entry.citation_key(), "smith2020");
        assert_eq!(entry.field("author"), Some("Smith, John"));
        assert_eq!(entry.field("volume"), None);
    }
}
