//! The immutable outcome of one AUX parse.

use crate::bibliography::Bibliography;
use serde::Serialize;

/// File and key statistics for one parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AuxStats {
    /// AUX files read to completion.
    pub files_parsed: usize,
    /// AUX files skipped because they could not be opened.
    pub files_skipped: usize,
    /// Distinct citation keys found across the inclusion graph.
    pub keys_found: usize,
    /// Keys matched to a master-bibliography entry.
    pub keys_resolved: usize,
    /// Entries included because a resolved entry crossrefs them.
    pub crossref_entries: usize,
    /// Entry count of the master bibliography at parse time.
    pub master_entries: usize,
}

/// Result of parsing an AUX inclusion graph against a master bibliography.
///
/// Immutable after construction. Every condition the parse tolerated
/// (unreadable files, unmatched keys, an empty document) is represented
/// here as data rather than as an error: a parse that resolves nothing is a
/// valid outcome, detected via [`AuxParserResult::has_entries`].
#[derive(Debug, Clone, PartialEq)]
pub struct AuxParserResult {
    generated_bibliography: Bibliography,
    unresolved_keys: Vec<String>,
    stats: AuxStats,
}

impl AuxParserResult {
    pub(crate) fn new(
        generated_bibliography: Bibliography,
        unresolved_keys: Vec<String>,
        stats: AuxStats,
    ) -> Self {
        Self {
            generated_bibliography,
            unresolved_keys,
            stats,
        }
    }

    /// The sub-bibliography of entries actually cited, in first-encounter
    /// order, crossref parents appended last.
    pub fn generated_bibliography(&self) -> &Bibliography {
        &self.generated_bibliography
    }

    /// Consume the result, keeping only the generated sub-bibliography.
    pub fn into_generated_bibliography(self) -> Bibliography {
        self.generated_bibliography
    }

    /// Keys that matched no master entry, in first-encounter order.
    pub fn unresolved_keys(&self) -> &[String] {
        &self.unresolved_keys
    }

    /// File and key statistics.
    pub fn stats(&self) -> AuxStats {
        self.stats
    }

    /// Whether any entry made it into the generated bibliography.
    pub fn has_entries(&self) -> bool {
        self.generated_bibliography.has_entries()
    }

    /// Short human-readable summary: counts only, one per line.
    pub fn summary(&self) -> String {
        format!(
            "keys in master bibliography: {}\n\
             files parsed: {}\n\
             files skipped: {}\n\
             citation keys found: {}\n\
             keys resolved: {}\n\
             keys not found: {}\n\
             crossref entries included: {}",
            self.stats.master_entries,
            self.stats.files_parsed,
            self.stats.files_skipped,
            self.stats.keys_found,
            self.stats.keys_resolved,
            self.unresolved_keys.len(),
            self.stats.crossref_entries,
        )
    }

    /// [`AuxParserResult::summary`] plus the unresolved keys, one per line.
    pub fn detailed_summary(&self) -> String {
        let mut out = self.summary();
        if !self.unresolved_keys.is_empty() {
            out.push_str("\n\nunresolved keys:");
            for key in &self.unresolved_keys {
                out.push('\n');
                out.push_str(key);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bibliography::BibEntry;

    fn sample_result() -> AuxParserResult {
        let generated = Bibliography::from_entries([
            BibEntry::new("article", "k1"),
            BibEntry::new("article", "k3"),
        ]);
        AuxParserResult::new(
            generated,
            vec!["k2".to_string(), "k4".to_string()],
            AuxStats {
                files_parsed: 2,
                files_skipped: 1,
                keys_found: 4,
                keys_resolved: 2,
                crossref_entries: 0,
                master_entries: 10,
            },
        )
    }

    #[test]
    fn test_summary_reports_all_counts() {
        let summary = sample_result().summary();
        assert!(
            summary.contains("keys in master bibliography: 10"),
            "Got: {}",
            summary
        );
        assert!(summary.contains("files parsed: 2"), "Got: {}", summary);
        assert!(summary.contains("files skipped: 1"), "Got: {}", summary);
        assert!(
            summary.contains("citation keys found: 4"),
            "Got: {}",
            summary
        );
        assert!(summary.contains("keys resolved: 2"), "Got: {}", summary);
        assert!(summary.contains("keys not found: 2"), "Got: {}", summary);
        // The short form never lists individual keys.
        assert!(!summary.contains("k2"), "Got: {}", summary);
    }

    #[test]
    fn test_detailed_summary_lists_unresolved_keys() {
        let detailed = sample_result().detailed_summary();
        assert!(detailed.contains("unresolved keys:\nk2\nk4"), "Got: {}", detailed);
    }

    #[test]
    fn test_detailed_summary_without_unresolved_keys_is_the_summary() {
        let result = AuxParserResult::new(Bibliography::new(), Vec::new(), AuxStats::default());
        assert_eq!(result.detailed_summary(), result.summary());
    }

    #[test]
    fn test_has_entries() {
        assert!(sample_result().has_entries());
        let empty = AuxParserResult::new(Bibliography::new(), Vec::new(), AuxStats::default());
        assert!(!empty.has_entries());
    }
}
