//! The parse facade tying reader, extractor, walker, and resolver together.

use crate::bibliography::Bibliography;
use crate::resolver;
use crate::result::{AuxParserResult, AuxStats};
use crate::walker::{self, ParseTrace};
use std::path::Path;

/// Parses AUX inclusion graphs against a fixed master bibliography.
///
/// This is the single entry point external callers use; the reader,
/// extractor, walker, and resolver behind it are implementation detail. The
/// master bibliography is borrowed read-only and never mutated.
pub struct AuxParser<'a> {
    master: &'a Bibliography,
}

impl<'a> AuxParser<'a> {
    /// Create a parser that resolves keys against `master`.
    pub fn new(master: &'a Bibliography) -> Self {
        Self { master }
    }

    /// Parse the AUX file at `root` and every file it transitively
    /// `\@input`s, and cross-reference the discovered citation keys.
    ///
    /// This never fails: unreadable files, the root included, are recorded
    /// in the statistics. An unreadable root yields a result with zero files
    /// parsed, one file skipped, and an empty generated bibliography, which
    /// callers detect through [`AuxParserResult::has_entries`] and
    /// [`AuxParserResult::stats`].
    pub fn parse(&self, root: &Path) -> AuxParserResult {
        tracing::debug!(root = %root.display(), "Parsing AUX inclusion graph");
        let mut trace = ParseTrace::new();
        walker::walk(root, &mut trace);

        let resolution = resolver::resolve(&trace.keys, self.master);
        let stats = AuxStats {
            files_parsed: trace.files_parsed,
            files_skipped: trace.files_skipped,
            keys_found: trace.keys.len(),
            keys_resolved: resolution.resolved_count,
            crossref_entries: resolution.crossref_count,
            master_entries: self.master.entry_count(),
        };
        tracing::debug!(?stats, "AUX parse finished");

        AuxParserResult::new(resolution.generated, resolution.unresolved, stats)
    }
}
