//! Depth-first traversal of the `\@input` inclusion graph.

use crate::extractor::{self, AuxToken};
use crate::reader::AuxFileReader;
use hashlink::LinkedHashSet;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Mutable traversal state for one top-level parse.
///
/// Created fresh per parse and discarded once the result is assembled; it
/// never escapes the facade.
#[derive(Debug, Default)]
pub(crate) struct ParseTrace {
    /// Canonical paths already walked; guards cycles and repeated includes.
    visited: HashSet<PathBuf>,
    /// Citation keys in first-encounter order, later duplicates dropped.
    pub(crate) keys: LinkedHashSet<String>,
    /// Files read to completion.
    pub(crate) files_parsed: usize,
    /// Files skipped because they could not be opened.
    pub(crate) files_skipped: usize,
}

impl ParseTrace {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Record a key, keeping its first-occurrence position.
    fn record_key(&mut self, key: String) {
        if !self.keys.contains(&key) {
            self.keys.insert(key);
        }
    }
}

/// Walk one AUX file, recursing into `\@input` references at the point they
/// appear (depth-first, line by line).
///
/// A file already walked is skipped silently, which both breaks `\@input`
/// cycles and bounds recursion depth by the number of distinct files in the
/// graph. An unreadable file increments the skip counter and the traversal
/// continues; a single missing include never fails the whole parse.
pub(crate) fn walk(path: &Path, trace: &mut ParseTrace) {
    // Canonicalization resolves symlinks and relative segments so the same
    // file reached by two spellings is detected as one. A nonexistent file
    // cannot be canonicalized; its literal path still guards re-walking.
    let canonical = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    if !trace.visited.insert(canonical) {
        tracing::debug!(path = %path.display(), "AUX file already visited, skipping");
        return;
    }

    let reader = match AuxFileReader::open(path) {
        Ok(reader) => reader,
        Err(error) => {
            tracing::warn!(path = %path.display(), %error, "Skipping unreadable AUX file");
            trace.files_skipped += 1;
            return;
        }
    };

    let parent = path.parent().map(Path::to_path_buf).unwrap_or_default();
    for line in reader {
        for token in extractor::extract_tokens(&line) {
            match token {
                AuxToken::Citation(key) => trace.record_key(key),
                AuxToken::Input(nested) => {
                    // `\@input` paths are relative to the file that names
                    // them, not to the process working directory.
                    walk(&parent.join(nested), trace);
                }
            }
        }
    }
    trace.files_parsed += 1;
}
