//! Per-line extraction of citation and file-inclusion macros.
//!
//! AUX files emit one macro invocation per line, so extraction is a pure
//! per-line scan with no cross-line state. Only `\citation`, biblatex's
//! `\abx@aux@cite`, and `\@input` are significant; every other line,
//! including malformed macro calls, yields no tokens.

use regex::Regex;
use std::sync::LazyLock;

/// A token extracted from one line of AUX text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuxToken {
    /// A citation key declared by `\citation{...}` or `\abx@aux@cite{...}`.
    Citation(String),
    /// A nested AUX file referenced by `\@input{...}`, exactly as written.
    Input(String),
}

/// Matches a citation macro: `\citation{...}`, `\abx@aux@cite{...}`, or
/// `\abx@aux@cite{<segment>}{...}`.
///
/// Pattern breakdown:
/// - `\\(?:citation|abx@aux@cite(?:\{\d+\})?)` - the macro name; biblatex
///   optionally writes a numeric refsegment group before the key group
/// - `\{([^{}]+)\}` - the brace-delimited argument (capture 1); `[^{}]+`
///   rejects empty arguments and stops at unbalanced braces
static CITATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\\(?:citation|abx@aux@cite(?:\{\d+\})?)\{([^{}]+)\}")
        .expect("Invalid citation macro pattern")
});

/// Matches a nested-file macro: `\@input{...}`. Capture 1 is the path as
/// written, untrimmed.
static INPUT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\@input\{([^{}]+)\}").expect("Invalid input macro pattern"));

/// Scan one line of AUX text for a recognized macro invocation.
///
/// At most one invocation is taken per line (the first match), matching the
/// grammar AUX files are generated with. A `\citation` argument may join
/// several keys with commas; each non-empty, whitespace-trimmed piece
/// becomes its own [`AuxToken::Citation`], in left-to-right order.
pub fn extract_tokens(line: &str) -> Vec<AuxToken> {
    if let Some(caps) = CITATION_PATTERN.captures(line) {
        return caps[1]
            .split(',')
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(|key| AuxToken::Citation(key.to_string()))
            .collect();
    }

    if let Some(caps) = INPUT_PATTERN.captures(line) {
        return vec![AuxToken::Input(caps[1].to_string())];
    }

    Vec::new()
}
