//! LaTeX AUX citation-key extraction and sub-bibliography generation.
//!
//! A LaTeX run records every `\cite` in the document as a `\citation` line
//! in the build's AUX file, and `\include`d chapters get AUX files of their
//! own, referenced via `\@input`. This crate walks that inclusion graph,
//! collects the citation keys actually used, and reconciles them against a
//! master bibliography to produce the minimal sub-bibliography a paper needs
//! to ship with, plus the list of keys the master has no entry for.
//!
//! # Architecture
//!
//! ```text
//! root path ──▶ AuxFileReader ──▶ lines ──▶ extractor ──▶ tokens
//!                    ▲                                       │
//!                    │            ┌──────────────────────────┤
//!                    │            ▼                          ▼
//!                    └── InclusionGraphWalker          citation keys
//!                        (\@input recursion,        (ordered, deduplicated)
//!                         visited-set cycle guard)           │
//!                                                            ▼
//!                              master Bibliography ──▶ KeyResolver
//!                                                            │
//!                                                            ▼
//!                                                     AuxParserResult
//! ```
//!
//! The whole parse is synchronous and single-threaded; soft failures (an
//! unreadable nested file, a key with no entry) become counters and lists in
//! the result rather than errors.
//!
//! # Example
//!
//! ```
//! use auxref::{AuxParser, BibEntry, Bibliography};
//! use std::path::Path;
//!
//! let mut master = Bibliography::new();
//! master.insert(
//!     BibEntry::new("article", "smith2020").with_field("title", "An Article"),
//! );
//!
//! let result = AuxParser::new(&master).parse(Path::new("paper.aux"));
//! if result.has_entries() {
//!     for entry in result.generated_bibliography().iter() {
//!         println!("cited: {}", entry.citation_key());
//!     }
//! } else {
//!     println!("{}", result.summary());
//! }
//! ```

pub mod bibliography;
pub mod error;
pub mod extractor;
pub mod parser;
pub mod reader;
pub mod result;

mod resolver;
mod walker;

// Re-export main types
pub use bibliography::{BibEntry, Bibliography};
pub use error::{Error, Result};
pub use parser::AuxParser;
pub use result::{AuxParserResult, AuxStats};
