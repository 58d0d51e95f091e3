//! Line-oriented reading of a single AUX file.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Lazily yields the lines of one AUX file.
///
/// The sequence is finite and not restartable; re-reading requires a fresh
/// [`AuxFileReader::open`]. Each line is decoded independently with lossy
/// UTF-8 conversion, so stray non-UTF-8 bytes (legacy `inputenc` artifacts
/// are common in AUX files) cannot abort the parse. The underlying handle is
/// released when the reader is dropped.
pub struct AuxFileReader {
    reader: BufReader<File>,
    buf: Vec<u8>,
}

impl AuxFileReader {
    /// Open an AUX file for reading.
    ///
    /// A missing or unreadable file is reported as [`Error::FileAccess`]
    /// carrying the attempted path; the caller decides whether that aborts
    /// anything (the traversal layer treats it as a skipped file).
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| Error::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            reader: BufReader::new(file),
            buf: Vec::new(),
        })
    }
}

impl Iterator for AuxFileReader {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                if self.buf.last() == Some(&b'\n') {
                    self.buf.pop();
                }
                if self.buf.last() == Some(&b'\r') {
                    self.buf.pop();
                }
                Some(String::from_utf8_lossy(&self.buf).into_owned())
            }
            // A read failure mid-file ends the sequence; every complete line
            // before the failure has already been yielded.
            Err(_) => None,
        }
    }
}
