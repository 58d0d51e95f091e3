//! Error types for AUX file access.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for auxref operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading AUX files.
///
/// These never cross the traversal boundary: the walker catches a failed
/// open, records the file as skipped, and continues. The type is public so
/// callers driving [`crate::reader::AuxFileReader`] directly can match on it.
#[derive(Error, Debug)]
pub enum Error {
    /// An AUX file could not be opened for reading.
    #[error("Could not read AUX file '{path}': {source}")]
    FileAccess {
        /// The path as it was attempted.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_file_access_display_names_the_path() {
        let err = Error::FileAccess {
            path: PathBuf::from("chapters/ch1.aux"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        let display = err.to_string();
        assert!(display.contains("chapters/ch1.aux"), "Got: {}", display);
        assert!(display.contains("no such file"), "Got: {}", display);
    }
}
