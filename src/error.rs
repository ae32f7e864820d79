//! Error types for manual-page parsing.
//!
//! Only stream setup and I/O can fail; malformed roff markup never produces
//! an error (see the crate docs on permissive parsing).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while opening or scanning a manual page.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The manual page could not be opened.
    #[error("failed to open manual page {}: {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },

    /// Reading from a plain-text page failed mid-scan.
    #[error("failed to read manual page {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    /// The page carries the gzip suffix but did not decompress.
    #[error("failed to decompress manual page {}: {source}", .path.display())]
    Decompress { path: PathBuf, source: io::Error },
}

/// Convenience alias for results with [`ParseError`].
pub type Result<T> = std::result::Result<T, ParseError>;
