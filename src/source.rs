//! Input stream handling for plain and gzip-compressed manual pages.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::GzDecoder;

use crate::error::{ParseError, Result};

/// Returns `true` when the path carries the compressed-page suffix.
///
/// System manual pages are commonly installed as `cp.1.gz`; the suffix alone
/// selects transparent decompression.
pub fn is_compressed(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "gz")
}

/// Opens a manual page as a buffered line source.
///
/// Compressed pages are wrapped in a [`GzDecoder`]; the gzip header is read
/// lazily, so a corrupt payload surfaces as an I/O error on the first read
/// rather than here. Open failures are reported immediately with the path.
pub fn open(path: &Path) -> Result<Box<dyn BufRead>> {
    let file = File::open(path).map_err(|source| ParseError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    if is_compressed(path) {
        Ok(Box::new(BufReader::new(GzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_is_compressed_matches_gz_suffix_only() {
        assert!(is_compressed(Path::new("/usr/share/man/man1/cp.1.gz")));
        assert!(!is_compressed(Path::new("/usr/share/man/man1/cp.1")));
        assert!(!is_compressed(Path::new("cp.1.gzip")));
    }

    #[test]
    fn test_open_missing_path_reports_open_error() {
        let path = PathBuf::from("/nonexistent/manpage.1");
        let err = open(&path).err().expect("open should fail");
        assert!(matches!(err, ParseError::Open { .. }));
    }
}
