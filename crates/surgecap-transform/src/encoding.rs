//! Feed decoding.
//!
//! Snapshots are UTF-8 as of mid-2020, but older exports arrive as
//! WINDOWS-1252. The raw bytes are decoded up front (1252 is a total
//! single-byte encoding and never fails) and records are then streamed
//! from the decoded text; no row table is ever materialized.

use std::path::Path;

use encoding_rs::WINDOWS_1252;

use crate::error::{Result, TransformError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedEncoding {
    Utf8,
    Windows1252,
}

/// Read a feed file, trying UTF-8 first and falling back to WINDOWS-1252.
/// A leading byte-order mark is dropped.
pub fn read_feed(path: &Path) -> Result<(String, FeedEncoding)> {
    let bytes = std::fs::read(path).map_err(|source| TransformError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let (text, encoding) = match String::from_utf8(bytes) {
        Ok(text) => (text, FeedEncoding::Utf8),
        Err(err) => {
            let (decoded, _, _) = WINDOWS_1252.decode(err.as_bytes());
            (decoded.into_owned(), FeedEncoding::Windows1252)
        }
    };
    let text = match text.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => text,
    };
    Ok((text, encoding))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn utf8_reads_as_is() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "HospitalName\nCafé General\n").unwrap();
        let (text, encoding) = read_feed(file.path()).unwrap();
        assert_eq!(encoding, FeedEncoding::Utf8);
        assert!(text.contains("Café General"));
    }

    #[test]
    fn windows_1252_falls_back() {
        let mut file = NamedTempFile::new().unwrap();
        // "Café" with 0xE9 is invalid UTF-8 but valid WINDOWS-1252.
        file.write_all(b"HospitalName\nCaf\xe9 General\n").unwrap();
        let (text, encoding) = read_feed(file.path()).unwrap();
        assert_eq!(encoding, FeedEncoding::Windows1252);
        assert!(text.contains("Café General"));
    }

    #[test]
    fn utf8_bom_is_dropped() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"\xef\xbb\xbfHospitalName\n").unwrap();
        let (text, _) = read_feed(file.path()).unwrap();
        assert!(text.starts_with("HospitalName"));
    }
}
