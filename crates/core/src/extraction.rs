//! Boundary to the upstream text extractor.
//!
//! Decoding PDF binaries is not done here. A backend hands the parser the
//! full document text, its page count and the source file size.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Text and page count produced by a text extraction backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedDocument {
    /// Full document text; pages may be separated by form feeds.
    pub text: String,

    /// Number of pages in the source document.
    pub page_count: usize,

    /// Size of the source file in bytes.
    pub file_size: u64,
}

/// Trait for text extraction backends.
pub trait TextExtractor: Send + Sync {
    /// Extract the text of a document from its raw bytes.
    fn extract(&self, bytes: &[u8]) -> Result<ExtractedDocument>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;

    /// Read a file from disk and extract its text.
    fn extract_file(&self, path: &Path) -> Result<ExtractedDocument> {
        let bytes = std::fs::read(path)?;
        log::debug!("Read {} bytes from {}", bytes.len(), path.display());
        self.extract(&bytes)
    }
}

/// The format of a source file handed to the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceFormat {
    /// A PDF binary; needs an external text extractor first.
    Pdf,
    /// Already extracted plain text.
    Text,
}

impl SourceFormat {
    /// Detect format from file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "txt" | "text" => Some(Self::Text),
            _ => None,
        }
    }

    /// Detect format from file magic bytes.
    ///
    /// Only PDFs have a signature; anything else is undetermined.
    pub fn from_magic(bytes: &[u8]) -> Option<Self> {
        if bytes.starts_with(b"%PDF-") {
            return Some(Self::Pdf);
        }

        None
    }
}

/// Backend for text that was already extracted, e.g. by `pdftotext`.
///
/// Pages are the non-blank form-feed separated spans of the text.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextExtractor;

impl PlainTextExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<ExtractedDocument> {
        if SourceFormat::from_magic(bytes) == Some(SourceFormat::Pdf) {
            return Err(Error::UnsupportedFormat(
                "binary PDF input; extract its text first (for example with pdftotext)"
                    .to_string(),
            ));
        }

        let file_size = bytes.len() as u64;
        let body = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
        let text = String::from_utf8_lossy(body).into_owned();
        let page_count = count_pages(&text);

        log::debug!(
            "Extracted {} bytes of text, {} pages",
            text.len(),
            page_count
        );

        Ok(ExtractedDocument {
            text,
            page_count,
            file_size,
        })
    }

    fn backend_name(&self) -> &str {
        "plain-text"
    }
}

/// Count non-blank form-feed separated pages, at least 1.
fn count_pages(text: &str) -> usize {
    text.split('\x0c')
        .filter(|page| !page.trim().is_empty())
        .count()
        .max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(SourceFormat::from_extension("PDF"), Some(SourceFormat::Pdf));
        assert_eq!(SourceFormat::from_extension("txt"), Some(SourceFormat::Text));
        assert_eq!(SourceFormat::from_extension("pptx"), None);
    }

    #[test]
    fn test_format_from_magic() {
        assert_eq!(SourceFormat::from_magic(b"%PDF-1.7\n"), Some(SourceFormat::Pdf));
        assert_eq!(SourceFormat::from_magic(b"Problem"), None);
        assert_eq!(SourceFormat::from_magic(b""), None);
    }

    #[test]
    fn test_plain_text_pages() {
        let doc = PlainTextExtractor::new()
            .extract(b"Problem\x0cSolution\x0cTeam\x0c")
            .unwrap();

        assert_eq!(doc.page_count, 3);
        assert_eq!(doc.text, "Problem\x0cSolution\x0cTeam\x0c");
        assert_eq!(doc.file_size, 22);
    }

    #[test]
    fn test_plain_text_without_form_feeds_is_one_page() {
        let doc = PlainTextExtractor::new().extract(b"").unwrap();
        assert_eq!(doc.page_count, 1);
        assert_eq!(doc.file_size, 0);
    }

    #[test]
    fn test_bom_stripped() {
        let doc = PlainTextExtractor::new().extract(b"\xEF\xBB\xBFTeam").unwrap();
        assert_eq!(doc.text, "Team");
        assert_eq!(doc.file_size, 7);
    }

    #[test]
    fn test_pdf_rejected() {
        let err = PlainTextExtractor::new()
            .extract(b"%PDF-1.4 binary")
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(_)));
    }

    #[test]
    fn test_extract_missing_file() {
        let err = PlainTextExtractor::new()
            .extract_file(Path::new("/nonexistent/deck-core/deck.txt"))
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().starts_with("Failed to read input"));
    }

    #[test]
    fn test_backend_name() {
        assert_eq!(PlainTextExtractor::new().backend_name(), "plain-text");
    }
}
