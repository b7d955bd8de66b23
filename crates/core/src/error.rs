//! Error types for pitch deck slide extraction.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while turning extracted text into slides.
///
/// None of these cross [`crate::parse_document`]: the document parser turns
/// them into a failed [`crate::ParseResult`] instead.
#[derive(Error, Debug)]
pub enum Error {
    /// The extracted text is empty or whitespace-only.
    #[error("No text content found in PDF. The file might be image-based or corrupted.")]
    EmptyInput,

    /// The page count reported by the extractor is unusable.
    #[error("Invalid page count: {0} (expected at least 1)")]
    InvalidPageCount(usize),

    /// The input format is not supported or could not be detected.
    #[error("Unsupported or unrecognized input format: {0}")]
    UnsupportedFormat(String),

    /// Failed to open or read the input.
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),
}
