//! Slide segmentation and slide type classification for text extracted
//! from pitch deck PDFs.
//!
//! The entry point is [`parse_document`] (or [`DeckParser`] for a
//! configured parser): it takes the full extracted text and the page count
//! and returns a [`ParseResult`] with one typed, titled and bulleted
//! [`Slide`] per detected segment.

pub mod bullets;
pub mod classify;
pub mod confidence;
pub mod error;
pub mod extraction;
pub mod normalize;
pub mod outline;
pub mod parser;
pub mod splitter;
pub mod title;
pub mod types;

pub use error::{Error, Result};
pub use extraction::{ExtractedDocument, PlainTextExtractor, SourceFormat, TextExtractor};
pub use normalize::TextNormalizer;
pub use outline::OutlineFormatter;
pub use parser::DeckParser;
pub use splitter::{SectionSplitter, Segmentation};
pub use types::{ParseMetadata, ParseResult, Slide, SlideMetadata, SlideType, SplitStrategy};

/// Parse extracted deck text with the default parser.
pub fn parse_document(text: &str, page_count: usize) -> ParseResult {
    DeckParser::new().parse(text, page_count)
}
