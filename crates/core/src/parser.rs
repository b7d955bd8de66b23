//! Document parser: turns extracted deck text into classified slides.

use crate::bullets::extract_bullet_points;
use crate::classify::{classify_slide, mentions_charts, mentions_images};
use crate::confidence::estimate_confidence;
use crate::error::{Error, Result};
use crate::extraction::ExtractedDocument;
use crate::normalize::{non_empty_lines, word_count, TextNormalizer};
use crate::splitter::{Segmentation, SectionSplitter};
use crate::title::extract_title;
use crate::types::{ParseMetadata, ParseResult, Slide, SlideMetadata};
use std::time::Instant;

/// Parser for text extracted from a pitch deck.
///
/// Parsing never fails with an `Err`: every problem is reported as a
/// [`ParseResult`] with `success == false`.
#[derive(Debug, Clone, Default)]
pub struct DeckParser {
    normalizer: TextNormalizer,
    splitter: SectionSplitter,
}

impl DeckParser {
    /// Create a parser with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether Unicode compatibility characters are folded before parsing.
    pub fn with_unicode_folding(mut self, fold: bool) -> Self {
        self.normalizer = self.normalizer.with_compatibility_folding(fold);
        self
    }

    /// Parse raw document text with its page count.
    pub fn parse(&self, text: &str, page_count: usize) -> ParseResult {
        self.parse_with_size(text, page_count, 0)
    }

    /// Parse the output of an upstream text extractor.
    pub fn parse_extracted(&self, document: &ExtractedDocument) -> ParseResult {
        self.parse_with_size(&document.text, document.page_count, document.file_size)
    }

    fn parse_with_size(&self, text: &str, page_count: usize, file_size: u64) -> ParseResult {
        let start = Instant::now();

        let mut metadata = ParseMetadata {
            total_pages: page_count,
            total_slides: 0,
            processing_time: 0,
            confidence: 0,
            file_size,
            total_words: 0,
            split_strategy: None,
        };

        let outcome = self.try_parse(text, page_count, &mut metadata);
        metadata.processing_time = elapsed_ms(start);

        match outcome {
            Ok(slides) => {
                log::debug!(
                    "Parsed {} slides from {} pages in {} ms",
                    slides.len(),
                    page_count,
                    metadata.processing_time
                );
                ParseResult::success(slides, metadata)
            }
            Err(e) => {
                log::warn!("Deck parsing failed: {}", e);
                ParseResult::failure(e.to_string(), metadata)
            }
        }
    }

    fn try_parse(
        &self,
        text: &str,
        page_count: usize,
        metadata: &mut ParseMetadata,
    ) -> Result<Vec<Slide>> {
        let normalized = self.normalizer.normalize(text);
        if normalized.trim().is_empty() {
            return Err(Error::EmptyInput);
        }
        if page_count == 0 {
            return Err(Error::InvalidPageCount(page_count));
        }

        metadata.total_words = word_count(&normalized);

        // Non-blank text always yields at least one segment
        let Segmentation { strategy, segments } = self.splitter.split(&normalized, page_count);
        metadata.split_strategy = Some(strategy);

        let slides = segments
            .iter()
            .enumerate()
            .map(|(idx, segment)| build_slide(segment, idx + 1))
            .collect();

        Ok(slides)
    }
}

/// Build one slide from a segment.
///
/// `slide_number` is 1-based.
pub fn build_slide(segment: &str, slide_number: usize) -> Slide {
    let content = segment.trim();
    let lines = non_empty_lines(content);

    let title = extract_title(&lines);
    let bullet_points = extract_bullet_points(content);
    let slide_type = classify_slide(content, title.as_deref());
    let confidence = estimate_confidence(&lines, title.as_deref(), &bullet_points, slide_type);

    log::debug!(
        "Slide {}: type={} title={:?} bullets={} confidence={}",
        slide_number,
        slide_type,
        title,
        bullet_points.len(),
        confidence
    );

    Slide {
        id: format!("slide-{}", slide_number),
        slide_number,
        slide_type,
        title,
        content: content.to_string(),
        bullet_points: if bullet_points.is_empty() {
            None
        } else {
            Some(bullet_points)
        },
        metadata: SlideMetadata {
            word_count: word_count(content),
            has_images: mentions_images(content),
            has_charts: mentions_charts(content),
            confidence,
        },
    }
}

fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}
