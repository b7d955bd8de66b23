//! Domain types for representing parsed pitch deck content.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic category of a slide.
///
/// The declaration order is the tie-break order used by the classifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SlideType {
    Title,
    Problem,
    Solution,
    Market,
    BusinessModel,
    Traction,
    Team,
    Financials,
    Funding,
    Competition,
    #[default]
    Other,
}

impl SlideType {
    /// The kebab-case identifier used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            SlideType::Title => "title",
            SlideType::Problem => "problem",
            SlideType::Solution => "solution",
            SlideType::Market => "market",
            SlideType::BusinessModel => "business-model",
            SlideType::Traction => "traction",
            SlideType::Team => "team",
            SlideType::Financials => "financials",
            SlideType::Funding => "funding",
            SlideType::Competition => "competition",
            SlideType::Other => "other",
        }
    }
}

impl fmt::Display for SlideType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-slide extraction metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideMetadata {
    /// Whitespace-separated token count of the slide content.
    pub word_count: usize,

    /// Content mentions images or figures.
    pub has_images: bool,

    /// Content mentions charts or chart-like data.
    pub has_charts: bool,

    /// Structural extraction confidence, 0-100.
    pub confidence: u8,
}

/// A single slide recovered from the document text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    /// Stable identifier, `slide-<n>`.
    pub id: String,

    /// 1-based position in the document.
    pub slide_number: usize,

    /// Classified category.
    #[serde(rename = "type")]
    pub slide_type: SlideType,

    /// First title-like line among the first few lines, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// The trimmed segment text, verbatim.
    pub content: String,

    /// Bullet and numbered list items in source order. Never `Some(vec![])`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bullet_points: Option<Vec<String>>,

    pub metadata: SlideMetadata,
}

impl Slide {
    /// Bullet points as a slice, empty when there are none.
    pub fn bullets(&self) -> &[String] {
        self.bullet_points.as_deref().unwrap_or(&[])
    }
}

/// How the section splitter arrived at its segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SplitStrategy {
    /// Split on form-feed page breaks.
    FormFeed,
    /// Split on runs of blank lines.
    BlankLines,
    /// Split before lines that look like titles.
    TitleLines,
    /// Equal-sized word chunks, one per page.
    EvenChunks,
}

impl fmt::Display for SplitStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SplitStrategy::FormFeed => "form-feed",
            SplitStrategy::BlankLines => "blank-lines",
            SplitStrategy::TitleLines => "title-lines",
            SplitStrategy::EvenChunks => "even-chunks",
        };
        f.write_str(name)
    }
}

/// Document-level metadata, present on success and failure alike.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseMetadata {
    pub total_pages: usize,
    pub total_slides: usize,

    /// Wall-clock processing time in milliseconds.
    pub processing_time: u64,

    /// Rounded mean of per-slide confidences, 0 without slides.
    pub confidence: u8,

    /// Size of the source file in bytes, 0 when unknown.
    pub file_size: u64,

    pub total_words: usize,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub split_strategy: Option<SplitStrategy>,
}

/// Outcome of parsing one document.
///
/// Build it with [`ParseResult::success`] or [`ParseResult::failure`] so that
/// `success`, `slides` and `error` stay consistent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResult {
    pub success: bool,
    pub slides: Vec<Slide>,
    pub metadata: ParseMetadata,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ParseResult {
    /// A successful result. `total_slides` and `confidence` are derived from
    /// the slides.
    pub fn success(slides: Vec<Slide>, mut metadata: ParseMetadata) -> Self {
        metadata.total_slides = slides.len();
        metadata.confidence = mean_confidence(&slides);
        Self {
            success: true,
            slides,
            metadata,
            error: None,
        }
    }

    /// A failed result with no slides.
    pub fn failure(error: impl Into<String>, mut metadata: ParseMetadata) -> Self {
        metadata.total_slides = 0;
        metadata.confidence = 0;
        metadata.split_strategy = None;
        Self {
            success: false,
            slides: Vec::new(),
            metadata,
            error: Some(error.into()),
        }
    }
}

/// Rounded arithmetic mean of slide confidences.
fn mean_confidence(slides: &[Slide]) -> u8 {
    if slides.is_empty() {
        return 0;
    }
    let sum: u32 = slides.iter().map(|s| u32::from(s.metadata.confidence)).sum();
    let mean = f64::from(sum) / slides.len() as f64;
    mean.round().clamp(0.0, 100.0) as u8
}
