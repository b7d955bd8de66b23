//! Plain text outline of a parsed deck.
//!
//! One block per slide, blocks separated by a blank line:
//!
//! ```text
//! Slide 1 [problem] Problem (confidence 100)
//!   - Onboarding takes two weeks
//!
//! Slide 2 [solution] Solution (confidence 70)
//! ```

use crate::types::{ParseResult, Slide};

/// Formatter for human-readable deck outlines.
#[derive(Debug, Clone)]
pub struct OutlineFormatter {
    /// Include each slide's verbatim content.
    include_content: bool,

    /// Include extracted bullet points.
    include_bullets: bool,
}

impl Default for OutlineFormatter {
    fn default() -> Self {
        Self {
            include_content: false,
            include_bullets: true,
        }
    }
}

impl OutlineFormatter {
    /// Create a formatter showing headings and bullet points.
    pub fn new() -> Self {
        Self::default()
    }

    /// Include each slide's verbatim content.
    pub fn with_content(mut self, include: bool) -> Self {
        self.include_content = include;
        self
    }

    /// Include extracted bullet points.
    pub fn with_bullets(mut self, include: bool) -> Self {
        self.include_bullets = include;
        self
    }

    /// Render the whole result.
    pub fn format(&self, result: &ParseResult) -> String {
        if !result.success {
            let error = result.error.as_deref().unwrap_or("unknown error");
            return format!("Parsing failed: {}", error);
        }

        let blocks: Vec<String> = result
            .slides
            .iter()
            .map(|slide| self.format_slide(slide))
            .collect();

        blocks.join("\n\n")
    }

    /// Render the whole result with a summary line and a trailing newline.
    pub fn format_with_summary(&self, result: &ParseResult) -> String {
        let body = self.format(result);
        if !result.success {
            return format!("{}\n", body);
        }

        let meta = &result.metadata;
        let summary = format!(
            "{} slides from {} pages (confidence {})",
            meta.total_slides, meta.total_pages, meta.confidence
        );

        if body.is_empty() {
            format!("{}\n", summary)
        } else {
            format!("{}\n\n{}\n", summary, body)
        }
    }

    /// Render a single slide block.
    pub fn format_slide(&self, slide: &Slide) -> String {
        let mut lines = Vec::new();

        let heading = match &slide.title {
            Some(title) => format!(
                "Slide {} [{}] {} (confidence {})",
                slide.slide_number, slide.slide_type, title, slide.metadata.confidence
            ),
            None => format!(
                "Slide {} [{}] (confidence {})",
                slide.slide_number, slide.slide_type, slide.metadata.confidence
            ),
        };
        lines.push(heading);

        if self.include_bullets {
            lines.extend(slide.bullets().iter().map(|b| format!("  - {}", b)));
        }

        if self.include_content {
            lines.extend(slide.content.lines().map(|l| format!("    {}", l)));
        }

        lines.join("\n")
    }
}
