//! Segmentation of document text into per-slide blocks.
//!
//! Extracted PDF text rarely carries reliable slide boundaries, so the
//! splitter tries a cascade of strategies in order and keeps the first one
//! that yields enough segments for the page count:
//!
//! 1. form-feed page breaks
//! 2. runs of two or more blank lines
//! 3. lines that look like titles
//!
//! If none is sufficient the segmentation with the most segments wins, ties
//! going to the earlier stage. A later stage does not overwrite an earlier
//! result just because it ran last. When even that is degenerate (no segments, or a single one for a multi-page
//! document) the words are dealt into one equal chunk per page.

use crate::title::looks_like_title;
use crate::types::SplitStrategy;
use regex::Regex;
use std::sync::LazyLock;

/// Two or more blank lines, tolerating stray whitespace on them.
static BLANK_LINES_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n\s*\n").unwrap());

/// A split stage; `None` when the stage does not apply to the text.
type Stage = fn(&str) -> Option<Vec<String>>;

/// Ordered segments of a document together with how they were found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segmentation {
    pub strategy: SplitStrategy,
    pub segments: Vec<String>,
}

/// Splits document text into candidate slide segments.
#[derive(Debug, Clone, Copy, Default)]
pub struct SectionSplitter;

impl SectionSplitter {
    pub fn new() -> Self {
        Self
    }

    /// Split `text` into trimmed, non-empty segments in source order.
    ///
    /// `total_pages` is clamped to at least 1.
    pub fn split(&self, text: &str, total_pages: usize) -> Segmentation {
        let total_pages = total_pages.max(1);

        let stages: [(SplitStrategy, Stage); 3] = [
            (SplitStrategy::FormFeed, split_form_feeds as Stage),
            (SplitStrategy::BlankLines, split_blank_lines as Stage),
            (SplitStrategy::TitleLines, split_title_lines as Stage),
        ];

        let mut best: Option<Segmentation> = None;

        for (strategy, stage) in stages {
            let Some(segments) = stage(text) else {
                log::debug!("Split strategy {} not applicable", strategy);
                continue;
            };

            log::debug!(
                "Split strategy {} produced {} segments for {} pages",
                strategy,
                segments.len(),
                total_pages
            );

            if is_sufficient(segments.len(), total_pages) {
                return Segmentation { strategy, segments };
            }

            let improves = best
                .as_ref()
                .map_or(true, |b| segments.len() > b.segments.len());
            if improves {
                best = Some(Segmentation { strategy, segments });
            }
        }

        let best_len = best.as_ref().map_or(0, |b| b.segments.len());
        if best_len == 0 || (best_len <= 1 && total_pages > 1) {
            let chunks = split_even_chunks(text, total_pages);
            if chunks.len() > best_len {
                log::warn!(
                    "Degenerate segmentation ({} segments for {} pages), \
                     falling back to equal word chunks",
                    best_len,
                    total_pages
                );
                return Segmentation {
                    strategy: SplitStrategy::EvenChunks,
                    segments: chunks,
                };
            }
        }

        best.unwrap_or(Segmentation {
            strategy: SplitStrategy::EvenChunks,
            segments: Vec::new(),
        })
    }
}

/// Whether a segment count is plausible for the page count.
///
/// At least half the pages must be covered, and a multi-page document must
/// yield more than one segment.
fn is_sufficient(count: usize, total_pages: usize) -> bool {
    if total_pages > 1 && count <= 1 {
        return false;
    }
    count * 2 >= total_pages
}

/// Trim segments and drop the empty ones.
fn clean_segments<'a>(parts: impl Iterator<Item = &'a str>) -> Vec<String> {
    parts
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn split_form_feeds(text: &str) -> Option<Vec<String>> {
    Some(clean_segments(text.split('\x0c')))
}

fn split_blank_lines(text: &str) -> Option<Vec<String>> {
    Some(clean_segments(BLANK_LINES_REGEX.split(text)))
}

/// Cut the text before every title-like line.
///
/// Needs at least two title lines. Text before the first title line is not
/// part of any segment.
fn split_title_lines(text: &str) -> Option<Vec<String>> {
    let lines: Vec<&str> = text.lines().collect();
    let title_indices: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| looks_like_title(line.trim()))
        .map(|(idx, _)| idx)
        .collect();

    if title_indices.len() < 2 {
        return None;
    }

    let sections: Vec<String> = title_indices
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let end = title_indices.get(i + 1).copied().unwrap_or(lines.len());
            lines[start..end].join("\n")
        })
        .collect();

    Some(clean_segments(sections.iter().map(String::as_str)))
}

/// Deal the words into `total_pages` contiguous chunks of equal size.
fn split_even_chunks(text: &str, total_pages: usize) -> Vec<String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return Vec::new();
    }

    let per_page = words.len().div_ceil(total_pages.max(1));
    words
        .chunks(per_page)
        .map(|chunk| chunk.join(" "))
        .filter(|s| !s.is_empty())
        .collect()
}
