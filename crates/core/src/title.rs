//! Slide title detection.

use regex::Regex;
use std::sync::LazyLock;

/// Shortest accepted title, in characters.
pub const MIN_TITLE_CHARS: usize = 3;

/// Longest accepted title, in characters.
pub const MAX_TITLE_CHARS: usize = 80;

/// How many leading non-empty lines of a segment are searched for a title.
pub const TITLE_SCAN_LINES: usize = 3;

/// Lines opening with a bullet glyph.
static BULLET_LINE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-•*▪▫◦‣⁃]").unwrap());

/// Lines opening with a list number such as `1.` or `2)`.
static NUMBERED_LINE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d+[.)]").unwrap());

/// Check whether a trimmed line plausibly works as a slide title.
///
/// Sentence punctuation at the end disqualifies a line unless the line is
/// all caps and longer than three characters (`"MARKET SIZE."`).
pub fn looks_like_title(line: &str) -> bool {
    if line.is_empty() {
        return false;
    }

    let len = line.chars().count();
    if !(MIN_TITLE_CHARS..=MAX_TITLE_CHARS).contains(&len) {
        return false;
    }

    if BULLET_LINE_REGEX.is_match(line) || NUMBERED_LINE_REGEX.is_match(line) {
        return false;
    }

    let has_end_punctuation = line.trim_end().ends_with(['.', '!', '?']);
    let is_all_caps = line == line.to_uppercase() && len > 3;

    !has_end_punctuation || is_all_caps
}

/// Return the first title-like line among the first few lines.
///
/// `lines` are expected to be trimmed and non-empty.
pub fn extract_title(lines: &[&str]) -> Option<String> {
    lines
        .iter()
        .take(TITLE_SCAN_LINES)
        .find(|line| looks_like_title(line))
        .map(|line| line.to_string())
}
