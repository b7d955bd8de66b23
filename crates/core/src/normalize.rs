//! Text normalization for extracted PDF text.
//!
//! Unifies line endings and optionally folds Unicode compatibility
//! characters (ligatures, non-breaking spaces, full-width forms) so that
//! the downstream heuristics see plain text.

use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

/// Regex matching Windows and classic Mac line endings.
static LINE_ENDING_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\r\n?").unwrap());

/// Text normalizer applied before segmentation.
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    /// Whether to apply NFKC compatibility folding.
    fold_compatibility: bool,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self {
            fold_compatibility: true,
        }
    }
}

impl TextNormalizer {
    /// Create a new normalizer with compatibility folding enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to apply NFKC compatibility folding.
    pub fn with_compatibility_folding(mut self, fold: bool) -> Self {
        self.fold_compatibility = fold;
        self
    }

    /// Normalize a whole document.
    ///
    /// - `\r\n` and lone `\r` become `\n`
    /// - Form feeds are kept, the splitter relies on them
    /// - With folding enabled, `ﬁ` becomes `fi`, U+00A0 becomes a space, etc.
    pub fn normalize(&self, text: &str) -> String {
        let unified = LINE_ENDING_REGEX.replace_all(text, "\n").into_owned();

        if self.fold_compatibility {
            unified.as_str().nfkc().collect()
        } else {
            unified
        }
    }
}

/// Trimmed, non-empty lines of a block of text.
pub fn non_empty_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect()
}

/// Number of whitespace-separated tokens.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
