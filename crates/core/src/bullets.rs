//! Bullet and numbered list extraction.

use regex::Regex;
use std::sync::LazyLock;

/// A glyph bullet, e.g. `• Grow 40% MoM`.
static GLYPH_BULLET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-•*▪▫◦‣⁃]\s*(.+)$").unwrap());

/// A numbered item, e.g. `2. Expand to EU` or `3) Hire`.
static NUMBERED_ITEM_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d+[.)]?\s+(.+)$").unwrap());

/// Extract list items from a block of text, in source order.
///
/// The leading marker is stripped and the remainder trimmed. Lines without a
/// marker are skipped.
pub fn extract_bullet_points(text: &str) -> Vec<String> {
    text.lines().filter_map(bullet_item).collect()
}

/// The item text of a single bullet line, if it is one.
fn bullet_item(line: &str) -> Option<String> {
    let line = line.trim();

    let captures = GLYPH_BULLET_REGEX
        .captures(line)
        .or_else(|| NUMBERED_ITEM_REGEX.captures(line))?;

    let item = captures.get(1)?.as_str().trim();
    if item.is_empty() {
        None
    } else {
        Some(item.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_markers() {
        let text = "• Grow 40% MoM\n2. Expand to EU\nNo marker here";
        assert_eq!(
            extract_bullet_points(text),
            vec!["Grow 40% MoM", "Expand to EU"]
        );
    }

    #[test]
    fn test_all_glyphs() {
        let text = "- dash\n• dot\n* star\n▪ square\n▫ hollow\n◦ ring\n‣ tri\n⁃ hyphen";
        assert_eq!(
            extract_bullet_points(text),
            vec!["dash", "dot", "star", "square", "hollow", "ring", "tri", "hyphen"]
        );
    }

    #[test]
    fn test_numbered_variants() {
        let text = "1. One\n2) Two\n3 Three\n  4.   Four  ";
        assert_eq!(extract_bullet_points(text), vec!["One", "Two", "Three", "Four"]);
    }

    #[test]
    fn test_indented_and_tight_glyphs() {
        let text = "    -   indented\n•tight";
        assert_eq!(extract_bullet_points(text), vec!["indented", "tight"]);
    }

    #[test]
    fn test_number_needs_whitespace() {
        // "40%" is not followed by whitespace after the digits
        assert!(extract_bullet_points("40% growth").is_empty());
        assert!(extract_bullet_points("1.5x faster").is_empty());
    }

    #[test]
    fn test_empty_items_skipped() {
        assert!(extract_bullet_points("-\n•   \n2.").is_empty());
    }

    #[test]
    fn test_duplicates_kept() {
        let text = "- Same\n- Same";
        assert_eq!(extract_bullet_points(text), vec!["Same", "Same"]);
    }

    #[test]
    fn test_plain_text_has_no_bullets() {
        assert!(extract_bullet_points("Our Team\nJane Doe, CEO").is_empty());
    }
}
