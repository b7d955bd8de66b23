//! Structural confidence scoring for extracted slides.
//!
//! The score says how cleanly a segment looks like a slide, not whether the
//! classification is semantically right.

use crate::types::SlideType;

const BASE_SCORE: i32 = 50;
const TITLE_BONUS: i32 = 20;
const BULLET_BONUS: i32 = 15;
const LINE_COUNT_BONUS: i32 = 10;
const TYPED_BONUS: i32 = 15;
const TOO_SHORT_PENALTY: i32 = 20;
const TOO_LONG_PENALTY: i32 = 10;

/// Compute a 0-100 confidence for one slide.
///
/// `lines` are the trimmed non-empty lines of the segment.
pub fn estimate_confidence(
    lines: &[&str],
    title: Option<&str>,
    bullet_points: &[String],
    slide_type: SlideType,
) -> u8 {
    let mut score = BASE_SCORE;

    if let Some(title) = title {
        let len = title.chars().count();
        if len > 3 && len < 60 {
            score += TITLE_BONUS;
        }
    }

    if !bullet_points.is_empty() {
        score += BULLET_BONUS;
    }

    let line_count = lines.len();
    if (3..=20).contains(&line_count) {
        score += LINE_COUNT_BONUS;
    }

    if slide_type != SlideType::Other {
        score += TYPED_BONUS;
    }

    if line_count < 2 {
        score -= TOO_SHORT_PENALTY;
    } else if line_count > 30 {
        score -= TOO_LONG_PENALTY;
    }

    score.clamp(0, 100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bullets(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("point {}", i)).collect()
    }

    #[test]
    fn test_well_structured_slide_clamps_at_100() {
        let lines = ["Our Team"; 8];
        let score = estimate_confidence(&lines, Some("Our Team"), &bullets(2), SlideType::Team);
        // 50 + 20 + 15 + 10 + 15 = 110
        assert_eq!(score, 100);
    }

    #[test]
    fn test_base_score() {
        let lines = ["a", "b"];
        assert_eq!(estimate_confidence(&lines, None, &[], SlideType::Other), 50);
    }

    #[test]
    fn test_single_line_penalty() {
        let lines = ["a"];
        assert_eq!(estimate_confidence(&lines, None, &[], SlideType::Other), 30);
        assert_eq!(estimate_confidence(&[], None, &[], SlideType::Other), 30);
    }

    #[test]
    fn test_long_segment_penalty() {
        let lines = ["line"; 31];
        assert_eq!(estimate_confidence(&lines, None, &[], SlideType::Market), 55);

        // 21..=30 lines: neither bonus nor penalty
        let lines = ["line"; 25];
        assert_eq!(estimate_confidence(&lines, None, &[], SlideType::Other), 50);
    }

    #[test]
    fn test_title_length_window() {
        let lines = ["a", "b"];
        assert_eq!(estimate_confidence(&lines, Some("Ask"), &[], SlideType::Other), 50);
        assert_eq!(estimate_confidence(&lines, Some("Team"), &[], SlideType::Other), 70);

        let long_title = "x".repeat(60);
        assert_eq!(
            estimate_confidence(&lines, Some(&long_title), &[], SlideType::Other),
            50
        );
    }

    #[test]
    fn test_bullets_and_type() {
        let lines = ["a", "b", "c"];
        assert_eq!(
            estimate_confidence(&lines, None, &bullets(1), SlideType::Funding),
            90
        );
    }
}
