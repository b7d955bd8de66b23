//! Keyword-based slide type classification.
//!
//! Each category has a fixed keyword list. A slide scores one point per
//! distinct keyword found anywhere in its lowercased content and title; the
//! highest score wins and ties go to the category listed first. This is a
//! coarse bag-of-keywords scorer: it is deterministic, not clever.

use crate::types::SlideType;
use regex::Regex;
use std::sync::LazyLock;

/// Keyword table in tie-break order. `Other` has no keywords.
pub const KEYWORD_TABLE: &[(SlideType, &[&str])] = &[
    (
        SlideType::Title,
        &["welcome", "introduction", "company", "startup", "founded", "mission"],
    ),
    (
        SlideType::Problem,
        &["problem", "challenge", "issue", "pain point", "difficulty", "struggle"],
    ),
    (
        SlideType::Solution,
        &["solution", "approach", "how we", "our product", "we solve", "innovation"],
    ),
    (
        SlideType::Market,
        &["market", "opportunity", "tam", "addressable market", "market size", "industry"],
    ),
    (
        SlideType::BusinessModel,
        &["business model", "revenue", "monetization", "pricing", "how we make money"],
    ),
    (
        SlideType::Traction,
        &["traction", "growth", "users", "customers", "revenue", "metrics", "kpis"],
    ),
    (
        SlideType::Team,
        &["team", "founders", "leadership", "experience", "background", "advisors"],
    ),
    (
        SlideType::Financials,
        &["financials", "projections", "forecast", "budget", "expenses", "profit"],
    ),
    (
        SlideType::Funding,
        &["funding", "investment", "raise", "capital", "investors", "valuation"],
    ),
    (
        SlideType::Competition,
        &["competition", "competitors", "competitive", "vs", "comparison", "differentiation"],
    ),
];

/// Mentions of visual material.
static IMAGE_HINT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)image|figure|chart|graph").unwrap());

/// Mentions of charted or chartable data.
static CHART_HINT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)chart|graph|data|revenue|growth|market size").unwrap());

/// Score of every keyword-bearing category, in table order.
pub fn score_slide(content: &str, title: Option<&str>) -> Vec<(SlideType, usize)> {
    let haystack = format!(
        "{} {}",
        content.to_lowercase(),
        title.unwrap_or_default().to_lowercase()
    );

    KEYWORD_TABLE
        .iter()
        .map(|(slide_type, keywords)| {
            let score = keywords.iter().filter(|kw| haystack.contains(*kw)).count();
            (*slide_type, score)
        })
        .collect()
}

/// Assign exactly one category to a slide.
pub fn classify_slide(content: &str, title: Option<&str>) -> SlideType {
    let mut best = SlideType::Other;
    let mut best_score = 0;

    for (slide_type, score) in score_slide(content, title) {
        if score > best_score {
            best = slide_type;
            best_score = score;
        }
    }

    best
}

/// Content mentions images, figures, charts or graphs.
pub fn mentions_images(content: &str) -> bool {
    IMAGE_HINT_REGEX.is_match(content)
}

/// Content mentions charts or typically charted figures.
pub fn mentions_charts(content: &str) -> bool {
    CHART_HINT_REGEX.is_match(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_market_slide() {
        let content = "Market Opportunity\nTAM of $40B\nAddressable market grows 12% a year\nMarket size by 2030";
        assert_eq!(classify_slide(content, Some("Market Opportunity")), SlideType::Market);
    }

    #[test]
    fn test_no_keywords_is_other() {
        assert_eq!(classify_slide("Thank you", Some("Thank you")), SlideType::Other);
        assert_eq!(classify_slide("", None), SlideType::Other);
    }

    #[test]
    fn test_title_contributes() {
        assert_eq!(classify_slide("Jane Doe\nJohn Roe", Some("Our Team")), SlideType::Team);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify_slide("FUNDING: WE RAISE CAPITAL", None), SlideType::Funding);
    }

    #[test]
    fn test_tie_goes_to_earlier_category() {
        // One problem keyword, one team keyword
        assert_eq!(classify_slide("problem team", None), SlideType::Problem);
        // "revenue" counts for both business model and traction
        assert_eq!(classify_slide("revenue", None), SlideType::BusinessModel);
    }

    #[test]
    fn test_distinct_keywords_only() {
        // Repeating a keyword does not add to its score
        let scores = score_slide("problem problem problem", None);
        assert!(scores.contains(&(SlideType::Problem, 1)));
        assert_eq!(
            classify_slide("problem problem problem traction growth", None),
            SlideType::Traction
        );
    }

    #[test]
    fn test_substring_matching() {
        // "tam" inside "stamp" still counts
        let scores = score_slide("stamp", None);
        assert!(scores.contains(&(SlideType::Market, 1)));
    }

    #[test]
    fn test_scores_in_table_order() {
        let order: Vec<SlideType> = score_slide("", None).into_iter().map(|(t, _)| t).collect();
        assert_eq!(
            order,
            vec![
                SlideType::Title,
                SlideType::Problem,
                SlideType::Solution,
                SlideType::Market,
                SlideType::BusinessModel,
                SlideType::Traction,
                SlideType::Team,
                SlideType::Financials,
                SlideType::Funding,
                SlideType::Competition,
            ]
        );
    }

    #[test]
    fn test_media_hints() {
        assert!(mentions_images("See Figure 2"));
        assert!(mentions_charts("Revenue Growth"));
        assert!(mentions_charts("Our DATA moat"));
        assert!(!mentions_images("Plain words"));
        assert!(!mentions_charts("Plain words"));
    }
}
