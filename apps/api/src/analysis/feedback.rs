//! Feedback generator: ordered `(predicate, message)` tables for strengths,
//! weaknesses and improvements.
//!
//! Rules are evaluated in table order and never deduplicated against each
//! other, so a resume can be praised and criticized on overlapping thresholds.

use crate::analysis::scanner::TextSignals;
use crate::models::analysis::{FeedbackItem, ScoreVector};

const MAX_IMPROVEMENTS: usize = 5;

const STRENGTH_FALLBACK: &str = "CV provides basic professional information";
const WEAKNESS_FALLBACK: &str = "Consider adding more specific details";

/// A single threshold rule.
pub struct FeedbackRule {
    pub applies: fn(&TextSignals, &ScoreVector) -> bool,
    pub message: &'static str,
}

fn rule(applies: fn(&TextSignals, &ScoreVector) -> bool, message: &'static str) -> FeedbackRule {
    FeedbackRule { applies, message }
}

pub fn strength_rules() -> [FeedbackRule; 6] {
    [
        rule(
            |_, sc| sc.keyword_optimization > 60,
            "Good use of industry-relevant keywords and technical terms",
        ),
        rule(
            |s, _| s.metric_hits >= 2,
            "Includes quantifiable achievements with metrics",
        ),
        rule(
            |s, _| s.action_verbs >= 5,
            "Strong action verbs used to describe accomplishments",
        ),
        rule(
            |s, _| s.char_len > 1000,
            "Comprehensive work history with detailed experience",
        ),
        rule(
            |s, _| s.mentions_any(&["certification", "certified"]),
            "Professional certifications enhance credibility",
        ),
        rule(
            |_, sc| sc.readability_structure > 70,
            "Well-structured content with clear organization",
        ),
    ]
}

pub fn weakness_rules() -> [FeedbackRule; 6] {
    [
        rule(
            |_, sc| sc.keyword_optimization < 50,
            "Missing industry-specific keywords for ATS optimization",
        ),
        rule(
            |s, _| s.metric_hits < 2,
            "Lacks measurable achievements and quantifiable results",
        ),
        rule(
            |s, _| s.action_verbs < 3,
            "Weak action verbs - consider using stronger language",
        ),
        rule(
            |s, _| s.char_len < 500,
            "CV content is too brief - add more detail",
        ),
        rule(
            |s, _| !s.mentions_any(&["summary", "objective", "profile"]),
            "Missing professional summary section",
        ),
        rule(
            |_, sc| sc.ats_compatibility < 60,
            "Format may not be fully ATS-compatible",
        ),
    ]
}

pub fn improvement_rules() -> [FeedbackRule; 7] {
    [
        rule(
            |s, _| s.metric_hits < 3,
            "Add specific metrics to achievements (e.g., 'Increased sales by 25%', 'Managed team of 10')",
        ),
        rule(
            |_, sc| sc.keyword_optimization < 70,
            "Include more industry-standard keywords relevant to your target role",
        ),
        rule(
            |s, _| !s.mentions_any(&["summary", "profile"]),
            "Add a compelling professional summary at the top of your CV",
        ),
        rule(
            |s, _| s.action_verbs < 5,
            "Start bullet points with strong action verbs (Led, Developed, Implemented, etc.)",
        ),
        rule(
            |s, _| !s.mentions_any(&["skill"]),
            "Add a dedicated skills section organized by category",
        ),
        rule(
            |s, _| s.char_len < 800,
            "Expand on your work experience with more specific accomplishments",
        ),
        rule(
            |s, _| !s.mentions_any(&["certification", "certified"]),
            "Consider adding relevant certifications to strengthen your profile",
        ),
    ]
}

fn fired<'r>(
    rules: &'r [FeedbackRule],
    signals: &'r TextSignals,
    scores: &'r ScoreVector,
) -> impl Iterator<Item = &'static str> + 'r {
    rules
        .iter()
        .filter(move |r| (r.applies)(signals, scores))
        .map(|r| r.message)
}

/// Every strength rule that fires, or a single fallback item.
pub fn analyze_strengths(signals: &TextSignals, scores: &ScoreVector) -> Vec<FeedbackItem> {
    let mut items: Vec<FeedbackItem> = fired(&strength_rules(), signals, scores)
        .map(FeedbackItem::new)
        .collect();
    if items.is_empty() {
        items.push(FeedbackItem::new(STRENGTH_FALLBACK));
    }
    items
}

/// Every weakness rule that fires, or a single fallback item.
pub fn analyze_weaknesses(signals: &TextSignals, scores: &ScoreVector) -> Vec<FeedbackItem> {
    let mut items: Vec<FeedbackItem> = fired(&weakness_rules(), signals, scores)
        .map(FeedbackItem::new)
        .collect();
    if items.is_empty() {
        items.push(FeedbackItem::new(WEAKNESS_FALLBACK));
    }
    items
}

/// The first five improvement rules that fire, in table order. May be empty.
pub fn generate_improvements(signals: &TextSignals, scores: &ScoreVector) -> Vec<String> {
    fired(&improvement_rules(), signals, scores)
        .take(MAX_IMPROVEMENTS)
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(ats: u32, keyword: u32, readability: u32) -> ScoreVector {
        ScoreVector {
            ats_compatibility: ats,
            content_quality: 50,
            keyword_optimization: keyword,
            readability_structure: readability,
            role_fit: 50,
            overall: 50,
        }
    }

    #[test]
    fn test_empty_text_gets_strength_fallback() {
        let s = TextSignals::scan("");
        let items = analyze_strengths(&s, &scores(40, 30, 50));
        assert_eq!(items, vec![FeedbackItem::new(STRENGTH_FALLBACK)]);
    }

    #[test]
    fn test_empty_text_fires_every_weakness() {
        let s = TextSignals::scan("");
        let items = analyze_weaknesses(&s, &scores(40, 30, 50));
        assert_eq!(items.len(), 6);
        assert_eq!(items[0].text, "Missing industry-specific keywords for ATS optimization");
        assert_eq!(items[5].text, "Format may not be fully ATS-compatible");
    }

    #[test]
    fn test_weakness_fallback_when_nothing_fires() {
        let text = format!(
            "Professional summary. {} 10% 20% led developed implemented",
            "x".repeat(600)
        );
        let s = TextSignals::scan(&text);
        let items = analyze_weaknesses(&s, &scores(70, 60, 60));
        assert_eq!(items, vec![FeedbackItem::new(WEAKNESS_FALLBACK)]);
    }

    #[test]
    fn test_improvements_truncated_to_first_five_in_rule_order() {
        let s = TextSignals::scan("");
        let items = generate_improvements(&s, &scores(40, 30, 50));
        assert_eq!(items.len(), 5);
        assert!(items[0].starts_with("Add specific metrics"));
        assert!(items[4].starts_with("Add a dedicated skills section"));
        assert!(!items.iter().any(|i| i.contains("certifications")));
    }

    #[test]
    fn test_improvements_can_be_empty() {
        let text = format!(
            "Summary. Skills. AWS certified. 10% 20% 30% led developed implemented created designed {}",
            "x".repeat(800)
        );
        let s = TextSignals::scan(&text);
        assert!(generate_improvements(&s, &scores(80, 80, 80)).is_empty());
    }

    #[test]
    fn test_strength_and_weakness_rules_are_independent() {
        // keyword_optimization 65 praises keywords yet still triggers the < 70 improvement.
        let s = TextSignals::scan("certified");
        let sc = scores(40, 65, 50);
        let strengths = analyze_strengths(&s, &sc);
        let improvements = generate_improvements(&s, &sc);
        assert_eq!(
            strengths[0].text,
            "Good use of industry-relevant keywords and technical terms"
        );
        assert!(improvements
            .iter()
            .any(|i| i.starts_with("Include more industry-standard keywords")));
        assert!(strengths
            .iter()
            .any(|i| i.text == "Professional certifications enhance credibility"));
    }

    #[test]
    fn test_strength_order_follows_table() {
        let text = format!("certified 10% 20% {}", "y".repeat(1000));
        let s = TextSignals::scan(&text);
        let items = analyze_strengths(&s, &scores(40, 30, 75));
        let texts: Vec<&str> = items.iter().map(|i| i.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "Includes quantifiable achievements with metrics",
                "Comprehensive work history with detailed experience",
                "Professional certifications enhance credibility",
                "Well-structured content with clear organization",
            ]
        );
    }
}
