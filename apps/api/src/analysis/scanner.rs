//! Lexical scanners: keyword presence and metric-pattern occurrence counters.
//!
//! The two counters deliberately differ: `count_keyword_hits` counts each
//! distinct keyword at most once, `count_pattern_hits` counts every match.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::analysis::keywords::{ACTION_VERBS, METRIC_PATTERNS, SECTION_KEYWORDS, TECH_KEYWORDS};

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Number of distinct keywords occurring anywhere in `text` as a
/// case-insensitive substring. Not token-bounded: "it" hits inside "with".
/// Keywords must be lowercase, as every vocabulary in `keywords` is.
pub fn count_keyword_hits(text: &str, keywords: &[&str]) -> usize {
    count_lowercase_hits(&text.to_lowercase(), keywords)
}

/// `count_keyword_hits` for text that is already lowercase.
pub fn count_lowercase_hits(text_lower: &str, keywords: &[&str]) -> usize {
    keywords.iter().filter(|kw| text_lower.contains(*kw)).count()
}

/// Total non-overlapping matches of every pattern, summed across patterns.
pub fn count_pattern_hits(text: &str, patterns: &[Regex]) -> usize {
    patterns.iter().map(|p| p.find_iter(text).count()).sum()
}

/// Tokens produced by splitting on whitespace runs. Leading or trailing
/// whitespace yields empty tokens, so `""` counts as one word.
pub fn word_count(text: &str) -> usize {
    WHITESPACE_RUN.split(text).count()
}

/// Raw counts derived once per input and shared by every later stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSignals {
    pub text_lower: String,
    pub word_count: usize,
    /// Length in characters.
    pub char_len: usize,
    pub tech_keywords: usize,
    pub action_verbs: usize,
    pub metric_hits: usize,
    pub sections: usize,
}

impl TextSignals {
    pub fn scan(text: &str) -> Self {
        let text_lower = text.to_lowercase();
        Self {
            word_count: word_count(text),
            char_len: text.chars().count(),
            tech_keywords: count_lowercase_hits(&text_lower, TECH_KEYWORDS),
            action_verbs: count_lowercase_hits(&text_lower, ACTION_VERBS),
            metric_hits: count_pattern_hits(text, &METRIC_PATTERNS),
            sections: count_lowercase_hits(&text_lower, SECTION_KEYWORDS),
            text_lower,
        }
    }

    /// True if any of `needles` (lowercase) occurs in the text.
    pub fn mentions_any(&self, needles: &[&str]) -> bool {
        needles.iter().any(|n| self.text_lower.contains(n))
    }
}
