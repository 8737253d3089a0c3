//! Classifiers: career level and industry from keyword-hit thresholds.

use crate::analysis::keywords::{FALLBACK_INDUSTRY, INDUSTRY_KEYWORDS, MID_KEYWORDS, SENIOR_KEYWORDS};
use crate::analysis::scanner::count_lowercase_hits;
use crate::models::analysis::CareerLevel;

/// Two or more senior signals → Senior. A single senior signal, or any mid
/// signal, → Mid. Nothing → Junior.
pub fn detect_career_level(text: &str) -> CareerLevel {
    let text_lower = text.to_lowercase();
    let senior_count = count_lowercase_hits(&text_lower, SENIOR_KEYWORDS);
    let mid_count = count_lowercase_hits(&text_lower, MID_KEYWORDS);
    career_level_from_counts(senior_count, mid_count)
}

pub fn career_level_from_counts(senior_count: usize, mid_count: usize) -> CareerLevel {
    if senior_count >= 2 {
        CareerLevel::Senior
    } else if mid_count >= 1 || senior_count >= 1 {
        CareerLevel::Mid
    } else {
        CareerLevel::Junior
    }
}

/// Industry with the strictly greatest keyword count; the first industry in
/// enumeration order wins ties. "General" when nothing hits.
pub fn detect_industry(text: &str) -> String {
    let text_lower = text.to_lowercase();
    let mut max_count = 0;
    let mut detected = FALLBACK_INDUSTRY;

    for (industry, keywords) in INDUSTRY_KEYWORDS {
        let count = count_lowercase_hits(&text_lower, keywords);
        if count > max_count {
            max_count = count;
            detected = *industry;
        }
    }

    detected.to_string()
}
