//! Role extractor: pulls target-role phrases out of the raw text.

use once_cell::sync::Lazy;
use regex::Regex;

const MAX_TARGET_ROLES: usize = 3;
pub const FALLBACK_ROLE: &str = "Professional Role";

/// "seeking a Data Analyst position" → captures "Data Analyst".
static INTENT_PHRASE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(?:seeking|looking for|applying for|target(?:ing)?)\s+(?:a\s+)?([a-zA-Z\s]+?)(?:\s+position|\s+role|\s+job|\.|,)",
    )
    .unwrap()
});

static ROLE_NOUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(software engineer|developer|manager|analyst|designer|consultant|specialist|coordinator|director)",
    )
    .unwrap()
});

/// Up to three distinct title-cased roles in first-seen order: intent phrases
/// first, then standalone role nouns. Never empty.
pub fn extract_target_roles(text: &str) -> Vec<String> {
    let mut roles: Vec<String> = Vec::new();

    for pattern in [&*INTENT_PHRASE, &*ROLE_NOUN] {
        for caps in pattern.captures_iter(text) {
            let Some(m) = caps.get(1).or_else(|| caps.get(0)) else {
                continue;
            };
            let trimmed = m.as_str().trim();
            if trimmed.is_empty() {
                continue;
            }
            let role = title_case(trimmed);
            if !roles.contains(&role) {
                roles.push(role);
            }
        }
    }

    roles.truncate(MAX_TARGET_ROLES);
    if roles.is_empty() {
        roles.push(FALLBACK_ROLE.to_string());
    }
    roles
}

/// Upper-cases the first character of each space-separated word and
/// lower-cases the rest.
pub fn title_case(phrase: &str) -> String {
    phrase
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_falls_back() {
        assert_eq!(extract_target_roles(""), vec!["Professional Role"]);
    }

    #[test]
    fn test_intent_phrase_extracted_and_title_cased() {
        let roles = extract_target_roles("Seeking a data ANALYST position at a startup");
        assert_eq!(roles[0], "Data Analyst");
    }

    #[test]
    fn test_intent_phrase_with_punctuation_terminator() {
        let roles = extract_target_roles("Currently looking for product owner, remote");
        assert_eq!(roles[0], "Product Owner");
    }

    #[test]
    fn test_role_nouns_deduplicated() {
        let roles = extract_target_roles("Developer. developer. DEVELOPER.");
        assert_eq!(roles, vec!["Developer"]);
    }

    #[test]
    fn test_truncated_to_three() {
        let roles = extract_target_roles("analyst, designer, consultant, specialist, director");
        assert_eq!(roles, vec!["Analyst", "Designer", "Consultant"]);
    }

    #[test]
    fn test_software_engineer_matched_as_phrase() {
        let roles = extract_target_roles("Senior Software Engineer, led team");
        assert_eq!(roles, vec!["Software Engineer"]);
    }

    #[test]
    fn test_intent_roles_precede_role_nouns() {
        let roles = extract_target_roles("Manager at Acme. Targeting growth lead role.");
        assert_eq!(roles, vec!["Growth Lead", "Manager"]);
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("sENIOR data engineer"), "Senior Data Engineer");
        assert_eq!(title_case("a  b"), "A  B");
        assert_eq!(title_case(""), "");
    }
}
