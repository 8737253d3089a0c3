//! Draft synthesizer: a templated "optimized" resume built from the analysis.
//!
//! Only the summary, the experience title, hard skills and certifications
//! depend on the input. Everything else is a placeholder the user fills in.

use crate::analysis::keywords::{SOFT_SKILLS, TECH_KEYWORDS};
use crate::models::analysis::{Analysis, Education, OptimizedDraft, SkillSet, WorkExperience};

const MAX_HARD_SKILLS: usize = 10;

/// Builds the draft from a finished analysis and the lowercased input text.
pub fn synthesize_draft(analysis: &Analysis, text_lower: &str) -> OptimizedDraft {
    let first_role = analysis.target_roles.first();

    let professional_summary = format!(
        "Results-driven {} professional with expertise in {}. Proven track record of delivering impactful solutions and driving business outcomes. Seeking to leverage skills in {}.",
        analysis.career_level,
        analysis.industry,
        first_role.map_or("a challenging role", String::as_str),
    );

    let experience = vec![WorkExperience {
        title: first_role.map_or("Professional", String::as_str).to_string(),
        company: "Your Company".to_string(),
        period: "Present".to_string(),
        achievements: vec![
            "Add your key achievements with specific metrics here".to_string(),
            "Describe projects you led and their impact".to_string(),
            "Include measurable results (%, $, numbers)".to_string(),
        ],
    }];

    let hard = TECH_KEYWORDS
        .iter()
        .filter(|kw| text_lower.contains(*kw))
        .take(MAX_HARD_SKILLS)
        .map(|kw| kw.to_string())
        .collect();

    let certifications = if text_lower.contains("certified") {
        vec!["Relevant Certifications".to_string()]
    } else {
        Vec::new()
    };

    OptimizedDraft {
        professional_summary,
        experience,
        skills: SkillSet {
            hard,
            soft: SOFT_SKILLS.iter().map(|s| s.to_string()).collect(),
        },
        education: vec![Education {
            degree: "Your Degree".to_string(),
            institution: "Your Institution".to_string(),
            year: "Year".to_string(),
        }],
        certifications,
    }
}
