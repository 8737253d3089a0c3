//! Keyword vocabularies and metric patterns shared by the scanners, classifiers and draft.
//!
//! All keywords are lowercase. Order matters only where a list is sliced
//! (hard skills keep vocabulary order) or enumerated for tie-breaks (industries).

use once_cell::sync::Lazy;
use regex::Regex;

/// Technical skill terms. Also the hard-skill vocabulary of the optimized draft.
pub const TECH_KEYWORDS: &[&str] = &[
    "javascript",
    "typescript",
    "react",
    "node",
    "python",
    "java",
    "aws",
    "docker",
    "kubernetes",
    "sql",
    "mongodb",
    "git",
    "api",
    "agile",
    "scrum",
    "ci/cd",
    "microservices",
    "cloud",
    "linux",
    "html",
    "css",
    "angular",
    "vue",
    "graphql",
    "rest",
    "devops",
];

pub const ACTION_VERBS: &[&str] = &[
    "led",
    "developed",
    "implemented",
    "created",
    "designed",
    "managed",
    "increased",
    "reduced",
    "improved",
    "built",
    "launched",
    "delivered",
    "achieved",
    "optimized",
    "streamlined",
    "collaborated",
    "mentored",
    "analyzed",
    "executed",
    "established",
];

/// Section header terms.
pub const SECTION_KEYWORDS: &[&str] = &[
    "experience",
    "education",
    "skills",
    "summary",
    "objective",
    "projects",
    "certifications",
    "achievements",
    "awards",
];

/// Titles, leadership phrases and seniority years-of-experience phrases.
pub const SENIOR_KEYWORDS: &[&str] = &[
    "senior",
    "lead",
    "principal",
    "director",
    "manager",
    "head of",
    "vp",
    "chief",
    "led team",
    "led a team",
    "10+ years",
    "8+ years",
    "7+ years",
];

pub const MID_KEYWORDS: &[&str] = &[
    "mid",
    "3+ years",
    "4+ years",
    "5+ years",
    "6+ years",
    "intermediate",
];

/// Industries in enumeration order. Earlier entries win count ties.
pub const INDUSTRY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "Technology",
        &[
            "software",
            "developer",
            "engineer",
            "programming",
            "tech",
            "it",
            "data",
            "web",
            "mobile",
            "app",
        ],
    ),
    (
        "Finance",
        &[
            "finance",
            "banking",
            "accounting",
            "investment",
            "trading",
            "financial",
        ],
    ),
    (
        "Healthcare",
        &[
            "healthcare",
            "medical",
            "hospital",
            "clinical",
            "patient",
            "health",
        ],
    ),
    (
        "Marketing",
        &[
            "marketing",
            "advertising",
            "brand",
            "digital marketing",
            "seo",
            "social media",
        ],
    ),
    (
        "Sales",
        &[
            "sales",
            "business development",
            "account",
            "revenue",
            "client",
        ],
    ),
    (
        "Education",
        &[
            "teacher",
            "professor",
            "education",
            "academic",
            "university",
            "school",
        ],
    ),
];

pub const FALLBACK_INDUSTRY: &str = "General";

pub const SOFT_SKILLS: &[&str] = &[
    "Communication",
    "Problem Solving",
    "Team Collaboration",
    "Leadership",
];

/// Quantifiable-metric shapes: percentages, currency, counts of people or
/// projects, multipliers and magnitude words. Every pattern is case-insensitive.
pub static METRIC_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(?i)[0-9]+%").unwrap(),
        Regex::new(r"(?i)\$[0-9]+").unwrap(),
        Regex::new(r"(?i)[0-9]+\s*(users|customers|clients|projects|teams|people)").unwrap(),
        Regex::new(r"(?i)[0-9]+x").unwrap(),
        Regex::new(r"(?i)[0-9]+\s*(million|thousand|k|m)").unwrap(),
    ]
});
