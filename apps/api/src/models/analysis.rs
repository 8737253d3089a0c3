use serde::{Deserialize, Serialize};

/// Seniority inferred from title and years-of-experience signals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CareerLevel {
    #[default]
    Junior,
    Mid,
    Senior,
}

impl CareerLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            CareerLevel::Junior => "Junior",
            CareerLevel::Mid => "Mid",
            CareerLevel::Senior => "Senior",
        }
    }
}

impl std::fmt::Display for CareerLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Five sub-scores, each in 0..=95, plus their rounded mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreVector {
    pub ats_compatibility: u32,
    pub content_quality: u32,
    pub keyword_optimization: u32,
    pub readability_structure: u32,
    pub role_fit: u32,
    pub overall: u32,
}

/// A single strength or weakness statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackItem {
    pub text: String,
}

impl FeedbackItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Full qualitative and quantitative result for one resume text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub career_level: CareerLevel,
    pub industry: String,
    /// 1–3 entries, never empty.
    pub target_roles: Vec<String>,
    pub scores: ScoreVector,
    /// Never empty.
    pub strengths: Vec<FeedbackItem>,
    /// Never empty.
    pub weaknesses: Vec<FeedbackItem>,
    /// At most 5 entries.
    pub improvements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkExperience {
    pub title: String,
    pub company: String,
    pub period: String,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub year: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillSet {
    /// At most 10, in vocabulary order.
    pub hard: Vec<String>,
    pub soft: Vec<String>,
}

/// Templated resume skeleton; placeholder fields are filled in by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizedDraft {
    pub professional_summary: String,
    pub experience: Vec<WorkExperience>,
    pub skills: SkillSet,
    pub education: Vec<Education>,
    pub certifications: Vec<String>,
}
