//! Letter grade for the overall score and a coarse band for each sub-score.

use serde::{Deserialize, Serialize};

use crate::models::analysis::ScoreVector;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Strong,
    Fair,
    Weak,
}

pub fn score_band(score: u32) -> ScoreBand {
    match score {
        s if s >= 80 => ScoreBand::Strong,
        s if s >= 60 => ScoreBand::Fair,
        _ => ScoreBand::Weak,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grade {
    pub grade: String,
    pub label: String,
}

pub fn grade_overall(score: u32) -> Grade {
    let (grade, label) = match score {
        s if s >= 90 => ("A+", "Excellent"),
        s if s >= 80 => ("A", "Great"),
        s if s >= 70 => ("B", "Good"),
        s if s >= 60 => ("C", "Fair"),
        _ => ("D", "Needs Work"),
    };
    Grade {
        grade: grade.to_string(),
        label: label.to_string(),
    }
}

/// Overall grade plus the band of every sub-score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub overall: Grade,
    pub ats_compatibility: ScoreBand,
    pub content_quality: ScoreBand,
    pub keyword_optimization: ScoreBand,
    pub readability_structure: ScoreBand,
    pub role_fit: ScoreBand,
}

impl From<&ScoreVector> for ScoreReport {
    fn from(scores: &ScoreVector) -> Self {
        Self {
            overall: grade_overall(scores.overall),
            ats_compatibility: score_band(scores.ats_compatibility),
            content_quality: score_band(scores.content_quality),
            keyword_optimization: score_band(scores.keyword_optimization),
            readability_structure: score_band(scores.readability_structure),
            role_fit: score_band(scores.role_fit),
        }
    }
}
