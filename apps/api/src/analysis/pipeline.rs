//! Analysis pipeline: the single entry point of the engine.
//!
//! Flow: scan → (classify, extract roles, score) → feedback → draft.
//! Stateless and infallible: any string, including an empty one, produces a
//! complete `Analysis` and `OptimizedDraft`.

use tracing::{debug, info};

use crate::analysis::classifier::{detect_career_level, detect_industry};
use crate::analysis::draft::synthesize_draft;
use crate::analysis::feedback::{analyze_strengths, analyze_weaknesses, generate_improvements};
use crate::analysis::roles::extract_target_roles;
use crate::analysis::scanner::TextSignals;
use crate::analysis::scoring::{compute_scores, JitterSource};
use crate::models::analysis::{Analysis, OptimizedDraft};

/// Analyzes a resume text. `jitter` is sampled once per sub-score.
pub fn analyze(text: &str, jitter: &dyn JitterSource) -> (Analysis, OptimizedDraft) {
    let signals = TextSignals::scan(text);
    debug!(
        "Scanned {} words: tech={} verbs={} metrics={} sections={}",
        signals.word_count,
        signals.tech_keywords,
        signals.action_verbs,
        signals.metric_hits,
        signals.sections
    );

    let scores = compute_scores(&signals, jitter);

    let analysis = Analysis {
        career_level: detect_career_level(&signals.text_lower),
        industry: detect_industry(&signals.text_lower),
        target_roles: extract_target_roles(text),
        scores,
        strengths: analyze_strengths(&signals, &scores),
        weaknesses: analyze_weaknesses(&signals, &scores),
        improvements: generate_improvements(&signals, &scores),
    };

    info!(
        "Analysis complete: level={} industry={} overall={}",
        analysis.career_level, analysis.industry, analysis.scores.overall
    );

    let draft = synthesize_draft(&analysis, &signals.text_lower);
    (analysis, draft)
}
