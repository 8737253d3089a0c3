//! Scoring engine: five capped sub-scores plus their rounded mean.
//!
//! Each sub-score is `min(round(base + Σ capped bonus + jitter), 95)`. Bonus
//! terms are capped individually before summing. Jitter is the only
//! non-deterministic input and comes from an injected `JitterSource`, so
//! tests pass `NoJitter` or a seeded source and get exact numbers.
//!
//! `AppState` holds an `Arc<dyn JitterSource>`, chosen at startup via config.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::analysis::scanner::TextSignals;
use crate::models::analysis::ScoreVector;

pub const SUB_SCORE_CEILING: f64 = 95.0;
/// Jitter samples fall in `[0, MAX_JITTER)`.
pub const MAX_JITTER: f64 = 5.0;

// ────────────────────────────────────────────────────────────────────────────
// Jitter sources
// ────────────────────────────────────────────────────────────────────────────

/// Supplies the small non-negative addend applied once per sub-score.
pub trait JitterSource: Send + Sync {
    /// A value in `[0, MAX_JITTER)`.
    fn sample(&self) -> f64;
}

/// Always zero. Scores become a pure function of the text.
pub struct NoJitter;

impl JitterSource for NoJitter {
    fn sample(&self) -> f64 {
        0.0
    }
}

/// Uniform jitter from the thread-local RNG. Production default.
pub struct UniformJitter;

impl JitterSource for UniformJitter {
    fn sample(&self) -> f64 {
        rand::thread_rng().gen_range(0.0..MAX_JITTER)
    }
}

/// Uniform jitter from a seeded generator, reproducible across runs.
pub struct SeededJitter(Mutex<StdRng>);

impl SeededJitter {
    pub fn new(seed: u64) -> Self {
        Self(Mutex::new(StdRng::seed_from_u64(seed)))
    }
}

impl JitterSource for SeededJitter {
    fn sample(&self) -> f64 {
        // A poisoned lock still holds a usable RNG.
        let mut rng = self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.gen_range(0.0..MAX_JITTER)
    }
}

/// Always returns the same value, clamped into `[0, MAX_JITTER)`.
#[cfg(test)]
pub struct FixedJitter(pub f64);

#[cfg(test)]
impl JitterSource for FixedJitter {
    fn sample(&self) -> f64 {
        self.0.clamp(0.0, MAX_JITTER - f64::EPSILON * MAX_JITTER)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Formulas
// ────────────────────────────────────────────────────────────────────────────

/// `weight × count`, capped at `cap`.
fn capped(count: usize, weight: f64, cap: f64) -> f64 {
    (count as f64 * weight).min(cap)
}

fn finalize(base: f64, bonus: f64, jitter: &dyn JitterSource) -> u32 {
    (base + bonus + jitter.sample())
        .round()
        .min(SUB_SCORE_CEILING) as u32
}

pub fn ats_compatibility(s: &TextSignals, jitter: &dyn JitterSource) -> u32 {
    let length_bonus = if s.word_count > 300 { 10.0 } else { 0.0 };
    let bonus = capped(s.sections, 8.0, 30.0) + capped(s.tech_keywords, 2.0, 20.0) + length_bonus;
    finalize(40.0, bonus, jitter)
}

pub fn content_quality(s: &TextSignals, jitter: &dyn JitterSource) -> u32 {
    let depth_bonus = (s.word_count as f64 / 50.0).min(20.0);
    let bonus = capped(s.action_verbs, 3.0, 25.0) + capped(s.metric_hits, 5.0, 20.0) + depth_bonus;
    finalize(35.0, bonus, jitter)
}

pub fn keyword_optimization(s: &TextSignals, jitter: &dyn JitterSource) -> u32 {
    let metric_bonus = if s.metric_hits > 0 { 10.0 } else { 0.0 };
    let bonus = capped(s.tech_keywords, 4.0, 40.0) + capped(s.action_verbs, 2.0, 20.0) + metric_bonus;
    finalize(30.0, bonus, jitter)
}

pub fn readability_structure(s: &TextSignals, jitter: &dyn JitterSource) -> u32 {
    let length_bonus = if s.word_count > 200 && s.word_count < 1500 {
        15.0
    } else {
        5.0
    };
    let bonus = capped(s.sections, 10.0, 35.0) + length_bonus;
    finalize(45.0, bonus, jitter)
}

pub fn role_fit(s: &TextSignals, jitter: &dyn JitterSource) -> u32 {
    let bonus = capped(s.tech_keywords, 3.0, 25.0)
        + capped(s.metric_hits, 4.0, 20.0)
        + capped(s.action_verbs, 2.0, 15.0);
    finalize(40.0, bonus, jitter)
}

/// Computes all five sub-scores (one jitter sample each) and the overall.
pub fn compute_scores(signals: &TextSignals, jitter: &dyn JitterSource) -> ScoreVector {
    let ats_compatibility = ats_compatibility(signals, jitter);
    let content_quality = content_quality(signals, jitter);
    let keyword_optimization = keyword_optimization(signals, jitter);
    let readability_structure = readability_structure(signals, jitter);
    let role_fit = role_fit(signals, jitter);

    let overall = overall_score(&[
        ats_compatibility,
        content_quality,
        keyword_optimization,
        readability_structure,
        role_fit,
    ]);

    ScoreVector {
        ats_compatibility,
        content_quality,
        keyword_optimization,
        readability_structure,
        role_fit,
        overall,
    }
}

/// Rounded mean, no jitter and no cap of its own.
pub fn overall_score(sub_scores: &[u32]) -> u32 {
    if sub_scores.is_empty() {
        return 0;
    }
    let sum: u32 = sub_scores.iter().sum();
    (sum as f64 / sub_scores.len() as f64).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn signals(
        word_count: usize,
        tech_keywords: usize,
        action_verbs: usize,
        metric_hits: usize,
        sections: usize,
    ) -> TextSignals {
        TextSignals {
            text_lower: String::new(),
            word_count,
            char_len: 0,
            tech_keywords,
            action_verbs,
            metric_hits,
            sections,
        }
    }

    #[test]
    fn test_bases_only() {
        let scores = compute_scores(&signals(1, 0, 0, 0, 0), &NoJitter);
        assert_eq!(scores.ats_compatibility, 40);
        assert_eq!(scores.content_quality, 35);
        assert_eq!(scores.keyword_optimization, 30);
        assert_eq!(scores.readability_structure, 50);
        assert_eq!(scores.role_fit, 40);
        assert_eq!(scores.overall, 39);
    }

    #[test]
    fn test_bonus_terms_capped_individually() {
        // sections × 8 would be 80, capped at 30; tech × 2 would be 40, capped at 20.
        let s = signals(100, 20, 0, 0, 10);
        assert_eq!(ats_compatibility(&s, &NoJitter), 90);
    }

    #[test]
    fn test_ats_word_count_threshold_is_strict() {
        assert_eq!(ats_compatibility(&signals(300, 0, 0, 0, 0), &NoJitter), 40);
        assert_eq!(ats_compatibility(&signals(301, 0, 0, 0, 0), &NoJitter), 50);
    }

    #[test]
    fn test_content_quality_fractional_depth_bonus_rounds() {
        // 35 + 0 + 0 + 125/50 = 37.5 → 38
        assert_eq!(content_quality(&signals(125, 0, 0, 0, 0), &NoJitter), 38);
        // 35 + 0 + 0 + 110/50 = 37.2 → 37
        assert_eq!(content_quality(&signals(110, 0, 0, 0, 0), &NoJitter), 37);
    }

    #[test]
    fn test_content_quality_metric_hits_additive_until_cap() {
        assert_eq!(content_quality(&signals(1, 0, 0, 3, 0), &NoJitter), 50);
        assert_eq!(content_quality(&signals(1, 0, 0, 9, 0), &NoJitter), 55);
    }

    #[test]
    fn test_keyword_optimization_metric_flat_bonus() {
        assert_eq!(keyword_optimization(&signals(1, 0, 0, 0, 0), &NoJitter), 30);
        assert_eq!(keyword_optimization(&signals(1, 0, 0, 1, 0), &NoJitter), 40);
    }

    #[test]
    fn test_readability_length_window() {
        assert_eq!(readability_structure(&signals(200, 0, 0, 0, 0), &NoJitter), 50);
        assert_eq!(readability_structure(&signals(201, 0, 0, 0, 0), &NoJitter), 60);
        assert_eq!(readability_structure(&signals(1499, 0, 0, 0, 0), &NoJitter), 60);
        assert_eq!(readability_structure(&signals(1500, 0, 0, 0, 0), &NoJitter), 50);
    }

    #[test]
    fn test_role_fit_caps() {
        assert_eq!(role_fit(&signals(1, 100, 100, 100, 0), &NoJitter), 95);
        // 40 + 24 + 8 + 6
        assert_eq!(role_fit(&signals(1, 8, 3, 2, 0), &NoJitter), 78);
    }

    #[test]
    fn test_ceiling_applies_after_jitter() {
        let s = signals(1000, 30, 30, 30, 9);
        assert_eq!(keyword_optimization(&s, &FixedJitter(4.9)), 95);
        assert_eq!(readability_structure(&s, &FixedJitter(4.9)), 95);
    }

    #[test]
    fn test_fixed_jitter_shifts_score() {
        let s = signals(1, 0, 0, 0, 0);
        assert_eq!(ats_compatibility(&s, &FixedJitter(3.0)), 43);
        assert_eq!(ats_compatibility(&s, &FixedJitter(2.5)), 43);
    }

    #[test]
    fn test_seeded_jitter_reproducible() {
        let a = SeededJitter::new(42);
        let b = SeededJitter::new(42);
        for _ in 0..10 {
            assert_eq!(a.sample(), b.sample());
        }
    }

    #[test]
    fn test_overall_rounds_mean() {
        assert_eq!(overall_score(&[40, 35, 30, 50, 40]), 39);
        assert_eq!(overall_score(&[50, 50, 50, 50, 52]), 50);
        assert_eq!(overall_score(&[50, 50, 50, 51, 52]), 51);
        assert_eq!(overall_score(&[]), 0);
    }

    proptest! {
        #[test]
        fn prop_scores_bounded(
            words in 0usize..5000,
            tech in 0usize..30,
            verbs in 0usize..25,
            metrics in 0usize..50,
            sections in 0usize..10,
            seed in any::<u64>(),
        ) {
            let scores = compute_scores(
                &signals(words, tech, verbs, metrics, sections),
                &SeededJitter::new(seed),
            );
            for sub in [
                scores.ats_compatibility,
                scores.content_quality,
                scores.keyword_optimization,
                scores.readability_structure,
                scores.role_fit,
            ] {
                prop_assert!(sub <= 95);
            }
            prop_assert!(scores.overall <= 95);
        }

        #[test]
        fn prop_uniform_jitter_in_range(_n in 0u8..50) {
            let j = UniformJitter.sample();
            prop_assert!((0.0..MAX_JITTER).contains(&j));
        }
    }
}
