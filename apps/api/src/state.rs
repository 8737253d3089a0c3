use std::sync::Arc;

use crate::analysis::scoring::{JitterSource, NoJitter, SeededJitter, UniformJitter};
use crate::config::{Config, JitterMode};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable jitter source. Default: UniformJitter. Swap via SCORE_JITTER / JITTER_SEED.
    pub jitter: Arc<dyn JitterSource>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let jitter: Arc<dyn JitterSource> = match config.jitter {
            JitterMode::Uniform { seed: Some(seed) } => Arc::new(SeededJitter::new(seed)),
            JitterMode::Uniform { seed: None } => Arc::new(UniformJitter),
            JitterMode::Off => Arc::new(NoJitter),
        };
        Self { config, jitter }
    }
}
