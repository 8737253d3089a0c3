use anyhow::{bail, Context, Result};

/// How sub-score jitter is sourced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JitterMode {
    /// Uniform in [0, 5), from a seeded generator when `seed` is set.
    Uniform { seed: Option<u64> },
    /// No jitter; scores are a pure function of the text.
    Off,
}

/// Application configuration loaded from environment variables.
/// Every variable is optional and has a default.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Longest accepted input, in characters.
    pub max_input_chars: usize,
    /// Artificial delay applied before each analysis.
    pub analysis_delay_ms: u64,
    pub jitter: JitterMode,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let seed = lookup("JITTER_SEED")
            .map(|s| s.parse::<u64>())
            .transpose()
            .context("JITTER_SEED must be an unsigned integer")?;

        let jitter = match lookup("SCORE_JITTER").as_deref().unwrap_or("uniform") {
            "uniform" => JitterMode::Uniform { seed },
            "off" => JitterMode::Off,
            other => bail!("SCORE_JITTER must be 'uniform' or 'off', got '{other}'"),
        };

        Ok(Config {
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            max_input_chars: lookup("MAX_INPUT_CHARS")
                .unwrap_or_else(|| "50000".to_string())
                .parse::<usize>()
                .context("MAX_INPUT_CHARS must be a positive integer")?,
            analysis_delay_ms: lookup("ANALYSIS_DELAY_MS")
                .unwrap_or_else(|| "1500".to_string())
                .parse::<u64>()
                .context("ANALYSIS_DELAY_MS must be a number of milliseconds")?,
            jitter,
        })
    }
}
