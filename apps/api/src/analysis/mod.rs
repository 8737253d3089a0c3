// Resume analysis engine.
// Implements: lexical scanning, classification, role extraction, scoring, feedback, draft synthesis.
// The pipeline is pure CPU work over one string; handlers run it inside tokio::task::spawn_blocking.

pub mod classifier;
pub mod draft;
pub mod export;
pub mod feedback;
pub mod grading;
pub mod handlers;
pub mod ingest;
pub mod keywords;
pub mod pipeline;
pub mod roles;
pub mod scanner;
pub mod scoring;

