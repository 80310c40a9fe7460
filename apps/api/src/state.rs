use std::sync::Arc;

use crate::config::Config;
use crate::scoring::{ResumeScorer, RubricScorer};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable scorer. Default: RubricScorer.
    pub scorer: Arc<dyn ResumeScorer>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            scorer: Arc::new(RubricScorer),
        }
    }
}
