//! Resume quality scoring.
//!
//! `engine` holds the rubric, `report` the output shapes. `AppState` carries
//! an `Arc<dyn ResumeScorer>` so the HTTP layer never names a backend.

pub mod engine;
pub mod handlers;
pub mod report;

use crate::models::resume::Resume;
use crate::scoring::report::ScoreReport;

/// A scoring backend. Implementations must be pure: no I/O, no shared
/// mutable state, safe to call on every keystroke.
pub trait ResumeScorer: Send + Sync {
    fn score(&self, resume: &Resume) -> ScoreReport;

    /// Short name surfaced in logs.
    fn backend(&self) -> &'static str;
}

/// The fixed 100-point rubric from [`engine`].
pub struct RubricScorer;

impl ResumeScorer for RubricScorer {
    fn score(&self, resume: &Resume) -> ScoreReport {
        engine::score(resume)
    }

    fn backend(&self) -> &'static str {
        "rubric"
    }
}
