use serde::{Deserialize, Serialize};

/// Tenths of the category maximum at or above which a category is `Excellent`.
pub const EXCELLENT_TENTHS: u64 = 8;
/// Tenths of the category maximum at or above which a category is `Good`.
pub const GOOD_TENTHS: u64 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoreStatus {
    Excellent,
    Good,
    NeedsImprovement,
}

impl ScoreStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ScoreStatus::Excellent => "Excellent",
            ScoreStatus::Good => "Good",
            ScoreStatus::NeedsImprovement => "Needs Improvement",
        }
    }
}

/// Classifies `earned / max`. A zero `max` classifies as `NeedsImprovement`.
///
/// Integer cross-multiplication keeps the cut lines exact: 16/20 is
/// excellent and 15/25 is good, with no float rounding at the boundary.
pub fn status_from_ratio(earned: u32, max: u32) -> ScoreStatus {
    if max == 0 {
        return ScoreStatus::NeedsImprovement;
    }
    let earned = u64::from(earned) * 10;
    let max = u64::from(max);
    if earned >= max * EXCELLENT_TENTHS {
        ScoreStatus::Excellent
    } else if earned >= max * GOOD_TENTHS {
        ScoreStatus::Good
    } else {
        ScoreStatus::NeedsImprovement
    }
}

/// Classifies against a category's absolute point cut lines, both inclusive.
/// Education's good line (8/15) is not on the 60% mark.
pub fn status_from_cut_lines(earned: u32, excellent: u32, good: u32) -> ScoreStatus {
    if earned >= excellent {
        ScoreStatus::Excellent
    } else if earned >= good {
        ScoreStatus::Good
    } else {
        ScoreStatus::NeedsImprovement
    }
}

/// Status for a whole-number percentage, used for the overall score.
pub fn status_from_percentage(percentage: u32) -> ScoreStatus {
    status_from_ratio(percentage, 100)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScore {
    pub label: String,
    pub score: u32,
    pub max_score: u32,
    pub status: ScoreStatus,
    pub suggestions: Vec<String>,
}

impl CategoryScore {
    pub fn with_cut_lines(
        label: &str,
        score: u32,
        max_score: u32,
        (excellent, good): (u32, u32),
        suggestions: Vec<String>,
    ) -> Self {
        Self {
            label: label.to_string(),
            score,
            max_score,
            status: status_from_cut_lines(score, excellent, good),
            suggestions,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport {
    pub items: Vec<CategoryScore>,
    pub total_score: u32,
    pub max_score: u32,
    /// `round(100 * total_score / max_score)`, 0–100.
    pub percentage: u32,
    pub status: ScoreStatus,
    pub status_label: String,
    pub suggestion_count: usize,
}

impl ScoreReport {
    pub fn from_items(items: Vec<CategoryScore>) -> Self {
        let total_score: u32 = items.iter().map(|i| i.score).sum();
        let max_score: u32 = items.iter().map(|i| i.max_score).sum();
        let percentage = round_percentage(total_score, max_score);
        let status = status_from_percentage(percentage);
        let suggestion_count = items.iter().map(|i| i.suggestions.len()).sum();

        Self {
            items,
            total_score,
            max_score,
            percentage,
            status,
            status_label: status.label().to_string(),
            suggestion_count,
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "Your resume is approximately {}% complete with {} suggestions",
            self.percentage, self.suggestion_count
        )
    }
}

/// Nearest whole percent, halves rounded up.
fn round_percentage(earned: u32, max: u32) -> u32 {
    if max == 0 {
        return 0;
    }
    let earned = u64::from(earned);
    let max = u64::from(max);
    ((earned * 200 + max) / (max * 2)).min(100) as u32
}
