use serde::{Deserialize, Serialize};

/// Fallback reason when no rule contributed either way.
pub const REASON_BASIC: &str = "Basic compatibility";

/// Pairwise anchor/candidate verdict. `reasons` is never empty and lists
/// the contributing rules in application order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompatibilityResult {
    pub score: u8,
    pub reasons: Vec<&'static str>,
}

impl CompatibilityResult {
    /// Result for a candidate scored with no anchor to compare against.
    pub fn baseline(score: i32) -> Self {
        Self {
            score: score.clamp(0, 100) as u8,
            reasons: vec![REASON_BASIC],
        }
    }
}

/// Aggregate outfit verdict: four sub-scores plus their weighted blend,
/// every field an integer in [0, 100].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub formality: u8,
    pub color_harmony: u8,
    pub seasonal: u8,
    pub style: u8,
    pub total: u8,
}
