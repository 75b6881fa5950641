use clap::Args;

#[derive(Args, Debug, Clone, Default)]
pub struct Config {
    #[command(flatten)]
    pub weights: ScoringWeights,
    #[command(flatten)]
    pub selection: SelectionParams,
}

/// Every rule increment the scorers apply, as overridable named defaults.
/// The defaults are the shipped rule set.
#[derive(Args, Debug, Clone)]
pub struct ScoringWeights {
    // === PAIRWISE BASE ===
    #[arg(long, default_value_t = 50)]
    pub base_compat: i32,

    // === FORMALITY LADDER (by distance) ===
    #[arg(long, default_value_t = 25)]
    pub bonus_formality_perfect: i32,
    #[arg(long, default_value_t = 15)]
    pub bonus_formality_good: i32,
    #[arg(long, default_value_t = 5)]
    pub bonus_formality_acceptable: i32,
    #[arg(long, default_value_t = 10)]
    pub penalty_formality_mismatch: i32,

    // === COLOR ===
    #[arg(long, default_value_t = 15)]
    pub bonus_color_match: i32,
    #[arg(long, default_value_t = 20)]
    pub bonus_color_neutral: i32,
    #[arg(long, default_value_t = 12)]
    pub bonus_color_white: i32,
    #[arg(long, default_value_t = 8)]
    pub bonus_color_navy: i32,
    #[arg(long, default_value_t = 2)]
    pub bonus_color_contrast: i32,

    // === CATEGORY PAIRINGS ===
    #[arg(long, default_value_t = 8)]
    pub bonus_pair_jacket_shirt: i32,
    #[arg(long, default_value_t = 6)]
    pub bonus_pair_jacket_pants: i32,
    #[arg(long, default_value_t = 10)]
    pub bonus_pair_shirt_pants: i32,
    #[arg(long, default_value_t = 5)]
    pub bonus_pair_shirt_shoes: i32,
    #[arg(long, default_value_t = 8)]
    pub bonus_pair_pants_shoes: i32,
    #[arg(long, default_value_t = 6)]
    pub bonus_pair_pants_belt: i32,

    // === OUTFIT BLEND ===
    #[arg(long, default_value_t = 0.3)]
    pub weight_formality: f32,
    #[arg(long, default_value_t = 0.3)]
    pub weight_color_harmony: f32,
    #[arg(long, default_value_t = 0.2)]
    pub weight_seasonal: f32,
    #[arg(long, default_value_t = 0.2)]
    pub weight_style: f32,

    // === SUB-SCORER BASELINES ===
    // Returned when no seasonal/style data is wired in for the selection.
    #[arg(long, default_value_t = 75)]
    pub baseline_seasonal: u8,
    #[arg(long, default_value_t = 75)]
    pub baseline_style: u8,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            base_compat: 50,

            bonus_formality_perfect: 25,
            bonus_formality_good: 15,
            bonus_formality_acceptable: 5,
            penalty_formality_mismatch: 10,

            bonus_color_match: 15,
            bonus_color_neutral: 20,
            bonus_color_white: 12,
            bonus_color_navy: 8,
            bonus_color_contrast: 2,

            bonus_pair_jacket_shirt: 8,
            bonus_pair_jacket_pants: 6,
            bonus_pair_shirt_pants: 10,
            bonus_pair_shirt_shoes: 5,
            bonus_pair_pants_shoes: 8,
            bonus_pair_pants_belt: 6,

            weight_formality: 0.3,
            weight_color_harmony: 0.3,
            weight_seasonal: 0.2,
            weight_style: 0.2,

            baseline_seasonal: 75,
            baseline_style: 75,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct SelectionParams {
    /// Quiescence window (ms) before a dirty selection commits its score.
    #[arg(long, default_value_t = 150)]
    pub debounce_ms: u64,

    /// Candidates listed per slot in reports.
    #[arg(long, default_value_t = 5)]
    pub candidate_limit: usize,
}

impl Default for SelectionParams {
    fn default() -> Self {
        Self {
            debounce_ms: 150,
            candidate_limit: 5,
        }
    }
}
