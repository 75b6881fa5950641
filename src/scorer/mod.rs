pub mod color;
pub mod compat;
pub mod outfit;
pub mod types;

pub use self::types::{CompatibilityResult, ScoreBreakdown};

use crate::config::ScoringWeights;
use crate::selection::OutfitSelection;
use crate::wardrobe::WardrobeItem;

/// Owns the rule weights and exposes the two scoring paths. Both are pure
/// in-memory computations; nothing here blocks or fails.
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    pub weights: ScoringWeights,
}

impl Scorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    /// Pairwise anchor/candidate scoring (anchor side keys the pairing
    /// bonuses, so argument order matters).
    pub fn compatibility(
        &self,
        anchor: &WardrobeItem,
        candidate: &WardrobeItem,
    ) -> CompatibilityResult {
        compat::compatibility(&self.weights, anchor, candidate)
    }

    /// Aggregate scoring of a whole selection.
    pub fn score_outfit(&self, selection: &OutfitSelection) -> ScoreBreakdown {
        outfit::score_outfit(&self.weights, selection)
    }
}
