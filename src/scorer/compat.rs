use super::color::{is_neutral, NAVY, WHITE};
use super::types::{CompatibilityResult, REASON_BASIC};
use crate::config::ScoringWeights;
use crate::wardrobe::WardrobeItem;

/// Scores how well `candidate` works next to `anchor`, starting from the
/// base score and applying each rule additively. Order matters: the
/// category-pairing bonuses are keyed on the anchor's side, so callers
/// always pass (anchor, candidate) in that fixed order.
pub fn compatibility(
    w: &ScoringWeights,
    anchor: &WardrobeItem,
    candidate: &WardrobeItem,
) -> CompatibilityResult {
    if anchor.id == candidate.id {
        return CompatibilityResult {
            score: 0,
            reasons: vec!["Same item"],
        };
    }
    // Exact label equality only: Jacket vs Overshirt are distinct slots
    // and must never collide here.
    if anchor
        .category_name
        .eq_ignore_ascii_case(&candidate.category_name)
    {
        return CompatibilityResult {
            score: 0,
            reasons: vec!["Same category"],
        };
    }

    let mut score = w.base_compat;
    let mut reasons: Vec<&'static str> = Vec::new();

    // Formality distance ladder, only when both sides carry a score.
    if let (Some(a), Some(c)) = (anchor.formality_score, candidate.formality_score) {
        let d = (i32::from(a) - i32::from(c)).abs();
        if d <= 1 {
            score += w.bonus_formality_perfect;
            reasons.push("Perfect formality match");
        } else if d <= 2 {
            score += w.bonus_formality_good;
            reasons.push("Good formality match");
        } else if d <= 3 {
            score += w.bonus_formality_acceptable;
            reasons.push("Acceptable formality match");
        } else {
            score -= w.penalty_formality_mismatch;
            reasons.push("Formality mismatch");
        }
    }

    // Color chain, only when both sides carry a color. Exactly one branch
    // applies; the white/navy versatility checks outrank the shared-neutral
    // bonus, which covers the remaining neutral pairs (black/grey, beige,
    // khaki, brown, cream).
    if let (Some(a), Some(c)) = (anchor.color_key(), candidate.color_key()) {
        if a == c {
            score += w.bonus_color_match;
            reasons.push("Matching colors");
        } else if a == WHITE || c == WHITE {
            score += w.bonus_color_white;
            reasons.push("White versatility");
        } else if a == NAVY || c == NAVY {
            score += w.bonus_color_navy;
            reasons.push("Navy versatility");
        } else if is_neutral(&a) && is_neutral(&c) {
            score += w.bonus_color_neutral;
            reasons.push("Neutral color harmony");
        } else {
            score += w.bonus_color_contrast;
            reasons.push("Color contrast");
        }
    }

    // Category pairings: independent additive checks. An anchor label that
    // matches several substrings ("Overshirt" hits both the outer-layer
    // and the shirt branch) collects every applicable bonus.
    let a_cat = anchor.category_name.to_lowercase();
    let c_cat = candidate.category_name.to_lowercase();

    if a_cat.contains("jacket") || a_cat.contains("overshirt") {
        if c_cat.contains("shirt") {
            score += w.bonus_pair_jacket_shirt;
            reasons.push("Jacket-shirt pairing");
        }
        if c_cat.contains("pants") {
            score += w.bonus_pair_jacket_pants;
            reasons.push("Jacket-pants pairing");
        }
    }
    if a_cat.contains("shirt") {
        if c_cat.contains("pants") {
            score += w.bonus_pair_shirt_pants;
            reasons.push("Shirt-pants core pairing");
        }
        if c_cat.contains("shoes") {
            score += w.bonus_pair_shirt_shoes;
            reasons.push("Shirt-shoes pairing");
        }
    }
    if a_cat.contains("pants") {
        if c_cat.contains("shoes") {
            score += w.bonus_pair_pants_shoes;
            reasons.push("Pants-shoes pairing");
        }
        if c_cat.contains("belt") {
            score += w.bonus_pair_pants_belt;
            reasons.push("Pants-belt pairing");
        }
    }

    if reasons.is_empty() {
        reasons.push(REASON_BASIC);
    }

    CompatibilityResult {
        score: score.clamp(0, 100) as u8,
        reasons,
    }
}
