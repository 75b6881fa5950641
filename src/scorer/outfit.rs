use super::color::is_neutral;
use super::types::ScoreBreakdown;
use crate::classifier::CategorySlot;
use crate::config::ScoringWeights;
use crate::selection::OutfitSelection;
use std::collections::{BTreeMap, BTreeSet};

/// Formality sub-score when no occupied slot is in formality scope.
const FORMALITY_UNKNOWN: u8 = 50;

/// Too few items for colors to conflict.
const COLOR_TOO_FEW_ITEMS: u8 = 80;
/// Items present but fewer than two known colors.
const COLOR_TOO_FEW_KNOWN: u8 = 70;
const COLOR_BASE: i32 = 60;
const COLOR_NEUTRAL_BONUS: i32 = 20;
const COLOR_TIGHT_PALETTE_BONUS: i32 = 15;
/// Share of known colors that must be neutral for the harmony bonus.
const NEUTRAL_SHARE: f32 = 0.7;

/// Every concrete season set in the outfit overlaps.
const SEASON_ALIGNED: u8 = 85;
/// At least one item is out of season relative to the rest.
const SEASON_CLASH: u8 = 55;

/// Some capsule tag is shared by two or more items.
const STYLE_SHARED: u8 = 85;
/// Items are tagged but agree on nothing.
const STYLE_DIVERGENT: u8 = 60;

/// Aggregate score for a whole selection. Pure and idempotent: repeat
/// calls on an unchanged selection are bit-identical. An empty selection
/// scores zero across the board.
pub fn score_outfit(w: &ScoringWeights, selection: &OutfitSelection) -> ScoreBreakdown {
    if selection.is_empty() {
        return ScoreBreakdown::default();
    }

    let formality = formality_score(selection);
    let color_harmony = color_harmony_score(selection);
    let seasonal = seasonal_score(w, selection);
    let style = style_score(w, selection);

    let total = (f32::from(formality) * w.weight_formality
        + f32::from(color_harmony) * w.weight_color_harmony
        + f32::from(seasonal) * w.weight_seasonal
        + f32::from(style) * w.weight_style)
        .round()
        .clamp(0.0, 100.0) as u8;

    ScoreBreakdown {
        formality,
        color_harmony,
        seasonal,
        style,
        total,
    }
}

/// Population variance of the occupied non-accessory slots' formality,
/// mapped so a flat outfit scores 100 and the score drops 10 per unit of
/// variance down to 0. Missing formality defaults per item.
fn formality_score(selection: &OutfitSelection) -> u8 {
    let values: Vec<f32> = selection
        .occupied()
        .filter(|(slot, _)| !slot.is_accessory())
        .map(|(_, item)| f32::from(item.formality_or_default()))
        .collect();
    if values.is_empty() {
        return FORMALITY_UNKNOWN;
    }

    let mean = values.iter().sum::<f32>() / values.len() as f32;
    let variance = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f32>() / values.len() as f32;

    (100.0 - variance * 10.0).round().max(0.0) as u8
}

/// The watch slot sits out of color harmony entirely.
fn color_harmony_score(selection: &OutfitSelection) -> u8 {
    let items: Vec<_> = selection
        .occupied()
        .filter(|(slot, _)| *slot != CategorySlot::Watch)
        .map(|(_, item)| item)
        .collect();
    if items.len() < 2 {
        return COLOR_TOO_FEW_ITEMS;
    }

    let known: Vec<String> = items.iter().filter_map(|item| item.color_key()).collect();
    if known.len() < 2 {
        return COLOR_TOO_FEW_KNOWN;
    }

    let mut score = COLOR_BASE;
    let neutral_count = known.iter().filter(|c| is_neutral(c)).count();
    if neutral_count as f32 / known.len() as f32 >= NEUTRAL_SHARE {
        score += COLOR_NEUTRAL_BONUS;
    }
    let distinct: BTreeSet<&String> = known.iter().collect();
    if distinct.len() <= 2 {
        score += COLOR_TIGHT_PALETTE_BONUS;
    }

    score.clamp(0, 100) as u8
}

/// Intersects the concrete season sets across the outfit; year-round
/// items act as wildcards. With no concrete data the baseline applies.
fn seasonal_score(w: &ScoringWeights, selection: &OutfitSelection) -> u8 {
    let concrete: Vec<BTreeSet<String>> = selection
        .occupied()
        .map(|(_, item)| item.concrete_seasons())
        .filter(|seasons| !seasons.is_empty())
        .collect();
    if concrete.is_empty() {
        return w.baseline_seasonal;
    }

    let mut sets = concrete.iter();
    let mut overlap = sets.next().cloned().unwrap_or_default();
    for set in sets {
        overlap = overlap.intersection(set).cloned().collect();
    }

    if overlap.is_empty() {
        SEASON_CLASH
    } else {
        SEASON_ALIGNED
    }
}

/// Looks for a capsule tag shared across items. A lone tagged item has
/// nothing to agree with, so the baseline applies there too.
fn style_score(w: &ScoringWeights, selection: &OutfitSelection) -> u8 {
    let tag_sets: Vec<BTreeSet<String>> = selection
        .occupied()
        .map(|(_, item)| {
            item.capsule_tags
                .iter()
                .map(|t| t.trim().to_lowercase())
                .filter(|t| !t.is_empty())
                .collect::<BTreeSet<String>>()
        })
        .filter(|tags| !tags.is_empty())
        .collect();
    if tag_sets.len() < 2 {
        return w.baseline_style;
    }

    let mut counts: BTreeMap<&String, usize> = BTreeMap::new();
    for set in &tag_sets {
        for tag in set {
            *counts.entry(tag).or_default() += 1;
        }
    }

    if counts.values().any(|&c| c >= 2) {
        STYLE_SHARED
    } else {
        STYLE_DIVERGENT
    }
}
