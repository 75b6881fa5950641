use crate::wardrobe::WardrobeItem;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// One named position in an outfit, in layering order. Each slot holds at
/// most one item; the closed enum keeps every match site exhaustive.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum CategorySlot {
    Jacket,
    Overshirt,
    Shirt,
    Undershirt,
    Pants,
    Shoes,
    Belt,
    Watch,
}

impl CategorySlot {
    /// Canonical wardrobe label for this slot.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Jacket => "Jacket",
            Self::Overshirt => "Overshirt",
            Self::Shirt => "Shirt",
            Self::Undershirt => "Undershirt",
            Self::Pants => "Pants",
            Self::Shoes => "Shoes",
            Self::Belt => "Belt",
            Self::Watch => "Watch",
        }
    }

    /// Maps a free-form category label to its slot. Unmapped labels hold
    /// no slot and the item is dropped from slot-based flows.
    pub fn from_label(label: &str) -> Option<Self> {
        label.trim().to_lowercase().parse().ok()
    }

    /// Belt and watch sit outside the formality ladder.
    pub fn is_accessory(&self) -> bool {
        matches!(self, Self::Belt | Self::Watch)
    }
}

fn contains_any(name: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| name.contains(n))
}

/// Splits outer-layer garments into `Jacket` vs `Overshirt` from the name
/// and optional formality. Ordered rules, first match wins; earlier rules
/// encode the more specific patterns. Total: always returns a label.
pub fn classify(name: &str, formality: Option<u8>) -> CategorySlot {
    let name = name.to_lowercase();

    // Structured outerwear
    if contains_any(
        &name,
        &[
            "coat",
            "blazer",
            "sportcoat",
            "sport coat",
            "peacoat",
            "pea coat",
            "trench",
            "mac",
        ],
    ) {
        return CategorySlot::Jacket;
    }

    // Casual outerwear silhouettes
    if contains_any(
        &name,
        &["moto", "leather jacket", "bomber", "gilet", "vest"],
    ) {
        return CategorySlot::Jacket;
    }

    // Anything dressy that calls itself a jacket
    if formality.is_some_and(|f| f >= 7) && name.contains("jacket") {
        return CategorySlot::Jacket;
    }

    // Tailoring
    if contains_any(
        &name,
        &["suit jacket", "dinner jacket", "tuxedo", "smoking jacket"],
    ) {
        return CategorySlot::Jacket;
    }

    // Knitwear
    if contains_any(
        &name,
        &["cardigan", "sweater", "knit", "pullover", "hoodie", "sweatshirt"],
    ) {
        return CategorySlot::Overshirt;
    }

    // Shirt-weight layers
    if contains_any(
        &name,
        &["shacket", "overshirt", "shirt jacket", "flannel", "chambray"],
    ) {
        return CategorySlot::Overshirt;
    }

    // Casual mid-layers by formality
    if formality.is_some_and(|f| f <= 6) && contains_any(&name, &["layer", "light", "casual"]) {
        return CategorySlot::Overshirt;
    }
    if formality.is_some_and(|f| f <= 5) {
        return CategorySlot::Overshirt;
    }

    CategorySlot::Overshirt
}

/// Resolves the slot an item occupies: direct label lookup first, falling
/// back to the outer-layer classifier for legacy combined labels
/// ("Outerwear" exports that predate the jacket/overshirt split).
pub fn resolve_slot(item: &WardrobeItem) -> CategorySlot {
    CategorySlot::from_label(&item.category_name)
        .unwrap_or_else(|| classify(&item.name, item.formality_score))
}
