/// Colors that mix freely with anything else in the set. Both grey
/// spellings appear because the wardrobe data is free text.
pub const NEUTRALS: [&str; 9] = [
    "white", "black", "grey", "gray", "navy", "cream", "beige", "khaki", "brown",
];

pub const WHITE: &str = "white";
pub const NAVY: &str = "navy";

/// Expects a lowercased color key.
pub fn is_neutral(color: &str) -> bool {
    NEUTRALS.contains(&color)
}
