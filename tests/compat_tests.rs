use fitforge::scorer::Scorer;
use fitforge::wardrobe::WardrobeItem;
use rstest::rstest;
use std::collections::BTreeSet;

fn item(
    id: &str,
    name: &str,
    category: &str,
    formality: Option<u8>,
    color: Option<&str>,
) -> WardrobeItem {
    WardrobeItem {
        id: id.to_string(),
        name: name.to_string(),
        category_name: category.to_string(),
        color: color.map(|c| c.to_string()),
        formality_score: formality,
        capsule_tags: BTreeSet::new(),
        season: BTreeSet::new(),
    }
}

fn scorer() -> Scorer {
    Scorer::default()
}

// --- SHORT CIRCUITS ---
#[test]
fn test_same_item_scores_zero() {
    let jacket = item("j1", "Navy Blazer", "Jacket", Some(8), Some("Navy"));
    let result = scorer().compatibility(&jacket, &jacket);
    assert_eq!(result.score, 0);
    assert_eq!(result.reasons, vec!["Same item"]);
}

#[test]
fn test_same_category_scores_zero() {
    let a = item("o1", "Cardigan", "Overshirt", Some(5), Some("Grey"));
    let b = item("o2", "Cardigan", "Overshirt", Some(5), Some("Navy"));
    let result = scorer().compatibility(&a, &b);
    assert_eq!(result.score, 0);
    assert_eq!(result.reasons, vec!["Same category"]);
}

#[test]
fn test_same_category_is_case_insensitive() {
    let a = item("s1", "OCBD", "Shirt", None, None);
    let b = item("s2", "Tee", "shirt", None, None);
    let result = scorer().compatibility(&a, &b);
    assert_eq!(result.score, 0);
    assert_eq!(result.reasons, vec!["Same category"]);
}

#[test]
fn test_jacket_and_overshirt_are_distinct_categories() {
    let jacket = item("j1", "Navy Blazer", "Jacket", None, None);
    let overshirt = item("o1", "Cardigan", "Overshirt", None, None);
    let result = scorer().compatibility(&jacket, &overshirt);
    // Never the same-category rejection: the two outer layers are
    // independent slots, and "overshirt" even earns the shirt pairing.
    assert_eq!(result.score, 58);
    assert_eq!(result.reasons, vec!["Jacket-shirt pairing"]);
}

// --- REFERENCE SCENARIO ---
#[test]
fn test_navy_jacket_with_white_shirt() {
    let anchor = item("j1", "Navy Blazer", "Jacket", Some(8), Some("Navy"));
    let candidate = item("s1", "White OCBD", "Shirt", Some(7), Some("White"));
    let result = scorer().compatibility(&anchor, &candidate);
    assert_eq!(result.score, 95);
    assert_eq!(
        result.reasons,
        vec![
            "Perfect formality match",
            "White versatility",
            "Jacket-shirt pairing"
        ]
    );
}

// --- FORMALITY LADDER ---
// Watch/Undershirt sidestep every pairing bonus, isolating the ladder.
#[rstest]
#[case(5, 5, 75, "Perfect formality match")]
#[case(5, 6, 75, "Perfect formality match")]
#[case(5, 7, 65, "Good formality match")]
#[case(5, 8, 55, "Acceptable formality match")]
#[case(5, 9, 40, "Formality mismatch")]
#[case(9, 2, 40, "Formality mismatch")]
fn test_formality_ladder(
    #[case] anchor_formality: u8,
    #[case] candidate_formality: u8,
    #[case] expected_score: u8,
    #[case] expected_reason: &str,
) {
    let anchor = item("w1", "Field Watch", "Watch", Some(anchor_formality), None);
    let candidate = item(
        "u1",
        "White Tee",
        "Undershirt",
        Some(candidate_formality),
        None,
    );
    let result = scorer().compatibility(&anchor, &candidate);
    assert_eq!(result.score, expected_score);
    assert_eq!(result.reasons, vec![expected_reason]);
}

#[test]
fn test_formality_skipped_when_one_side_missing() {
    let anchor = item("w1", "Field Watch", "Watch", Some(5), None);
    let candidate = item("sh1", "Loafers", "Shoes", None, None);
    let result = scorer().compatibility(&anchor, &candidate);
    assert_eq!(result.score, 50);
    assert_eq!(result.reasons, vec!["Basic compatibility"]);
}

// --- COLOR CHAIN ---
// One branch per pair; colors compared lowercased.
#[rstest]
#[case("Olive", "olive", 65, "Matching colors")]
#[case("White", "Red", 62, "White versatility")]
#[case("Black", "WHITE", 62, "White versatility")]
#[case("Navy", "Red", 58, "Navy versatility")]
#[case("Black", "Navy", 58, "Navy versatility")]
#[case("Black", "Grey", 70, "Neutral color harmony")]
#[case("Beige", "Brown", 70, "Neutral color harmony")]
#[case("Red", "Green", 52, "Color contrast")]
fn test_color_chain(
    #[case] anchor_color: &str,
    #[case] candidate_color: &str,
    #[case] expected_score: u8,
    #[case] expected_reason: &str,
) {
    let anchor = item("w1", "Field Watch", "Watch", None, Some(anchor_color));
    let candidate = item("u1", "Tee", "Undershirt", None, Some(candidate_color));
    let result = scorer().compatibility(&anchor, &candidate);
    assert_eq!(result.score, expected_score);
    assert_eq!(result.reasons, vec![expected_reason]);
}

#[test]
fn test_color_skipped_when_missing() {
    let anchor = item("w1", "Field Watch", "Watch", None, Some("Black"));
    let candidate = item("sh1", "Loafers", "Shoes", None, None);
    let result = scorer().compatibility(&anchor, &candidate);
    assert_eq!(result.score, 50);
    assert_eq!(result.reasons, vec!["Basic compatibility"]);
}

// --- CATEGORY PAIRINGS ---
#[rstest]
#[case("Jacket", "Shirt", 58, vec!["Jacket-shirt pairing"])]
#[case("Jacket", "Pants", 56, vec!["Jacket-pants pairing"])]
#[case("Shirt", "Pants", 60, vec!["Shirt-pants core pairing"])]
#[case("Shirt", "Shoes", 55, vec!["Shirt-shoes pairing"])]
#[case("Pants", "Shoes", 58, vec!["Pants-shoes pairing"])]
#[case("Pants", "Belt", 56, vec!["Pants-belt pairing"])]
// An "Overshirt" anchor matches both the outer-layer and the shirt branch.
#[case("Overshirt", "Pants", 66, vec!["Jacket-pants pairing", "Shirt-pants core pairing"])]
#[case("Overshirt", "Shoes", 55, vec!["Shirt-shoes pairing"])]
// "Undershirt" candidates count as shirts for the outer-layer bonus.
#[case("Jacket", "Undershirt", 58, vec!["Jacket-shirt pairing"])]
fn test_category_pairings(
    #[case] anchor_category: &str,
    #[case] candidate_category: &str,
    #[case] expected_score: u8,
    #[case] expected_reasons: Vec<&str>,
) {
    let anchor = item("a1", "Anchor", anchor_category, None, None);
    let candidate = item("c1", "Candidate", candidate_category, None, None);
    let result = scorer().compatibility(&anchor, &candidate);
    assert_eq!(result.score, expected_score);
    assert_eq!(result.reasons, expected_reasons);
}

#[test]
fn test_pairing_is_anchor_keyed() {
    // Reversing the arguments changes the applicable pairing rules.
    let shirt = item("s1", "OCBD", "Shirt", None, None);
    let pants = item("p1", "Chinos", "Pants", None, None);
    let forward = scorer().compatibility(&shirt, &pants);
    let reverse = scorer().compatibility(&pants, &shirt);
    assert_eq!(forward.score, 60);
    assert_eq!(reverse.score, 50);
    assert_eq!(reverse.reasons, vec!["Basic compatibility"]);
}

// --- CLAMPING & FALLBACK ---
#[test]
fn test_score_clamped_to_100() {
    // 50 + 25 + 20 + 6 + 10 = 111 before the clamp.
    let anchor = item("o1", "Shacket", "Overshirt", Some(5), Some("Black"));
    let candidate = item("p1", "Wool Trousers", "Pants", Some(5), Some("Grey"));
    let result = scorer().compatibility(&anchor, &candidate);
    assert_eq!(result.score, 100);
    assert_eq!(result.reasons.len(), 4);
}

#[test]
fn test_basic_compatibility_fallback() {
    let anchor = item("w1", "Field Watch", "Watch", None, None);
    let candidate = item("sh1", "Loafers", "Shoes", None, None);
    let result = scorer().compatibility(&anchor, &candidate);
    assert_eq!(result.score, 50);
    assert_eq!(result.reasons, vec!["Basic compatibility"]);
}
