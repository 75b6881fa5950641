use criterion::{criterion_group, criterion_main, Criterion};
use fitforge::classifier::CategorySlot;
use fitforge::config::SelectionParams;
use fitforge::scorer::Scorer;
use fitforge::selection::SelectionEngine;
use fitforge::wardrobe::{Wardrobe, WardrobeItem};
use std::collections::BTreeSet;
use std::hint::black_box;
use std::sync::Arc;

fn item(id: &str, name: &str, category: &str, formality: u8, color: &str) -> Arc<WardrobeItem> {
    Arc::new(WardrobeItem {
        id: id.to_string(),
        name: name.to_string(),
        category_name: category.to_string(),
        color: Some(color.to_string()),
        formality_score: Some(formality),
        capsule_tags: BTreeSet::new(),
        season: BTreeSet::new(),
    })
}

fn setup_wardrobe() -> Wardrobe {
    let categories = ["Jacket", "Overshirt", "Shirt", "Pants", "Shoes", "Belt"];
    let colors = ["White", "Navy", "Black", "Grey", "Red"];
    let mut items = Vec::new();
    for i in 0..120 {
        let category = categories[i % categories.len()];
        let color = colors[i % colors.len()];
        items.push(item(
            &format!("i{}", i),
            &format!("{} {}", color, category),
            category,
            (i % 10 + 1) as u8,
            color,
        ));
    }
    Wardrobe { items }
}

fn setup_engine(wardrobe: &Wardrobe) -> SelectionEngine {
    let anchor = Arc::clone(wardrobe.get("i0").expect("anchor present"));
    let mut engine =
        SelectionEngine::with_anchor(Scorer::default(), &SelectionParams::default(), anchor);
    engine.select(
        CategorySlot::Shirt,
        Some(Arc::clone(wardrobe.get("i2").unwrap())),
    );
    engine.select(
        CategorySlot::Pants,
        Some(Arc::clone(wardrobe.get("i3").unwrap())),
    );
    engine.select(
        CategorySlot::Shoes,
        Some(Arc::clone(wardrobe.get("i4").unwrap())),
    );
    engine
}

fn criterion_benchmark(c: &mut Criterion) {
    let wardrobe = setup_wardrobe();
    let engine = setup_engine(&wardrobe);
    let scorer = Scorer::default();
    let anchor = wardrobe.get("i0").unwrap();
    let candidate = wardrobe.get("i2").unwrap();

    c.bench_function("pairwise compatibility", |b| {
        b.iter(|| scorer.compatibility(black_box(anchor), black_box(candidate)))
    });

    c.bench_function("outfit score (4 slots)", |b| {
        b.iter(|| black_box(&engine).score_now())
    });

    c.bench_function("candidate ranking (120 items)", |b| {
        b.iter(|| black_box(&engine).candidates(black_box(&wardrobe)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
