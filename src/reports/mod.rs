use crate::cmd::migrate::LegacyRecord;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use fitforge::classifier::CategorySlot;
use fitforge::scorer::ScoreBreakdown;
use fitforge::selection::{OutfitSelection, RankedCandidate};
use std::collections::BTreeMap;
use strum::IntoEnumIterator;

pub fn print_selection_grid(selection: &OutfitSelection) {
    println!("\n👔 === SELECTION === 👔");
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Slot").add_attribute(Attribute::Bold),
        Cell::new("Item"),
        Cell::new("Color"),
        Cell::new("Formality"),
    ]);

    for slot in CategorySlot::iter() {
        let (name, color, formality) = match selection.get(slot) {
            Some(item) => (
                item.name.clone(),
                item.color.clone().unwrap_or_else(|| "-".to_string()),
                item.formality_score
                    .map(|f| f.to_string())
                    .unwrap_or_else(|| "-".to_string()),
            ),
            None => ("(empty)".to_string(), "-".to_string(), "-".to_string()),
        };
        table.add_row(vec![
            Cell::new(slot.label()),
            Cell::new(name),
            Cell::new(color),
            Cell::new(formality).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{}", table);
    println!("Tuck style: {}", selection.tuck_style);
}

pub fn print_breakdown_report(breakdown: &ScoreBreakdown, is_valid: bool) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    table.add_row(vec![
        Cell::new("Formality").add_attribute(Attribute::Bold),
        Cell::new("Color"),
        Cell::new("Season"),
        Cell::new("Style"),
        Cell::new("Total").fg(Color::Cyan).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new(breakdown.formality).set_alignment(CellAlignment::Right),
        Cell::new(breakdown.color_harmony).set_alignment(CellAlignment::Right),
        Cell::new(breakdown.seasonal).set_alignment(CellAlignment::Right),
        Cell::new(breakdown.style).set_alignment(CellAlignment::Right),
        Cell::new(breakdown.total)
            .set_alignment(CellAlignment::Right)
            .fg(Color::Cyan),
    ]);

    println!("\n📊 === OUTFIT SCORE === 📊");
    println!("{}", table);
    if is_valid {
        println!("✅ Saveable (shirt and pants are in place).");
    } else {
        println!("⚠️  Not saveable yet: a shirt and pants are required.");
    }
}

pub fn print_candidate_report(
    candidates: &BTreeMap<CategorySlot, Vec<RankedCandidate>>,
    limit: usize,
) {
    println!("\n🧮 === CANDIDATES (vs anchor) === 🧮");
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Slot").add_attribute(Attribute::Bold),
        Cell::new("Item"),
        Cell::new("Score").fg(Color::Cyan),
        Cell::new("Reasons"),
    ]);

    for (slot, ranked) in candidates {
        for candidate in ranked.iter().take(limit) {
            table.add_row(vec![
                Cell::new(slot.label()),
                Cell::new(&candidate.item.name),
                Cell::new(candidate.result.score).set_alignment(CellAlignment::Right),
                Cell::new(candidate.result.reasons.join("; ")),
            ]);
        }
    }
    println!("{}", table);
}

pub fn print_migration_report(changed: &[(&LegacyRecord, &LegacyRecord)]) {
    if changed.is_empty() {
        println!("No category changes.");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Id").add_attribute(Attribute::Bold),
        Cell::new("Item"),
        Cell::new("Old Category").fg(Color::Red),
        Cell::new("New Category").fg(Color::Green),
    ]);

    for (old, new) in changed {
        table.add_row(vec![
            Cell::new(&old.id),
            Cell::new(&old.name),
            Cell::new(&old.category),
            Cell::new(&new.category),
        ]);
    }
    println!("{}", table);
}
