use crate::reports;
use clap::Args;
use fitforge::classifier::CategorySlot;
use fitforge::config::Config;
use fitforge::error::{FfResult, FitForgeError};
use fitforge::scorer::Scorer;
use fitforge::selection::{SelectOutcome, SelectRejection, SelectionEngine, TuckStyle};
use fitforge::wardrobe::Wardrobe;
use std::sync::Arc;

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub config: Config,

    /// Wardrobe JSON export.
    #[arg(short, long)]
    pub wardrobe: String,

    /// Item id that anchors the session.
    #[arg(short, long)]
    pub anchor: String,

    /// Additional item ids to place, comma separated.
    #[arg(short, long, value_delimiter = ',')]
    pub pick: Vec<String>,

    /// Tuck style: tucked or untucked.
    #[arg(long, default_value = "untucked")]
    pub tuck: String,
}

pub fn run(args: ScoreArgs) -> FfResult<()> {
    let wardrobe = Wardrobe::load_from_file(&args.wardrobe)?;
    println!("📂 Loaded {} items from {}", wardrobe.len(), args.wardrobe);

    let anchor = wardrobe.get(&args.anchor).ok_or_else(|| {
        FitForgeError::Validation(format!("Unknown anchor id '{}'", args.anchor))
    })?;

    let tuck: TuckStyle = args.tuck.trim().to_lowercase().parse().map_err(|_| {
        FitForgeError::Config(format!("Invalid tuck style '{}'", args.tuck))
    })?;

    let scorer = Scorer::new(args.config.weights.clone());
    let mut engine =
        SelectionEngine::with_anchor(scorer, &args.config.selection, Arc::clone(anchor));
    engine.set_tuck_style(tuck);

    for id in &args.pick {
        let item = wardrobe.get(id).ok_or_else(|| {
            FitForgeError::Validation(format!("Unknown item id '{}'", id))
        })?;
        let slot = CategorySlot::from_label(&item.category_name).ok_or_else(|| {
            FitForgeError::Validation(format!(
                "Item '{}' has category '{}', which maps to no slot",
                item.name, item.category_name
            ))
        })?;

        match engine.select(slot, Some(Arc::clone(item))) {
            SelectOutcome::Rejected(SelectRejection::LockedSlot) => {
                println!(
                    "⚠️  '{}' skipped: the {} slot is locked by the anchor.",
                    item.name,
                    slot.label()
                );
            }
            SelectOutcome::Rejected(SelectRejection::CategoryMismatch) => {
                println!(
                    "⚠️  '{}' skipped: it does not belong in the {} slot.",
                    item.name,
                    slot.label()
                );
            }
            SelectOutcome::Applied | SelectOutcome::Noop => {}
        }
    }

    let breakdown = engine.flush();

    reports::print_selection_grid(engine.selection());
    reports::print_breakdown_report(&breakdown, engine.is_valid());

    let candidates = engine.candidates(&wardrobe);
    reports::print_candidate_report(&candidates, args.config.selection.candidate_limit);

    Ok(())
}
