use clap::Args;
use fitforge::classifier::{classify, CategorySlot};
use fitforge::error::{FfResult, FitForgeError};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct MigrateArgs {
    /// Legacy item export (id,name,category,formality,color).
    #[arg(short, long)]
    pub input: String,

    /// Destination for the reclassified export.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Report the changes without writing anything.
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegacyRecord {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub formality: Option<u8>,
    #[serde(default)]
    pub color: Option<String>,
}

/// One row's new category: mapped labels are normalized to canonical
/// casing, everything else (the legacy combined "Outerwear" bucket) runs
/// through the classifier.
fn reclassify(record: &LegacyRecord) -> String {
    match CategorySlot::from_label(&record.category) {
        Some(slot) => slot.label().to_string(),
        None => classify(&record.name, record.formality).label().to_string(),
    }
}

pub fn run(args: MigrateArgs) -> FfResult<()> {
    let mut reader = csv::Reader::from_path(&args.input)?;
    let records: Vec<LegacyRecord> = reader.deserialize().collect::<Result<_, _>>()?;
    info!(count = records.len(), input = %args.input, "loaded legacy records");

    let migrated: Vec<LegacyRecord> = records
        .par_iter()
        .map(|record| LegacyRecord {
            category: reclassify(record),
            ..record.clone()
        })
        .collect();

    let changed: Vec<(&LegacyRecord, &LegacyRecord)> = records
        .iter()
        .zip(&migrated)
        .filter(|(old, new)| !old.category.eq_ignore_ascii_case(&new.category))
        .collect();

    crate::reports::print_migration_report(&changed);
    info!(
        total = migrated.len(),
        reclassified = changed.len(),
        "migration pass complete"
    );

    if args.dry_run {
        println!("🔎 Dry run: no file written.");
        return Ok(());
    }

    let output = args.output.ok_or_else(|| {
        FitForgeError::Config("--output is required unless --dry-run is set".to_string())
    })?;
    let mut writer = csv::Writer::from_path(&output)?;
    for record in &migrated {
        writer.serialize(record)?;
    }
    writer.flush()?;
    println!("✅ Wrote {} records to {}", migrated.len(), output);
    Ok(())
}
