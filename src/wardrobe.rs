use crate::error::{FfResult, FitForgeError};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Formality assumed for an item that carries no formality score.
pub const DEFAULT_FORMALITY: u8 = 5;

/// Season sentinel meaning "wearable year-round".
pub const SEASON_ALL: &str = "all";

/// A single garment as supplied by the wardrobe store. Immutable once
/// loaded; the engine only ever borrows it to classify, filter, and score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WardrobeItem {
    pub id: String,
    pub name: String,
    pub category_name: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub formality_score: Option<u8>,
    #[serde(default)]
    pub capsule_tags: BTreeSet<String>,
    #[serde(default)]
    pub season: BTreeSet<String>,
}

impl WardrobeItem {
    /// Formality on the 1-10 scale, defaulted and clamped. Out-of-range
    /// data degrades to the nearest bound instead of failing the scorer.
    pub fn formality_or_default(&self) -> u8 {
        self.formality_score.unwrap_or(DEFAULT_FORMALITY).clamp(1, 10)
    }

    /// Lowercased color, if the item has one worth comparing.
    pub fn color_key(&self) -> Option<String> {
        self.color
            .as_deref()
            .map(|c| c.trim().to_lowercase())
            .filter(|c| !c.is_empty())
    }

    /// Lowercased seasons with the year-round sentinel stripped out.
    pub fn concrete_seasons(&self) -> BTreeSet<String> {
        self.season
            .iter()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty() && s != SEASON_ALL)
            .collect()
    }
}

/// The full item collection supplied by the external wardrobe store.
/// Items are shared as `Arc` so a selection can hold slot occupants
/// without copying or writing back.
#[derive(Debug, Clone, Default)]
pub struct Wardrobe {
    pub items: Vec<Arc<WardrobeItem>>,
}

impl Wardrobe {
    pub fn new(items: Vec<WardrobeItem>) -> FfResult<Self> {
        let mut seen: HashSet<&str> = HashSet::new();
        for item in &items {
            if item.id.trim().is_empty() {
                return Err(FitForgeError::Validation(format!(
                    "Item '{}' has an empty id",
                    item.name
                )));
            }
            if !seen.insert(&item.id) {
                return Err(FitForgeError::Validation(format!(
                    "Duplicate item id '{}'",
                    item.id
                )));
            }
        }
        Ok(Self {
            items: items.into_iter().map(Arc::new).collect(),
        })
    }

    pub fn get(&self, id: &str) -> Option<&Arc<WardrobeItem>> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn load_from_reader<R: Read>(reader: R) -> FfResult<Self> {
        let items: Vec<WardrobeItem> = serde_json::from_reader(reader)?;
        Self::new(items)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> FfResult<Self> {
        let file = File::open(path.as_ref())?;
        let wardrobe = Self::load_from_reader(BufReader::new(file))?;
        debug!(
            count = wardrobe.items.len(),
            path = %path.as_ref().display(),
            "wardrobe loaded"
        );
        Ok(wardrobe)
    }
}
