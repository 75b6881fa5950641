use crate::classifier::{resolve_slot, CategorySlot};
use crate::config::SelectionParams;
use crate::scorer::{CompatibilityResult, ScoreBreakdown, Scorer};
use crate::wardrobe::{Wardrobe, WardrobeItem};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumString};
use tracing::debug;

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TuckStyle {
    Tucked,
    #[default]
    Untucked,
}

/// The outfit under construction: at most one item per slot, and assigning
/// into an occupied slot replaces the previous occupant. Iteration order is
/// the slot enum's layering order, so reads are deterministic.
#[derive(Debug, Clone, Default)]
pub struct OutfitSelection {
    slots: BTreeMap<CategorySlot, Arc<WardrobeItem>>,
    pub tuck_style: TuckStyle,
}

impl OutfitSelection {
    pub fn get(&self, slot: CategorySlot) -> Option<&Arc<WardrobeItem>> {
        self.slots.get(&slot)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Occupied slots in layering order.
    pub fn occupied(&self) -> impl Iterator<Item = (CategorySlot, &WardrobeItem)> {
        self.slots.iter().map(|(slot, item)| (*slot, item.as_ref()))
    }
}

/// What a `select`/`toggle` call did. Refusals are reported here as plain
/// values; nothing in the state machine panics or throws, and a refused
/// call leaves the selection untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The slot map changed; the aggregate score is now pending a
    /// debounced commit.
    Applied,
    /// Nothing to do (clearing an already-empty slot).
    Noop,
    Rejected(SelectRejection),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectRejection {
    /// The anchor's own slot never changes for the life of the session.
    LockedSlot,
    /// The item's category label does not map to the target slot.
    CategoryMismatch,
}

/// A wardrobe item ranked against the session anchor for one slot.
#[derive(Debug, Clone)]
pub struct RankedCandidate {
    pub item: Arc<WardrobeItem>,
    pub result: CompatibilityResult,
}

/// Owns one outfit-in-progress: the slot map, the anchor lock, and the
/// debounced score commit. Mutations take `&mut self`, so a single owner
/// sees every update atomically; concurrent writers must serialize on the
/// outside (the api layer wraps sessions in a `Mutex`).
pub struct SelectionEngine {
    scorer: Scorer,
    selection: OutfitSelection,
    anchor: Option<(CategorySlot, Arc<WardrobeItem>)>,
    quiesce: Duration,
    dirty_since: Option<Instant>,
    committed: ScoreBreakdown,
}

impl SelectionEngine {
    /// Empty session: no anchor, no slots filled, committed score zero.
    pub fn new(scorer: Scorer, params: &SelectionParams) -> Self {
        Self {
            scorer,
            selection: OutfitSelection::default(),
            anchor: None,
            quiesce: Duration::from_millis(params.debounce_ms),
            dirty_since: None,
            committed: ScoreBreakdown::default(),
        }
    }

    /// Session seeded with an anchor item. The anchor's slot is resolved
    /// (label lookup, classifier fallback for legacy labels) and stays
    /// locked until the session is dropped.
    pub fn with_anchor(
        scorer: Scorer,
        params: &SelectionParams,
        item: Arc<WardrobeItem>,
    ) -> Self {
        let slot = resolve_slot(&item);
        debug!(slot = %slot, item = %item.id, "anchor locked");
        let mut engine = Self::new(scorer, params);
        engine.selection.slots.insert(slot, Arc::clone(&item));
        engine.anchor = Some((slot, item));
        engine.committed = engine.score_now();
        engine
    }

    pub fn anchor(&self) -> Option<&Arc<WardrobeItem>> {
        self.anchor.as_ref().map(|(_, item)| item)
    }

    pub fn anchor_slot(&self) -> Option<CategorySlot> {
        self.anchor.as_ref().map(|(slot, _)| *slot)
    }

    pub fn selection(&self) -> &OutfitSelection {
        &self.selection
    }

    pub fn tuck_style(&self) -> TuckStyle {
        self.selection.tuck_style
    }

    pub fn set_tuck_style(&mut self, tuck: TuckStyle) {
        if self.selection.tuck_style != tuck {
            self.selection.tuck_style = tuck;
            self.mark_dirty();
        }
    }

    /// Places `item` in `slot` (replace semantics) or clears the slot when
    /// `item` is `None`. The anchor's slot is refused outright; a non-null
    /// item must map to the target slot via its category label.
    pub fn select(
        &mut self,
        slot: CategorySlot,
        item: Option<Arc<WardrobeItem>>,
    ) -> SelectOutcome {
        if self.anchor_slot() == Some(slot) {
            return SelectOutcome::Rejected(SelectRejection::LockedSlot);
        }

        match item {
            None => {
                if self.selection.slots.remove(&slot).is_none() {
                    return SelectOutcome::Noop;
                }
            }
            Some(item) => {
                if CategorySlot::from_label(&item.category_name) != Some(slot) {
                    return SelectOutcome::Rejected(SelectRejection::CategoryMismatch);
                }
                self.selection.slots.insert(slot, item);
            }
        }

        self.mark_dirty();
        SelectOutcome::Applied
    }

    /// Deselect-on-reclick: clears the slot when its occupant has the same
    /// id, otherwise selects (replacing any occupant).
    pub fn toggle(&mut self, slot: CategorySlot, item: Arc<WardrobeItem>) -> SelectOutcome {
        let same = self
            .selection
            .get(slot)
            .is_some_and(|current| current.id == item.id);
        if same {
            self.select(slot, None)
        } else {
            self.select(slot, Some(item))
        }
    }

    /// Resets every non-anchor slot to empty; the anchor slot is untouched.
    pub fn clear(&mut self) {
        let anchor_slot = self.anchor_slot();
        let before = self.selection.len();
        self.selection
            .slots
            .retain(|slot, _| Some(*slot) == anchor_slot);
        if self.selection.len() != before {
            self.mark_dirty();
        }
    }

    /// The single hard precondition gating persistence: a shirt and pants.
    /// Every other slot is optional.
    pub fn is_valid(&self) -> bool {
        self.selection.get(CategorySlot::Shirt).is_some()
            && self.selection.get(CategorySlot::Pants).is_some()
    }

    /// Direct, un-debounced score of the current selection.
    pub fn score_now(&self) -> ScoreBreakdown {
        self.scorer.score_outfit(&self.selection)
    }

    /// Last committed (debounced) score. May lag `score_now` while the
    /// selection is dirty; the two agree again after `poll` or `flush`.
    pub fn committed_score(&self) -> ScoreBreakdown {
        self.committed
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty_since.is_some()
    }

    /// Commits the pending score once the quiescence window has elapsed
    /// since the last mutation. A newer mutation supersedes the window.
    pub fn poll(&mut self, now: Instant) -> Option<ScoreBreakdown> {
        let since = self.dirty_since?;
        if now.saturating_duration_since(since) < self.quiesce {
            return None;
        }
        Some(self.commit())
    }

    /// Commits immediately, ignoring the quiescence window.
    pub fn flush(&mut self) -> ScoreBreakdown {
        self.commit()
    }

    fn commit(&mut self) -> ScoreBreakdown {
        self.dirty_since = None;
        self.committed = self.score_now();
        self.committed
    }

    fn mark_dirty(&mut self) {
        self.dirty_since = Some(Instant::now());
    }

    /// Wardrobe items eligible for `slot`, scored against the anchor and
    /// ranked score-descending with name-ascending tie-break so the order
    /// is total. Anchorless sessions get the base result for every item.
    pub fn candidates_for(&self, slot: CategorySlot, wardrobe: &Wardrobe) -> Vec<RankedCandidate> {
        let mut ranked: Vec<RankedCandidate> = wardrobe
            .items
            .iter()
            .filter(|item| CategorySlot::from_label(&item.category_name) == Some(slot))
            .filter(|item| {
                self.anchor
                    .as_ref()
                    .map_or(true, |(_, anchor)| anchor.id != item.id)
            })
            .map(|item| {
                let result = match &self.anchor {
                    Some((_, anchor)) => self.scorer.compatibility(anchor, item),
                    None => CompatibilityResult::baseline(self.scorer.weights.base_compat),
                };
                RankedCandidate {
                    item: Arc::clone(item),
                    result,
                }
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.result
                .score
                .cmp(&a.result.score)
                .then_with(|| a.item.name.cmp(&b.item.name))
        });
        ranked
    }

    /// Candidate lists for every slot other than the anchor's.
    pub fn candidates(&self, wardrobe: &Wardrobe) -> BTreeMap<CategorySlot, Vec<RankedCandidate>> {
        CategorySlot::iter()
            .filter(|slot| self.anchor_slot() != Some(*slot))
            .map(|slot| (slot, self.candidates_for(slot, wardrobe)))
            .collect()
    }
}
