use crate::classifier::CategorySlot;
use crate::config::Config;
use crate::scorer::{ScoreBreakdown, Scorer};
use crate::selection::{
    SelectOutcome, SelectRejection, SelectionEngine, TuckStyle,
};
use crate::wardrobe::Wardrobe;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use std::time::Instant;

/// The global state required to run outfit-building sessions.
pub struct EngineState {
    pub wardrobe: Mutex<Option<Wardrobe>>,
    pub session: Mutex<Option<SelectionEngine>>,
}

impl Default for EngineState {
    fn default() -> Self {
        Self {
            wardrobe: Mutex::new(None),
            session: Mutex::new(None),
        }
    }
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ItemView {
    pub id: String,
    pub name: String,
    pub category_name: String,
    pub color: Option<String>,
}

impl ItemView {
    fn of(item: &crate::wardrobe::WardrobeItem) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            category_name: item.category_name.clone(),
            color: item.color.clone(),
        }
    }
}

/// Snapshot handed to the UI after every mutation: the slot map, the last
/// committed score (with a pending flag while the debounce window runs),
/// and the validity gate.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SelectionView {
    pub slots: BTreeMap<String, ItemView>,
    pub tuck_style: TuckStyle,
    pub anchor_slot: Option<String>,
    pub score: ScoreBreakdown,
    pub score_pending: bool,
    pub is_valid: bool,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CandidateView {
    pub item: ItemView,
    pub score: u8,
    pub reasons: Vec<&'static str>,
}

/// Flat structure for the persistence collaborator: category label to item
/// id, plus tuck style and the committed total.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SavePayload {
    pub items: BTreeMap<String, String>,
    pub tuck_style: TuckStyle,
    pub score: u8,
}

fn view_of(engine: &SelectionEngine) -> SelectionView {
    let slots = engine
        .selection()
        .occupied()
        .map(|(slot, item)| (slot.to_string(), ItemView::of(item)))
        .collect();
    SelectionView {
        slots,
        tuck_style: engine.tuck_style(),
        anchor_slot: engine.anchor_slot().map(|s| s.to_string()),
        score: engine.committed_score(),
        score_pending: engine.is_dirty(),
        is_valid: engine.is_valid(),
    }
}

/// Service: load the wardrobe collection from a JSON export.
pub fn load_wardrobe(state: &EngineState, path: &str) -> Result<String, String> {
    let wardrobe = Wardrobe::load_from_file(path).map_err(|e| e.to_string())?;
    let count = wardrobe.len();

    let mut guard = state.wardrobe.lock().map_err(|e| e.to_string())?;
    *guard = Some(wardrobe);

    Ok(format!("Loaded {} wardrobe items", count))
}

/// Service: start a fresh session, optionally anchored on one item.
pub fn start_session(
    state: &EngineState,
    config: &Config,
    anchor_id: Option<&str>,
) -> Result<SelectionView, String> {
    let wardrobe_guard = state.wardrobe.lock().map_err(|e| e.to_string())?;
    let wardrobe = wardrobe_guard
        .as_ref()
        .ok_or("Wardrobe not loaded. Load a wardrobe first.")?;

    let scorer = Scorer::new(config.weights.clone());
    let engine = match anchor_id {
        Some(id) => {
            let item = wardrobe
                .get(id)
                .ok_or_else(|| format!("Unknown item id '{}'", id))?;
            SelectionEngine::with_anchor(scorer, &config.selection, Arc::clone(item))
        }
        None => SelectionEngine::new(scorer, &config.selection),
    };
    let view = view_of(&engine);

    let mut session_guard = state.session.lock().map_err(|e| e.to_string())?;
    *session_guard = Some(engine);

    Ok(view)
}

fn outcome_to_view(
    engine: &SelectionEngine,
    slot: CategorySlot,
    outcome: SelectOutcome,
) -> Result<SelectionView, String> {
    match outcome {
        SelectOutcome::Rejected(SelectRejection::LockedSlot) => Err(format!(
            "The {} slot is locked by the anchor item",
            slot.label()
        )),
        SelectOutcome::Rejected(SelectRejection::CategoryMismatch) => Err(format!(
            "Item does not belong in the {} slot",
            slot.label()
        )),
        SelectOutcome::Applied | SelectOutcome::Noop => Ok(view_of(engine)),
    }
}

/// Service: place or clear one slot. Refusals come back as messages; the
/// selection is unchanged in that case.
pub fn select_item(
    state: &EngineState,
    slot: CategorySlot,
    item_id: Option<&str>,
) -> Result<SelectionView, String> {
    let wardrobe_guard = state.wardrobe.lock().map_err(|e| e.to_string())?;
    let mut session_guard = state.session.lock().map_err(|e| e.to_string())?;
    let engine = session_guard
        .as_mut()
        .ok_or("No active session. Start a session first.")?;

    let item = match item_id {
        Some(id) => {
            let wardrobe = wardrobe_guard
                .as_ref()
                .ok_or("Wardrobe not loaded. Load a wardrobe first.")?;
            Some(Arc::clone(wardrobe.get(id).ok_or_else(|| {
                format!("Unknown item id '{}'", id)
            })?))
        }
        None => None,
    };

    let outcome = engine.select(slot, item);
    outcome_to_view(engine, slot, outcome)
}

/// Service: deselect-on-reclick for one slot.
pub fn toggle_item(
    state: &EngineState,
    slot: CategorySlot,
    item_id: &str,
) -> Result<SelectionView, String> {
    let wardrobe_guard = state.wardrobe.lock().map_err(|e| e.to_string())?;
    let mut session_guard = state.session.lock().map_err(|e| e.to_string())?;
    let engine = session_guard
        .as_mut()
        .ok_or("No active session. Start a session first.")?;
    let wardrobe = wardrobe_guard
        .as_ref()
        .ok_or("Wardrobe not loaded. Load a wardrobe first.")?;

    let item = wardrobe
        .get(item_id)
        .ok_or_else(|| format!("Unknown item id '{}'", item_id))?;
    let outcome = engine.toggle(slot, Arc::clone(item));
    outcome_to_view(engine, slot, outcome)
}

/// Service: reset every non-anchor slot.
pub fn clear_session(state: &EngineState) -> Result<SelectionView, String> {
    let mut session_guard = state.session.lock().map_err(|e| e.to_string())?;
    let engine = session_guard
        .as_mut()
        .ok_or("No active session. Start a session first.")?;
    engine.clear();
    Ok(view_of(engine))
}

pub fn set_tuck_style(state: &EngineState, tuck: TuckStyle) -> Result<SelectionView, String> {
    let mut session_guard = state.session.lock().map_err(|e| e.to_string())?;
    let engine = session_guard
        .as_mut()
        .ok_or("No active session. Start a session first.")?;
    engine.set_tuck_style(tuck);
    Ok(view_of(engine))
}

/// Service: commit the score if the quiescence window has elapsed. The UI
/// calls this on a timer; `None` means the window is still running (or
/// nothing is pending).
pub fn poll_score(state: &EngineState) -> Result<Option<ScoreBreakdown>, String> {
    let mut session_guard = state.session.lock().map_err(|e| e.to_string())?;
    let engine = session_guard
        .as_mut()
        .ok_or("No active session. Start a session first.")?;
    Ok(engine.poll(Instant::now()))
}

/// Service: ranked candidate lists for every unlocked slot, recomputed
/// synchronously against the current anchor.
pub fn candidate_views(
    state: &EngineState,
) -> Result<BTreeMap<String, Vec<CandidateView>>, String> {
    let wardrobe_guard = state.wardrobe.lock().map_err(|e| e.to_string())?;
    let session_guard = state.session.lock().map_err(|e| e.to_string())?;
    let engine = session_guard
        .as_ref()
        .ok_or("No active session. Start a session first.")?;
    let wardrobe = wardrobe_guard
        .as_ref()
        .ok_or("Wardrobe not loaded. Load a wardrobe first.")?;

    Ok(engine
        .candidates(wardrobe)
        .into_iter()
        .map(|(slot, ranked)| {
            let views = ranked
                .into_iter()
                .map(|c| CandidateView {
                    item: ItemView::of(&c.item),
                    score: c.result.score,
                    reasons: c.result.reasons,
                })
                .collect();
            (slot.to_string(), views)
        })
        .collect())
}

/// Service: the flat structure persistence receives. Refused (as a value,
/// not a crash) while the validity gate is closed; flushes the score so
/// the persisted total is never stale.
pub fn save_payload(state: &EngineState) -> Result<SavePayload, String> {
    let mut session_guard = state.session.lock().map_err(|e| e.to_string())?;
    let engine = session_guard
        .as_mut()
        .ok_or("No active session. Start a session first.")?;

    if !engine.is_valid() {
        return Err("Outfit is not saveable: shirt and pants are required".to_string());
    }

    let score = engine.flush();
    let items = engine
        .selection()
        .occupied()
        .map(|(slot, item)| (slot.label().to_string(), item.id.clone()))
        .collect();

    Ok(SavePayload {
        items,
        tuck_style: engine.tuck_style(),
        score: score.total,
    })
}
