//! Handler für Selektions-Operationen.
//!
//! Handler führen Use-Cases aus und emittieren pro logischer Geste genau
//! ein aggregiertes Signal — erst nachdem die Mutation abgeschlossen ist.

use crate::app::events::{SelectionDelta, SelectionSignal};
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::EntityRef;

/// Stellt ein Selektions-Signal ein, wenn das Delta nicht leer ist.
fn emit_selection_changed(state: &mut AppState, added: Vec<EntityRef>, removed: Vec<EntityRef>) {
    let delta = SelectionDelta::new(added, removed);
    if !delta.is_empty() {
        state.push_signal(SelectionSignal::SelectionChanged { delta });
    }
}

/// Stellt ein Hover-Signal ein, wenn das Delta nicht leer ist.
fn emit_hover_changed(state: &mut AppState, added: Vec<EntityRef>, removed: Vec<EntityRef>) {
    let delta = SelectionDelta::new(added, removed);
    if !delta.is_empty() {
        state.push_signal(SelectionSignal::HoverChanged { delta });
    }
}

/// Ersetzt die Selektion durch genau eine Entity (oder leert sie).
pub fn replace(state: &mut AppState, entity: Option<EntityRef>) {
    let (added, removed) = use_cases::selection::replace_selection(state, entity);
    emit_selection_changed(state, added, removed);
}

/// Togglet eine Entity additiv in die Selektion.
pub fn toggle(state: &mut AppState, entity: EntityRef) {
    let (added, removed) = use_cases::selection::toggle_selection(state, entity);
    emit_selection_changed(state, added, removed);
}

/// Ersetzt die Selektion durch eine Entity-Menge (Rechteck-Selektion).
pub fn replace_set(state: &mut AppState, entities: Vec<EntityRef>) {
    let (added, removed) = use_cases::selection::replace_with_entities(state, &entities);
    log::debug!(
        "Rechteck-Selektion: {} hinzugefügt, {} entfernt",
        added.len(),
        removed.len()
    );
    emit_selection_changed(state, added, removed);
}

/// Togglet eine Entity-Menge additiv in die Selektion.
pub fn toggle_set(state: &mut AppState, entities: Vec<EntityRef>) {
    let (added, removed) = use_cases::selection::toggle_entities(state, &entities);
    emit_selection_changed(state, added, removed);
}

/// Setzt oder leert das Hover-Ziel.
pub fn set_hover(state: &mut AppState, entity: Option<EntityRef>) {
    let (added, removed) = use_cases::selection::update_hover(state, entity);
    emit_hover_changed(state, added, removed);
}

/// Hebt die gesamte Selektion auf.
pub fn clear(state: &mut AppState) {
    let removed = use_cases::selection::clear_selection(state);
    if !removed.is_empty() {
        log::info!("Selektion aufgehoben ({} Entities)", removed.len());
    }
    emit_selection_changed(state, Vec::new(), removed);
}
