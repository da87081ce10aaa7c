//! Gemeinsame Hilfsfunktionen für Selektionslogik.

use crate::app::AppState;
use crate::core::EntityRef;

/// Löscht die aktuelle Selektion explizit. Gibt die entfernten Entities
/// zurück (Hover bleibt unberührt).
pub fn clear_selection(state: &mut AppState) -> Vec<EntityRef> {
    state.selection.clear_all()
}

/// Stale-Guard: nur Entities, deren Item noch in der Szene existiert.
pub(super) fn existing(state: &AppState, entity: Option<EntityRef>) -> Option<EntityRef> {
    entity.filter(|entity| state.scene.contains_item(entity.item()))
}
