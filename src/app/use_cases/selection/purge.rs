//! Use-Case: Proaktives Entfernen gelöschter Items aus der Selektion.

use crate::app::AppState;
use crate::core::{EntityRef, ItemId};

/// Entfernt alle Entities eines gelöschten Items aus Selektion und Hover.
/// Ein entferntes Item darf nie als selektiert beobachtbar bleiben.
///
/// Gibt `(selektion_entfernt, hover_entfernt)` zurück. Idempotent.
pub fn purge_item(state: &mut AppState, item: ItemId) -> (Vec<EntityRef>, Vec<EntityRef>) {
    state.selection.purge_item(item)
}
