//! Use-Case: Hover-Ziel-Verwaltung.

use crate::app::AppState;
use crate::core::EntityRef;

use super::helpers::existing;

/// Setzt das Hover-Ziel auf die übergebene Entity oder leert es.
/// Ein unverändertes Ziel liefert ein leeres Delta.
pub fn update_hover(
    state: &mut AppState,
    entity: Option<EntityRef>,
) -> (Vec<EntityRef>, Vec<EntityRef>) {
    let entity = existing(state, entity);
    state.selection.replace_hover(entity)
}
