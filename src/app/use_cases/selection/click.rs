//! Use-Case: Einzelklick-Selektion (Ersetzen oder additives Toggle).

use crate::app::AppState;
use crate::core::EntityRef;

use super::helpers::existing;

/// Ersetzt die Selektion durch genau eine Entity (oder leert sie, wenn
/// kein Treffer übergeben wurde). Bereits entfernte Items werden still
/// verworfen.
///
/// Gibt das aggregierte `(added, removed)`-Delta zurück.
pub fn replace_selection(
    state: &mut AppState,
    entity: Option<EntityRef>,
) -> (Vec<EntityRef>, Vec<EntityRef>) {
    let entity = existing(state, entity);

    let mut removed = Vec::new();
    for selected in state.selection.entities() {
        if Some(selected) != entity {
            state.selection.remove(&selected);
            removed.push(selected);
        }
    }

    let mut added = Vec::new();
    if let Some(entity) = entity {
        if state.selection.insert(entity) {
            added.push(entity);
        }
    }

    (added, removed)
}

/// Togglet eine Entity additiv in die bestehende Selektion, ohne andere
/// Einträge zu verändern.
pub fn toggle_selection(
    state: &mut AppState,
    entity: EntityRef,
) -> (Vec<EntityRef>, Vec<EntityRef>) {
    let Some(entity) = existing(state, Some(entity)) else {
        return (Vec::new(), Vec::new());
    };

    if state.selection.toggle(entity) {
        (vec![entity], Vec::new())
    } else {
        (Vec::new(), vec![entity])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EntityRef, FaceRef};

    fn with_test_scene() -> (AppState, EntityRef, EntityRef) {
        let mut state = AppState::new();
        let solid = state.scene.commit_solid(2, 0);
        let a = EntityRef::Face(FaceRef { solid, index: 0 });
        let b = EntityRef::Face(FaceRef { solid, index: 1 });
        (state, a, b)
    }

    #[test]
    fn replace_leaves_exactly_the_clicked_entity() {
        let (mut state, a, b) = with_test_scene();
        state.selection.insert(b);

        let (added, removed) = replace_selection(&mut state, Some(a));

        assert_eq!(added, vec![a]);
        assert_eq!(removed, vec![b]);
        assert_eq!(state.selection.entities(), vec![a]);
    }

    #[test]
    fn replace_with_the_already_selected_entity_is_a_no_op() {
        let (mut state, a, _) = with_test_scene();
        state.selection.insert(a);

        let (added, removed) = replace_selection(&mut state, Some(a));

        assert!(added.is_empty());
        assert!(removed.is_empty());
        assert_eq!(state.selection.entities(), vec![a]);
    }

    #[test]
    fn replace_without_hit_clears_the_selection() {
        let (mut state, a, b) = with_test_scene();
        state.selection.insert(a);
        state.selection.insert(b);

        let (added, removed) = replace_selection(&mut state, None);

        assert!(added.is_empty());
        assert_eq!(removed.len(), 2);
        assert!(state.selection.is_empty());
    }

    #[test]
    fn toggle_adds_and_removes_without_touching_others() {
        let (mut state, a, b) = with_test_scene();
        state.selection.insert(a);

        let (added, _) = toggle_selection(&mut state, b);
        assert_eq!(added, vec![b]);
        assert_eq!(state.selection.len(), 2);

        let (_, removed) = toggle_selection(&mut state, b);
        assert_eq!(removed, vec![b]);
        assert_eq!(state.selection.entities(), vec![a]);
    }

    #[test]
    fn stale_entities_are_silently_dropped() {
        let (mut state, a, _) = with_test_scene();
        state.scene.remove_item(a.item());

        let (added, removed) = toggle_selection(&mut state, a);
        assert!(added.is_empty());
        assert!(removed.is_empty());
        assert!(state.selection.is_empty());
    }
}
