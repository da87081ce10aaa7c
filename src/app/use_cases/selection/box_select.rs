//! Use-Case: Rechteck-Selektion über bereits reduzierte Entity-Mengen.

use crate::app::AppState;
use crate::core::EntityRef;

use super::helpers::existing;

/// Ersetzt die Selektion durch die Entity-Menge einer Rechteck-Selektion.
/// Entities bereits entfernter Items werden still verworfen.
pub fn replace_with_entities(
    state: &mut AppState,
    entities: &[EntityRef],
) -> (Vec<EntityRef>, Vec<EntityRef>) {
    let keep: Vec<EntityRef> = entities
        .iter()
        .filter_map(|entity| existing(state, Some(*entity)))
        .collect();

    let mut removed = Vec::new();
    for selected in state.selection.entities() {
        if !keep.contains(&selected) {
            state.selection.remove(&selected);
            removed.push(selected);
        }
    }

    let mut added = Vec::new();
    for entity in keep {
        if state.selection.insert(entity) {
            added.push(entity);
        }
    }

    (added, removed)
}

/// Togglet eine Entity-Menge additiv in die Selektion: enthaltene
/// Entities fliegen raus, neue kommen dazu.
pub fn toggle_entities(
    state: &mut AppState,
    entities: &[EntityRef],
) -> (Vec<EntityRef>, Vec<EntityRef>) {
    let mut added = Vec::new();
    let mut removed = Vec::new();

    for entity in entities {
        let Some(entity) = existing(state, Some(*entity)) else {
            continue;
        };
        if state.selection.toggle(entity) {
            added.push(entity);
        } else {
            removed.push(entity);
        }
    }

    (added, removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ControlPointRef, EntityRef};

    fn with_curve_scene() -> (AppState, Vec<EntityRef>) {
        let mut state = AppState::new();
        let curve = state.scene.commit_curve(3);
        let cps = (0..3)
            .map(|index| EntityRef::ControlPoint(ControlPointRef { curve, index }))
            .collect();
        (state, cps)
    }

    #[test]
    fn replace_selects_the_whole_set_and_drops_the_rest() {
        let (mut state, cps) = with_curve_scene();
        state.selection.insert(cps[2]);

        let (added, removed) = replace_with_entities(&mut state, &cps[0..2]);

        assert_eq!(added, vec![cps[0], cps[1]]);
        assert_eq!(removed, vec![cps[2]]);
        assert_eq!(state.selection.len(), 2);
    }

    #[test]
    fn replace_keeps_entities_that_are_selected_and_inside_the_box() {
        let (mut state, cps) = with_curve_scene();
        state.selection.insert(cps[0]);

        let (added, removed) = replace_with_entities(&mut state, &cps[0..2]);

        assert_eq!(added, vec![cps[1]]);
        assert!(removed.is_empty());
    }

    #[test]
    fn toggle_flips_each_member_of_the_set() {
        let (mut state, cps) = with_curve_scene();
        state.selection.insert(cps[0]);

        let (added, removed) = toggle_entities(&mut state, &cps[0..2]);

        assert_eq!(added, vec![cps[1]]);
        assert_eq!(removed, vec![cps[0]]);
        assert_eq!(state.selection.entities(), vec![cps[1]]);
    }
}
