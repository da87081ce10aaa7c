//! Mapping von Viewport-Intents auf mutierende App-Commands.
//!
//! Hier läuft der Schnittpunkt-Filter: Intents tragen rohe Hit-Test-
//! Ergebnisse, Commands tragen bereits aufgelöste Entities. Das Mapping
//! liest die Layer-Maske bei jedem Aufruf frisch vom Stack-Top.

use crate::core::hit_filter;

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::ClickPickRequested {
            hits,
            additive,
            double,
        } => {
            let layers = state.layers.current();
            let filtered = hit_filter::filter(&hits, layers, &state.scene);
            let first = filtered.first().map(|hit| hit.entity);

            let mut commands = match (first, additive) {
                (Some(entity), true) => vec![AppCommand::ToggleSelection { entity }],
                // Additiver Klick ins Leere lässt die Selektion stehen
                (None, true) => Vec::new(),
                (entity, false) => vec![AppCommand::ReplaceSelection { entity }],
            };

            // Doppelklick bestätigt eine laufende Pick-Anfrage
            if double && state.picker.is_active() {
                commands.push(AppCommand::ConfirmPick);
            }
            commands
        }
        AppIntent::BoxSelectRequested { nodes, additive } => {
            let entities = hit_filter::select(&nodes, state.layers.current(), &state.scene);
            if additive {
                vec![AppCommand::ToggleSelectionSet { entities }]
            } else {
                vec![AppCommand::ReplaceSelectionSet { entities }]
            }
        }
        AppIntent::HoverUpdateRequested { hits } => {
            let layers = state.layers.current();
            let filtered = hit_filter::filter(&hits, layers, &state.scene);
            vec![AppCommand::SetHover {
                entity: filtered.first().map(|hit| hit.entity),
            }]
        }
        AppIntent::ClearSelectionRequested => vec![AppCommand::ClearSelection],
        AppIntent::LayerToggleRequested { layer, enabled } => {
            vec![AppCommand::SetLayerEnabled { layer, enabled }]
        }
        AppIntent::ItemRemovedReported { item } => {
            vec![AppCommand::PurgeRemovedItem { item }]
        }
        AppIntent::PickConfirmRequested => vec![AppCommand::ConfirmPick],
        AppIntent::PickCancelRequested => {
            // Escape stufenweise: laufende Pick-Anfrage abbrechen,
            // sonst Selektion aufheben
            if state.picker.is_active() {
                vec![AppCommand::CancelPick]
            } else {
                vec![AppCommand::ClearSelection]
            }
        }
    }
}
