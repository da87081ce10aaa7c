//! Handler für Szenen-Ereignisse aus der Geometrie-Datenbank.

use crate::app::events::{SelectionDelta, SelectionSignal};
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::ItemId;

/// Verarbeitet die Entfernen-Meldung eines Items: Szene bereinigen und
/// das Item aus allen Selektions-Sets purgen. Idempotent — ein bereits
/// verarbeitetes Item erzeugt keine weiteren Signale.
pub fn purge_removed_item(state: &mut AppState, item: ItemId) {
    // Das Item kann extern bereits entfernt worden sein
    state.scene.remove_item(item);

    let (selected, hovered) = use_cases::selection::purge_item(state, item);
    if !selected.is_empty() {
        log::info!(
            "Item {:?} entfernt, {} Selektions-Einträge gepurged",
            item,
            selected.len()
        );
        state.push_signal(SelectionSignal::SelectionChanged {
            delta: SelectionDelta::new(Vec::new(), selected),
        });
    }
    if !hovered.is_empty() {
        state.push_signal(SelectionSignal::HoverChanged {
            delta: SelectionDelta::new(Vec::new(), hovered),
        });
    }
}
