//! Handler für Layer-Umschaltung.

use crate::app::AppState;
use crate::core::Layer;

/// Aktiviert oder deaktiviert einen Layer auf dem Stack-Top.
/// Wirkt sofort auf den nächsten Hit-Test; keine Transaktions-Semantik.
pub fn set_layer_enabled(state: &mut AppState, layer: Layer, enabled: bool) {
    if enabled {
        state.layers.enable(layer);
    } else {
        state.layers.disable(layer);
    }
    log::debug!(
        "Layer {:?} {}",
        layer,
        if enabled { "aktiviert" } else { "deaktiviert" }
    );
}
