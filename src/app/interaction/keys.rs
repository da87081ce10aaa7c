//! Tastatur-Events für laufende Pick-Anfragen.

use super::Key;
use crate::app::AppIntent;

/// Sammelt Intents aus Tastatur-Events: Enter bestätigt eine laufende
/// Pick-Anfrage, Escape bricht sie ab (bzw. hebt die Selektion auf).
pub fn collect_key_intents(keys: &[Key]) -> Vec<AppIntent> {
    keys.iter()
        .map(|key| match key {
            Key::Enter => AppIntent::PickConfirmRequested,
            Key::Escape => AppIntent::PickCancelRequested,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_and_escape_map_to_pick_intents_in_order() {
        let intents = collect_key_intents(&[Key::Enter, Key::Escape]);
        assert_eq!(intents.len(), 2);
        assert!(matches!(intents[0], AppIntent::PickConfirmRequested));
        assert!(matches!(intents[1], AppIntent::PickCancelRequested));
    }
}
