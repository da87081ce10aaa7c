//! Handler für Pick-Session-Operationen (Bestätigen/Abbrechen).

use crate::app::picker;
use crate::app::AppState;
use crate::error::EngineError;

/// Bestätigt die innerste Pick-Session (Enter). Ohne aktive Session oder
/// unterhalb der Mindestanzahl ein No-op.
pub fn confirm(state: &mut AppState) -> Result<(), EngineError> {
    picker::confirm_active(state)
}

/// Bricht die innerste Pick-Session ab (Escape).
pub fn cancel(state: &mut AppState) -> Result<(), EngineError> {
    picker::cancel_active(state)
}
