//! Zentrale Konfiguration der Picking-Engine.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Gesten ──────────────────────────────────────────────────────────

/// Drag-Schwelle in Screen-Pixeln: darunter gilt ein Pointer-Up als Klick.
pub const DRAG_THRESHOLD_PX: f32 = 6.0;
/// Maximaler Abstand zweier Klicks für einen Doppelklick (Screen-Pixel).
pub const DOUBLE_CLICK_RADIUS_PX: f32 = 4.0;
/// Maximaler zeitlicher Abstand zweier Klicks für einen Doppelklick (Sekunden).
pub const DOUBLE_CLICK_INTERVAL_S: f64 = 0.35;

// ── Hervorhebung ────────────────────────────────────────────────────

/// Farbe selektierter Entities (RGBA: Gelb).
pub const HIGHLIGHT_COLOR_SELECTED: [f32; 4] = [1.0, 0.85, 0.1, 1.0];
/// Farbe der Hover-Hervorhebung (RGBA: Hellblau).
pub const HIGHLIGHT_COLOR_HOVERED: [f32; 4] = [0.3, 0.8, 1.0, 1.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen der Engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Gesten ──────────────────────────────────────────────────
    /// Drag-Schwelle in Screen-Pixeln
    pub drag_threshold_px: f32,
    /// Doppelklick-Radius in Screen-Pixeln
    pub double_click_radius_px: f32,
    /// Doppelklick-Intervall in Sekunden
    pub double_click_interval_s: f64,

    // ── Hervorhebung ────────────────────────────────────────────
    /// Farbe selektierter Entities (RGBA)
    pub selected_color: [f32; 4],
    /// Farbe des Hover-Ziels (RGBA)
    pub hovered_color: [f32; 4],
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            drag_threshold_px: DRAG_THRESHOLD_PX,
            double_click_radius_px: DOUBLE_CLICK_RADIUS_PX,
            double_click_interval_s: DOUBLE_CLICK_INTERVAL_S,
            selected_color: HIGHLIGHT_COLOR_SELECTED,
            hovered_color: HIGHLIGHT_COLOR_HOVERED,
        }
    }
}
