//! Viewport-Interaktion: Pointer- und Tasten-Events → AppIntents.
//!
//! Aufgeteilt in Submodule:
//! - `pointer` — Gesten-State-Machine (Klick, Doppelklick, Box-Drag, Hover)
//! - `keys` — Tastatur-Events (Enter bestätigt, Escape bricht ab)

mod keys;
mod pointer;

pub use keys::collect_key_intents;

use std::collections::HashMap;

use glam::Vec2;

use crate::app::AppIntent;
use crate::core::{HitTester, Layer, ScreenRect};
use crate::shared::EditorOptions;

/// Modifier-Tasten eines Pointer-Events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Ctrl/Cmd: additive Selektion (Toggle statt Ersetzen)
    pub command: bool,
    pub shift: bool,
    pub alt: bool,
}

/// Pointer-Ereignis aus dem Viewport. Zeiten sind Host-Zeitstempel in
/// Sekunden (für die Doppelklick-Erkennung).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primär-Taste gedrückt
    Pressed {
        pointer: u32,
        pos: Vec2,
        time: f64,
        modifiers: Modifiers,
    },
    /// Bewegung, mit oder ohne gehaltene Primär-Taste
    Moved {
        pointer: u32,
        pos: Vec2,
        primary_down: bool,
    },
    /// Primär-Taste losgelassen
    Released { pointer: u32, pos: Vec2, time: f64 },
}

/// Taste für die Interaktions-Auswertung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Escape,
}

/// Gesten-Zustand eines einzelnen Pointers. Pointer ohne Eintrag sind
/// Idle; illegale Übergänge sind damit nicht konstruierbar.
#[derive(Debug, Clone, Copy, PartialEq)]
enum PointerGesture {
    /// Gedrückt, noch unter der Drag-Schwelle
    ClickCandidate {
        press_pos: Vec2,
        press_time: f64,
        modifiers: Modifiers,
    },
    /// Drag-Schwelle überschritten: Box-Selektion läuft
    BoxDragging {
        start: Vec2,
        current: Vec2,
        modifiers: Modifiers,
    },
}

/// Verwaltet den Interaktions-Zustand des Viewports
/// (ein Gesten-Eintrag pro aktivem Pointer).
#[derive(Debug, Default)]
pub struct InteractionState {
    gestures: HashMap<u32, PointerGesture>,
    /// Letzter abgeschlossener Klick für die Doppelklick-Erkennung
    last_click: Option<(Vec2, f64)>,
    /// Pro Frame koaleszierte Hover-Position (nur die letzte zählt)
    pending_hover: Option<Vec2>,
}

impl InteractionState {
    /// Erstellt einen leeren Interaktions-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Verarbeitet die Pointer-Events eines Frames und sammelt die
    /// resultierenden Intents.
    ///
    /// Klick- und Box-Events führen den Ray-/Rechteck-Test über den
    /// übergebenen `HitTester` aus; die Layer-Maske kommt pro Aufruf
    /// frisch vom Aufrufer. Hover wird auf die letzte Position des
    /// Frames koalesziert.
    pub fn collect_pointer_intents(
        &mut self,
        events: &[PointerEvent],
        hit_tester: &dyn HitTester,
        layers: Layer,
        options: &EditorOptions,
    ) -> Vec<AppIntent> {
        let mut intents = Vec::new();
        for event in events {
            self.handle_pointer_event(*event, hit_tester, layers, options, &mut intents);
        }
        self.flush_hover(hit_tester, layers, &mut intents);
        intents
    }

    /// Aktives Box-Drag-Rechteck (für das Overlay des Hosts).
    pub fn active_box(&self) -> Option<ScreenRect> {
        self.gestures.values().find_map(|gesture| match gesture {
            PointerGesture::BoxDragging { start, current, .. } => {
                Some(ScreenRect::from_corners(*start, *current))
            }
            PointerGesture::ClickCandidate { .. } => None,
        })
    }
}
