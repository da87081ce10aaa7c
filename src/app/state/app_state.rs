use std::collections::VecDeque;

use crate::app::events::SelectionSignal;
use crate::app::highlight::HighlightState;
use crate::app::picker::PickerState;
use crate::app::CommandLog;
use crate::core::{LayerStack, SceneDatabase};
use crate::shared::EditorOptions;

use super::SelectionState;

/// Hauptzustand der Picking-Engine
pub struct AppState {
    /// Szenen-Datenbank (Modell-Items + visuelle Nodes)
    pub scene: SceneDatabase,
    /// Selektions- und Hover-Zustand
    pub selection: SelectionState,
    /// Aktive Selektions-Layer (Save/Restore-Stack)
    pub layers: LayerStack,
    /// Hervorhebungs-Zustand (reiner Signal-Konsument)
    pub highlight: HighlightState,
    /// Laufende Pick-Sessions (LIFO)
    pub picker: PickerState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Schwellen, Farben)
    pub options: EditorOptions,
    /// Ausstehende Signale; werden vom Controller nach jedem Command in
    /// Emissions-Reihenfolge verteilt
    pub(crate) signal_queue: VecDeque<SelectionSignal>,
}

impl AppState {
    /// Erstellt einen neuen, leeren Engine-State
    pub fn new() -> Self {
        Self {
            scene: SceneDatabase::new(),
            selection: SelectionState::new(),
            layers: LayerStack::new(),
            highlight: HighlightState::new(),
            picker: PickerState::new(),
            command_log: CommandLog::new(),
            options: EditorOptions::default(),
            signal_queue: VecDeque::new(),
        }
    }

    /// Gesamtzahl selektierter Entities (für UI-Anzeige)
    pub fn selection_count(&self) -> usize {
        self.selection.len()
    }

    /// Stellt ein Signal zur Verteilung nach Abschluss der laufenden
    /// Mutation ein.
    pub(crate) fn push_signal(&mut self, signal: SelectionSignal) {
        self.signal_queue.push_back(signal);
    }

    /// Nimmt das nächste ausstehende Signal aus der Queue.
    pub(crate) fn pop_signal(&mut self) -> Option<SelectionSignal> {
        self.signal_queue.pop_front()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
