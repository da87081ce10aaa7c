//! Application Controller für zentrale Event-Verarbeitung.

use super::events::SelectionSignal;
use super::{handlers, intent_mapping, picker};
use super::{AppCommand, AppIntent, AppState};

/// Externer Listener für Selektions-/Hover-Signale.
pub type SignalListener = Box<dyn FnMut(&SelectionSignal)>;

/// Orchestriert Intents, Commands und Signal-Verteilung auf den AppState.
#[derive(Default)]
pub struct AppController {
    listeners: Vec<SignalListener>,
}

impl AppController {
    /// Erstellt einen neuen Controller ohne Listener.
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    /// Registriert einen Listener für Selektions-/Hover-Signale.
    /// Listener werden in Registrierungs-Reihenfolge aufgerufen.
    pub fn subscribe(&mut self, listener: SignalListener) {
        self.listeners.push(listener);
    }

    /// Verarbeitet einen Intent über Intent→Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/` und verteilt danach
    /// die entstandenen Signale.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);

        match command {
            // === Selektion ===
            AppCommand::ReplaceSelection { entity } => handlers::selection::replace(state, entity),
            AppCommand::ToggleSelection { entity } => handlers::selection::toggle(state, entity),
            AppCommand::ReplaceSelectionSet { entities } => {
                handlers::selection::replace_set(state, entities)
            }
            AppCommand::ToggleSelectionSet { entities } => {
                handlers::selection::toggle_set(state, entities)
            }
            AppCommand::SetHover { entity } => handlers::selection::set_hover(state, entity),
            AppCommand::ClearSelection => handlers::selection::clear(state),

            // === Layer ===
            AppCommand::SetLayerEnabled { layer, enabled } => {
                handlers::layers::set_layer_enabled(state, layer, enabled)
            }

            // === Szene ===
            AppCommand::PurgeRemovedItem { item } => {
                handlers::scene::purge_removed_item(state, item)
            }

            // === Pick-Sessions ===
            AppCommand::ConfirmPick => handlers::picker::confirm(state)?,
            AppCommand::CancelPick => handlers::picker::cancel(state)?,
        }

        self.dispatch_signals(state)?;
        Ok(())
    }

    /// Verteilt ausstehende Signale synchron und in Emissions-Reihenfolge:
    /// Hervorhebung → innerste Pick-Session → externe Listener.
    ///
    /// Die Drain-Schleife verarbeitet auch Signale, die während der
    /// Verteilung nachgeschoben werden, ohne einen Konsumenten für
    /// dasselbe Signal erneut zu betreten.
    fn dispatch_signals(&mut self, state: &mut AppState) -> anyhow::Result<()> {
        while let Some(signal) = state.pop_signal() {
            state.highlight.apply(&signal);
            picker::on_signal(state, &signal)?;
            for listener in &mut self.listeners {
                listener(&signal);
            }
        }
        Ok(())
    }
}
