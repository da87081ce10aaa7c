//! Application-Layer: Controller, State, Events, Interaktion und Picker.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod highlight;
mod intent_mapping;
pub mod interaction;
pub mod picker;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Engine (Szene, Selektion,
/// Layer, Pick-Sessions).
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::{AppController, SignalListener};
pub use events::{AppCommand, AppIntent, SelectionDelta, SelectionSignal};
pub use highlight::HighlightState;
pub use interaction::{collect_key_intents, InteractionState, Key, Modifiers, PointerEvent};
pub use picker::{begin_pick, PickOutcome, PickRequest, PickerState};
pub use state::{AppState, SelectionState};
