//! CAD Viewport Picker Library.
//! Picking- und Selektions-Engine für interaktive 3D-CAD-Viewports,
//! als Library exportiert für Tests und Einbettung.

pub mod app;
pub mod core;
pub mod error;
pub mod shared;

pub use app::{
    begin_pick, collect_key_intents, AppCommand, AppController, AppIntent, AppState,
    HighlightState, InteractionState, Key, Modifiers, PickOutcome, PickRequest, PickerState,
    PointerEvent, SelectionDelta, SelectionSignal, SelectionState, SignalListener,
};
pub use core::{
    ControlPointRef, EdgeRef, EntityKind, EntityKinds, EntityRef, FaceRef, FilteredHit, ItemId,
    ModelItem, NodeId, NodeKind, SceneDatabase, SceneNode,
};
pub use core::{HitTester, Intersection, Layer, LayerStack, ScreenRect};
pub use error::EngineError;
pub use shared::EditorOptions;
