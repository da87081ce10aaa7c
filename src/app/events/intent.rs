use crate::core::{Intersection, ItemId, Layer, NodeId};

/// App-Intent Events.
/// Intents sind Eingaben aus Viewport/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Klick-Pick mit den rohen Ray-Treffern an der Klickposition
    ClickPickRequested {
        hits: Vec<Intersection>,
        /// Ctrl/Cmd gedrückt: additiv togglen statt ersetzen
        additive: bool,
        /// Zweiter Klick innerhalb der Doppelklick-Schwellen
        double: bool,
    },
    /// Rechteck-Selektion mit dem rohen Rechteck-Testergebnis
    BoxSelectRequested {
        nodes: Vec<NodeId>,
        additive: bool,
    },
    /// Hover-Update mit rohen Ray-Treffern (pro Frame koalesziert)
    HoverUpdateRequested { hits: Vec<Intersection> },
    /// Selektion aufheben
    ClearSelectionRequested,
    /// Layer aktivieren/deaktivieren
    LayerToggleRequested { layer: Layer, enabled: bool },
    /// Die Geometrie-Datenbank meldet ein entferntes Item
    ItemRemovedReported { item: ItemId },
    /// Laufende Pick-Anfrage bestätigen (Enter)
    PickConfirmRequested,
    /// Laufende Pick-Anfrage abbrechen (Escape)
    PickCancelRequested,
}
