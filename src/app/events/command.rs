use crate::core::{EntityRef, ItemId, Layer};

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Selektion durch genau eine Entity ersetzen (None = leeren)
    ReplaceSelection { entity: Option<EntityRef> },
    /// Entity additiv in die Selektion togglen
    ToggleSelection { entity: EntityRef },
    /// Selektion durch eine Entity-Menge ersetzen
    ReplaceSelectionSet { entities: Vec<EntityRef> },
    /// Entity-Menge additiv in die Selektion togglen
    ToggleSelectionSet { entities: Vec<EntityRef> },
    /// Hover-Ziel setzen oder leeren
    SetHover { entity: Option<EntityRef> },
    /// Gesamte Selektion aufheben
    ClearSelection,
    /// Layer auf dem Stack-Top aktivieren/deaktivieren
    SetLayerEnabled { layer: Layer, enabled: bool },
    /// Entferntes Item aus Selektion, Hover und Szene purgen
    PurgeRemovedItem { item: ItemId },
    /// Aktive Pick-Session bestätigen (löst ab Mindestanzahl auf)
    ConfirmPick,
    /// Aktive Pick-Session abbrechen
    CancelPick,
}
