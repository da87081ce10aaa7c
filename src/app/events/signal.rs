//! Selektions-Signale: aggregierte Deltas nach abgeschlossener Mutation.
//!
//! Signale werden erst emittiert, nachdem die Mutation vollständig
//! abgeschlossen ist — genau eines pro logischer Geste, damit Downstream-
//! Hervorhebung nicht flackert.

use crate::core::EntityRef;

/// Delta einer Selektions- oder Hover-Änderung.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionDelta {
    /// Neu hinzugekommene Entities (in Mutations-Reihenfolge)
    pub added: Vec<EntityRef>,
    /// Entfernte Entities (in Mutations-Reihenfolge)
    pub removed: Vec<EntityRef>,
}

impl SelectionDelta {
    /// Delta aus added/removed-Listen.
    pub fn new(added: Vec<EntityRef>, removed: Vec<EntityRef>) -> Self {
        Self { added, removed }
    }

    /// `true`, wenn das Delta keine Änderung enthält.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Signal an Downstream-Konsumenten (Hervorhebung, Pick-Sessions,
/// externe Listener). Zustellung synchron und in Emissions-Reihenfolge.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionSignal {
    /// Die Selektion hat sich geändert
    SelectionChanged { delta: SelectionDelta },
    /// Das Hover-Ziel hat sich geändert
    HoverChanged { delta: SelectionDelta },
}
