//! Hervorhebung selektierter und gehoverter Entities.
//!
//! Reiner Konsument der Selektions-Signale — hier steckt keine
//! Picking-Logik. Der Renderer fragt pro Entity die Emphase-Farbe ab.

use indexmap::IndexSet;

use crate::app::events::SelectionSignal;
use crate::core::EntityRef;
use crate::shared::EditorOptions;

/// Aktuell hervorgehobene Entities (Selektion + Hover getrennt).
#[derive(Debug, Clone, Default)]
pub struct HighlightState {
    highlighted: IndexSet<EntityRef>,
    hovered: IndexSet<EntityRef>,
}

impl HighlightState {
    /// Erstellt einen leeren Hervorhebungs-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wendet ein Signal-Delta an.
    pub fn apply(&mut self, signal: &SelectionSignal) {
        match signal {
            SelectionSignal::SelectionChanged { delta } => {
                for entity in &delta.removed {
                    self.highlighted.shift_remove(entity);
                }
                for entity in &delta.added {
                    self.highlighted.insert(*entity);
                }
            }
            SelectionSignal::HoverChanged { delta } => {
                for entity in &delta.removed {
                    self.hovered.shift_remove(entity);
                }
                for entity in &delta.added {
                    self.hovered.insert(*entity);
                }
            }
        }
    }

    /// Emphase-Farbe einer Entity: Hover schlägt Selektion, unmarkierte
    /// Entities liefern `None`.
    pub fn emphasis(&self, entity: &EntityRef, options: &EditorOptions) -> Option<[f32; 4]> {
        if self.hovered.contains(entity) {
            Some(options.hovered_color)
        } else if self.highlighted.contains(entity) {
            Some(options.selected_color)
        } else {
            None
        }
    }

    /// Aktuell selektiert hervorgehobene Entities.
    pub fn highlighted(&self) -> &IndexSet<EntityRef> {
        &self.highlighted
    }

    /// Aktuell hover-hervorgehobene Entities.
    pub fn hovered(&self) -> &IndexSet<EntityRef> {
        &self.hovered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::events::SelectionDelta;
    use crate::core::ItemId;

    #[test]
    fn deltas_drive_the_highlight_sets() {
        let mut highlight = HighlightState::new();
        let curve = EntityRef::Curve(ItemId(1));

        highlight.apply(&SelectionSignal::SelectionChanged {
            delta: SelectionDelta::new(vec![curve], Vec::new()),
        });
        assert!(highlight.highlighted().contains(&curve));

        highlight.apply(&SelectionSignal::SelectionChanged {
            delta: SelectionDelta::new(Vec::new(), vec![curve]),
        });
        assert!(highlight.highlighted().is_empty());
    }

    #[test]
    fn hover_emphasis_wins_over_selection() {
        let mut highlight = HighlightState::new();
        let options = EditorOptions::default();
        let curve = EntityRef::Curve(ItemId(1));

        highlight.apply(&SelectionSignal::SelectionChanged {
            delta: SelectionDelta::new(vec![curve], Vec::new()),
        });
        highlight.apply(&SelectionSignal::HoverChanged {
            delta: SelectionDelta::new(vec![curve], Vec::new()),
        });

        assert_eq!(
            highlight.emphasis(&curve, &options),
            Some(options.hovered_color)
        );
    }
}
