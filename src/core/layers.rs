//! Layer-Tags und der Save/Restore-Stack der aktiven Selektions-Layer.

use bitflags::bitflags;

use super::entity::{EntityKind, EntityKinds};
use super::scene::NodeKind;
use crate::error::EngineError;

bitflags! {
    /// Selektions-Layer eines visuellen Szenen-Nodes.
    ///
    /// Jeder Node traegt genau einen primaeren Art-Tag plus optionale
    /// Modifier-Tags (POINT fuer punktfoermige Nodes). Verdeckte
    /// Kanten-Linien tragen ausschliesslich XRAY und scheiden damit ohne
    /// Roentgen-Modus schon bei der Kandidaten-Erzeugung aus.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Layer: u16 {
        const SOLID = 1;
        const FACE = 1 << 1;
        const CURVE_EDGE = 1 << 2;
        const CURVE = 1 << 3;
        const CONTROL_POINT = 1 << 4;
        const REGION = 1 << 5;
        /// Roentgen-Modus: verdeckte Geometrie bleibt pickbar
        const XRAY = 1 << 6;
        /// Modifier-Tag fuer punktfoermige Nodes
        const POINT = 1 << 7;
        /// Dekorative Hilfs-Nodes, nie selektierbar
        const HELPER = 1 << 8;
    }
}

impl Layer {
    /// Standard-Maske: alle Entity-Layer plus Roentgen-Modus aktiv.
    pub fn default_mask() -> Self {
        Layer::SOLID
            | Layer::FACE
            | Layer::CURVE_EDGE
            | Layer::CURVE
            | Layer::CONTROL_POINT
            | Layer::REGION
            | Layer::XRAY
    }

    /// Layer-Stempel fuer einen Szenen-Node bei Konstruktion.
    pub fn for_node_kind(kind: &NodeKind) -> Self {
        match kind {
            NodeKind::FaceMesh { .. } => Layer::FACE,
            NodeKind::EdgeLine { .. } => Layer::CURVE_EDGE,
            NodeKind::EdgeOccludedLine { .. } => Layer::XRAY,
            NodeKind::CurveSegments => Layer::CURVE,
            NodeKind::ControlPointSprite { .. } => Layer::CONTROL_POINT | Layer::POINT,
            NodeKind::RegionMesh => Layer::REGION,
            NodeKind::Helper => Layer::HELPER,
        }
    }

    /// Primaerer Layer-Tag einer Entity-Art.
    pub fn for_entity_kind(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Solid => Layer::SOLID,
            EntityKind::Face => Layer::FACE,
            EntityKind::Edge => Layer::CURVE_EDGE,
            EntityKind::Curve => Layer::CURVE,
            EntityKind::ControlPoint => Layer::CONTROL_POINT,
            EntityKind::Region => Layer::REGION,
        }
    }

    /// Layer-Maske, die eine Pick-Anfrage fuer die angefragten Arten
    /// freischaltet. Solids werden ueber ihre Flaechen und Kanten
    /// angewaehlt.
    pub fn for_pick_kinds(kinds: EntityKinds) -> Self {
        let mut mask = Layer::empty();
        if kinds.contains(EntityKinds::SOLID) {
            mask |= Layer::SOLID | Layer::FACE | Layer::CURVE_EDGE;
        }
        if kinds.contains(EntityKinds::FACE) {
            mask |= Layer::FACE;
        }
        if kinds.contains(EntityKinds::EDGE) {
            mask |= Layer::CURVE_EDGE;
        }
        if kinds.contains(EntityKinds::CURVE) {
            mask |= Layer::CURVE;
        }
        if kinds.contains(EntityKinds::CONTROL_POINT) {
            mask |= Layer::CONTROL_POINT | Layer::POINT;
        }
        if kinds.contains(EntityKinds::REGION) {
            mask |= Layer::REGION;
        }
        mask
    }
}

/// Expliziter Save/Restore-Stack der aktiven Layer-Maske.
///
/// `current()` liefert die oberste Maske; `enable`/`disable` mutieren das
/// Stack-Top. Pick-Sessions pushen eine verengte Maske und poppen sie auf
/// jedem Exit-Pfad, geschachtelte Sessions bilden damit eine LIFO-Disziplin.
/// Leser der Maske lesen sie bei jedem Hit-Test frisch.
#[derive(Debug, Clone)]
pub struct LayerStack {
    base: Layer,
    overrides: Vec<Layer>,
}

impl LayerStack {
    /// Stack mit der Standard-Maske als Basis.
    pub fn new() -> Self {
        Self::with_base(Layer::default_mask())
    }

    /// Stack mit expliziter Basis-Maske.
    pub fn with_base(base: Layer) -> Self {
        Self {
            base,
            overrides: Vec::new(),
        }
    }

    /// Aktuell aktive Maske (Stack-Top).
    pub fn current(&self) -> Layer {
        self.overrides.last().copied().unwrap_or(self.base)
    }

    /// Anzahl gepushter Override-Masken.
    pub fn depth(&self) -> usize {
        self.overrides.len()
    }

    /// Aktiviert einen Layer auf dem Stack-Top. Idempotent.
    pub fn enable(&mut self, layer: Layer) {
        match self.overrides.last_mut() {
            Some(top) => top.insert(layer),
            None => self.base.insert(layer),
        }
    }

    /// Deaktiviert einen Layer auf dem Stack-Top. Idempotent.
    pub fn disable(&mut self, layer: Layer) {
        match self.overrides.last_mut() {
            Some(top) => top.remove(layer),
            None => self.base.remove(layer),
        }
    }

    /// Pusht eine Override-Maske (z.B. die verengte Maske einer
    /// Pick-Session).
    pub fn push(&mut self, mask: Layer) {
        self.overrides.push(mask);
    }

    /// Poppt die oberste Override-Maske und gibt sie zurueck.
    pub fn pop(&mut self) -> Result<Layer, EngineError> {
        self.overrides.pop().ok_or(EngineError::LayerStackUnderflow)
    }
}

impl Default for LayerStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_is_idempotent() {
        let mut layers = LayerStack::new();
        layers.disable(Layer::CONTROL_POINT);
        layers.disable(Layer::CONTROL_POINT);
        assert!(!layers.current().contains(Layer::CONTROL_POINT));

        layers.enable(Layer::CONTROL_POINT);
        layers.enable(Layer::CONTROL_POINT);
        assert!(layers.current().contains(Layer::CONTROL_POINT));
    }

    #[test]
    fn push_and_pop_restore_the_previous_mask() {
        let mut layers = LayerStack::new();
        let before = layers.current();

        layers.push(Layer::CURVE);
        assert_eq!(layers.current(), Layer::CURVE);

        layers.pop().expect("Override-Maske erwartet");
        assert_eq!(layers.current(), before);
    }

    #[test]
    fn pop_below_base_is_an_error() {
        let mut layers = LayerStack::new();
        assert_eq!(layers.pop(), Err(EngineError::LayerStackUnderflow));
    }

    #[test]
    fn toggling_on_an_override_leaves_the_base_untouched() {
        let mut layers = LayerStack::new();
        layers.push(Layer::CURVE | Layer::CONTROL_POINT);
        layers.disable(Layer::CONTROL_POINT);
        assert_eq!(layers.current(), Layer::CURVE);

        layers.pop().expect("Override-Maske erwartet");
        assert!(layers.current().contains(Layer::CONTROL_POINT));
    }

    #[test]
    fn pick_kind_masks_open_solid_proxies() {
        let mask = Layer::for_pick_kinds(EntityKinds::SOLID);
        assert!(mask.contains(Layer::FACE));
        assert!(mask.contains(Layer::CURVE_EDGE));
        assert!(!mask.contains(Layer::CURVE));
    }

    #[test]
    fn occluded_lines_are_tagged_xray_only() {
        let layers = Layer::for_node_kind(&NodeKind::EdgeOccludedLine { index: 0 });
        assert_eq!(layers, Layer::XRAY);
    }
}
