//! Hit-Test-Primitive: Schnittpunkte, Bildschirm-Rechteck, Viewport-Seam.

use glam::{Vec2, Vec3};

use super::layers::Layer;
use super::scene::NodeId;

/// Roher Schnittpunkt aus dem Ray-Test des Viewports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    /// Getroffener visueller Node
    pub node: NodeId,
    /// Distanz entlang des Strahls
    pub distance: f32,
    /// Welt-Koordinate des Treffers
    pub point: Vec3,
}

/// Achsen-aligniertes Rechteck in Bildschirm-Koordinaten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    pub min: Vec2,
    pub max: Vec2,
}

impl ScreenRect {
    /// Baut das Rechteck aus zwei beliebigen Eckpunkten.
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        Self {
            min: Vec2::new(a.x.min(b.x), a.y.min(b.y)),
            max: Vec2::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Prueft, ob ein Punkt im Rechteck liegt (inklusive Rand).
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

/// Vom Viewport/Kamera-System bereitgestellte Hit-Test-Primitive.
///
/// Die aktuelle Layer-Maske wird bei jedem Aufruf uebergeben, damit
/// deaktivierte Layer schon bei der Kandidaten-Erzeugung ausscheiden.
/// Implementierungen duerfen die Maske nicht ueber Aufrufe hinweg cachen.
pub trait HitTester {
    /// Ray-Test an einer Bildschirm-Position. Ergebnis nach Distanz
    /// aufsteigend.
    fn raycast(&self, screen_pos: Vec2, layers: Layer) -> Vec<Intersection>;

    /// Rechteck-Test ueber den Viewport. Ergebnis-Reihenfolge ist
    /// implementierungsabhaengig, muss aber fuer gleiche Eingaben stabil
    /// sein.
    fn rect_test(&self, rect: ScreenRect, layers: Layer) -> Vec<NodeId>;
}
