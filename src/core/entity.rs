//! Logische Modell-Entities: IDs, Arten und typisierte Referenzen.

use bitflags::bitflags;

/// ID eines logischen Modell-Items in der Szenen-Datenbank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u64);

/// Referenz auf eine Flaeche eines Solids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FaceRef {
    /// Besitzendes Solid
    pub solid: ItemId,
    /// Flaechen-Index innerhalb des Solids
    pub index: u32,
}

/// Referenz auf eine Kante eines Solids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeRef {
    /// Besitzendes Solid
    pub solid: ItemId,
    /// Kanten-Index innerhalb des Solids
    pub index: u32,
}

/// Referenz auf einen Kontrollpunkt einer Kurve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControlPointRef {
    /// Besitzende Kurve
    pub curve: ItemId,
    /// Kontrollpunkt-Index entlang der Kurve
    pub index: u32,
}

/// Art einer selektierbaren Entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Solid,
    Face,
    Edge,
    Curve,
    ControlPoint,
    Region,
}

/// Typisierte Referenz auf eine selektierbare Entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityRef {
    /// Ganzes Solid
    Solid(ItemId),
    /// Flaeche eines Solids
    Face(FaceRef),
    /// Kante eines Solids
    Edge(EdgeRef),
    /// Raumkurve
    Curve(ItemId),
    /// Kontrollpunkt einer Kurve
    ControlPoint(ControlPointRef),
    /// Planare Region
    Region(ItemId),
}

impl EntityRef {
    /// Art der referenzierten Entity.
    pub fn kind(&self) -> EntityKind {
        match self {
            EntityRef::Solid(_) => EntityKind::Solid,
            EntityRef::Face(_) => EntityKind::Face,
            EntityRef::Edge(_) => EntityKind::Edge,
            EntityRef::Curve(_) => EntityKind::Curve,
            EntityRef::ControlPoint(_) => EntityKind::ControlPoint,
            EntityRef::Region(_) => EntityKind::Region,
        }
    }

    /// ID des besitzenden Modell-Items.
    pub fn item(&self) -> ItemId {
        match self {
            EntityRef::Solid(id) | EntityRef::Curve(id) | EntityRef::Region(id) => *id,
            EntityRef::Face(face) => face.solid,
            EntityRef::Edge(edge) => edge.solid,
            EntityRef::ControlPoint(cp) => cp.curve,
        }
    }
}

bitflags! {
    /// Menge erlaubter Entity-Arten fuer Pick-Anfragen.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct EntityKinds: u8 {
        const SOLID = 1;
        const FACE = 1 << 1;
        const EDGE = 1 << 2;
        const CURVE = 1 << 3;
        const CONTROL_POINT = 1 << 4;
        const REGION = 1 << 5;
    }
}

impl EntityKinds {
    /// Einzelne Art als Menge.
    pub fn from_kind(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Solid => EntityKinds::SOLID,
            EntityKind::Face => EntityKinds::FACE,
            EntityKind::Edge => EntityKinds::EDGE,
            EntityKind::Curve => EntityKinds::CURVE,
            EntityKind::ControlPoint => EntityKinds::CONTROL_POINT,
            EntityKind::Region => EntityKinds::REGION,
        }
    }

    /// Prueft, ob die Art in der Menge enthalten ist.
    pub fn contains_kind(&self, kind: EntityKind) -> bool {
        self.contains(Self::from_kind(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_ref_reports_owning_item() {
        let face = EntityRef::Face(FaceRef {
            solid: ItemId(7),
            index: 2,
        });
        assert_eq!(face.item(), ItemId(7));
        assert_eq!(face.kind(), EntityKind::Face);

        let cp = EntityRef::ControlPoint(ControlPointRef {
            curve: ItemId(3),
            index: 0,
        });
        assert_eq!(cp.item(), ItemId(3));
    }

    #[test]
    fn kind_set_matches_single_kinds() {
        let kinds = EntityKinds::CURVE | EntityKinds::CONTROL_POINT;
        assert!(kinds.contains_kind(EntityKind::Curve));
        assert!(kinds.contains_kind(EntityKind::ControlPoint));
        assert!(!kinds.contains_kind(EntityKind::Face));
    }
}
