use indexmap::IndexSet;

use crate::core::{ControlPointRef, EdgeRef, EntityKind, EntityRef, FaceRef, ItemId};

/// Selektions- und Hover-Zustand mit je einem geordneten Set pro
/// Entity-Art.
///
/// IndexSet hält die Einfüge-Reihenfolge — Iteration und Signal-Deltas
/// sind damit deterministisch. Pro Art existiert genau ein Selektions-Set;
/// Hover läuft über dieselbe Set-Maschinerie, aber getrennt von der
/// Selektion.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    solids: IndexSet<ItemId>,
    faces: IndexSet<FaceRef>,
    edges: IndexSet<EdgeRef>,
    curves: IndexSet<ItemId>,
    control_points: IndexSet<ControlPointRef>,
    regions: IndexSet<ItemId>,
    hovered: IndexSet<EntityRef>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fügt eine Entity hinzu. Gibt `true` zurück, wenn sie neu war.
    /// Idempotent bezüglich Set-Mitgliedschaft.
    pub fn insert(&mut self, entity: EntityRef) -> bool {
        match entity {
            EntityRef::Solid(id) => self.solids.insert(id),
            EntityRef::Face(face) => self.faces.insert(face),
            EntityRef::Edge(edge) => self.edges.insert(edge),
            EntityRef::Curve(id) => self.curves.insert(id),
            EntityRef::ControlPoint(cp) => self.control_points.insert(cp),
            EntityRef::Region(id) => self.regions.insert(id),
        }
    }

    /// Entfernt eine Entity. Gibt `true` zurück, wenn sie enthalten war.
    pub fn remove(&mut self, entity: &EntityRef) -> bool {
        match entity {
            EntityRef::Solid(id) => self.solids.shift_remove(id),
            EntityRef::Face(face) => self.faces.shift_remove(face),
            EntityRef::Edge(edge) => self.edges.shift_remove(edge),
            EntityRef::Curve(id) => self.curves.shift_remove(id),
            EntityRef::ControlPoint(cp) => self.control_points.shift_remove(cp),
            EntityRef::Region(id) => self.regions.shift_remove(id),
        }
    }

    /// Prüft die Set-Mitgliedschaft einer Entity.
    pub fn contains(&self, entity: &EntityRef) -> bool {
        match entity {
            EntityRef::Solid(id) => self.solids.contains(id),
            EntityRef::Face(face) => self.faces.contains(face),
            EntityRef::Edge(edge) => self.edges.contains(edge),
            EntityRef::Curve(id) => self.curves.contains(id),
            EntityRef::ControlPoint(cp) => self.control_points.contains(cp),
            EntityRef::Region(id) => self.regions.contains(id),
        }
    }

    /// Togglet eine Entity. Gibt `true` zurück, wenn sie danach
    /// selektiert ist.
    pub fn toggle(&mut self, entity: EntityRef) -> bool {
        if self.contains(&entity) {
            self.remove(&entity);
            false
        } else {
            self.insert(entity);
            true
        }
    }

    /// Anzahl selektierter Entities einer Art.
    pub fn count_of(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Solid => self.solids.len(),
            EntityKind::Face => self.faces.len(),
            EntityKind::Edge => self.edges.len(),
            EntityKind::Curve => self.curves.len(),
            EntityKind::ControlPoint => self.control_points.len(),
            EntityKind::Region => self.regions.len(),
        }
    }

    /// Gesamtzahl selektierter Entities über alle Arten.
    pub fn len(&self) -> usize {
        self.solids.len()
            + self.faces.len()
            + self.edges.len()
            + self.curves.len()
            + self.control_points.len()
            + self.regions.len()
    }

    /// `true`, wenn nichts selektiert ist (Hover zählt nicht).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Alle selektierten Entities in deterministischer Reihenfolge
    /// (Art-Gruppen in fester Folge, innerhalb der Gruppe
    /// Einfüge-Reihenfolge).
    pub fn entities(&self) -> Vec<EntityRef> {
        let mut out = Vec::with_capacity(self.len());
        out.extend(self.solids.iter().map(|id| EntityRef::Solid(*id)));
        out.extend(self.faces.iter().map(|face| EntityRef::Face(*face)));
        out.extend(self.edges.iter().map(|edge| EntityRef::Edge(*edge)));
        out.extend(self.curves.iter().map(|id| EntityRef::Curve(*id)));
        out.extend(
            self.control_points
                .iter()
                .map(|cp| EntityRef::ControlPoint(*cp)),
        );
        out.extend(self.regions.iter().map(|id| EntityRef::Region(*id)));
        out
    }

    /// Leert das Set einer Art und gibt die entfernten Entities zurück.
    pub fn clear_kind(&mut self, kind: EntityKind) -> Vec<EntityRef> {
        let removed: Vec<EntityRef> = self
            .entities()
            .into_iter()
            .filter(|entity| entity.kind() == kind)
            .collect();
        for entity in &removed {
            self.remove(entity);
        }
        removed
    }

    /// Leert alle Selektions-Sets (ohne Hover) und gibt die entfernten
    /// Entities zurück.
    pub fn clear_all(&mut self) -> Vec<EntityRef> {
        let removed = self.entities();
        self.solids.clear();
        self.faces.clear();
        self.edges.clear();
        self.curves.clear();
        self.control_points.clear();
        self.regions.clear();
        removed
    }

    /// Aktuelles Hover-Ziel (höchstens eines).
    pub fn hovered(&self) -> Option<&EntityRef> {
        self.hovered.first()
    }

    /// Ersetzt das Hover-Ziel. Gibt `(added, removed)` zurück.
    pub fn replace_hover(
        &mut self,
        entity: Option<EntityRef>,
    ) -> (Vec<EntityRef>, Vec<EntityRef>) {
        if self.hovered.first() == entity.as_ref() {
            return (Vec::new(), Vec::new());
        }
        let removed: Vec<EntityRef> = self.hovered.drain(..).collect();
        let mut added = Vec::new();
        if let Some(entity) = entity {
            self.hovered.insert(entity);
            added.push(entity);
        }
        (added, removed)
    }

    /// Entfernt alle Entities eines gelöschten Items aus Selektion und
    /// Hover. Gibt `(selektion_entfernt, hover_entfernt)` zurück.
    /// Idempotent: erneuter Aufruf entfernt nichts mehr.
    pub fn purge_item(&mut self, item: ItemId) -> (Vec<EntityRef>, Vec<EntityRef>) {
        let selected_removed: Vec<EntityRef> = self
            .entities()
            .into_iter()
            .filter(|entity| entity.item() == item)
            .collect();
        for entity in &selected_removed {
            self.remove(entity);
        }

        let hover_removed: Vec<EntityRef> = self
            .hovered
            .iter()
            .copied()
            .filter(|entity| entity.item() == item)
            .collect();
        for entity in &hover_removed {
            self.hovered.shift_remove(entity);
        }

        (selected_removed, hover_removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn face(solid: u64, index: u32) -> EntityRef {
        EntityRef::Face(FaceRef {
            solid: ItemId(solid),
            index,
        })
    }

    #[test]
    fn insert_is_idempotent() {
        let mut selection = SelectionState::new();
        assert!(selection.insert(face(1, 0)));
        assert!(!selection.insert(face(1, 0)));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn toggle_flips_membership() {
        let mut selection = SelectionState::new();
        assert!(selection.toggle(face(1, 0)));
        assert!(!selection.toggle(face(1, 0)));
        assert!(selection.is_empty());
    }

    #[test]
    fn purge_removes_selection_and_hover_of_the_item() {
        let mut selection = SelectionState::new();
        selection.insert(face(1, 0));
        selection.insert(face(1, 1));
        selection.insert(EntityRef::Curve(ItemId(2)));
        selection.replace_hover(Some(face(1, 0)));

        let (selected, hovered) = selection.purge_item(ItemId(1));
        assert_eq!(selected.len(), 2);
        assert_eq!(hovered.len(), 1);
        assert_eq!(selection.len(), 1);
        assert!(selection.hovered().is_none());

        // Idempotenz
        let (selected, hovered) = selection.purge_item(ItemId(1));
        assert!(selected.is_empty());
        assert!(hovered.is_empty());
    }

    #[test]
    fn replace_hover_with_the_same_target_is_a_no_op() {
        let mut selection = SelectionState::new();
        selection.replace_hover(Some(face(1, 0)));
        let (added, removed) = selection.replace_hover(Some(face(1, 0)));
        assert!(added.is_empty());
        assert!(removed.is_empty());
    }

    #[test]
    fn clear_kind_only_touches_one_kind() {
        let mut selection = SelectionState::new();
        selection.insert(face(1, 0));
        selection.insert(EntityRef::Curve(ItemId(2)));

        let removed = selection.clear_kind(EntityKind::Face);
        assert_eq!(removed, vec![face(1, 0)]);
        assert_eq!(selection.count_of(EntityKind::Curve), 1);
    }
}
