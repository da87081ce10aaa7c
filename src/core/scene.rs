//! Szenen-Graph und Geometrie-Datenbank: Items, visuelle Nodes, Aufloesung.

use indexmap::IndexMap;

use super::entity::{ControlPointRef, EdgeRef, EntityRef, FaceRef, ItemId};
use super::layers::Layer;

/// ID eines visuellen Szenen-Nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

/// Art eines visuellen Szenen-Nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Dreiecksnetz einer Solid-Flaeche
    FaceMesh { index: u32 },
    /// Sichtbare Linien-Darstellung einer Kante
    EdgeLine { index: u32 },
    /// Verdeckte (gestrichelte) Linien-Darstellung einer Kante
    EdgeOccludedLine { index: u32 },
    /// Polylinien-Darstellung des Kurvenkoerpers
    CurveSegments,
    /// Sprite eines Kontrollpunkts
    ControlPointSprite { index: u32 },
    /// Flaechennetz einer planaren Region
    RegionMesh,
    /// Dekorativer Hilfs-Node ohne logisches Item
    Helper,
}

/// Visueller Node im Szenen-Graph.
#[derive(Debug, Clone)]
pub struct SceneNode {
    /// Eigene ID
    pub id: NodeId,
    /// Besitzendes Modell-Item (schwache Rueckreferenz ueber die ID,
    /// Nodes ueberleben ihr Item nie)
    pub item: ItemId,
    /// Art des Nodes
    pub kind: NodeKind,
    /// Layer-Stempel (primaerer Tag + Modifier)
    pub layers: Layer,
    /// Unsichtbare Nodes nehmen nicht am Hit-Test teil
    pub visible: bool,
}

/// Logisches Modell-Item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelItem {
    /// Volumenkoerper mit Flaechen und Kanten
    Solid { face_count: u32, edge_count: u32 },
    /// Raumkurve mit Kontrollpunkten
    Curve { control_point_count: u32 },
    /// Planare Region
    Region,
}

/// Szenen-Datenbank: besitzt Modell-Items und deren visuelle Nodes.
///
/// Die Einfuege-Reihenfolge der Nodes ist die deterministische
/// Traversierungs-Reihenfolge fuer Box-Selektion.
#[derive(Debug, Default)]
pub struct SceneDatabase {
    items: IndexMap<ItemId, ModelItem>,
    nodes: IndexMap<NodeId, SceneNode>,
    next_item: u64,
    next_node: u64,
}

impl SceneDatabase {
    /// Erstellt eine leere Szenen-Datenbank.
    pub fn new() -> Self {
        Self::default()
    }

    /// Committet ein Solid mit `face_count` Flaechen und `edge_count`
    /// Kanten. Pro Kante entstehen ein sichtbarer und ein verdeckter
    /// Linien-Node.
    pub fn commit_solid(&mut self, face_count: u32, edge_count: u32) -> ItemId {
        let item = self.alloc_item(ModelItem::Solid {
            face_count,
            edge_count,
        });
        for index in 0..face_count {
            self.spawn_node(item, NodeKind::FaceMesh { index });
        }
        for index in 0..edge_count {
            self.spawn_node(item, NodeKind::EdgeLine { index });
            self.spawn_node(item, NodeKind::EdgeOccludedLine { index });
        }
        log::debug!(
            "Solid {:?} committet ({} Flaechen, {} Kanten)",
            item,
            face_count,
            edge_count
        );
        item
    }

    /// Committet eine Kurve mit Koerper-Node und Kontrollpunkt-Sprites.
    pub fn commit_curve(&mut self, control_point_count: u32) -> ItemId {
        let item = self.alloc_item(ModelItem::Curve {
            control_point_count,
        });
        self.spawn_node(item, NodeKind::CurveSegments);
        for index in 0..control_point_count {
            self.spawn_node(item, NodeKind::ControlPointSprite { index });
        }
        log::debug!(
            "Kurve {:?} committet ({} Kontrollpunkte)",
            item,
            control_point_count
        );
        item
    }

    /// Committet eine planare Region.
    pub fn commit_region(&mut self) -> ItemId {
        let item = self.alloc_item(ModelItem::Region);
        self.spawn_node(item, NodeKind::RegionMesh);
        log::debug!("Region {:?} committet", item);
        item
    }

    /// Fuegt einem bestehenden Item einen weiteren Node hinzu, z.B. eine
    /// zusaetzliche Detailstufe derselben Flaeche oder einen dekorativen
    /// Hilfs-Node. Gibt `None` zurueck, wenn das Item nicht existiert.
    pub fn spawn_extra_node(&mut self, item: ItemId, kind: NodeKind) -> Option<NodeId> {
        if !self.items.contains_key(&item) {
            return None;
        }
        Some(self.spawn_node(item, kind))
    }

    fn alloc_item(&mut self, item: ModelItem) -> ItemId {
        self.next_item += 1;
        let id = ItemId(self.next_item);
        self.items.insert(id, item);
        id
    }

    fn spawn_node(&mut self, item: ItemId, kind: NodeKind) -> NodeId {
        self.next_node += 1;
        let id = NodeId(self.next_node);
        self.nodes.insert(
            id,
            SceneNode {
                id,
                item,
                kind,
                layers: Layer::for_node_kind(&kind),
                visible: true,
            },
        );
        id
    }

    /// Gibt zurueck, ob das Item (noch) existiert.
    pub fn contains_item(&self, id: ItemId) -> bool {
        self.items.contains_key(&id)
    }

    /// Liest ein Modell-Item.
    pub fn item(&self, id: ItemId) -> Option<&ModelItem> {
        self.items.get(&id)
    }

    /// Anzahl der Modell-Items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Anzahl der visuellen Nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Liest einen visuellen Node.
    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(&id)
    }

    /// Alle Nodes in stabiler Einfuege-Reihenfolge.
    pub fn nodes(&self) -> impl Iterator<Item = &SceneNode> {
        self.nodes.values()
    }

    /// Alle Nodes eines Items in stabiler Reihenfolge.
    pub fn nodes_of_item(&self, item: ItemId) -> impl Iterator<Item = &SceneNode> {
        self.nodes.values().filter(move |node| node.item == item)
    }

    /// Setzt die Sichtbarkeit eines Nodes. `false` wenn der Node fehlt.
    pub fn set_node_visible(&mut self, id: NodeId, visible: bool) -> bool {
        match self.nodes.get_mut(&id) {
            Some(node) => {
                node.visible = visible;
                true
            }
            None => false,
        }
    }

    /// Loest einen visuellen Node zur logischen Entity auf.
    ///
    /// Hilfs-Nodes und Nodes bereits entfernter Items liefern `None`.
    pub fn resolve(&self, id: NodeId) -> Option<EntityRef> {
        let node = self.nodes.get(&id)?;
        if !self.items.contains_key(&node.item) {
            return None;
        }
        match node.kind {
            NodeKind::FaceMesh { index } => Some(EntityRef::Face(FaceRef {
                solid: node.item,
                index,
            })),
            NodeKind::EdgeLine { index } | NodeKind::EdgeOccludedLine { index } => {
                Some(EntityRef::Edge(EdgeRef {
                    solid: node.item,
                    index,
                }))
            }
            NodeKind::CurveSegments => Some(EntityRef::Curve(node.item)),
            NodeKind::ControlPointSprite { index } => {
                Some(EntityRef::ControlPoint(ControlPointRef {
                    curve: node.item,
                    index,
                }))
            }
            NodeKind::RegionMesh => Some(EntityRef::Region(node.item)),
            NodeKind::Helper => None,
        }
    }

    /// Entfernt ein Item mitsamt allen visuellen Nodes. Idempotent.
    pub fn remove_item(&mut self, id: ItemId) -> Option<ModelItem> {
        let removed = self.items.shift_remove(&id);
        if removed.is_some() {
            self.nodes.retain(|_, node| node.item != id);
            log::debug!("Item {:?} aus der Szene entfernt", id);
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn committed_solid_spawns_face_and_edge_variants() {
        let mut scene = SceneDatabase::new();
        let solid = scene.commit_solid(2, 3);

        assert_eq!(scene.item_count(), 1);
        // 2 Flaechen + 3 Kanten x (sichtbar + verdeckt)
        assert_eq!(scene.node_count(), 8);
        assert_eq!(scene.nodes_of_item(solid).count(), 8);
    }

    #[test]
    fn resolve_maps_both_edge_variants_to_the_same_entity() {
        let mut scene = SceneDatabase::new();
        let solid = scene.commit_solid(0, 1);

        let variants: Vec<EntityRef> = scene
            .nodes_of_item(solid)
            .map(|node| node.id)
            .collect::<Vec<_>>()
            .into_iter()
            .filter_map(|id| scene.resolve(id))
            .collect();

        assert_eq!(variants.len(), 2);
        assert_eq!(variants[0], variants[1]);
        assert_eq!(
            variants[0],
            EntityRef::Edge(EdgeRef {
                solid,
                index: 0
            })
        );
    }

    #[test]
    fn helper_nodes_resolve_to_nothing() {
        let mut scene = SceneDatabase::new();
        let curve = scene.commit_curve(0);
        let helper = scene
            .spawn_extra_node(curve, NodeKind::Helper)
            .expect("Item existiert");

        assert_eq!(scene.resolve(helper), None);
    }

    #[test]
    fn removing_an_item_drops_its_nodes_and_is_idempotent() {
        let mut scene = SceneDatabase::new();
        let curve = scene.commit_curve(2);
        let node_ids: Vec<NodeId> = scene.nodes_of_item(curve).map(|n| n.id).collect();

        assert!(scene.remove_item(curve).is_some());
        assert!(scene.remove_item(curve).is_none());
        assert_eq!(scene.node_count(), 0);
        for id in node_ids {
            assert_eq!(scene.resolve(id), None);
        }
    }

    #[test]
    fn node_order_is_insertion_order() {
        let mut scene = SceneDatabase::new();
        let a = scene.commit_curve(0);
        let b = scene.commit_region();
        scene.remove_item(a);
        let c = scene.commit_curve(0);

        let items: Vec<ItemId> = scene.nodes().map(|n| n.item).collect();
        assert_eq!(items, vec![b, c]);
    }
}
