//! Schnittpunkt-Filter: von rohen Hits zur priorisierten Entity-Liste.
//!
//! Der Filter ist eine reine Funktion ueber Schnittpunkt-Liste, Layer-Maske
//! und Szenen-Graph. Er verwirft deaktivierte, unsichtbare und nicht
//! aufloesbare Treffer, kollabiert die Linien-Varianten einer Kante und
//! Detailstufen-Duplikate derselben Entity und ordnet das Ergebnis nach
//! Distanz mit Klassen-Prioritaet bei deckungsgleichen Treffern.

use glam::Vec3;
use indexmap::{IndexMap, IndexSet};
use std::collections::HashSet;

use super::entity::{EntityKind, EntityRef};
use super::hit::Intersection;
use super::layers::Layer;
use super::scene::{NodeId, SceneDatabase};

/// Toleranz, innerhalb derer zwei Distanzen als deckungsgleich gelten.
/// Kanten werden mit leichtem Depth-Bias ueber Flaechen gezeichnet, ihre
/// Distanzen weichen deshalb minimal von der Flaechen-Distanz ab.
pub const DEPTH_COINCIDENCE_EPS: f32 = 1e-3;

/// Gefilterter Treffer: aufgeloeste Entity plus naechste Trefferdaten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilteredHit {
    /// Selektierbare Entity
    pub entity: EntityRef,
    /// Kleinste Distanz aller Roh-Treffer dieser Entity
    pub distance: f32,
    /// Welt-Koordinate des naechsten Treffers
    pub point: Vec3,
}

/// Klassen-Prioritaet bei deckungsgleichen Distanzen (kleiner = zuerst).
///
/// Kanten liegen visuell ueber Flaechen, der Kurvenkoerper vor seinen
/// Kontrollpunkten.
fn class_priority(kind: EntityKind) -> u8 {
    match kind {
        EntityKind::Edge => 0,
        EntityKind::Curve => 1,
        EntityKind::ControlPoint => 2,
        EntityKind::Region => 3,
        EntityKind::Face => 4,
        EntityKind::Solid => 5,
    }
}

/// Gate fuer einen einzelnen Roh-Treffer: Layer, Sichtbarkeit, Aufloesung.
fn gate(node_id: NodeId, layers: Layer, scene: &SceneDatabase) -> Option<EntityRef> {
    let node = scene.node(node_id)?;
    if !node.visible {
        return None;
    }
    if !node.layers.intersects(layers) {
        return None;
    }
    let entity = scene.resolve(node_id)?;
    // Der primaere Layer der Entity-Art muss selbst aktiv sein: ein nur
    // ueber XRAY getroffener verdeckter Linien-Node zaehlt nicht, wenn
    // CURVE_EDGE deaktiviert ist.
    if !layers.contains(Layer::for_entity_kind(entity.kind())) {
        return None;
    }
    Some(entity)
}

/// Reduziert rohe Ray-Schnittpunkte auf die autoritative Entity-Liste.
///
/// Reihenfolge: aufsteigende Distanz; innerhalb der Deckungsgleichheits-
/// Toleranz entscheidet die Klassen-Prioritaet (Kante vor Flaeche, Kurve
/// vor Kontrollpunkt). Bei aktivem Roentgen-Modus gewinnen Kanten-Eintraege
/// zusaetzlich global gegen Flaechen-Eintraege, weil der Drahtgitter-
/// Overlay durch das Solid hindurch pickbar bleibt.
pub fn filter(
    intersections: &[Intersection],
    layers: Layer,
    scene: &SceneDatabase,
) -> Vec<FilteredHit> {
    let mut best: IndexMap<EntityRef, FilteredHit> = IndexMap::new();

    for hit in intersections {
        let Some(entity) = gate(hit.node, layers, scene) else {
            continue;
        };
        match best.get_mut(&entity) {
            Some(existing) => {
                if hit.distance < existing.distance {
                    existing.distance = hit.distance;
                    existing.point = hit.point;
                }
            }
            None => {
                best.insert(
                    entity,
                    FilteredHit {
                        entity,
                        distance: hit.distance,
                        point: hit.point,
                    },
                );
            }
        }
    }

    let mut hits: Vec<FilteredHit> = best.into_values().collect();
    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    reorder_coincident_groups(&mut hits);

    if layers.contains(Layer::XRAY) {
        promote_edges_over_faces(&mut hits);
    }

    hits
}

/// Sortiert deckungsgleiche Distanz-Gruppen nach Klassen-Prioritaet.
/// Die Eingabe muss bereits nach Distanz aufsteigend sortiert sein.
fn reorder_coincident_groups(hits: &mut [FilteredHit]) {
    let mut start = 0;
    while start < hits.len() {
        let group_distance = hits[start].distance;
        let mut end = start + 1;
        while end < hits.len() && hits[end].distance - group_distance <= DEPTH_COINCIDENCE_EPS {
            end += 1;
        }
        hits[start..end].sort_by(|a, b| {
            class_priority(a.entity.kind())
                .cmp(&class_priority(b.entity.kind()))
                .then(a.distance.total_cmp(&b.distance))
        });
        start = end;
    }
}

/// Zieht Kanten-Eintraege vor Flaechen-Eintraege, ohne die Reihenfolge
/// der uebrigen Eintraege zu veraendern.
fn promote_edges_over_faces(hits: &mut [FilteredHit]) {
    let slots: Vec<usize> = hits
        .iter()
        .enumerate()
        .filter(|(_, hit)| {
            matches!(hit.entity.kind(), EntityKind::Edge | EntityKind::Face)
        })
        .map(|(slot, _)| slot)
        .collect();

    let mut subsequence: Vec<FilteredHit> = slots.iter().map(|&slot| hits[slot]).collect();
    subsequence.sort_by_key(|hit| matches!(hit.entity.kind(), EntityKind::Face));

    for (slot, hit) in slots.into_iter().zip(subsequence) {
        hits[slot] = hit;
    }
}

/// Reduziert das Ergebnis eines Rechteck-Tests auf selektierbare Entities.
///
/// Die Reihenfolge ist die stabile Szenen-Traversierungs-Reihenfolge
/// (Node-Einfuege-Reihenfolge), unabhaengig davon, in welcher Reihenfolge
/// der rohe Rechteck-Test seine Nodes liefert.
pub fn select(nodes: &[NodeId], layers: Layer, scene: &SceneDatabase) -> Vec<EntityRef> {
    let candidates: HashSet<NodeId> = nodes.iter().copied().collect();
    let mut entities: IndexSet<EntityRef> = IndexSet::new();

    for node in scene.nodes() {
        if !candidates.contains(&node.id) {
            continue;
        }
        if let Some(entity) = gate(node.id, layers, scene) {
            entities.insert(entity);
        }
    }

    entities.into_iter().collect()
}
