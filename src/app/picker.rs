//! Asynchrones Pick-Protokoll: typisierte, kardinalitäts-beschränkte
//! Pick-Anfragen.
//!
//! Eine Anfrage verengt die Layer-Maske auf die angefragten Entity-Arten,
//! akkumuliert qualifizierende Klick-/Rechteck-Picks und löst den
//! zurückgegebenen Einmal-Kanal auf, sobald das Abschluss-Kriterium
//! erfüllt ist. Die Maske wird auf jedem Exit-Pfad wiederhergestellt,
//! bevor das Ergebnis beobachtbar wird; geschachtelte Sessions bilden
//! eine LIFO-Disziplin.

use indexmap::IndexSet;

use crate::app::events::SelectionSignal;
use crate::app::AppState;
use crate::core::{EntityKinds, EntityRef, Layer};
use crate::error::EngineError;

/// Ergebnis einer Pick-Anfrage. Benutzer-Abbruch ist eine eigene
/// Variante, kein Fehler.
#[derive(Debug, Clone, PartialEq)]
pub enum PickOutcome {
    /// Anfrage erfüllt: akkumulierte Entities in Pick-Reihenfolge
    Completed(Vec<EntityRef>),
    /// Vom Benutzer abgebrochen (Escape)
    Cancelled,
}

/// Eigenes Abschluss-Prädikat einer Pick-Anfrage.
pub type PickPredicate = Box<dyn Fn(&[EntityRef]) -> bool>;

/// Beschreibung einer Pick-Anfrage.
pub struct PickRequest {
    /// Erlaubte Entity-Arten
    pub kinds: EntityKinds,
    /// Minimal akzeptierte Anzahl (Bestätigung erst ab hier möglich)
    pub min_count: usize,
    /// Maximal akzeptierte Anzahl; erreicht = sofortige Auflösung
    /// (None = unbegrenzt)
    pub max_count: Option<usize>,
    /// Optionales eigenes Abschluss-Prädikat, nach jedem Pick ausgewertet
    pub done_when: Option<PickPredicate>,
}

impl PickRequest {
    /// Anfrage mit Standard-Kardinalität (min 1, unbegrenzt).
    pub fn new(kinds: EntityKinds) -> Self {
        Self {
            kinds,
            min_count: 1,
            max_count: None,
            done_when: None,
        }
    }

    /// Anfrage für genau `count` Entities.
    pub fn exactly(kinds: EntityKinds, count: usize) -> Self {
        Self {
            kinds,
            min_count: count,
            max_count: Some(count),
            done_when: None,
        }
    }

    /// Setzt die Mindestanzahl.
    pub fn with_min(mut self, min_count: usize) -> Self {
        self.min_count = min_count;
        self
    }

    /// Setzt die Maximalanzahl.
    pub fn with_max(mut self, max_count: usize) -> Self {
        self.max_count = Some(max_count);
        self
    }

    /// Setzt ein eigenes Abschluss-Prädikat.
    pub fn done_when(mut self, predicate: impl Fn(&[EntityRef]) -> bool + 'static) -> Self {
        self.done_when = Some(Box::new(predicate));
        self
    }

    /// Prüft eine gepickte Entity gegen die erlaubten Arten.
    ///
    /// Flächen und Kanten werden zum besitzenden Solid promoviert, wenn
    /// Solids angefragt sind, ihre eigene Art aber nicht — ein Solid wird
    /// über seine Flächen/Kanten angewählt.
    fn match_entity(&self, entity: &EntityRef) -> Option<EntityRef> {
        if self.kinds.contains_kind(entity.kind()) {
            return Some(*entity);
        }
        if self.kinds.contains(EntityKinds::SOLID) {
            match entity {
                EntityRef::Face(face) => return Some(EntityRef::Solid(face.solid)),
                EntityRef::Edge(edge) => return Some(EntityRef::Solid(edge.solid)),
                _ => {}
            }
        }
        None
    }
}

/// Laufende Pick-Session.
struct PickSession {
    request: PickRequest,
    acquired: IndexSet<EntityRef>,
    sender: oneshot::Sender<PickOutcome>,
}

impl PickSession {
    fn max_reached(&self) -> bool {
        self.request
            .max_count
            .is_some_and(|max| self.acquired.len() >= max)
    }

    fn is_satisfied(&self) -> bool {
        if self.max_reached() {
            return true;
        }
        if let Some(predicate) = &self.request.done_when {
            let acquired: Vec<EntityRef> = self.acquired.iter().copied().collect();
            return predicate(&acquired);
        }
        false
    }
}

/// Stack laufender Pick-Sessions (geschachtelte Picks).
#[derive(Default)]
pub struct PickerState {
    sessions: Vec<PickSession>,
}

impl PickerState {
    /// Erstellt einen leeren Session-Stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// `true`, wenn mindestens eine Pick-Session läuft.
    pub fn is_active(&self) -> bool {
        !self.sessions.is_empty()
    }

    /// Anzahl laufender (geschachtelter) Sessions.
    pub fn depth(&self) -> usize {
        self.sessions.len()
    }

    /// Bisher akkumulierte Picks der innersten Session.
    pub fn acquired_count(&self) -> usize {
        self.sessions
            .last()
            .map_or(0, |session| session.acquired.len())
    }
}

/// Startet eine Pick-Anfrage.
///
/// Verengt die Layer-Maske auf die angefragten Arten (der Röntgen-Modus
/// bleibt wie vorgefunden) und liefert den Receiver, auf dem der
/// aufrufende Command suspendiert. Wird der Receiver aufgegeben, läuft
/// die Session bis zu ihrem regulären Ende weiter.
pub fn begin_pick(
    state: &mut AppState,
    request: PickRequest,
) -> Result<oneshot::Receiver<PickOutcome>, EngineError> {
    if request.kinds.is_empty() {
        return Err(EngineError::EmptyPickKinds);
    }
    if let Some(max) = request.max_count {
        if request.min_count > max {
            return Err(EngineError::InvalidPickCardinality {
                min: request.min_count,
                max,
            });
        }
    }

    let narrowed = Layer::for_pick_kinds(request.kinds) | (state.layers.current() & Layer::XRAY);
    state.layers.push(narrowed);

    let (sender, receiver) = oneshot::channel();
    state.picker.sessions.push(PickSession {
        request,
        acquired: IndexSet::new(),
        sender,
    });
    log::info!(
        "Pick-Session gestartet (Tiefe {}, Maske {:?})",
        state.picker.depth(),
        narrowed
    );

    Ok(receiver)
}

/// Verarbeitet ein Selektions-Signal in der innersten Session. Hover
/// zählt nie; Entities fremder Arten werden still ignoriert.
pub(crate) fn on_signal(
    state: &mut AppState,
    signal: &SelectionSignal,
) -> Result<(), EngineError> {
    let SelectionSignal::SelectionChanged { delta } = signal else {
        return Ok(());
    };

    let AppState { scene, picker, .. } = &mut *state;
    let Some(session) = picker.sessions.last_mut() else {
        return Ok(());
    };

    for entity in &delta.added {
        let Some(matched) = session.request.match_entity(entity) else {
            log::debug!("Pick: {:?} passt nicht zu den angefragten Arten", entity);
            continue;
        };
        if !scene.contains_item(matched.item()) {
            continue;
        }
        session.acquired.insert(matched);
        if session.max_reached() {
            break;
        }
    }

    let satisfied = session.is_satisfied();
    if satisfied {
        resolve_top(state)?;
    }
    Ok(())
}

/// Bestätigt die innerste Session (Enter / Doppelklick). No-op ohne
/// Session oder unterhalb der Mindestanzahl.
pub(crate) fn confirm_active(state: &mut AppState) -> Result<(), EngineError> {
    let Some(session) = state.picker.sessions.last() else {
        log::debug!("Pick-Bestätigung ohne aktive Session ignoriert");
        return Ok(());
    };
    if session.acquired.len() < session.request.min_count {
        log::debug!(
            "Pick-Bestätigung vor Erreichen der Mindestanzahl ignoriert ({}/{})",
            session.acquired.len(),
            session.request.min_count
        );
        return Ok(());
    }
    resolve_top(state)
}

/// Bricht die innerste Session ab. No-op ohne Session.
pub(crate) fn cancel_active(state: &mut AppState) -> Result<(), EngineError> {
    let Some(session) = state.picker.sessions.pop() else {
        return Ok(());
    };
    // Maske wiederherstellen, bevor das Ergebnis beobachtbar wird
    state.layers.pop()?;
    log::info!("Pick-Session abgebrochen (Tiefe {})", state.picker.depth() + 1);
    let _ = session.sender.send(PickOutcome::Cancelled);
    Ok(())
}

/// Löst die innerste Session mit den akkumulierten Entities auf.
fn resolve_top(state: &mut AppState) -> Result<(), EngineError> {
    let Some(session) = state.picker.sessions.pop() else {
        return Ok(());
    };
    state.layers.pop()?;
    let entities: Vec<EntityRef> = session.acquired.into_iter().collect();
    log::info!("Pick-Session aufgelöst ({} Entities)", entities.len());
    let _ = session.sender.send(PickOutcome::Completed(entities));
    Ok(())
}
