//! Fehlertypen der Picking-Engine.

use thiserror::Error;

/// Vertragsverletzungen, die an den Aufrufer gemeldet werden.
///
/// Benutzer-Abbruch ist bewusst KEIN Fehler, sondern eine eigene
/// `PickOutcome`-Variante.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// Pick-Anfrage mit widerspruechlicher Kardinalitaet
    #[error("ungueltige Pick-Kardinalitaet: min {min} > max {max}")]
    InvalidPickCardinality { min: usize, max: usize },

    /// Pick-Anfrage ohne erlaubte Entity-Arten
    #[error("Pick-Anfrage ohne erlaubte Entity-Arten")]
    EmptyPickKinds,

    /// Die Basis-Maske des Layer-Stacks kann nicht entfernt werden
    #[error("Layer-Stack-Unterlauf: Basis-Maske kann nicht entfernt werden")]
    LayerStackUnderflow,
}
