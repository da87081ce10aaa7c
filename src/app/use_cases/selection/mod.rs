//! Use-Case-Funktionen für Entity-Selektion.
//!
//! Aufgeteilt nach Selektionsmodus:
//! - `click` — Einzelklick-Selektion (Ersetzen / additives Toggle)
//! - `box_select` — Rechteck-Selektion über Entity-Mengen
//! - `hover` — Hover-Ziel-Verwaltung
//! - `purge` — Proaktives Entfernen gelöschter Items
//! - `helpers` — Gemeinsame Hilfsfunktionen
//!
//! Alle Funktionen geben das aggregierte `(added, removed)`-Delta der
//! Geste zurück; die Signal-Emission übernimmt der Handler.

mod box_select;
mod click;
mod helpers;
mod hover;
mod purge;

pub use box_select::{replace_with_entities, toggle_entities};
pub use click::{replace_selection, toggle_selection};
pub use helpers::clear_selection;
pub use hover::update_hover;
pub use purge::purge_item;
