//! AppIntent-, AppCommand- und Signal-Typen für den Event-Datenfluss.

mod command;
mod intent;
mod signal;

pub use command::AppCommand;
pub use intent::AppIntent;
pub use signal::{SelectionDelta, SelectionSignal};
