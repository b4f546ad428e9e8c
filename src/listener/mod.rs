mod event_printer;
mod event_writer;

use std::fmt;

use crate::model::*;

pub use event_printer::EventPrinter;
pub use event_writer::EventWriter;

pub trait Listener: Send {
    fn notify_action(&mut self, _state: &GameState, _action: &Action) {}
}

impl fmt::Debug for dyn Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Listener")
    }
}
