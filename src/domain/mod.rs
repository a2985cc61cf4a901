mod cell;
mod generation;
pub mod rules;
mod termination;

pub use cell::Cell;
pub use generation::Generation;
pub use termination::{TerminalReason, detect};
