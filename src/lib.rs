// Domain layer - Automaton core, no drawing
pub mod domain;

// Application layer - Seeding, clock and termination bookkeeping
pub mod application;

// Infrastructure layer - Rendering, input, frame capture and export
pub mod rendering;
pub mod input;
pub mod recording;

pub mod config;
pub mod error;
mod session;

// Re-exports for convenience
pub use domain::{Cell, Generation, TerminalReason};
pub use application::{Phase, Selection, Simulation};
pub use config::Settings;
pub use error::{Error, Result};
pub use session::Session;
