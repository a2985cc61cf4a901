mod simulation;

pub use simulation::{Phase, Selection, Simulation};
