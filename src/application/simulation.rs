use std::mem;

use rand::Rng;

use crate::config::{GENERATIONS_PER_SECOND, GRID_SIZE, NUMBER_OF_INITIAL_CELLS};
use crate::domain::{Cell, Generation, TerminalReason, detect};

/// Lifecycle of a session: the player seeds the board, the run advances
/// until a terminal condition, then the final board stays on screen.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    Setup,
    Running,
    Paused(TerminalReason),
}

/// Result of offering a cell during setup
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Selection {
    /// Cell accepted, more are needed
    Added,
    /// Cell accepted and it was the last one: the run has started
    Started,
    /// Cell was already selected
    Duplicate,
    /// Click outside the board, or setup is already over
    Ignored,
}

/// Simulation coordinates seeding, the generation clock, and the
/// current/previous generation pair used for termination checks.
pub struct Simulation {
    phase: Phase,
    current: Generation,
    previous: Generation,
    initial_cells: usize,
    generation: u64,
    elapsed: f32,
    update_timer: f32,
    generations_per_second: f32,
}

impl Simulation {
    pub fn new(generations_per_second: f32) -> Self {
        Self::with_initial_cells(NUMBER_OF_INITIAL_CELLS, generations_per_second)
    }

    /// Start with a different seed count, kept within `1..=GRID_SIZE²`
    /// so setup can always complete
    pub fn with_initial_cells(initial_cells: usize, generations_per_second: f32) -> Self {
        Self {
            phase: Phase::Setup,
            current: Generation::new(),
            previous: Generation::new(),
            initial_cells: initial_cells.clamp(1, GRID_SIZE * GRID_SIZE),
            generation: 0,
            elapsed: 0.0,
            update_timer: 0.0,
            generations_per_second,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn terminal_reason(&self) -> Option<TerminalReason> {
        match self.phase {
            Phase::Paused(reason) => Some(reason),
            _ => None,
        }
    }

    /// Live cells (during setup: the cells picked so far)
    pub fn current(&self) -> &Generation {
        &self.current
    }

    /// The generation before `current`
    pub fn previous(&self) -> &Generation {
        &self.previous
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Seconds spent running; frozen once the run pauses
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Cells still to pick before the run starts
    pub fn remaining_selections(&self) -> usize {
        match self.phase {
            Phase::Setup => self.initial_cells.saturating_sub(self.current.len()),
            _ => 0,
        }
    }

    /// Offer a clicked cell during setup
    pub fn select(&mut self, cell: Option<Cell>) -> Selection {
        let Some(cell) = cell else {
            return Selection::Ignored;
        };
        if self.phase != Phase::Setup {
            return Selection::Ignored;
        }
        if !self.current.insert(cell) {
            return Selection::Duplicate;
        }

        if self.current.len() >= self.initial_cells {
            self.start();
            Selection::Started
        } else {
            Selection::Added
        }
    }

    /// Fill the remaining setup picks with distinct random cells
    pub fn seed_random<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        while self.phase == Phase::Setup {
            let (x, y) = (rng.random_range(0..GRID_SIZE), rng.random_range(0..GRID_SIZE));
            self.select(Cell::new(x, y));
        }
    }

    fn start(&mut self) {
        self.phase = Phase::Running;
        self.update_timer = 0.0;
        self.elapsed = 0.0;
        log::info!(
            "Game started with cells: {:?}",
            self.current
                .sorted()
                .iter()
                .map(|c| (c.x(), c.y()))
                .collect::<Vec<_>>()
        );
    }

    /// Advance the clock by one frame. Returns true when a generation
    /// step is due; the caller captures the board and then calls `step`.
    pub fn update_clock(&mut self, delta_time: f32) -> bool {
        if !self.is_running() {
            return false;
        }

        self.elapsed += delta_time;
        self.update_timer += delta_time;

        let update_interval = 1.0 / self.generations_per_second;
        if self.update_timer >= update_interval {
            self.update_timer = (self.update_timer - update_interval).min(update_interval);
            true
        } else {
            false
        }
    }

    /// Compute the next generation and check for a terminal condition.
    /// No-op unless running.
    pub fn step(&mut self) -> Option<TerminalReason> {
        if !self.is_running() {
            return None;
        }

        let next = self.current.next();
        let reason = detect(&next, &self.current, &self.previous);

        self.previous = mem::replace(&mut self.current, next);
        self.generation += 1;

        log::debug!(
            "generation {}: {} live cells",
            self.generation,
            self.current.len()
        );

        if let Some(reason) = reason {
            log::info!(
                "Simulation stopped at generation {}: {:?} after {:.2} s",
                self.generation,
                reason,
                self.elapsed
            );
            self.phase = Phase::Paused(reason);
        }

        reason
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(GENERATIONS_PER_SECOND)
    }
}
