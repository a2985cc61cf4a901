use ::rand::Rng;
use macroquad::prelude::*;

use crate::application::{Selection, Simulation};
use crate::config::{CELL_SIZE, TOP_SECTION_HEIGHT};
use crate::domain::Cell;

/// Map a window position to the board cell under it.
/// The banner strip and anything right of or below the board map to `None`.
pub fn cell_at(mouse_pos: (f32, f32)) -> Option<Cell> {
    let (x, y) = mouse_pos;
    if x < 0.0 || y <= TOP_SECTION_HEIGHT {
        return None;
    }
    let col = (x / CELL_SIZE).floor() as i64;
    let row = ((y - TOP_SECTION_HEIGHT) / CELL_SIZE).floor() as i64;
    Cell::from_signed(col, row)
}

/// Handle setup-phase input: left click picks a cell, `R` fills the
/// remaining picks at random. Does nothing once the run has started.
pub fn process_setup_input<R: Rng + ?Sized>(
    state: &mut Simulation,
    rng: &mut R,
    mouse_pos: (f32, f32),
) {
    if state.remaining_selections() == 0 {
        return;
    }

    if is_mouse_button_pressed(MouseButton::Left) {
        let cell = cell_at(mouse_pos);
        match state.select(cell) {
            Selection::Added | Selection::Started => {
                log::debug!("selected {:?}, {} left", cell, state.remaining_selections());
            }
            Selection::Duplicate | Selection::Ignored => {}
        }
    }

    if is_key_pressed(KeyCode::R) {
        state.seed_random(rng);
    }
}
