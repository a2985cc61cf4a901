use std::path::Path;

use ::image::RgbaImage;
use macroquad::prelude::*;

use crate::application::Simulation;
use crate::config::{CELL_SIZE, SCREEN_HEIGHT, TOP_SECTION_HEIGHT, WINDOW_SIZE};
use crate::domain::{Cell, TerminalReason};
use crate::error::{Error, Result};

const LARGE_FONT: u16 = 24;
const SMALL_FONT: u16 = 18;

/// Board fill when no background image is configured
const BOARD_COLOR: Color = Color::new(0.92, 0.92, 0.92, 1.0);

/// Renderer owns the drawing resources (currently the optional background
/// texture) and draws the board, cells and banner with macroquad.
pub struct Renderer {
    background: Option<Texture2D>,
}

impl Renderer {
    /// Load the background image, if any. A configured but unreadable
    /// background is fatal.
    pub async fn load(background: Option<&Path>) -> Result<Self> {
        let background = match background {
            Some(path) => {
                let texture = load_texture(&path.to_string_lossy())
                    .await
                    .map_err(|e| Error::Asset {
                        path: path.to_path_buf(),
                        message: format!("{e:?}"),
                    })?;
                log::info!("Loaded background {}", path.display());
                Some(texture)
            }
            None => None,
        };

        Ok(Self { background })
    }

    fn draw_background(&self) {
        match &self.background {
            Some(texture) => draw_texture_ex(
                texture,
                0.0,
                TOP_SECTION_HEIGHT,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(vec2(WINDOW_SIZE, WINDOW_SIZE)),
                    ..Default::default()
                },
            ),
            None => draw_rectangle(
                0.0,
                TOP_SECTION_HEIGHT,
                WINDOW_SIZE,
                WINDOW_SIZE,
                BOARD_COLOR,
            ),
        }
    }

    /// Draw the full frame for the current simulation state
    pub fn draw_scene(&self, state: &Simulation) {
        clear_background(BLACK);
        self.draw_background();
        draw_grid();

        let reason = state.terminal_reason();
        if reason.is_some() {
            // The generation before the final one underneath, in blue
            state.previous().iter().for_each(|cell| draw_cell(cell, BLUE));
        }
        state.current().iter().for_each(|cell| draw_cell(cell, RED));

        draw_top_banner(state.generation(), state.elapsed(), state.current().len());
        if let Some(reason) = reason {
            draw_end_state(reason);
        }
    }
}

/// Grid lines over the board area
pub fn draw_grid() {
    let mut x = 0.0;
    while x < WINDOW_SIZE {
        draw_line(x, TOP_SECTION_HEIGHT, x, SCREEN_HEIGHT, 1.0, BLACK);
        x += CELL_SIZE;
    }

    let mut y = TOP_SECTION_HEIGHT;
    while y < SCREEN_HEIGHT {
        draw_line(0.0, y, WINDOW_SIZE, y, 1.0, BLACK);
        y += CELL_SIZE;
    }
}

pub fn draw_cell(cell: Cell, color: Color) {
    draw_rectangle(
        cell.x() as f32 * CELL_SIZE,
        cell.y() as f32 * CELL_SIZE + TOP_SECTION_HEIGHT,
        CELL_SIZE,
        CELL_SIZE,
        color,
    );
}

/// Draw text with its top-left corner at (x, y)
fn draw_text_top_left(text: &str, x: f32, y: f32, size: u16, color: Color) {
    let dims = measure_text(text, None, size, 1.0);
    draw_text(text, x, y + dims.offset_y, size as f32, color);
}

fn text_width(text: &str, size: u16) -> f32 {
    measure_text(text, None, size, 1.0).width
}

/// Generation counter, elapsed time and live cell count
pub fn draw_top_banner(generation: u64, elapsed_time: f32, cell_count: usize) {
    draw_rectangle(0.0, 0.0, WINDOW_SIZE, TOP_SECTION_HEIGHT, BLACK);

    let text_gen = format!("Generation: {generation}");
    let text_time = format!("Time: {elapsed_time:.2} s");
    let text_cells = format!("Active Cells: {cell_count}");

    draw_text_top_left(&text_gen, 10.0, 10.0, LARGE_FONT, WHITE);
    draw_text_top_left(
        &text_time,
        WINDOW_SIZE / 2.0 - text_width(&text_time, LARGE_FONT) / 2.0,
        10.0,
        LARGE_FONT,
        WHITE,
    );
    draw_text_top_left(
        &text_cells,
        WINDOW_SIZE / 2.0 - text_width(&text_cells, SMALL_FONT) / 2.0,
        35.0,
        SMALL_FONT,
        WHITE,
    );
}

/// Terminal message, right aligned in the banner
pub fn draw_end_state(reason: TerminalReason) {
    let msg = reason.label();
    draw_text_top_left(
        msg,
        WINDOW_SIZE - text_width(msg, LARGE_FONT) - 10.0,
        10.0,
        LARGE_FONT,
        RED,
    );
}

/// Read back what has been drawn so far this frame
pub fn capture_screen() -> Result<RgbaImage> {
    let screen = get_screen_data();
    let (width, height) = (screen.width as u32, screen.height as u32);
    let len = screen.bytes.len();

    let mut frame = RgbaImage::from_raw(width, height, screen.bytes)
        .ok_or(Error::Capture { width, height, len })?;
    // GL read-back starts at the bottom row
    ::image::imageops::flip_vertical_in_place(&mut frame);
    Ok(frame)
}
