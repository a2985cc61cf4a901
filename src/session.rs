use std::path::PathBuf;

use ::rand::rngs::ThreadRng;
use macroquad::prelude::*;

use crate::application::Simulation;
use crate::config::{NUMBER_OF_INITIAL_CELLS, Settings};
use crate::error::Result;
use crate::input;
use crate::recording::{self, FrameStore};
use crate::rendering::{self, Renderer};

/// Session is the single owner of everything one interactive run needs:
/// settings, simulation, drawing resources, the frame directory and the RNG.
pub struct Session {
    settings: Settings,
    simulation: Simulation,
    renderer: Renderer,
    frames: FrameStore,
    rng: ThreadRng,
}

impl Session {
    /// Prepare the frame directory and load drawing resources
    pub async fn start(settings: Settings) -> Result<Self> {
        log::info!(
            "Starting session: frames in {}, animation to {}",
            settings.frames_dir.display(),
            settings.output_dir.display()
        );

        let frames = FrameStore::create(&settings.frames_dir)?;
        let renderer = Renderer::load(settings.background.as_deref()).await?;
        let simulation = Simulation::new(settings.generations_per_second);

        Ok(Self {
            settings,
            simulation,
            renderer,
            frames,
            rng: ::rand::rng(),
        })
    }

    /// Run the interactive loop until the window is closed, then export the
    /// captured frames. Returns the path of the animation.
    pub async fn run(mut self) -> Result<PathBuf> {
        prevent_quit();
        log::info!(
            "Click {} cells to start, or press R to place them at random",
            NUMBER_OF_INITIAL_CELLS
        );

        loop {
            input::process_setup_input(&mut self.simulation, &mut self.rng, mouse_position());

            if self.simulation.update_clock(get_frame_time()) {
                // Capture the board being replaced, then advance
                self.renderer.draw_scene(&self.simulation);
                self.frames.save(&rendering::capture_screen()?)?;
                self.simulation.step();
            }

            self.renderer.draw_scene(&self.simulation);

            if is_quit_requested() {
                self.frames.save(&rendering::capture_screen()?)?;
                break;
            }

            next_frame().await;
        }

        log::info!(
            "Window closed at generation {}, exporting {} frames",
            self.simulation.generation(),
            self.frames.len()
        );
        recording::build_animation(self.frames.dir(), &self.settings.output_dir)
    }
}
