use std::path::PathBuf;

use crate::error::{Error, Result};

/// Board size in cells (square)
pub const GRID_SIZE: usize = 16;

/// Pixel size of one cell
pub const CELL_SIZE: f32 = 30.0;

/// Pixel width (and height) of the board area, 480x480
pub const WINDOW_SIZE: f32 = GRID_SIZE as f32 * CELL_SIZE;

/// Banner strip above the board
pub const TOP_SECTION_HEIGHT: f32 = 60.0;

pub const SCREEN_HEIGHT: f32 = WINDOW_SIZE + TOP_SECTION_HEIGHT;

/// Number of distinct cells the player picks before the run starts
pub const NUMBER_OF_INITIAL_CELLS: usize = 12;

/// Default simulation speed
pub const GENERATIONS_PER_SECOND: f32 = 35.0;

/// Display time of each frame in the exported animation
pub const FRAME_DELAY_MS: u32 = 100;

pub const WINDOW_TITLE: &str = "Life-Game";

pub const ANIMATION_FILE_NAME: &str = "game_animation.gif";

const DEFAULT_FRAMES_DIR: &str = "static/media/frames";
const DEFAULT_OUTPUT_DIR: &str = "static/media";
pub const DEFAULT_BACKGROUND: &str = "static/media/bg.jpg";

/// Runtime settings. Everything has a default; a few paths and the speed
/// can be overridden from the environment.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    /// Where per-generation PNG frames are written (recreated every session)
    pub frames_dir: PathBuf,
    /// Where the finished animation is written
    pub output_dir: PathBuf,
    /// Image stretched under the board; `None` draws a plain fill
    pub background: Option<PathBuf>,
    pub generations_per_second: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            frames_dir: PathBuf::from(DEFAULT_FRAMES_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            background: None,
            generations_per_second: GENERATIONS_PER_SECOND,
        }
    }
}

impl Settings {
    /// Read overrides from `LIFE_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary variable lookup
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut settings = Self::default();

        if let Some(dir) = lookup("LIFE_FRAMES_DIR") {
            settings.frames_dir = PathBuf::from(dir);
        }
        if let Some(dir) = lookup("LIFE_OUTPUT_DIR") {
            settings.output_dir = PathBuf::from(dir);
        }
        // Unset: use the bundled background when present. Empty: plain fill.
        settings.background = match lookup("LIFE_BACKGROUND") {
            Some(path) if path.is_empty() => None,
            Some(path) => Some(PathBuf::from(path)),
            None => Some(PathBuf::from(DEFAULT_BACKGROUND)).filter(|p| p.is_file()),
        };
        if let Some(speed) = lookup("LIFE_SPEED") {
            settings.generations_per_second = speed
                .trim()
                .parse::<f32>()
                .ok()
                .filter(|s| s.is_finite() && *s > 0.0)
                .ok_or(Error::Config {
                    key: "LIFE_SPEED",
                    value: speed,
                })?;
        }

        Ok(settings)
    }
}
