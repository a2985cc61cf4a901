use std::path::PathBuf;

use thiserror::Error;

/// Errors raised outside the simulation core. The automaton itself cannot
/// fail; invalid clicks are reported through return values instead.
#[derive(Debug, Error)]
pub enum Error {
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("image error on {}: {source}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Export was asked to build an animation from an empty directory
    #[error("no frames found in {}", .0.display())]
    NoFrames(PathBuf),

    #[error("failed to load asset {}: {message}", path.display())]
    Asset { path: PathBuf, message: String },

    #[error("screen capture returned {len} bytes for a {width}x{height} frame")]
    Capture { width: u32, height: u32, len: usize },

    #[error("invalid value {value:?} for {key}")]
    Config { key: &'static str, value: String },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn image(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        Error::Image {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
