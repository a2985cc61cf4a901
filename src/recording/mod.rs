//! Frame capture to disk and animated GIF export.

mod animation;
mod frames;

pub use animation::build_animation;
pub use frames::{FrameStore, frame_index, ordered_frames};
