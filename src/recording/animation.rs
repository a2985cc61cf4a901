use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, RgbaImage};
use rayon::prelude::*;

use super::ordered_frames;
use crate::config::{ANIMATION_FILE_NAME, FRAME_DELAY_MS};
use crate::error::{Error, Result};

/// Stitch every indexed frame in `frames_dir` into a looping GIF written to
/// `output_dir`, in frame-index order, each frame shown for
/// `FRAME_DELAY_MS`. Returns the path of the animation.
///
/// An empty or missing frame directory is an error rather than an empty
/// animation.
pub fn build_animation(frames_dir: &Path, output_dir: &Path) -> Result<PathBuf> {
    let paths = ordered_frames(frames_dir)?;
    if paths.is_empty() {
        return Err(Error::NoFrames(frames_dir.to_path_buf()));
    }

    fs::create_dir_all(output_dir).map_err(|e| Error::io(output_dir, e))?;
    let output = output_dir.join(ANIMATION_FILE_NAME);
    let file = File::create(&output).map_err(|e| Error::io(&output, e))?;

    let count = encode_frames(&paths, BufWriter::new(file), &output)?;

    log::info!("wrote {} frames to {}", count, output.display());
    Ok(output)
}

/// Decode `paths` in bounded parallel batches and encode them in order.
/// The writer is flushed before returning, so a failed final write is an
/// error and not a silently truncated file.
fn encode_frames<W: Write>(paths: &[PathBuf], mut writer: W, output: &Path) -> Result<usize> {
    let batch = rayon::current_num_threads().max(1);
    let delay = Delay::from_numer_denom_ms(FRAME_DELAY_MS, 1);

    {
        let mut encoder = GifEncoder::new(&mut writer);
        encoder
            .set_repeat(Repeat::Infinite)
            .map_err(|e| Error::image(output, e))?;

        for chunk in paths.chunks(batch) {
            let images: Vec<RgbaImage> = chunk
                .par_iter()
                .map(|path| {
                    image::open(path)
                        .map(|img| img.to_rgba8())
                        .map_err(|e| Error::image(path, e))
                })
                .collect::<Result<_>>()?;

            for img in images {
                encoder
                    .encode_frame(Frame::from_parts(img, 0, 0, delay))
                    .map_err(|e| Error::image(output, e))?;
            }
        }
        // Dropping the encoder writes the GIF trailer
    }

    writer.flush().map_err(|e| Error::io(output, e))?;
    Ok(paths.len())
}
