use std::fs;
use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::error::{Error, Result};

const FRAME_PREFIX: &str = "frame_";
const FRAME_EXTENSION: &str = "png";

/// FrameStore writes one PNG per captured board into a directory,
/// named by a strictly increasing index (`frame_0.png`, `frame_1.png`, ...).
pub struct FrameStore {
    dir: PathBuf,
    next_index: u64,
}

impl FrameStore {
    /// Recreate `dir` empty and start numbering from zero
    pub fn create(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        match fs::remove_dir_all(&dir) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(Error::io(&dir, e)),
        }
        fs::create_dir_all(&dir).map_err(|e| Error::io(&dir, e))?;
        log::debug!("frame directory ready at {}", dir.display());

        Ok(Self { dir, next_index: 0 })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Number of frames written so far
    pub fn len(&self) -> u64 {
        self.next_index
    }

    pub fn is_empty(&self) -> bool {
        self.next_index == 0
    }

    /// File path for frame `index`
    pub fn path_for(&self, index: u64) -> PathBuf {
        self.dir.join(format!("{FRAME_PREFIX}{index}.{FRAME_EXTENSION}"))
    }

    /// Save the next frame, returning its index
    pub fn save(&mut self, frame: &RgbaImage) -> Result<u64> {
        let index = self.next_index;
        let path = self.path_for(index);
        frame.save(&path).map_err(|e| Error::image(&path, e))?;
        self.next_index += 1;

        log::debug!("saved {}", path.display());
        Ok(index)
    }
}

/// Integer index embedded in a frame file name: the digits that end the
/// file stem, so `frame_10.png` gives 10. `None` for non-PNG files or
/// stems without a trailing number.
pub fn frame_index(path: &Path) -> Option<u64> {
    let is_png = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(FRAME_EXTENSION));
    if !is_png {
        return None;
    }

    let stem = path.file_stem()?.to_str()?;
    let digits_start = stem.trim_end_matches(|c: char| c.is_ascii_digit()).len();
    stem[digits_start..].parse().ok()
}

/// List the frame files in `dir`, ordered by embedded index.
///
/// Lexicographic order would put `frame_10` before `frame_9`, so the
/// numeric index is the sort key. Files without an index are skipped.
pub fn ordered_frames(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;

    let mut frames = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| Error::io(dir, e))?.path();
        if !path.is_file() {
            continue;
        }
        match frame_index(&path) {
            Some(index) => frames.push((index, path)),
            None => log::warn!("skipping {}: not an indexed PNG frame", path.display()),
        }
    }

    frames.sort_by_key(|(index, _)| *index);
    Ok(frames.into_iter().map(|(_, path)| path).collect())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Fresh scratch directory under the system temp dir
    pub(crate) fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "life_recorder_{}_{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_frame_index_parses_trailing_number() {
        assert_eq!(frame_index(Path::new("frame_0.png")), Some(0));
        assert_eq!(frame_index(Path::new("dir/frame_10.png")), Some(10));
        assert_eq!(frame_index(Path::new("frame_7.PNG")), Some(7));
        assert_eq!(frame_index(Path::new("frame_.png")), None);
        assert_eq!(frame_index(Path::new("frame_3.jpg")), None);
        assert_eq!(frame_index(Path::new("notes.txt")), None);
    }

    #[test]
    fn test_ordered_frames_sorts_numerically() {
        let dir = scratch_dir("ordering");
        for name in ["frame_2.png", "frame_10.png", "frame_1.png", "readme.txt"] {
            fs::write(dir.join(name), b"").unwrap();
        }

        let names: Vec<String> = ordered_frames(&dir)
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["frame_1.png", "frame_2.png", "frame_10.png"]);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_ordered_frames_missing_dir_is_error() {
        let dir = std::env::temp_dir().join("life_recorder_does_not_exist_xyz");
        assert!(matches!(ordered_frames(&dir), Err(Error::Io { .. })));
    }

    #[test]
    fn test_store_recreates_dir_and_numbers_frames() {
        let dir = scratch_dir("store");
        fs::write(dir.join("frame_99.png"), b"stale").unwrap();

        let mut store = FrameStore::create(&dir).unwrap();
        assert!(store.is_empty());
        assert!(!dir.join("frame_99.png").exists());

        let frame = RgbaImage::new(4, 4);
        assert_eq!(store.save(&frame).unwrap(), 0);
        assert_eq!(store.save(&frame).unwrap(), 1);
        assert_eq!(store.len(), 2);
        assert!(store.path_for(1).exists());
        assert_eq!(ordered_frames(store.dir()).unwrap().len(), 2);

        fs::remove_dir_all(&dir).unwrap();
    }
}
