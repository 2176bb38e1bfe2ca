//! Loading of ASCII-art frames and sprites from disk.
//!
//! Animations live in `<root>/animations/<name>_frame_<N>.txt`, numbered
//! from 1.  Garbage sprites are every `*.txt` file in `<root>/garbage`.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use thiserror::Error;

/// One frame of ASCII art.
pub type Frame = Rc<str>;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("no frames named `{name}` in {dir}")]
    NoFrames { name: String, dir: PathBuf },
    #[error("frames of `{name}` are misnumbered: expected frame {expected}, found {found}")]
    Misnumbered { name: String, expected: u32, found: u32 },
    #[error("frame file {path} is empty")]
    EmptyFrame { path: PathBuf },
    #[error("no sprites in {dir}")]
    NoSprites { dir: PathBuf },
}

fn read_dir(dir: &Path) -> Result<Vec<PathBuf>, AssetError> {
    let io_err = |source| AssetError::Io { path: dir.to_path_buf(), source };
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        paths.push(entry.map_err(io_err)?.path());
    }
    Ok(paths)
}

fn read_frame(path: &Path) -> Result<Frame, AssetError> {
    let text = fs::read_to_string(path).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if text.trim().is_empty() {
        return Err(AssetError::EmptyFrame { path: path.to_path_buf() });
    }
    Ok(Rc::from(text))
}

/// Frame number encoded in `<name>_frame_<N>.txt`, if the file belongs to `name`.
fn frame_number(file_name: &str, name: &str) -> Option<u32> {
    let digits = file_name
        .strip_prefix(name)?
        .strip_prefix("_frame_")?
        .strip_suffix(".txt")?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Load the numbered frames of animation `name`, in ascending order.
pub fn load_frames(dir: &Path, name: &str) -> Result<Vec<Frame>, AssetError> {
    let mut numbered: BTreeMap<u32, PathBuf> = BTreeMap::new();
    for path in read_dir(dir)? {
        let Some(file_name) = path.file_name().and_then(|f| f.to_str()) else {
            continue;
        };
        if let Some(n) = frame_number(file_name, name) {
            numbered.insert(n, path);
        }
    }

    if numbered.is_empty() {
        return Err(AssetError::NoFrames { name: name.to_string(), dir: dir.to_path_buf() });
    }

    let mut frames = Vec::with_capacity(numbered.len());
    for (expected, (found, path)) in (1..).zip(numbered) {
        if found != expected {
            return Err(AssetError::Misnumbered { name: name.to_string(), expected, found });
        }
        frames.push(read_frame(&path)?);
    }
    Ok(frames)
}

/// Load every `*.txt` sprite in `dir`, keyed by file stem.
pub fn load_sprites(dir: &Path) -> Result<BTreeMap<String, Frame>, AssetError> {
    let mut sprites = BTreeMap::new();
    for path in read_dir(dir)? {
        if path.extension().and_then(|e| e.to_str()) != Some("txt") {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        sprites.insert(stem.to_string(), read_frame(&path)?);
    }
    if sprites.is_empty() {
        return Err(AssetError::NoSprites { dir: dir.to_path_buf() });
    }
    Ok(sprites)
}

/// Everything the game draws that is not generated in code.
#[derive(Clone, Debug)]
pub struct Assets {
    pub rocket: Rc<[Frame]>,
    pub explosion: Rc<[Frame]>,
    pub game_over: Rc<[Frame]>,
    pub garbage: BTreeMap<String, Frame>,
}

impl Assets {
    pub fn load(root: &Path) -> Result<Self, AssetError> {
        let animations = root.join("animations");
        Ok(Self {
            rocket: load_frames(&animations, "rocket")?.into(),
            explosion: load_frames(&animations, "explosion")?.into(),
            game_over: load_frames(&animations, "game_over")?.into(),
            garbage: load_sprites(&root.join("garbage"))?,
        })
    }
}
