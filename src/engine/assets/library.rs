// Animation frame library
//
// Maps status labels to ordered frame sequences. On disk, the immediate
// subdirectories of an entity's animation root are the labels; each holds
// numeric-named frame files ("0.png", "1.png", ...) ordered by the integer
// value of the name before the first '.', not lexically.

use super::AssetError;
use log::debug;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// A single decoded animation frame
pub type Frame = image::RgbaImage;

/// All animation sequences for one entity kind, keyed by status label
#[derive(Debug, Clone, Default)]
pub struct AnimationSet {
    sequences: HashMap<String, Vec<Frame>>,
}

impl AnimationSet {
    /// Load every sequence under `root`
    ///
    /// The mapping starts with one empty sequence per subdirectory, then
    /// each is filled with its decoded frames. Any unreadable entry or
    /// undecodable frame aborts the whole load; a partially filled set is
    /// never returned.
    pub fn load<P: AsRef<Path>>(root: P) -> Result<Self, AssetError> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(AssetError::NotFound(root.display().to_string()));
        }

        let mut sequences: HashMap<String, Vec<Frame>> = HashMap::new();
        let mut folders = Vec::new();
        for entry in std::fs::read_dir(root)? {
            let entry = entry?;
            let path = entry.path();
            if path.is_dir() {
                let label = entry.file_name().to_string_lossy().into_owned();
                sequences.insert(label.clone(), Vec::new());
                folders.push((label, path));
            }
        }

        if sequences.is_empty() {
            return Err(AssetError::NoAnimations(root.display().to_string()));
        }

        for (label, dir) in folders {
            let mut frames = Vec::new();
            for path in sorted_frame_paths(&dir)? {
                let img = image::open(&path).map_err(|source| AssetError::Decode {
                    path: path.display().to_string(),
                    source,
                })?;
                frames.push(img.to_rgba8());
            }
            debug!("Loaded {} frames for '{}'", frames.len(), label);
            sequences.insert(label, frames);
        }

        Ok(Self { sequences })
    }

    /// Add a sequence, replacing any existing one with the same label
    pub fn insert(&mut self, label: &str, frames: Vec<Frame>) {
        self.sequences.insert(label.to_string(), frames);
    }

    /// Iterate the known status labels
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.sequences.keys().map(String::as_str)
    }

    /// Get the frame sequence for a status label
    pub fn sequence(&self, label: &str) -> Option<&[Frame]> {
        self.sequences.get(label).map(Vec::as_slice)
    }

    /// Resolve a frame, wrapping the index modulo the sequence length
    pub fn frame(&self, label: &str, index: usize) -> Result<&Frame, AssetError> {
        let frames = self
            .sequences
            .get(label)
            .ok_or_else(|| AssetError::UnknownAnimation(label.to_string()))?;
        if frames.is_empty() {
            return Err(AssetError::EmptySequence(label.to_string()));
        }
        Ok(&frames[index % frames.len()])
    }

    /// Number of status labels
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }
}

/// List a sequence directory ordered by the numeric value of each file
/// name's stem (the text before the first '.')
fn sorted_frame_paths(dir: &Path) -> Result<Vec<PathBuf>, AssetError> {
    let mut entries = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        let stem = name.split('.').next().unwrap_or("");
        let order: u32 = stem
            .parse()
            .map_err(|_| AssetError::InvalidFrameName(name.clone()))?;
        entries.push((order, path));
    }
    entries.sort_by_key(|(order, _)| *order);
    Ok(entries.into_iter().map(|(_, path)| path).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    /// Write a `w` x `h` PNG frame so tests can tell frames apart by size
    fn write_frame(path: &Path, w: u32, h: u32) {
        let img = Frame::from_pixel(w, h, image::Rgba([80, 120, 40, 255]));
        img.save(path).unwrap();
    }

    #[test]
    fn test_numeric_ordering() {
        let dir = TempDir::new().unwrap();
        let walk = dir.path().join("down");
        std::fs::create_dir(&walk).unwrap();

        // Lexical order would be 1, 10, 2; numeric order must win.
        write_frame(&walk.join("10.png"), 10, 1);
        write_frame(&walk.join("2.png"), 2, 1);
        write_frame(&walk.join("1.png"), 1, 1);

        let set = AnimationSet::load(dir.path()).unwrap();
        let frames = set.sequence("down").unwrap();
        let widths: Vec<u32> = frames.iter().map(|f| f.width()).collect();
        assert_eq!(widths, vec![1, 2, 10]);
    }

    #[test]
    fn test_one_sequence_per_subdirectory() {
        let dir = TempDir::new().unwrap();
        for label in ["down_idle", "up", "left_attack"] {
            std::fs::create_dir(dir.path().join(label)).unwrap();
        }

        let set = AnimationSet::load(dir.path()).unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set.sequence("up"), Some(&[][..]));
    }

    #[test]
    fn test_missing_root() {
        let result = AnimationSet::load("/nonexistent/hero");
        assert!(matches!(result, Err(AssetError::NotFound(_))));
    }

    #[test]
    fn test_root_without_folders() {
        let dir = TempDir::new().unwrap();
        let result = AnimationSet::load(dir.path());
        assert!(matches!(result, Err(AssetError::NoAnimations(_))));
    }

    #[test]
    fn test_corrupt_frame_aborts_load() {
        let dir = TempDir::new().unwrap();
        let idle = dir.path().join("down_idle");
        std::fs::create_dir(&idle).unwrap();
        std::fs::write(idle.join("0.png"), b"not an image").unwrap();

        let result = AnimationSet::load(dir.path());
        assert!(matches!(result, Err(AssetError::Decode { .. })));
    }

    #[test]
    fn test_non_numeric_frame_name() {
        let dir = TempDir::new().unwrap();
        let idle = dir.path().join("down_idle");
        std::fs::create_dir(&idle).unwrap();
        write_frame(&idle.join("walk.png"), 1, 1);

        let result = AnimationSet::load(dir.path());
        assert!(matches!(result, Err(AssetError::InvalidFrameName(_))));
    }

    #[test]
    fn test_frame_lookup_wraps_modulo() {
        let mut set = AnimationSet::default();
        set.insert(
            "down",
            vec![
                Frame::from_pixel(1, 1, image::Rgba([0, 0, 0, 255])),
                Frame::from_pixel(2, 1, image::Rgba([0, 0, 0, 255])),
                Frame::from_pixel(3, 1, image::Rgba([0, 0, 0, 255])),
            ],
        );

        assert_eq!(set.frame("down", 0).unwrap().width(), 1);
        assert_eq!(set.frame("down", 4).unwrap().width(), 2);
        assert_eq!(set.frame("down", 299).unwrap().width(), 3);
    }

    #[test]
    fn test_unknown_and_empty_lookups() {
        let mut set = AnimationSet::default();
        set.insert("up", Vec::new());

        assert!(matches!(
            set.frame("down", 0),
            Err(AssetError::UnknownAnimation(_))
        ));
        assert!(matches!(
            set.frame("up", 0),
            Err(AssetError::EmptySequence(_))
        ));
    }
}
