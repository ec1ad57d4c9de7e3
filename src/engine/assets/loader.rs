// Asset loading functionality

use super::{AnimationSet, AssetError};
use crate::engine::audio::Sound;
use std::path::{Path, PathBuf};

/// Supported asset types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetType {
    Animation,
    Sound,
}

impl AssetType {
    /// Get the default directory for this asset type
    pub fn default_directory(&self) -> &'static str {
        match self {
            AssetType::Animation => "animations",
            AssetType::Sound => "sounds",
        }
    }
}

/// Asset loader responsible for finding and loading asset files
pub struct AssetLoader {
    base_path: PathBuf,
}

impl AssetLoader {
    /// Create a new asset loader with the given base path
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Get the full path for an asset
    pub fn resolve_path(&self, asset_type: AssetType, name: &str) -> PathBuf {
        self.base_path
            .join(asset_type.default_directory())
            .join(name)
    }

    /// Load the animation sequences for one entity kind
    ///
    /// `name` is the entity's folder under `animations/`; its subdirectories
    /// are the status labels.
    pub fn load_animations(&self, name: &str) -> Result<AnimationSet, AssetError> {
        AnimationSet::load(self.resolve_path(AssetType::Animation, name))
    }

    /// Load a sound effect with a fixed playback volume
    pub fn load_sound(&self, name: &str, volume: f32) -> Result<Sound, AssetError> {
        Sound::load(self.resolve_path(AssetType::Sound, name), volume)
    }

    /// Get the base path
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}
