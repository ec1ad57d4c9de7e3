// Audio collaborator seam
//
// The crate does not own an audio device; the host engine does. Sounds are
// loaded as raw bytes with a fixed playback volume and handed to whatever
// `AudioOutput` the host plugs in.

use crate::engine::assets::AssetError;
use std::path::Path;

/// A loaded sound effect
///
/// Volume is fixed at construction, as a fraction of the output's maximum.
#[derive(Debug, Clone)]
pub struct Sound {
    name: String,
    data: Vec<u8>,
    volume: f32,
}

impl Sound {
    /// Load a sound file from disk
    pub fn load<P: AsRef<Path>>(path: P, volume: f32) -> Result<Self, AssetError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(AssetError::NotFound(path.display().to_string()));
        }

        let data = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Self::from_bytes(&name, data, volume))
    }

    /// Create a sound from raw bytes
    pub fn from_bytes(name: &str, data: Vec<u8>, volume: f32) -> Self {
        Self {
            name: name.to_string(),
            data,
            volume: volume.clamp(0.0, 1.0),
        }
    }

    /// File name the sound was loaded from
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Encoded audio bytes
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Playback volume in `[0, 1]`
    pub fn volume(&self) -> f32 {
        self.volume
    }
}

/// Playback sink provided by the host engine
pub trait AudioOutput {
    /// Play a sound at its configured volume
    fn play(&mut self, sound: &Sound);
}

/// Output that drops every sound, for headless runs and tests
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioOutput for NullAudio {
    fn play(&mut self, _sound: &Sound) {}
}
