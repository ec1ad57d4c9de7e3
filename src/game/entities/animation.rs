// Animation playback state

use super::status::Status;
use crate::engine::assets::{AnimationSet, AssetError, Frame};

/// Default frame advance rate, frames per second
///
/// Decoupled from the simulation tick rate; sprite animation runs slower
/// than physics.
const DEFAULT_ANIMATION_FPS: f32 = 8.0;

/// Tracks which animation is active and which of its frames shows
///
/// The current image is always resolved modulo the sequence length, so a
/// stale index is safe to hold across status switches.
#[derive(Debug, Clone)]
pub struct AnimationState {
    status: Status,
    frame_index: usize,
    frame_timer: f32,
    frame_duration: f32,
}

impl AnimationState {
    pub fn new() -> Self {
        Self::with_fps(DEFAULT_ANIMATION_FPS)
    }

    /// Create a state advancing at `fps` frames per second
    pub fn with_fps(fps: f32) -> Self {
        Self {
            status: Status::default(),
            frame_index: 0,
            frame_timer: 0.0,
            frame_duration: 1.0 / fps.max(f32::EPSILON),
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Switch the active animation
    ///
    /// The frame index is deliberately NOT reset: callers own the reset
    /// policy and call [`restart`](Self::restart) when the new sequence
    /// should start from frame zero. The modulo lookup keeps a stale index
    /// in range either way, at worst showing a mid-sequence frame for one
    /// cycle.
    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    /// Restart the current sequence from frame zero
    pub fn restart(&mut self) {
        self.frame_index = 0;
        self.frame_timer = 0.0;
    }

    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    /// Advance the frame timer (called once per tick)
    pub fn advance(&mut self, dt: f32) {
        self.frame_timer += dt;
        while self.frame_timer >= self.frame_duration {
            self.frame_timer -= self.frame_duration;
            self.frame_index = self.frame_index.wrapping_add(1);
        }
    }

    /// Resolve the frame to draw this tick
    pub fn current_frame<'a>(&self, animations: &'a AnimationSet) -> Result<&'a Frame, AssetError> {
        animations.frame(self.status.name(), self.frame_index)
    }
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new()
    }
}
