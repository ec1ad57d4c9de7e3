// Health, damage, and the invulnerability blink

use crate::core::math::wave_positive;
use crate::engine::assets::Frame;
use std::time::Duration;

/// Hit points a fresh entity spawns with
pub const STARTING_HEALTH: i32 = 3;

/// How long damage is ignored after a hit
pub const INVULNERABILITY_WINDOW: Duration = Duration::from_millis(400);

/// Default blink rate while invulnerable, cycles per second
///
/// The flash is a fast strobe, not a precise musical period; tune per
/// entity with [`Health::with_blink_hz`].
pub const BLINK_HZ: f32 = 15.0;

/// Alpha above which a pixel counts as part of the silhouette
const ALPHA_THRESHOLD: u8 = 127;

/// Damage state machine
///
/// Two states: Vulnerable until hit, then Invulnerable for a fixed window.
/// Every operation takes the current time as a parameter; the host clock
/// is the single time source, which keeps the window deterministic under
/// test.
#[derive(Debug, Clone)]
pub struct Health {
    points: i32,
    vulnerable: bool,
    hit_time: Option<Duration>,
    blink_hz: f32,
}

impl Health {
    pub fn new() -> Self {
        Self::with_points(STARTING_HEALTH)
    }

    pub fn with_points(points: i32) -> Self {
        Self {
            points,
            vulnerable: true,
            hit_time: None,
            blink_hz: BLINK_HZ,
        }
    }

    /// Override the blink strobe rate
    pub fn with_blink_hz(mut self, hz: f32) -> Self {
        self.blink_hz = hz;
        self
    }

    pub fn points(&self) -> i32 {
        self.points
    }

    pub fn is_vulnerable(&self) -> bool {
        self.vulnerable
    }

    pub fn is_dead(&self) -> bool {
        self.points <= 0
    }

    /// Apply one hit at time `now`
    ///
    /// Returns true when the hit landed. While invulnerable this is a
    /// no-op returning false: no damage, and the window is not extended.
    pub fn apply_hit(&mut self, now: Duration) -> bool {
        if !self.vulnerable {
            return false;
        }
        self.points -= 1;
        self.vulnerable = false;
        self.hit_time = Some(now);
        true
    }

    /// Poll the invulnerability window (called once per tick)
    ///
    /// Vulnerability returns strictly after [`INVULNERABILITY_WINDOW`] has
    /// elapsed; at the exact boundary the entity is still protected. Does
    /// nothing before the first hit.
    pub fn update_vulnerability(&mut self, now: Duration) {
        if self.vulnerable {
            return;
        }
        let Some(hit_time) = self.hit_time else {
            return;
        };
        if now.saturating_sub(hit_time) > INVULNERABILITY_WINDOW {
            self.vulnerable = true;
        }
    }

    /// Whether the blink flash shows this tick
    ///
    /// Only while invulnerable: samples a square wave off the elapsed
    /// time. Never active before the first hit.
    pub fn blink_active(&self, now: Duration) -> bool {
        if self.vulnerable || self.hit_time.is_none() {
            return false;
        }
        wave_positive(now, self.blink_hz)
    }
}

impl Default for Health {
    fn default() -> Self {
        Self::new()
    }
}

/// Flat white copy of a frame's opaque footprint, the blink flash image
///
/// Pixels above the alpha threshold become solid white; everything else
/// stays transparent.
pub fn silhouette(frame: &Frame) -> Frame {
    let mut flash = Frame::new(frame.width(), frame.height());
    for (src, dst) in frame.pixels().zip(flash.pixels_mut()) {
        if src.0[3] > ALPHA_THRESHOLD {
            *dst = image::Rgba([255, 255, 255, 255]);
        }
    }
    flash
}
