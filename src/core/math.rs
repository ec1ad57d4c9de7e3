// Math utilities and helper functions

use std::f32::consts::TAU;
use std::time::Duration;

/// Check if two f32 values are approximately equal
pub fn approx_equal(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() < epsilon
}

/// Sample a square wave at `hz` cycles per second
///
/// Returns true while the underlying sine is non-negative, i.e. for the
/// first half of every cycle. The blink effect keys its flash frames off
/// this signal.
pub fn wave_positive(elapsed: Duration, hz: f32) -> bool {
    (elapsed.as_secs_f32() * hz * TAU).sin() >= 0.0
}
