/// Game loop timing and control
///
/// Implements a fixed timestep accumulator so simulation logic updates at
/// a consistent rate regardless of how fast the host loop spins. The clock
/// is also the single time source for everything that needs timestamps:
/// damage windows and blink phases sample `now()` instead of reading a
/// global clock, which keeps them deterministic under test.
use std::time::{Duration, Instant};

/// Target simulation rate (60 updates per second)
pub const FIXED_TIMESTEP: f32 = 1.0 / 60.0;
const FIXED_TIMESTEP_DURATION: Duration = Duration::from_micros(16_667); // ~1/60 second

/// Maximum number of simulation steps per frame to prevent spiral of death
const MAX_STEPS_PER_FRAME: u32 = 5;

/// Simulation timing state
pub struct GameClock {
    /// Time when the clock started
    start_time: Instant,

    /// Time of last frame
    last_frame_time: Instant,

    /// Accumulated time for fixed timestep updates
    accumulator: Duration,

    /// Whether the simulation is paused
    paused: bool,

    /// Total simulation steps executed
    tick_count: u64,
}

impl GameClock {
    /// Create a new clock; elapsed time counts from here
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start_time: now,
            last_frame_time: now,
            accumulator: Duration::ZERO,
            paused: false,
            tick_count: 0,
        }
    }

    /// Begin a new frame, returns the number of fixed updates to run
    pub fn begin_frame(&mut self) -> u32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;

        // If paused, don't accumulate time for updates
        if self.paused {
            return 0;
        }

        self.accumulator += frame_time;

        let mut steps = 0;
        while self.accumulator >= FIXED_TIMESTEP_DURATION && steps < MAX_STEPS_PER_FRAME {
            self.accumulator -= FIXED_TIMESTEP_DURATION;
            steps += 1;
        }

        self.tick_count += steps as u64;
        steps
    }

    /// Get the fixed timestep for simulation updates (in seconds)
    pub fn fixed_timestep(&self) -> f32 {
        FIXED_TIMESTEP
    }

    /// Elapsed time since the clock was created
    ///
    /// This is the timestamp handed to damage and blink updates.
    pub fn now(&self) -> Duration {
        Instant::now().duration_since(self.start_time)
    }

    /// Total number of simulation steps executed
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Check if the simulation is paused
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Pause the simulation
    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            log::info!("Simulation paused");
        }
    }

    /// Resume the simulation
    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            // Reset accumulator to prevent update burst
            self.accumulator = Duration::ZERO;
            log::info!("Simulation resumed");
        }
    }
}

impl Default for GameClock {
    fn default() -> Self {
        Self::new()
    }
}
