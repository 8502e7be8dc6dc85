//! Frame clock for the background driver.
//!
//! The simulation is frame-coupled: every displayed frame advances it by
//! exactly one tick. [`Time`] counts those frames, reports how many ticks to
//! apply (one, or zero while paused), and provides the wall-clock
//! milliseconds the ambient color is derived from.
//!
//! # Example
//!
//! ```ignore
//! use gilded_field::time::Time;
//!
//! let mut time = Time::new();
//!
//! // Once per displayed frame:
//! let ticks = time.update();
//! let millis = time.wall_clock_millis();
//! ```

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

/// Frames longer than this are logged as stalls.
const STALL_THRESHOLD: Duration = Duration::from_secs(1);

/// Frame counting and wall-clock time for the per-frame tick.
#[derive(Debug)]
pub struct Time {
    /// When the clock was created.
    start: Instant,
    /// Unix-epoch milliseconds at `start`.
    epoch_millis_at_start: f64,
    /// When the last frame occurred.
    last_frame: Instant,
    /// Total frames since start, paused frames included.
    frame_count: u64,
    /// Calculated FPS (updated periodically).
    fps: f32,
    /// Frame count at last FPS update.
    fps_frame_count: u64,
    /// Time of last FPS calculation.
    fps_update_time: Instant,
    /// How often to update FPS calculation.
    fps_update_interval: Duration,
    /// Whether ticks are suspended.
    paused: bool,
}

impl Time {
    /// Create a new clock starting from now.
    pub fn new() -> Self {
        let now = Instant::now();
        let epoch_millis_at_start = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs_f64() * 1000.0)
            .unwrap_or(0.0);

        Self {
            start: now,
            epoch_millis_at_start,
            last_frame: now,
            frame_count: 0,
            fps: 0.0,
            fps_frame_count: 0,
            fps_update_time: now,
            fps_update_interval: Duration::from_millis(500),
            paused: false,
        }
    }

    /// Register a displayed frame. Call once per frame.
    ///
    /// Returns the number of unit ticks the simulation should advance.
    pub fn update(&mut self) -> u32 {
        let now = Instant::now();

        let gap = now.duration_since(self.last_frame);
        if gap > STALL_THRESHOLD && self.frame_count > 0 {
            log::warn!(
                "Frame {} arrived {:.2}s after the previous one",
                self.frame_count,
                gap.as_secs_f32()
            );
        }
        self.last_frame = now;
        self.frame_count += 1;

        let fps_elapsed = now.duration_since(self.fps_update_time);
        if fps_elapsed >= self.fps_update_interval {
            let frames_since = self.frame_count - self.fps_frame_count;
            self.fps = frames_since as f32 / fps_elapsed.as_secs_f32();
            self.fps_frame_count = self.frame_count;
            self.fps_update_time = now;
            log::trace!("Background running at {:.1} fps", self.fps);
        }

        if self.paused {
            0
        } else {
            1
        }
    }

    /// Monotonic wall-clock time in milliseconds since the Unix epoch.
    pub fn wall_clock_millis(&self) -> f64 {
        self.epoch_millis_at_start + self.start.elapsed().as_secs_f64() * 1000.0
    }

    /// Total frames since start.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Calculated frames per second.
    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Whether ticks are currently suspended.
    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Suspend simulation ticks. Frames are still counted.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume simulation ticks.
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Toggle pause state.
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}
