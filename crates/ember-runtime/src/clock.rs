//! Frame clock with periodic frame-rate reports

use std::time::Instant;

/// Longest frame time fed into the clock, in seconds
const MAX_FRAME_TIME: f64 = 0.25;

/// Frame statistics over one report window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    /// Frames ticked in the window
    pub frames: u64,
    /// Seconds covered by the window
    pub elapsed: f64,
    /// Average frames per second over the window
    pub fps: f64,
}

/// Tracks frame time and accumulates frames for periodic reports
pub struct FrameClock {
    /// Total elapsed time in seconds
    pub total_time: f64,
    /// Time since last frame in seconds
    pub delta_time: f64,
    /// Frames ticked since creation
    pub frame_count: u64,
    /// Frames ticked in the current report window
    window_frames: u64,
    /// Seconds accumulated in the current report window
    window_time: f64,
    /// FPS of the last completed report window
    last_fps: f64,
    /// Last tick instant
    last_instant: Instant,
    /// Whether this is the first tick
    first_tick: bool,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self {
            total_time: 0.0,
            delta_time: 0.0,
            frame_count: 0,
            window_frames: 0,
            window_time: 0.0,
            last_fps: 0.0,
            last_instant: Instant::now(),
            first_tick: true,
        }
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock by the wall time since the last tick. Call once per frame.
    pub fn tick(&mut self) {
        let now = Instant::now();

        if self.first_tick {
            self.first_tick = false;
            self.last_instant = now;
            self.advance(0.0);
            return;
        }

        let elapsed = now.duration_since(self.last_instant).as_secs_f64();
        self.last_instant = now;
        self.advance(elapsed);
    }

    /// Advance the clock by a given frame time in seconds
    pub fn advance(&mut self, elapsed: f64) {
        let elapsed = elapsed.max(0.0);
        // Only the per-frame delta is clamped; reports use wall time
        self.delta_time = elapsed.min(MAX_FRAME_TIME);
        self.total_time += self.delta_time;
        self.frame_count += 1;
        self.window_frames += 1;
        self.window_time += elapsed;
    }

    /// Close the current report window once it spans at least `interval` seconds
    pub fn take_report(&mut self, interval: f64) -> Option<FrameReport> {
        if self.window_time < interval || self.window_time <= 0.0 {
            return None;
        }

        let report = FrameReport {
            frames: self.window_frames,
            elapsed: self.window_time,
            fps: self.window_frames as f64 / self.window_time,
        };
        self.last_fps = report.fps;
        self.window_frames = 0;
        self.window_time = 0.0;
        Some(report)
    }

    /// Frames per second of the last completed report window
    pub fn fps(&self) -> f64 {
        self.last_fps
    }
}
