//! Frame-statistics application
//!
//! The frame processor shipped with the player. It draws nothing; each frame
//! it ticks a [`FrameClock`], logs a report every configured interval, and
//! shows the current frame rate in the window title.

use ember_core::{EmberError, EngineConfig, Result};
use ember_runtime::{FrameClock, FrameProcessor, FrameReport};
use std::sync::Arc;
use winit::window::Window;

/// A window whose title can be updated
pub trait WindowTitle {
    fn set_title(&self, title: &str);
}

impl WindowTitle for Arc<Window> {
    fn set_title(&self, title: &str) {
        Window::set_title(self, title);
    }
}

pub struct StatsApplication<H> {
    title: String,
    report_interval: f64,
    clock: FrameClock,
    window: Option<H>,
    size: (u32, u32),
}

impl<H> StatsApplication<H> {
    pub fn new(title: impl Into<String>, report_interval: f64) -> Self {
        Self {
            title: title.into(),
            report_interval,
            clock: FrameClock::new(),
            window: None,
            size: (0, 0),
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(
            config.window.title.clone(),
            config.frame.report_interval_secs,
        )
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    /// Client size given at initialization
    pub fn size(&self) -> (u32, u32) {
        self.size
    }
}

impl<H: WindowTitle> StatsApplication<H> {
    fn publish_report(&mut self) -> Option<FrameReport> {
        let report = self.clock.take_report(self.report_interval)?;
        log::info!(
            "{} frames in {:.2}s ({:.1} fps)",
            report.frames,
            report.elapsed,
            report.fps
        );
        if let Some(window) = &self.window {
            window.set_title(&format!("{} - {:.0} fps", self.title, report.fps));
        }
        Some(report)
    }
}

impl<H: WindowTitle + Clone> FrameProcessor<H> for StatsApplication<H> {
    fn initialize(&mut self, width: u32, height: u32, window: &H) -> Result<()> {
        if width == 0 || height == 0 {
            return Err(EmberError::Initialization(format!(
                "window has no drawable area ({width}x{height})"
            )));
        }
        self.size = (width, height);
        self.window = Some(window.clone());
        self.clock = FrameClock::new();
        Ok(())
    }

    fn frame(&mut self) -> Result<()> {
        if self.window.is_none() {
            return Err(EmberError::Frame("application has no window".into()));
        }
        self.clock.tick();
        self.publish_report();
        Ok(())
    }

    fn shutdown(&mut self) {
        log::info!(
            "{} frames over {:.1}s",
            self.clock.frame_count,
            self.clock.total_time
        );
        self.window = None;
    }

    fn name(&self) -> &str {
        "stats"
    }
}
