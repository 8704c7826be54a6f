//! Frame processor trait

use ember_core::{EmberError, Result};

/// The application object driven by the run loop
///
/// `H` is the platform's window handle. The loop calls `initialize` once after
/// the window exists, `frame` once per loop iteration, and `shutdown` exactly
/// once if `initialize` succeeded.
pub trait FrameProcessor<H> {
    /// Called once with the window's client size and handle
    fn initialize(&mut self, width: u32, height: u32, window: &H) -> Result<()>;

    /// Called once per frame. An error ends the loop.
    fn frame(&mut self) -> Result<()>;

    /// Release resources acquired in `initialize`
    fn shutdown(&mut self);

    /// Human-readable name for this processor
    fn name(&self) -> &str;
}

/// Result of one frame step
#[derive(Debug)]
pub enum FrameOutcome {
    /// Frame processed; keep running
    Continue,
    /// Escape was held at the start of the step; nothing was processed
    UserQuit,
    /// The processor failed; the loop must stop
    Failure(EmberError),
}

impl FrameOutcome {
    pub fn is_continue(&self) -> bool {
        matches!(self, FrameOutcome::Continue)
    }
}
