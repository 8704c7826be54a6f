//! Top-level run loop
//!
//! Owns the window, the keyboard table and the frame processor. Each iteration
//! drains the platform queue without blocking, routes key messages into
//! [`InputState`], and then runs one frame step. The loop ends on a quit
//! message, on Escape, or on a frame failure, and always tears down before
//! returning.

use crate::frame::{FrameOutcome, FrameProcessor};
use crate::input::InputState;
use crate::keys;
use crate::message::{Dispatch, Message};
use crate::platform::{CreatedWindow, Platform, WindowRequest};
use ember_core::{EmberError, Result};

/// Whether the loop is still processing frames. `Stopped` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// Why the loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The platform delivered a quit message
    Quit,
    /// Escape was held at the start of a frame
    Escape,
    /// The frame processor reported an error
    FrameFailure,
    /// `shutdown` was called while the loop was still running
    Shutdown,
}

pub struct RunLoop<P, F>
where
    P: Platform,
    F: FrameProcessor<P::Handle>,
{
    platform: P,
    window: Option<CreatedWindow<P::Handle>>,
    input: Option<InputState>,
    processor: Option<F>,
    /// Set once `processor.initialize` succeeded; gates `processor.shutdown`
    processor_ready: bool,
    state: LoopState,
    stop_reason: Option<StopReason>,
    frames_processed: u64,
}

impl<P, F> RunLoop<P, F>
where
    P: Platform,
    F: FrameProcessor<P::Handle>,
{
    /// Create the window, the input table and the frame processor.
    ///
    /// On failure everything acquired so far is released before the error is
    /// returned, and the loop is never entered.
    pub fn initialize(platform: P, processor: F, request: &WindowRequest) -> Result<Self> {
        let mut run_loop = Self {
            platform,
            window: None,
            input: None,
            processor: Some(processor),
            processor_ready: false,
            state: LoopState::Running,
            stop_reason: None,
            frames_processed: 0,
        };

        if let Err(err) = run_loop.acquire(request) {
            log::error!("{err}");
            run_loop.shutdown();
            return Err(err);
        }

        Ok(run_loop)
    }

    fn acquire(&mut self, request: &WindowRequest) -> Result<()> {
        let window = self
            .platform
            .create_window(request)
            .map_err(|e| initialization_error("window creation failed", e))?;
        log::info!(
            "Created window '{}' ({}x{})",
            request.title,
            window.width,
            window.height
        );
        let window = self.window.insert(window);

        let mut input = InputState::new();
        input.initialize();
        self.input = Some(input);

        if let Some(processor) = self.processor.as_mut() {
            processor
                .initialize(window.width, window.height, &window.handle)
                .map_err(|e| initialization_error(processor.name(), e))?;
            self.processor_ready = true;
            log::info!("Initialized frame processor '{}'", processor.name());
        }
        Ok(())
    }

    /// Run until quit, Escape, or a frame failure, then shut down.
    ///
    /// Graceful stops return the reason; a frame failure is returned as
    /// [`EmberError::Frame`]. Calling `run` again after the loop has stopped
    /// returns the recorded reason without processing anything.
    pub fn run(&mut self) -> Result<StopReason> {
        if self.state == LoopState::Stopped {
            return Ok(self.stop_reason.unwrap_or(StopReason::Shutdown));
        }

        log::info!("Run loop started");
        let mut failure = None;

        while self.state == LoopState::Running {
            if self.pump_messages() {
                self.stop(StopReason::Quit);
                break;
            }

            match self.frame() {
                FrameOutcome::Continue => {}
                FrameOutcome::UserQuit => self.stop(StopReason::Escape),
                FrameOutcome::Failure(err) => {
                    log::error!("Frame {} failed: {err}", self.frames_processed + 1);
                    self.stop(StopReason::FrameFailure);
                    failure = Some(err);
                }
            }
        }

        self.shutdown();

        match failure {
            Some(err) => Err(frame_error(err)),
            None => Ok(self.stop_reason.unwrap_or(StopReason::Shutdown)),
        }
    }

    /// Drain the platform queue. Returns true if a quit message was seen.
    fn pump_messages(&mut self) -> bool {
        while let Some(message) = self.platform.poll_message() {
            if message.is_quit() {
                return true;
            }
            self.dispatch(message);
        }
        false
    }

    /// One frame step: stop on Escape, otherwise run the frame processor
    pub fn frame(&mut self) -> FrameOutcome {
        let escape_down = self
            .input
            .as_ref()
            .is_some_and(|input| input.is_key_down(keys::ESCAPE));
        if escape_down {
            return FrameOutcome::UserQuit;
        }

        if !self.processor_ready {
            return FrameOutcome::Failure(EmberError::Frame(
                "frame processor is not initialized".into(),
            ));
        }
        let Some(processor) = self.processor.as_mut() else {
            return FrameOutcome::Failure(EmberError::Frame("frame processor released".into()));
        };

        match processor.frame() {
            Ok(()) => {
                self.frames_processed += 1;
                FrameOutcome::Continue
            }
            Err(err) => FrameOutcome::Failure(err),
        }
    }

    /// Route one platform message
    pub fn dispatch(&mut self, message: Message<P::Event>) -> Dispatch {
        match message {
            Message::KeyDown(code) => {
                if let Some(input) = self.input.as_mut() {
                    input.key_down(code);
                }
                Dispatch::Consumed
            }
            Message::KeyUp(code) => {
                if let Some(input) = self.input.as_mut() {
                    input.key_up(code);
                }
                Dispatch::Consumed
            }
            Message::Close | Message::Destroy => {
                log::debug!("Window closing, posting quit");
                self.platform.post_quit();
                Dispatch::QuitRequested
            }
            Message::Quit => Dispatch::QuitRequested,
            Message::Other(event) => {
                self.platform.default_handle(event);
                Dispatch::Default
            }
        }
    }

    fn stop(&mut self, reason: StopReason) {
        if self.state == LoopState::Running {
            log::info!(
                "Run loop stopping ({reason:?}) after {} frames",
                self.frames_processed
            );
            self.state = LoopState::Stopped;
            self.stop_reason = Some(reason);
        }
    }

    /// Release the frame processor, the input table and the window.
    ///
    /// Each resource is released at most once, so this is safe to call
    /// repeatedly and after a failed initialization.
    pub fn shutdown(&mut self) {
        if let Some(mut processor) = self.processor.take() {
            if self.processor_ready {
                log::info!("Shutting down frame processor '{}'", processor.name());
                processor.shutdown();
                self.processor_ready = false;
            }
        }

        if self.input.take().is_some() {
            log::debug!("Released input state");
        }

        if let Some(window) = self.window.take() {
            self.platform.destroy_window(window.handle);
            log::info!("Released window");
        }

        self.stop(StopReason::Shutdown);
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn stop_reason(&self) -> Option<StopReason> {
        self.stop_reason
    }

    /// The keyboard table, while it is held
    pub fn input(&self) -> Option<&InputState> {
        self.input.as_ref()
    }

    /// Client size of the window, while it is held
    pub fn window_size(&self) -> Option<(u32, u32)> {
        self.window.as_ref().map(|w| (w.width, w.height))
    }

    /// Number of frames the processor completed successfully
    pub fn frames_processed(&self) -> u64 {
        self.frames_processed
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }
}

impl<P, F> Drop for RunLoop<P, F>
where
    P: Platform,
    F: FrameProcessor<P::Handle>,
{
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn initialization_error(context: &str, err: EmberError) -> EmberError {
    match err {
        EmberError::Initialization(msg) => EmberError::Initialization(format!("{context}: {msg}")),
        other => EmberError::Initialization(format!("{context}: {other}")),
    }
}

fn frame_error(err: EmberError) -> EmberError {
    match err {
        EmberError::Frame(msg) => EmberError::Frame(msg),
        other => EmberError::Frame(other.to_string()),
    }
}
