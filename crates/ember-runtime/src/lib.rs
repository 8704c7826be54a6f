//! Ember Runtime - Application run loop infrastructure
//!
//! Provides the building blocks of the engine shell:
//! - `InputState` — 256-entry virtual-key table fed by key messages
//! - `keys` — virtual-key codes and the winit key translation
//! - `Platform` — OS windowing seam (window lifecycle, message queue)
//! - `FrameProcessor` — trait for the application object ticked each frame
//! - `RunLoop` — drains messages, runs frames, and tears everything down
//! - `FrameClock` — frame timing and periodic frame-rate reports

mod clock;
mod frame;
mod input;
pub mod keys;
mod message;
mod platform;
mod run_loop;

pub use clock::{FrameClock, FrameReport};
pub use frame::{FrameOutcome, FrameProcessor};
pub use input::{InputState, KEY_COUNT};
pub use message::{Dispatch, Message};
pub use platform::{placement, CreatedWindow, Placement, Platform, SizePolicy, WindowRequest};
pub use run_loop::{LoopState, RunLoop, StopReason};
