//! Platform windowing seam
//!
//! The run loop talks to the OS only through [`Platform`]: window creation and
//! teardown, a non-blocking message queue, default message handling and quit
//! posting. Window placement is a pure function so it can be checked without
//! a display.

use crate::message::Message;
use ember_core::{Result, WindowConfig};

/// How the window is sized on the primary display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizePolicy {
    /// Exclusive full-screen at the display's resolution
    FullScreen,
    /// A fixed-size window centered on the display
    Windowed { width: u32, height: u32 },
}

/// Everything the platform needs to create the main window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowRequest {
    pub title: String,
    pub size: SizePolicy,
}

impl WindowRequest {
    pub fn from_config(config: &WindowConfig) -> Self {
        let size = if config.full_screen {
            SizePolicy::FullScreen
        } else {
            SizePolicy::Windowed {
                width: config.width,
                height: config.height,
            }
        };
        Self {
            title: config.title.clone(),
            size,
        }
    }
}

/// Resolved window rectangle in physical pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    pub full_screen: bool,
}

/// Resolve a size policy against the primary display's resolution
pub fn placement(policy: SizePolicy, display: (u32, u32)) -> Placement {
    let (display_width, display_height) = display;
    match policy {
        SizePolicy::FullScreen => Placement {
            x: 0,
            y: 0,
            width: display_width,
            height: display_height,
            full_screen: true,
        },
        SizePolicy::Windowed { width, height } => Placement {
            x: centered(display_width, width),
            y: centered(display_height, height),
            width,
            height,
            full_screen: false,
        },
    }
}

// Negative when the window is larger than the display.
fn centered(display: u32, window: u32) -> i32 {
    let offset = (i64::from(display) - i64::from(window)) / 2;
    offset.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// A window handed back by [`Platform::create_window`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedWindow<H> {
    pub handle: H,
    /// Client width in physical pixels
    pub width: u32,
    /// Client height in physical pixels
    pub height: u32,
}

/// OS binding used by the [`RunLoop`](crate::RunLoop)
pub trait Platform {
    /// Opaque window handle passed to the frame processor
    type Handle;

    /// Raw event type for messages the loop does not handle itself
    type Event;

    /// Create, show and focus the main window and hide the cursor.
    /// Switches the display mode first when the request is full-screen.
    fn create_window(&mut self, request: &WindowRequest) -> Result<CreatedWindow<Self::Handle>>;

    /// Remove the next pending message, or `None` if the queue is empty.
    /// Never blocks.
    fn poll_message(&mut self) -> Option<Message<Self::Event>>;

    /// Platform default handling for an event the loop did not consume
    fn default_handle(&mut self, event: Self::Event);

    /// Queue a [`Message::Quit`] behind any pending messages
    fn post_quit(&mut self);

    /// Show the cursor, restore the display mode if it was changed, and
    /// release the window
    fn destroy_window(&mut self, handle: Self::Handle);
}
