//! winit-backed platform
//!
//! The event loop is pumped with a zero timeout so the run loop can drain
//! messages without blocking. An internal `ApplicationHandler` turns window
//! events into [`Message`]s and creates the window from inside the loop.

use ember_core::{EmberError, Result};
use ember_runtime::{keys, placement, CreatedWindow, Message, Platform, WindowRequest};
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;
use winit::application::ApplicationHandler;
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::monitor::MonitorHandle;
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Fullscreen, Window, WindowId};

/// Pumps allowed for the event loop to resume and hand out a window
const CREATE_WINDOW_PUMPS: usize = 100;

/// Display size assumed when no monitor is reported
const FALLBACK_DISPLAY: (u32, u32) = (800, 600);

/// Bits per pixel requested for exclusive full-screen
const FULL_SCREEN_BIT_DEPTH: u16 = 32;

pub struct WinitPlatform {
    event_loop: EventLoop<()>,
    collector: Collector,
    /// Pumped since the queue last reported empty
    pumped: bool,
    exited: bool,
}

/// Receives callbacks while the event loop is pumped
#[derive(Default)]
struct Collector {
    pending: VecDeque<Message<WindowEvent>>,
    request: Option<WindowRequest>,
    created: Option<Result<CreatedWindow<Arc<Window>>>>,
    /// Display mode was switched and must be restored
    full_screen: bool,
}

impl WinitPlatform {
    pub fn new() -> Result<Self> {
        let event_loop = EventLoop::new()
            .map_err(|e| EmberError::Platform(format!("Failed to create event loop: {e}")))?;
        Ok(Self {
            event_loop,
            collector: Collector::default(),
            pumped: false,
            exited: false,
        })
    }

    fn pump(&mut self) {
        if self.exited {
            return;
        }
        let status = self
            .event_loop
            .pump_app_events(Some(Duration::ZERO), &mut self.collector);
        if let PumpStatus::Exit(code) = status {
            log::debug!("Event loop exited with code {code}");
            self.exited = true;
            self.collector.pending.push_back(Message::Quit);
        }
    }
}

impl Platform for WinitPlatform {
    type Handle = Arc<Window>;
    type Event = WindowEvent;

    fn create_window(&mut self, request: &WindowRequest) -> Result<CreatedWindow<Arc<Window>>> {
        self.collector.request = Some(request.clone());
        self.collector.created = None;

        // Windows can only be created from inside the loop, once it has resumed
        for _ in 0..CREATE_WINDOW_PUMPS {
            self.pump();
            if let Some(result) = self.collector.created.take() {
                return result;
            }
            if self.exited {
                break;
            }
        }

        self.collector.request = None;
        Err(EmberError::Platform(
            "event loop did not resume; no window was created".into(),
        ))
    }

    fn poll_message(&mut self) -> Option<Message<WindowEvent>> {
        if self.collector.pending.is_empty() && !self.pumped {
            self.pumped = true;
            self.pump();
        }
        let message = self.collector.pending.pop_front();
        if message.is_none() {
            self.pumped = false;
        }
        message
    }

    fn default_handle(&mut self, event: WindowEvent) {
        // winit already applies OS default handling before delivering events
        log::trace!("Unhandled window event: {event:?}");
    }

    fn post_quit(&mut self) {
        self.collector.pending.push_back(Message::Quit);
    }

    fn destroy_window(&mut self, handle: Arc<Window>) {
        handle.set_cursor_visible(true);
        if self.collector.full_screen {
            handle.set_fullscreen(None);
            self.collector.full_screen = false;
        }
        if Arc::strong_count(&handle) > 1 {
            log::warn!("Window handle still shared at teardown; window closes with the last owner");
        }
    }
}

impl Collector {
    fn create_window(
        &mut self,
        event_loop: &ActiveEventLoop,
        request: &WindowRequest,
    ) -> Result<CreatedWindow<Arc<Window>>> {
        let monitor = event_loop
            .primary_monitor()
            .or_else(|| event_loop.available_monitors().next());
        let display = match &monitor {
            Some(monitor) => {
                let size = monitor.size();
                (size.width, size.height)
            }
            None => {
                log::warn!("No monitor reported, assuming {FALLBACK_DISPLAY:?}");
                FALLBACK_DISPLAY
            }
        };

        let rect = placement(request.size, display);
        let mut attrs = Window::default_attributes()
            .with_title(request.title.clone())
            .with_inner_size(PhysicalSize::new(rect.width, rect.height))
            .with_position(PhysicalPosition::new(rect.x, rect.y))
            .with_decorations(false)
            .with_active(true);

        if rect.full_screen {
            attrs = attrs.with_fullscreen(Some(full_screen_mode(monitor, display)));
        }

        let window = event_loop
            .create_window(attrs)
            .map_err(|e| EmberError::Platform(format!("Failed to create window: {e}")))?;

        window.focus_window();
        window.set_cursor_visible(false);
        self.full_screen = rect.full_screen;

        Ok(CreatedWindow {
            handle: Arc::new(window),
            width: rect.width,
            height: rect.height,
        })
    }
}

/// Exclusive mode at the display's resolution and 32 bpp, else borderless
fn full_screen_mode(monitor: Option<MonitorHandle>, display: (u32, u32)) -> Fullscreen {
    let Some(monitor) = monitor else {
        return Fullscreen::Borderless(None);
    };

    let wanted = PhysicalSize::new(display.0, display.1);
    let mode = monitor
        .video_modes()
        .filter(|mode| mode.size() == wanted && mode.bit_depth() == FULL_SCREEN_BIT_DEPTH)
        .max_by_key(|mode| mode.refresh_rate_millihertz());

    match mode {
        Some(mode) => Fullscreen::Exclusive(mode),
        None => {
            log::warn!(
                "No {}x{} {FULL_SCREEN_BIT_DEPTH}-bit video mode, using borderless full-screen",
                display.0,
                display.1
            );
            Fullscreen::Borderless(Some(monitor))
        }
    }
}

fn key_message(event: &KeyEvent) -> Option<Message<WindowEvent>> {
    let PhysicalKey::Code(code) = event.physical_key else {
        return None;
    };
    let vk = keys::from_key_code(code)?;
    Some(match event.state {
        ElementState::Pressed => Message::KeyDown(vk),
        ElementState::Released => Message::KeyUp(vk),
    })
}

impl ApplicationHandler for Collector {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(request) = self.request.take() {
            self.created = Some(self.create_window(event_loop, &request));
        }
    }

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let message = match &event {
            WindowEvent::CloseRequested => Some(Message::Close),
            WindowEvent::Destroyed => Some(Message::Destroy),
            WindowEvent::KeyboardInput { event: key, .. } => key_message(key),
            _ => None,
        };
        self.pending
            .push_back(message.unwrap_or_else(|| Message::Other(event)));
    }
}
