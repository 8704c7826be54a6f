//! Platform messages routed by the run loop

/// A message pulled from the platform queue.
///
/// Key codes are virtual-key codes (see [`keys`](crate::keys)). `E` is the
/// platform's raw event type, passed through untouched for default handling.
#[derive(Debug, Clone, PartialEq)]
pub enum Message<E> {
    KeyDown(u32),
    KeyUp(u32),
    /// The user asked to close the window
    Close,
    /// The window is being destroyed
    Destroy,
    /// The platform asked the application to end
    Quit,
    /// Anything else, for the platform's default handler
    Other(E),
}

impl<E> Message<E> {
    pub fn is_quit(&self) -> bool {
        matches!(self, Message::Quit)
    }
}

/// How a message was routed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Handled by the input table; no further routing
    Consumed,
    /// The message ends the loop, directly or via a posted quit
    QuitRequested,
    /// Passed to the platform's default handler
    Default,
}
