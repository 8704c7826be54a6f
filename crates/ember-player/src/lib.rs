//! Ember Player — windowed engine shell
//!
//! This crate provides the winit-backed `Platform` and the `StatsApplication`
//! frame processor used by the `ember-player` binary.

mod app;
mod winit_platform;

pub use app::{StatsApplication, WindowTitle};
pub use winit_platform::WinitPlatform;
