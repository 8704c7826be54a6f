//! Ember Core - Foundational types for the Ember engine shell
//!
//! This crate provides the types every other Ember crate depends on:
//! - `EmberError` - Error type and Result alias
//! - `EngineConfig` - Layered window/frame configuration loaded from TOML

mod config;
mod error;

pub use config::{EngineConfig, FrameConfig, WindowConfig, FULL_SCREEN_ENV};
pub use error::{EmberError, Result};
