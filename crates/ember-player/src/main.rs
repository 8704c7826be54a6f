//! Ember Player - windowed engine shell binary
//!
//! Opens the main window, runs the frame loop until the window closes or
//! Escape is pressed, then tears everything down.
//!
//! Usage:
//!   ember-player [--config <file>] [--fullscreen | --windowed] [--title <text>]

use anyhow::{Context, Result};
use clap::Parser;
use ember_core::EngineConfig;
use ember_player::{StatsApplication, WinitPlatform};
use ember_runtime::{RunLoop, WindowRequest};
use std::path::PathBuf;
use std::sync::Arc;
use winit::window::Window;

#[derive(Parser)]
#[command(name = "ember-player")]
#[command(about = "Ember engine shell - open a window and run the frame loop")]
#[command(version)]
struct Args {
    /// Path to a config file layered over ./ember.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Exclusive full-screen at the primary display's resolution
    #[arg(long, conflicts_with = "windowed")]
    fullscreen: bool,

    /// Centered window at the configured size
    #[arg(long)]
    windowed: bool,

    /// Window title
    #[arg(long)]
    title: Option<String>,
}

impl Args {
    fn apply(&self, config: &mut EngineConfig) {
        if self.fullscreen {
            config.window.full_screen = true;
        }
        if self.windowed {
            config.window.full_screen = false;
        }
        if let Some(title) = &self.title {
            config.window.title = title.clone();
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut config = EngineConfig::load(args.config.as_deref()).context("Failed to load config")?;
    args.apply(&mut config);

    log::info!("Controls: Escape - Exit");

    let platform = WinitPlatform::new().context("Failed to start windowing")?;
    let app: StatsApplication<Arc<Window>> = StatsApplication::from_config(&config);
    let request = WindowRequest::from_config(&config.window);

    let mut run_loop =
        RunLoop::initialize(platform, app, &request).context("Failed to initialize")?;
    let reason = run_loop.run().context("Run loop failed")?;

    log::info!("Exited ({reason:?})");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let args = Args::parse_from(["ember-player", "--fullscreen", "--title", "Demo"]);
        let mut config = EngineConfig::default();
        args.apply(&mut config);

        assert!(config.window.full_screen);
        assert_eq!(config.window.title, "Demo");
    }

    #[test]
    fn test_windowed_flag_clears_full_screen() {
        let args = Args::parse_from(["ember-player", "--windowed"]);
        let mut config = EngineConfig::default();
        config.window.full_screen = true;
        args.apply(&mut config);

        assert!(!config.window.full_screen);
    }

    #[test]
    fn test_conflicting_modes_rejected() {
        assert!(Args::try_parse_from(["ember-player", "--fullscreen", "--windowed"]).is_err());
    }
}
