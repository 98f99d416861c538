//! Galaxy - animated particle galaxy with a live-tuning debug panel
//!
//! Usage:
//!   galaxy [preset.toml] [--count <n>] [--seed <n>] [--fullscreen] [--on-demand]
//!
//! Controls:
//!   Tab - Toggle the debug panel
//!   F11 - Toggle fullscreen

use anyhow::{Context, Result};
use clap::Parser;
use galaxy_scene::GalaxyPreset;
use galaxy_viewer::{GalaxyApp, ViewerConfig};
use std::path::PathBuf;
use winit::event_loop::{ControlFlow, EventLoop};

#[derive(Parser)]
#[command(name = "galaxy")]
#[command(about = "Animated particle galaxy with a live-tuning debug panel")]
struct Args {
    /// Preset file (TOML) with galaxy, transition and view settings
    preset: Option<PathBuf>,

    /// Particle count, overrides the preset
    #[arg(long)]
    count: Option<u32>,

    /// Seed for reproducible layouts
    #[arg(long)]
    seed: Option<u64>,

    /// Launch in fullscreen mode
    #[arg(long)]
    fullscreen: bool,

    /// Only redraw when something changed instead of every frame
    #[arg(long)]
    on_demand: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn,galaxy=info"))
        .init();

    let args = Args::parse();

    let preset = match &args.preset {
        Some(path) => GalaxyPreset::load(path)
            .with_context(|| format!("Failed to load preset {}", path.display()))?,
        None => GalaxyPreset::default(),
    };

    let config = ViewerConfig::new(preset)
        .with_count(args.count)
        .with_seed(args.seed)
        .with_fullscreen(args.fullscreen)
        .with_on_demand(args.on_demand);

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = GalaxyApp::new(config);
    event_loop.run_app(&mut app)?;

    Ok(())
}
