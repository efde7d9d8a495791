mod cli;
mod present;

use anyhow::{Context, Result};
use clap::Parser;
use glint_core::Scene;
use glint_renderer::{FrameBuffer, Scheduler};
use std::time::{Duration, Instant};

use cli::Args;

/// How often the host loop reports progress.
const PROGRESS_INTERVAL: Duration = Duration::from_secs(1);

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.into())
        .init();

    log::info!("Starting Glint viewer");

    let scene = match &args.scene {
        Some(path) => Scene::load_json(path)
            .with_context(|| format!("Failed to load scene {}", path.display()))?,
        None => {
            log::info!("No scene given, using the demo scene");
            Scene::demo()
        }
    };

    let config = args.render_config();
    let mut buffer = FrameBuffer::new(config.width, config.height);
    let pixels_per_tick = config.pixels_per_tick;
    let mut scheduler = Scheduler::new(&scene, config);

    // Host loop: a fixed slice of work per tick, then present
    let mut last_report = Instant::now();
    let mut ticks: u64 = 0;
    while !scheduler.is_complete() {
        if scheduler.advance(&mut buffer, pixels_per_tick) == 0 {
            anyhow::bail!("Render stalled at {:?}", scheduler.cursor());
        }
        ticks += 1;

        if last_report.elapsed() >= PROGRESS_INTERVAL {
            log::info!("{:.1}% rendered", scheduler.progress() * 100.0);
            last_report = Instant::now();
        }
    }
    log::debug!("Frame finished after {} ticks", ticks);

    present::save_png(&buffer, &args.output)?;
    Ok(())
}
