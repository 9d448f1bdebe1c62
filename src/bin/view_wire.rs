//! Wireframe first-person viewer.
//!
//! Controls  ↑/↓ (W/S) = forward/back  ←/→ (A/D) = turn  Shift = boost  Esc = quit
//!
//! ```bash
//! cargo run --release -- --size 300 --map --marker
//! ```

use clap::Parser;
use minifb::{Key, KeyRepeat, Window, WindowOptions};
use std::time::{Duration, Instant};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use wireframe_fps::{
    config::ViewerConfig,
    renderer::{Renderer, Software},
    sim::{FrameDriver, key_binding},
};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cfg = ViewerConfig::parse();
    let viewport = cfg.viewport()?;
    let scene = cfg.scene()?;
    let line_width = cfg.line_width()?;
    let fps = cfg.fps()?;
    debug!(?cfg, "config");

    let size = viewport.size();
    let mut driver = FrameDriver::new(viewport, line_width, cfg.overlays());
    let mut renderer = Software::default();

    let mut win = Window::new(
        "Wireframe first-person walls",
        size,
        size,
        WindowOptions::default(),
    )?;
    win.set_target_fps(fps);

    info!(size, walls = scene.walls.len(), "viewer started");
    driver.start(scene)?;

    // ────────────────── frame statistics ──────────────────────────────
    let mut acc_time = Duration::ZERO;
    let mut acc_frames = 0u32;
    let mut last_report = Instant::now();

    while win.is_open() && !win.is_key_down(Key::Escape) {
        /* key edges since the last frame; release last so a tap is lost */
        for key in win.get_keys_pressed(KeyRepeat::No) {
            if let Some(k) = key_binding(key) {
                driver.key_down(k);
            }
        }
        for key in win.get_keys_released() {
            if let Some(k) = key_binding(key) {
                driver.key_up(k);
            }
        }

        let t0 = Instant::now();
        driver.tick(&mut renderer)?;
        acc_time += t0.elapsed();
        acc_frames += 1;

        let mut presented = Ok(());
        renderer.end_frame(|fb, w, h| presented = win.update_with_buffer(fb, w, h));
        presented?;

        if last_report.elapsed() >= Duration::from_secs(1) {
            let avg_ms = acc_time.as_secs_f64() * 1000.0 / f64::from(acc_frames);
            if let Some(sim) = driver.simulation() {
                debug!(
                    avg_ms,
                    frames = acc_frames,
                    pos = ?sim.player.pos,
                    angle = sim.player.angle,
                    "frame stats"
                );
            }
            acc_time = Duration::ZERO;
            acc_frames = 0;
            last_report = Instant::now();
        }
    }

    info!(ticks = driver.ticks(), "window closed");
    Ok(())
}
