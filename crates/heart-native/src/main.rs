use anyhow::Context;
use clap::{Parser, ValueEnum};
use heart_core::{FrameClock, MotionStyle, Scene, SceneParams, SteppedClock};

#[derive(ValueEnum, Debug, Clone, Copy)]
enum Motion {
    Bounded,
    Drift,
}

impl From<Motion> for MotionStyle {
    fn from(m: Motion) -> Self {
        match m {
            Motion::Bounded => MotionStyle::Bounded,
            Motion::Drift => MotionStyle::Drift,
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(name = "heart-native")]
#[command(about = "Run the heartfield animator headless and log its state", long_about = None)]
struct Cli {
    /// Seed for every randomized scene property
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of frames to simulate
    #[arg(long, default_value_t = 600)]
    frames: u32,

    /// Simulated frame rate
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Keep this floating heart hovered for the whole run
    #[arg(long)]
    hover: Option<usize>,

    /// Log a status line every N frames (0 disables)
    #[arg(long = "report-every", default_value_t = 60)]
    report_every: u32,

    #[arg(long, value_enum, default_value_t = Motion::Bounded)]
    motion: Motion,
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let params = SceneParams {
        motion: cli.motion.into(),
        ..SceneParams::default()
    };
    let mut scene = Scene::new(params, cli.seed).context("building scene")?;

    if let Some(index) = cli.hover {
        if index >= scene.floating_hearts().len() {
            anyhow::bail!(
                "--hover {} out of range, scene has {} floating hearts",
                index,
                scene.floating_hearts().len()
            );
        }
        scene.set_hovered(Some(index));
    }

    let mut clock = SteppedClock::from_fps(cli.fps);
    log::info!(
        "running {} frames at dt={:.4}s motion={:?}",
        cli.frames,
        clock.step(),
        scene.motion()
    );

    let mut beats = 0u32;
    let mut was_beating = false;
    for n in 1..=cli.frames {
        let time = clock.tick();
        scene.advance(time);

        let beating = scene.main_heart().map_or(false, |h| h.is_beating());
        if beating && !was_beating {
            beats += 1;
        }
        was_beating = beating;

        if cli.report_every > 0 && n % cli.report_every == 0 {
            report(&scene, n, time.elapsed);
        }
    }

    log::info!(
        "done: frames={} elapsed={:.2}s beats={} hovered={:?}",
        cli.frames,
        clock.elapsed(),
        beats,
        scene.hovered_index()
    );
    Ok(())
}

fn report(scene: &Scene, frame: u32, elapsed: f64) {
    let eye = scene.camera().eye;
    let extent = scene
        .particles()
        .map(|p| p.extent())
        .unwrap_or(glam::Vec3::ZERO);
    match scene.main_heart() {
        Some(h) => log::info!(
            "[frame] n={} t={:.2}s heart scale={:.4} emissive={:.3} beat_phase={:.3} eye=({:.3},{:.3},{:.2}) particles=({:.2},{:.2},{:.2}) hovered={:?}",
            frame,
            elapsed,
            h.object.transform.scale.x,
            h.object.material.emissive_intensity,
            h.heartbeat_time,
            eye.x, eye.y, eye.z,
            extent.x, extent.y, extent.z,
            scene.hovered_index(),
        ),
        None => log::info!(
            "[frame] n={} t={:.2}s eye=({:.3},{:.3},{:.2}) particles=({:.2},{:.2},{:.2}) hovered={:?}",
            frame,
            elapsed,
            eye.x, eye.y, eye.z,
            extent.x, extent.y, extent.z,
            scene.hovered_index(),
        ),
    }
}
