//! Playback simulation utility.
//!
//! Loads an atlas, wires a playback controller to a manual scheduler, and
//! pumps a fixed number of ticks, printing the frame/placement timeline the
//! way a rendering surface would consume it. Useful for checking sequence
//! order, loop behavior and trim re-centering without a display.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use atlasplay_rs::prelude::*;
use clap::Parser;

fn main() -> Result<()> {
	// Initialize logger with default level set to info if RUST_LOG is not set
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	run(cli)
}

#[derive(Parser)]
#[command(name = "player_utils")]
#[command(author = "atlasplay-rs project")]
#[command(version)]
#[command(about = "Simulate playback over an atlas frame sequence", long_about = None)]
struct Cli {
	/// Path to the JSON manifest
	#[arg(value_name = "MANIFEST")]
	manifest: PathBuf,

	/// Path to the sheet image; defaults to the image the manifest declares
	#[arg(short, long, value_name = "IMAGE")]
	image: Option<PathBuf>,

	/// Playback rate in frames per second (1-60)
	#[arg(long, default_value_t = 12)]
	fps: u32,

	/// Wrap to the first frame at the end of the sequence
	#[arg(long = "loop", default_value_t = false)]
	looping: bool,

	/// Number of schedule ticks to simulate
	#[arg(long, default_value_t = 24)]
	ticks: usize,

	/// Scrub to this progress (0.0-1.0) before playing
	#[arg(long, value_name = "PROGRESS")]
	scrub: Option<f64>,
}

fn run(cli: Cli) -> Result<()> {
	let image = match cli.image {
		Some(path) => path,
		None => {
			let bytes = std::fs::read(&cli.manifest)
				.with_context(|| format!("reading manifest {}", cli.manifest.display()))?;
			let sheet = atlas::parse_manifest(&bytes)?;
			cli.manifest.parent().unwrap_or_else(|| Path::new(".")).join(sheet.image)
		}
	};
	let atlas = Atlas::open(&cli.manifest, &image)
		.with_context(|| format!("loading atlas {}", cli.manifest.display()))?;
	for warning in atlas.warnings() {
		log::warn!("{warning}");
	}

	let mut stage = Stage::new(Viewport::default());
	stage.fit(atlas.sequence());
	println!(
		"{} frame(s), scale factor {:.4}, period {:?}",
		atlas.frame_count(),
		stage.scale_factor(),
		std::time::Duration::from_secs_f64(1.0 / f64::from(cli.fps.clamp(1, 60))),
	);

	let scheduler = ManualScheduler::new();
	let sequence = atlas.sequence().clone();
	let mut player = PlayerController::new(
		Box::new(scheduler.clone()),
		Box::new(move |index| sequence.get(index).cloned()),
	);

	// Stage is Copy; the observer prints what a render surface would apply.
	player.subscribe(move |event| match event {
		PlayerEvent::FrameChanged {
			index,
			frame: Some(frame),
		} => {
			let placement = stage.place(frame);
			println!(
				"  frame {index:3} {:24} scale {:.4} at ({:.1}, {:.1})",
				frame.filename, placement.scale, placement.position.x, placement.position.y
			);
		}
		PlayerEvent::FrameChanged {
			index,
			frame: None,
		} => println!("  frame {index:3} <no data>"),
		PlayerEvent::PlayStateChanged {
			playing,
		} => println!("  {}", if *playing { "-- playing --" } else { "-- paused --" }),
		PlayerEvent::FrameRateChanged {
			fps,
		} => println!("  -- {fps} fps --"),
	});

	player.initialize(atlas.frame_count());
	player.set_looping(cli.looping);
	player.set_frame_rate(cli.fps);
	if let Some(progress) = cli.scrub {
		player.set_frame_from_progress(progress);
	}
	player.play();

	for _ in 0..cli.ticks {
		if !player.is_playing() {
			break;
		}
		player.tick();
	}
	player.stop();
	Ok(())
}
