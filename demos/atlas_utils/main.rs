//! Atlas validation utility.
//!
//! Provides three subcommands:
//! - `validate`: check one manifest/image pair with the full load pipeline.
//! - `scan`: walk a directory and validate every manifest found in it.
//! - `inspect`: deep-dive into a single atlas, listing the sorted frames
//!   and their display placements.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use atlasplay_rs::prelude::*;
use clap::{Args, Parser, Subcommand};
use walkdir::WalkDir;

fn main() -> Result<()> {
	// Initialize logger with default level set to info if RUST_LOG is not set
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	match cli.command {
		Command::Validate(opts) => run_validate(opts),
		Command::Scan(opts) => run_scan(opts),
		Command::Inspect(opts) => run_inspect(opts),
	}
}

#[derive(Parser)]
#[command(name = "atlas_utils")]
#[command(author = "atlasplay-rs project")]
#[command(version)]
#[command(about = "Validate and inspect TexturePacker-style atlases", long_about = None)]
struct Cli {
	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand)]
enum Command {
	/// Validate a single manifest/image pair
	Validate(ValidateArgs),
	/// Validate every manifest under a directory
	Scan(ScanArgs),
	/// Inspect a single atlas in detail
	Inspect(InspectArgs),
}

#[derive(Args)]
struct ValidateArgs {
	/// Path to the JSON manifest
	#[arg(value_name = "MANIFEST")]
	manifest: PathBuf,

	/// Path to the sheet image; defaults to the image the manifest declares,
	/// resolved next to the manifest
	#[arg(short, long, value_name = "IMAGE")]
	image: Option<PathBuf>,

	/// Exit with an error when warnings are encountered
	#[arg(long, default_value_t = false)]
	fail_on_warning: bool,
}

#[derive(Args)]
struct ScanArgs {
	/// Directory containing atlas manifests
	#[arg(short = 'd', long, value_name = "DIR", default_value = ".")]
	root: PathBuf,

	/// Recurse into sub-directories while scanning
	#[arg(short, long, default_value_t = false)]
	recursive: bool,

	/// Exit with an error when warnings are encountered
	#[arg(long, default_value_t = false)]
	fail_on_warning: bool,
}

#[derive(Args)]
struct InspectArgs {
	/// Path to the JSON manifest
	#[arg(value_name = "MANIFEST")]
	manifest: PathBuf,

	/// Path to the sheet image; defaults to the image the manifest declares
	#[arg(short, long, value_name = "IMAGE")]
	image: Option<PathBuf>,

	/// Dump frames and placements as JSON instead of a table
	#[arg(long, default_value_t = false)]
	json: bool,
}

/// Resolves the sheet image path: explicit flag wins, otherwise the filename
/// the manifest declares, taken relative to the manifest's directory.
fn resolve_image(manifest: &Path, explicit: Option<PathBuf>) -> Result<PathBuf> {
	if let Some(path) = explicit {
		return Ok(path);
	}
	let bytes = std::fs::read(manifest)
		.with_context(|| format!("reading manifest {}", manifest.display()))?;
	let sheet = atlas::parse_manifest(&bytes)
		.with_context(|| format!("parsing manifest {}", manifest.display()))?;
	let dir = manifest.parent().unwrap_or_else(|| Path::new("."));
	Ok(dir.join(sheet.image))
}

fn load_atlas(manifest: &Path, image: Option<PathBuf>) -> Result<Atlas> {
	let image = resolve_image(manifest, image)?;
	Atlas::open(manifest, &image)
		.with_context(|| format!("loading atlas {} + {}", manifest.display(), image.display()))
}

fn run_validate(opts: ValidateArgs) -> Result<()> {
	let atlas = load_atlas(&opts.manifest, opts.image)?;
	for warning in atlas.warnings() {
		log::warn!("{}: {warning}", opts.manifest.display());
	}
	println!(
		"{}: ok, {} frame(s), sheet {} ({} warning(s))",
		opts.manifest.display(),
		atlas.frame_count(),
		atlas.image().size(),
		atlas.warnings().len(),
	);
	if opts.fail_on_warning && !atlas.warnings().is_empty() {
		bail!("warnings present and --fail-on-warning set");
	}
	Ok(())
}

fn run_scan(opts: ScanArgs) -> Result<()> {
	let mut checked = 0usize;
	let mut failed = 0usize;
	let mut warned = 0usize;

	let max_depth = if opts.recursive { usize::MAX } else { 1 };
	for entry in WalkDir::new(&opts.root).max_depth(max_depth) {
		let entry = entry?;
		let path = entry.path();
		if path.extension().and_then(|e| e.to_str()) != Some("json") {
			continue;
		}
		checked += 1;
		match load_atlas(path, None) {
			Ok(atlas) => {
				if !atlas.warnings().is_empty() {
					warned += 1;
					for warning in atlas.warnings() {
						log::warn!("{}: {warning}", path.display());
					}
				}
				println!("{}: ok, {} frame(s)", path.display(), atlas.frame_count());
			}
			Err(err) => {
				failed += 1;
				log::error!("{}: {err:#}", path.display());
			}
		}
	}

	println!("checked {checked}, failed {failed}, with warnings {warned}");
	if failed > 0 {
		bail!("{failed} atlas(es) failed validation");
	}
	if opts.fail_on_warning && warned > 0 {
		bail!("warnings present and --fail-on-warning set");
	}
	Ok(())
}

fn run_inspect(opts: InspectArgs) -> Result<()> {
	let atlas = load_atlas(&opts.manifest, opts.image)?;

	let mut stage = Stage::new(Viewport::default());
	stage.fit(atlas.sequence());

	if opts.json {
		let report: Vec<_> = atlas
			.sequence()
			.iter()
			.map(|frame| {
				serde_json::json!({
					"frame": frame,
					"placement": stage.place(frame),
				})
			})
			.collect();
		println!("{}", serde_json::to_string_pretty(&report)?);
		return Ok(());
	}

	println!("sheet image: {}", atlas.image_name());
	println!("declared size: {}", atlas.declared_size());
	println!("decoded size:  {}", atlas.image().size());
	println!("scale factor:  {:.4}", stage.scale_factor());
	for warning in atlas.warnings() {
		println!("warning: {warning}");
	}
	println!("{} frame(s):", atlas.frame_count());
	for (index, frame) in atlas.sequence().iter().enumerate() {
		let placement = stage.place(frame);
		println!(
			"  [{index:3}] {frame} -> ({:.1}, {:.1})",
			placement.position.x, placement.position.y
		);
	}
	Ok(())
}
