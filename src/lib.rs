#![allow(clippy::single_component_path_imports)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `atlasplay-rs` loads TexturePacker-style sprite atlases, validates the
//! manifest against the sheet bitmap, and drives a scrubbable, playable
//! animation cursor over the resulting frame sequence.
//!
//! The heavy lifting lives in two member crates, re-exported here:
//!
//! - [`atlasplay_types`] — atlas manifest parsing/validation, the ordered
//!   frame sequence, and display geometry.
//! - [`atlasplay_player`] — the playback controller state machine, the
//!   scheduling seam, and the render-target stage adapter.
//!
//! # Examples
//!
//! ```no_run
//! use atlasplay_rs::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let atlas = Atlas::open("walk.json", "walk.png")?;
//!
//! let mut stage = Stage::new(Viewport::default());
//! stage.fit(atlas.sequence());
//!
//! let scheduler = ManualScheduler::new();
//! let sequence = atlas.sequence().clone();
//! let mut player = PlayerController::new(
//!     Box::new(scheduler.clone()),
//!     Box::new(move |index| sequence.get(index).cloned()),
//! );
//! player.initialize(atlas.frame_count());
//! player.set_looping(true);
//! player.play();
//! # Ok(())
//! # }
//! ```

pub use atlasplay_player;
pub use atlasplay_types;

/// `use atlasplay_rs::prelude::*;` to import commonly used items.
pub mod prelude;
