//! Prelude module for `atlasplay-rs`.
//!
//! This module provides a convenient way to import commonly used types from
//! both member crates.
//!
//! # Examples
//!
//! ```no_run
//! use atlasplay_rs::prelude::*;
//!
//! # fn main() -> Result<(), AtlasError> {
//! let atlas = Atlas::open("walk.json", "walk.png")?;
//! println!("{} frames", atlas.frame_count());
//! # Ok(())
//! # }
//! ```

// Re-export everything from the types prelude
#[doc(inline)]
pub use atlasplay_types::prelude::*;

// Playback types
#[doc(inline)]
pub use atlasplay_player::{
	FrameLookup, ManualScheduler, PlaybackState, PlayerController, PlayerEvent, ScheduleHandle,
	Scheduler, Stage,
};

// Re-export the member crates for advanced usage
#[doc(inline)]
pub use atlasplay_player;
#[doc(inline)]
pub use atlasplay_types;
