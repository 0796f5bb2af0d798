//! This crate provides core data types and atlas manifest support for the
//! `atlasplay-rs` project.
//!
//! # Atlas Format
//!
//! The supported descriptor is the TexturePacker-style JSON manifest: a root
//! object with a `textures` array, where each texture record declares the
//! sheet image, its declared size and a list of packed frames. Only the
//! first texture record is consumed; multi-texture atlases are out of scope.
//!
//! Loading cross-checks the manifest against the decoded sheet bitmap and
//! produces an immutable [`atlas::FrameSequence`] ordered by numeric-aware
//! filename comparison, so `frame_9` sorts before `frame_10`.
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```no_run
//! use atlasplay_types::prelude::*;
//!
//! # fn main() -> Result<(), AtlasError> {
//! let atlas = Atlas::open("walk.json", "walk.png")?;
//!
//! println!("Frames: {}", atlas.frame_count());
//! for warning in atlas.warnings() {
//!     println!("warning: {warning}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Or use explicit paths:
//!
//! ```no_run
//! use atlasplay_types::atlas::Atlas;
//!
//! let atlas = Atlas::open("walk.json", "walk.png");
//! ```

pub mod atlas;
pub mod geometry;

/// `use atlasplay_types::prelude::*;` to import commonly used items.
pub mod prelude;
