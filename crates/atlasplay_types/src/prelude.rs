//! Prelude module for `atlasplay_types`.
//!
//! This module provides a convenient way to import commonly used types.
//!
//! # Examples
//!
//! ```no_run
//! use atlasplay_types::prelude::*;
//!
//! # fn main() -> Result<(), AtlasError> {
//! let atlas = Atlas::open("walk.json", "walk.png")?;
//! let scale = Viewport::default().scale_factor(atlas.sequence().max_source_size());
//! # Ok(())
//! # }
//! ```

// Atlas types
#[doc(inline)]
pub use crate::atlas::{
	Anchor,
	// Loader types
	Atlas,
	AtlasError,
	// Frame types
	Frame,
	FrameSequence,
	ImageHandle,
	LoadWarning,
	Rect,
	Size,
	TextureSheet,
	natural_cmp,
};

// Geometry types
#[doc(inline)]
pub use crate::geometry::{FramePlacement, Point, Viewport, place_frame};

// Re-export the modules for advanced usage
#[doc(inline)]
pub use crate::{atlas, geometry};
