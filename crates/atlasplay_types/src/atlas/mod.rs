//! Sprite-atlas manifest support for `atlasplay-rs`.
//!
//! This module loads TexturePacker-style atlases: a JSON manifest describing
//! packed frames plus one sheet bitmap. Loading validates the two inputs
//! against each other and produces an ordered, immutable [`FrameSequence`].
//!
//! # Load Pipeline
//!
//! 1. Parse the manifest bytes as JSON ([`AtlasError::Json`] on failure).
//! 2. Structural validation with field-precise errors: non-empty `textures`,
//!    first record only, numeric sheet size, non-empty `frames`, present
//!    rectangle coordinates (zero valid, absence not), positive extents,
//!    present `sourceSize`, non-blank `filename`.
//! 3. Decode the sheet bitmap ([`AtlasError::ImageDecode`] on failure).
//! 4. Cross-check declared vs decoded sheet size; a mismatch is a logged
//!    [`LoadWarning`], not an error.
//! 5. Bounds-check every frame rectangle against the *decoded* size;
//!    violations are fatal and name the offending frame.
//! 6. Natural-sort frames by filename into the final [`FrameSequence`].
//!
//! Any failure releases the decoded bitmap before the error propagates; a
//! rejected load leaves nothing allocated.
//!
//! # Usage Examples
//!
//! ## Loading an atlas
//!
//! ```no_run
//! use atlasplay_types::atlas::Atlas;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let atlas = Atlas::open("walk.json", "walk.png")?;
//!
//! println!("Total frames: {}", atlas.frame_count());
//! for frame in atlas.sequence() {
//!     println!("  {frame}");
//! }
//! # Ok(())
//! # }
//! ```

mod error;
mod frame;
mod loader;
mod manifest;
mod sequence;
mod sort;

pub use error::{AtlasError, LoadWarning};
pub use frame::{Anchor, Frame, Rect, Size};
pub use loader::{Atlas, ImageHandle};
pub use manifest::{TextureSheet, parse_manifest};
pub use sequence::FrameSequence;
pub use sort::natural_cmp;
