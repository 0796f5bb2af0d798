//! Render-target adapter.
//!
//! A [`Stage`] sits between the controller's notification channel and
//! whatever actually draws pixels. It holds the viewport and the per-atlas
//! scale factor, and turns frame-change events into display placements. It
//! never touches a display surface and keeps no reference to one; drawing
//! is entirely the consumer's business.

use atlasplay_types::atlas::{Frame, FrameSequence};
use atlasplay_types::geometry::{FramePlacement, Viewport, place_frame};

use crate::event::PlayerEvent;

/// Maps frames of one atlas to display placements in a fixed viewport.
///
/// # Examples
///
/// ```no_run
/// use atlasplay_player::Stage;
/// use atlasplay_types::atlas::Atlas;
/// use atlasplay_types::geometry::Viewport;
///
/// # fn main() -> Result<(), atlasplay_types::atlas::AtlasError> {
/// let atlas = Atlas::open("walk.json", "walk.png")?;
/// let mut stage = Stage::new(Viewport::default());
/// stage.fit(atlas.sequence());
///
/// if let Some(frame) = atlas.frame(0) {
///     let placement = stage.place(frame);
///     println!("scale {} at ({}, {})", placement.scale, placement.position.x, placement.position.y);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stage {
	viewport: Viewport,
	scale_factor: f32,
}

impl Default for Stage {
	fn default() -> Self {
		Self::new(Viewport::default())
	}
}

impl Stage {
	/// Creates a stage for `viewport` with a neutral scale factor.
	pub fn new(viewport: Viewport) -> Self {
		Self {
			viewport,
			scale_factor: 1.0,
		}
	}

	/// Computes the shared scale factor for a loaded sequence.
	///
	/// Call once per atlas; the factor is derived from the maximum source
	/// size so all frames of the sequence share one scale.
	pub fn fit(&mut self, sequence: &FrameSequence) {
		self.scale_factor = self.viewport.scale_factor(sequence.max_source_size());
	}

	/// Returns the active shared scale factor.
	pub fn scale_factor(&self) -> f32 {
		self.scale_factor
	}

	/// Returns the stage viewport.
	pub fn viewport(&self) -> Viewport {
		self.viewport
	}

	/// Computes the placement of one frame at the viewport center.
	pub fn place(&self, frame: &Frame) -> FramePlacement {
		place_frame(frame, self.scale_factor, self.viewport.center())
	}

	/// Consumes a controller event.
	///
	/// Returns the placement to apply for a frame change carrying frame
	/// data; `None` for every other event, including frame changes whose
	/// lookup came back empty.
	pub fn apply(&self, event: &PlayerEvent) -> Option<FramePlacement> {
		match event {
			PlayerEvent::FrameChanged {
				frame: Some(frame),
				..
			} => Some(self.place(frame)),
			_ => None,
		}
	}
}
