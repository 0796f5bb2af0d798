//! Display geometry for atlas frames.
//!
//! Pure functions mapping a frame's packing record to a centered, uniformly
//! scaled display transform. One scale factor is computed per atlas from the
//! maximum pre-trim source size, so relative sprite sizes stay consistent
//! while a sequence plays; per-frame positioning undoes the trim offset so
//! trimmed frames do not jitter around the canvas center.
//!
//! Rotated frames receive no corrective rotation here; the loader flags them
//! and they are placed as if unrotated.

use serde::{Deserialize, Serialize};

use crate::atlas::{Frame, Size};

/// Reference viewport width in logical units.
pub const VIEWPORT_WIDTH: f32 = 800.0;

/// Reference viewport height in logical units.
pub const VIEWPORT_HEIGHT: f32 = 600.0;

/// Total padding per axis in logical units.
pub const VIEWPORT_PADDING: f32 = 40.0;

/// Point in viewport space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
	/// Horizontal coordinate
	pub x: f32,
	/// Vertical coordinate
	pub y: f32,
}

impl Point {
	/// Creates a new point.
	pub fn new(x: f32, y: f32) -> Self {
		Self {
			x,
			y,
		}
	}
}

/// Display viewport the sequence is fitted into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
	/// Viewport width in logical units
	pub width: f32,
	/// Viewport height in logical units
	pub height: f32,
	/// Total padding per axis in logical units
	pub padding: f32,
}

impl Default for Viewport {
	fn default() -> Self {
		Self {
			width: VIEWPORT_WIDTH,
			height: VIEWPORT_HEIGHT,
			padding: VIEWPORT_PADDING,
		}
	}
}

impl Viewport {
	/// Creates a viewport with the reference padding.
	pub fn new(width: f32, height: f32) -> Self {
		Self {
			width,
			height,
			padding: VIEWPORT_PADDING,
		}
	}

	/// Returns the drawable area after padding.
	pub fn available(&self) -> (f32, f32) {
		(self.width - self.padding, self.height - self.padding)
	}

	/// Returns the viewport center.
	pub fn center(&self) -> Point {
		Point::new(self.width / 2.0, self.height / 2.0)
	}

	/// Computes the shared display scale for a sequence.
	///
	/// `max_source` is the component-wise maximum pre-trim source size
	/// across all frames (see
	/// [`FrameSequence::max_source_size`](crate::atlas::FrameSequence::max_source_size)).
	/// The factor fits that size into the padded viewport and never exceeds
	/// `1.0`, so sprites are downscaled to fit but never upscaled past
	/// native resolution.
	pub fn scale_factor(&self, max_source: Size) -> f32 {
		if max_source.w == 0 || max_source.h == 0 {
			return 1.0;
		}
		let (avail_w, avail_h) = self.available();
		(avail_w / max_source.w as f32).min(avail_h / max_source.h as f32).min(1.0)
	}
}

/// Derived display transform for one frame.
///
/// Never stored; always recomputed from the frame, the shared scale factor
/// and the canvas center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FramePlacement {
	/// Uniform scale to apply to the frame pixels
	pub scale: f32,
	/// Where the (scaled) frame center lands in viewport space
	pub position: Point,
}

/// Computes the placement of one frame around `center`.
///
/// For trimmed frames the placement shifts by the offset of the trimmed
/// rectangle's center within the logical source, scaled by `scale`. This
/// keeps the *logical* sprite anchored at the canvas center across frames
/// with differing trim boxes; without it, trimmed frames visibly jitter.
/// Untrimmed frames land exactly at `center`.
///
/// # Examples
///
/// ```
/// use atlasplay_types::atlas::{Frame, Rect, Size};
/// use atlasplay_types::geometry::{Point, place_frame};
///
/// let frame = Frame {
///     filename: "f.png".to_string(),
///     rect: Rect::new(0, 0, 20, 20),
///     source_size: Size::new(40, 40),
///     sprite_source: Some(Rect::new(0, 0, 20, 20)),
///     rotated: false,
///     trimmed: true,
///     anchor: None,
/// };
///
/// // Trim kept only the top-left quarter, so the placement shifts up-left.
/// let placement = place_frame(&frame, 1.0, Point::new(400.0, 300.0));
/// assert_eq!(placement.position, Point::new(390.0, 290.0));
/// ```
pub fn place_frame(frame: &Frame, scale: f32, center: Point) -> FramePlacement {
	let position = match frame.sprite_source {
		Some(trim) => {
			let offset_x =
				trim.x as f32 + trim.w as f32 / 2.0 - frame.source_size.w as f32 / 2.0;
			let offset_y =
				trim.y as f32 + trim.h as f32 / 2.0 - frame.source_size.h as f32 / 2.0;
			Point::new(center.x + offset_x * scale, center.y + offset_y * scale)
		}
		None => center,
	};
	FramePlacement {
		scale,
		position,
	}
}
