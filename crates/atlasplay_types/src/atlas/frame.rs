//! Frame structures for atlas manifests.
//!
//! A [`Frame`] is one packed sprite's record: where its pixels sit in the
//! sheet, what logical size the sprite had before trimming, and (for trimmed
//! frames) where the surviving pixels sit within that logical size.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in sheet pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
	/// Left edge in pixels
	pub x: u32,
	/// Top edge in pixels
	pub y: u32,
	/// Width in pixels
	pub w: u32,
	/// Height in pixels
	pub h: u32,
}

impl Rect {
	/// Creates a new rectangle.
	pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
		Self {
			x,
			y,
			w,
			h,
		}
	}

	/// Returns the exclusive right edge (`x + w`).
	///
	/// Widened to `u64`: edges of rectangles near `u32::MAX` must not wrap,
	/// or a bounds check against them would accept out-of-range frames.
	#[inline]
	pub fn right(&self) -> u64 {
		u64::from(self.x) + u64::from(self.w)
	}

	/// Returns the exclusive bottom edge (`y + h`).
	///
	/// Widened to `u64` for the same reason as [`Rect::right`].
	#[inline]
	pub fn bottom(&self) -> u64 {
		u64::from(self.y) + u64::from(self.h)
	}
}

impl Display for Rect {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}x{}+{}+{}", self.w, self.h, self.x, self.y)
	}
}

/// Width/height pair in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
	/// Width in pixels
	pub w: u32,
	/// Height in pixels
	pub h: u32,
}

impl Size {
	/// Creates a new size.
	pub fn new(w: u32, h: u32) -> Self {
		Self {
			w,
			h,
		}
	}

	/// Returns the total number of pixels covered by this size.
	#[inline]
	pub fn pixel_count(&self) -> usize {
		self.w as usize * self.h as usize
	}
}

impl Display for Size {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}x{}", self.w, self.h)
	}
}

/// Normalized anchor point, each axis in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
	/// Horizontal anchor (0 = left, 1 = right)
	pub x: f32,
	/// Vertical anchor (0 = top, 1 = bottom)
	pub y: f32,
}

/// One packed sprite's metadata from the atlas manifest.
///
/// # Trimming
///
/// TexturePacker removes transparent border pixels before packing. For a
/// trimmed frame, `rect` covers only the surviving pixels inside the sheet,
/// `source_size` is the sprite's pre-trim logical size, and `sprite_source`
/// records where the surviving pixels sit within that logical size. The
/// geometry module uses `sprite_source` to re-center trimmed frames so the
/// logical sprite stays anchored across a sequence.
///
/// # Rotation
///
/// Frames packed with `rotated = true` are accepted but no corrective
/// rotation is applied anywhere in this crate; the loader reports such
/// frames through a load warning instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
	/// Identifier, unique within a sheet (the packed file's name)
	pub filename: String,
	/// Pixel rectangle inside the sheet
	pub rect: Rect,
	/// Pre-trim logical size of the sprite
	pub source_size: Size,
	/// Placement of the trimmed rectangle within the logical source,
	/// present only for trimmed frames
	pub sprite_source: Option<Rect>,
	/// Frame was stored rotated 90 degrees in the sheet
	pub rotated: bool,
	/// Transparent borders were trimmed before packing
	pub trimmed: bool,
	/// Optional normalized pivot point
	pub anchor: Option<Anchor>,
}

impl Frame {
	/// Returns the number of sheet pixels this frame occupies.
	#[inline]
	pub fn pixel_count(&self) -> usize {
		self.rect.w as usize * self.rect.h as usize
	}

	/// Returns `true` when the frame carries trim placement data.
	#[inline]
	pub fn has_trim_data(&self) -> bool {
		self.sprite_source.is_some()
	}
}

impl Display for Frame {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"Frame {:?}: rect={} source={}{}{}",
			self.filename,
			self.rect,
			self.source_size,
			if self.trimmed { " trimmed" } else { "" },
			if self.rotated { " rotated" } else { "" },
		)
	}
}
