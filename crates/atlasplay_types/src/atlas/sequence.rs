//! Ordered frame sequences.
//!
//! A [`FrameSequence`] is the immutable, index-addressable list of frames a
//! loaded atlas exposes. The ordering is fixed at construction by the
//! numeric-aware filename comparison in [`super::sort`]; frame index
//! `0..len-1` is the only sequencing contract the playback side relies on.

use super::frame::{Frame, Size};
use super::sort::natural_cmp;

/// Immutable list of frames ordered by natural filename comparison.
///
/// # Examples
///
/// ```
/// use atlasplay_types::atlas::{Frame, FrameSequence, Rect, Size};
///
/// let make = |name: &str| Frame {
///     filename: name.to_string(),
///     rect: Rect::new(0, 0, 16, 16),
///     source_size: Size::new(16, 16),
///     sprite_source: None,
///     rotated: false,
///     trimmed: false,
///     anchor: None,
/// };
///
/// let seq = FrameSequence::from_frames(vec![make("a_10"), make("a_1"), make("a_02")]);
/// let names: Vec<_> = seq.iter().map(|f| f.filename.as_str()).collect();
/// assert_eq!(names, vec!["a_1", "a_02", "a_10"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FrameSequence {
	frames: Vec<Frame>,
}

impl FrameSequence {
	/// Builds a sequence from frames in arbitrary order.
	///
	/// The frames are sorted by [`natural_cmp`] on their filenames; the
	/// resulting positions are the frame indices for the rest of the system.
	pub fn from_frames(mut frames: Vec<Frame>) -> Self {
		frames.sort_by(|a, b| natural_cmp(&a.filename, &b.filename));
		Self {
			frames,
		}
	}

	/// Returns the number of frames.
	pub fn len(&self) -> usize {
		self.frames.len()
	}

	/// Returns `true` when the sequence holds no frames.
	pub fn is_empty(&self) -> bool {
		self.frames.is_empty()
	}

	/// Returns the frame at `index`, or `None` when out of range.
	pub fn get(&self, index: usize) -> Option<&Frame> {
		self.frames.get(index)
	}

	/// Returns all frames in sequence order.
	pub fn frames(&self) -> &[Frame] {
		&self.frames
	}

	/// Iterates over the frames in sequence order.
	pub fn iter(&self) -> std::slice::Iter<'_, Frame> {
		self.frames.iter()
	}

	/// Returns the component-wise maximum `source_size` across all frames.
	///
	/// This is the size the shared display scale factor is derived from, so
	/// relative sprite sizes stay consistent across a playing sequence.
	/// Returns `Size::new(0, 0)` for an empty sequence.
	pub fn max_source_size(&self) -> Size {
		self.frames.iter().fold(Size::new(0, 0), |acc, frame| {
			Size::new(acc.w.max(frame.source_size.w), acc.h.max(frame.source_size.h))
		})
	}
}

impl<'a> IntoIterator for &'a FrameSequence {
	type Item = &'a Frame;
	type IntoIter = std::slice::Iter<'a, Frame>;

	fn into_iter(self) -> Self::IntoIter {
		self.frames.iter()
	}
}

impl std::fmt::Display for FrameSequence {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "FrameSequence({} frames)", self.frames.len())
	}
}
