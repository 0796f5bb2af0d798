//! Atlas loading: manifest parse, image decode, cross-checks, sequencing.
//!
//! Loading is atomic. Every fatal error returns before any state escapes,
//! and the decoded image handle is released by `Drop` on all failure paths,
//! so a rejected load never leaks the bitmap resource. The live-handle
//! counter exists so that property stays observable from tests.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::error::{AtlasError, LoadWarning};
use super::frame::{Frame, Size};
use super::manifest::parse_manifest;
use super::sequence::FrameSequence;

static LIVE_HANDLES: AtomicUsize = AtomicUsize::new(0);

/// Owning handle over a decoded sheet bitmap.
///
/// The handle is allocated once per successful decode and released exactly
/// once when dropped, whether the surrounding load succeeds or fails.
/// [`ImageHandle::live_count`] reports how many handles are currently
/// allocated process-wide.
pub struct ImageHandle {
	image: image::RgbaImage,
}

impl ImageHandle {
	/// Decodes image bytes into an owned RGBA bitmap.
	fn decode(bytes: &[u8]) -> Result<Self, image::ImageError> {
		let image = image::load_from_memory(bytes)?.into_rgba8();
		LIVE_HANDLES.fetch_add(1, Ordering::SeqCst);
		Ok(Self {
			image,
		})
	}

	/// Returns the decoded bitmap dimensions.
	pub fn size(&self) -> Size {
		Size::new(self.image.width(), self.image.height())
	}

	/// Returns the decoded pixels.
	pub fn image(&self) -> &image::RgbaImage {
		&self.image
	}

	/// Returns the number of currently allocated handles.
	///
	/// Intended as a leak probe for tests; a rejected load must leave this
	/// number where it found it.
	pub fn live_count() -> usize {
		LIVE_HANDLES.load(Ordering::SeqCst)
	}
}

impl Drop for ImageHandle {
	fn drop(&mut self) {
		LIVE_HANDLES.fetch_sub(1, Ordering::SeqCst);
	}
}

impl std::fmt::Debug for ImageHandle {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ImageHandle").field("size", &self.size()).finish()
	}
}

/// A fully loaded and validated atlas.
///
/// Owns the decoded sheet bitmap and the ordered [`FrameSequence`] for the
/// lifetime between load and drop. Playback and rendering collaborators
/// borrow frame data from here; nothing else may mutate it.
///
/// # Examples
///
/// ```no_run
/// use atlasplay_types::atlas::Atlas;
///
/// # fn main() -> Result<(), atlasplay_types::atlas::AtlasError> {
/// let atlas = Atlas::open("walk.json", "walk.png")?;
///
/// println!("{} frames on a {} sheet", atlas.frame_count(), atlas.image().size());
/// if let Some(frame) = atlas.frame(0) {
///     println!("first frame: {frame}");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Atlas {
	image_name: String,
	declared_size: Size,
	sequence: FrameSequence,
	image: ImageHandle,
	warnings: Vec<LoadWarning>,
}

impl Atlas {
	/// Loads an atlas from manifest bytes and image bytes.
	///
	/// Pipeline order: JSON parse, structural validation, image decode,
	/// declared/decoded size cross-check (warning only), per-frame bounds
	/// check against the decoded size (fatal), natural sort into the final
	/// sequence. Non-fatal findings are logged and kept on the atlas.
	///
	/// # Errors
	///
	/// Any [`AtlasError`]; see the manifest module for the structural
	/// variants. On error no image handle stays allocated.
	pub fn load(manifest_bytes: &[u8], image_bytes: &[u8]) -> Result<Self, AtlasError> {
		let sheet = parse_manifest(manifest_bytes)?;
		let image = ImageHandle::decode(image_bytes)?;
		let decoded = image.size();

		let mut warnings = Vec::new();
		if sheet.size != decoded {
			let warning = LoadWarning::SheetSizeMismatch {
				declared: sheet.size,
				decoded,
			};
			log::warn!("{warning}");
			warnings.push(warning);
		}

		// Frame rectangles must fit the pixels we actually have, not the
		// size the manifest claims. Edges are compared in u64 so rectangles
		// near u32::MAX cannot wrap past the check.
		for (index, frame) in sheet.frames.iter().enumerate() {
			if frame.rect.right() > u64::from(decoded.w)
				|| frame.rect.bottom() > u64::from(decoded.h)
			{
				return Err(AtlasError::FrameBounds {
					index,
					filename: frame.filename.clone(),
					right: frame.rect.right(),
					bottom: frame.rect.bottom(),
					image_size: decoded,
				});
			}
		}

		let rotated = sheet.frames.iter().filter(|f| f.rotated).count();
		if rotated > 0 {
			let warning = LoadWarning::RotatedFrames {
				count: rotated,
			};
			log::warn!("{warning}");
			warnings.push(warning);
		}

		Ok(Self {
			image_name: sheet.image,
			declared_size: sheet.size,
			sequence: FrameSequence::from_frames(sheet.frames),
			image,
			warnings,
		})
	}

	/// Loads an atlas from a manifest file and an image file.
	///
	/// # Errors
	///
	/// [`AtlasError::IOError`] when either file cannot be read, otherwise
	/// the same errors as [`Atlas::load`].
	pub fn open(
		manifest_path: impl AsRef<Path>,
		image_path: impl AsRef<Path>,
	) -> Result<Self, AtlasError> {
		let manifest_bytes = std::fs::read(manifest_path)?;
		let image_bytes = std::fs::read(image_path)?;
		Self::load(&manifest_bytes, &image_bytes)
	}

	/// Returns the sheet image filename declared by the manifest.
	pub fn image_name(&self) -> &str {
		&self.image_name
	}

	/// Returns the sheet size declared by the manifest.
	///
	/// May differ from the decoded size; see
	/// [`LoadWarning::SheetSizeMismatch`].
	pub fn declared_size(&self) -> Size {
		self.declared_size
	}

	/// Returns the ordered frame sequence.
	pub fn sequence(&self) -> &FrameSequence {
		&self.sequence
	}

	/// Returns the decoded sheet bitmap handle.
	pub fn image(&self) -> &ImageHandle {
		&self.image
	}

	/// Returns non-fatal findings from the load.
	pub fn warnings(&self) -> &[LoadWarning] {
		&self.warnings
	}

	/// Returns the frame at `index` in sequence order.
	pub fn frame(&self, index: usize) -> Option<&Frame> {
		self.sequence.get(index)
	}

	/// Returns the number of frames in the sequence.
	pub fn frame_count(&self) -> usize {
		self.sequence.len()
	}
}
