//! Error and warning types for atlas loading.

use thiserror::Error;

use super::frame::Size;

/// Errors that can occur while loading and validating an atlas.
///
/// Every variant is fatal to the load attempt: the loader returns without
/// leaving any partially constructed state or allocated image handle behind.
#[derive(Debug, Error)]
pub enum AtlasError {
	/// The manifest bytes were not valid JSON
	#[error("invalid JSON: {0}")]
	Json(#[from] serde_json::Error),

	/// A required manifest field is absent
	#[error("missing manifest field `{path}`")]
	MissingField {
		/// Dotted path of the absent field, e.g. `frames[3].frame.x`
		path: String,
	},

	/// A manifest field is present but holds an unusable value
	#[error("invalid manifest field `{path}`: {reason}")]
	InvalidField {
		/// Dotted path of the offending field
		path: String,
		/// Why the value was rejected
		reason: String,
	},

	/// The manifest declares no texture records
	#[error("manifest has no texture records")]
	NoTextures,

	/// The first texture record declares no frames
	#[error("texture sheet declares no frames")]
	NoFrames,

	/// The sheet bitmap could not be decoded
	#[error("failed to decode atlas image: {0}")]
	ImageDecode(#[from] image::ImageError),

	/// A frame rectangle extends past the decoded sheet bitmap
	#[error(
		"frame {index} ({filename:?}) exceeds decoded image bounds: \
		 rect reaches ({right}, {bottom}), image is {image_size}"
	)]
	FrameBounds {
		/// Index of the offending frame in manifest order
		index: usize,
		/// Filename of the offending frame
		filename: String,
		/// Exclusive right edge of the frame rectangle
		right: u64,
		/// Exclusive bottom edge of the frame rectangle
		bottom: u64,
		/// Decoded image dimensions
		image_size: Size,
	},

	/// IO error while reading manifest or image bytes
	#[error(transparent)]
	IOError(#[from] std::io::Error),
}

/// Non-fatal findings reported alongside a successful load.
///
/// Warnings are logged through the `log` facade and kept on the loaded
/// [`Atlas`](super::Atlas) so callers can surface them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadWarning {
	/// Declared sheet size differs from the decoded bitmap size.
	///
	/// Deliberate leniency: sheets re-exported or re-saved at a different
	/// DPI commonly disagree with their manifest, and frame rectangles are
	/// bounds-checked against the decoded size anyway.
	#[error("declared sheet size {declared} differs from decoded image size {decoded}")]
	SheetSizeMismatch {
		/// Size stated in the manifest
		declared: Size,
		/// Size of the decoded bitmap
		decoded: Size,
	},

	/// The sheet contains rotated frames, which are displayed without
	/// corrective rotation.
	#[error("{count} rotated frame(s) present; rotation is not corrected at display time")]
	RotatedFrames {
		/// Number of frames with the `rotated` flag set
		count: usize,
	},
}
