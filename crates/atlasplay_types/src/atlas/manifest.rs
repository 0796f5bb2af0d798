//! TexturePacker manifest parsing and structural validation.
//!
//! The manifest is deserialized into a raw model where every field is
//! optional, then validated field by field so each failure reports the exact
//! dotted path of the offending value (`textures[0].frames[3].frame.x`).
//! Zero is a valid coordinate; absence is not, and the two must stay
//! distinguishable, which rules out `#[serde(default)]` on the raw model.

use serde::Deserialize;

use super::error::AtlasError;
use super::frame::{Anchor, Frame, Rect, Size};

/// Raw manifest root as deserialized from JSON.
#[derive(Debug, Deserialize)]
pub(crate) struct RawManifest {
	textures: Option<Vec<RawTexture>>,
}

#[derive(Debug, Deserialize)]
struct RawTexture {
	image: Option<String>,
	#[allow(dead_code)]
	format: Option<String>,
	size: Option<RawSize>,
	#[allow(dead_code)]
	scale: Option<f64>,
	frames: Option<Vec<RawFrame>>,
}

#[derive(Debug, Deserialize)]
struct RawSize {
	w: Option<f64>,
	h: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawRect {
	x: Option<f64>,
	y: Option<f64>,
	w: Option<f64>,
	h: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawFrame {
	filename: Option<String>,
	rotated: Option<bool>,
	trimmed: Option<bool>,
	#[serde(rename = "sourceSize")]
	source_size: Option<RawSize>,
	#[serde(rename = "spriteSourceSize")]
	sprite_source_size: Option<RawRect>,
	frame: Option<RawRect>,
	anchor: Option<RawAnchor>,
}

#[derive(Debug, Deserialize)]
struct RawAnchor {
	x: Option<f64>,
	y: Option<f64>,
}

/// Validated first texture record of a manifest.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureSheet {
	/// Sheet image filename as declared by the manifest
	pub image: String,
	/// Declared sheet size (cross-checked against the decoded bitmap later)
	pub size: Size,
	/// Frames in manifest order; sorting happens when the sequence is built
	pub frames: Vec<Frame>,
}

/// Parses manifest bytes and validates them into a [`TextureSheet`].
///
/// Only the first texture record is consumed. Frames keep their manifest
/// order here; the loader sorts them into the final sequence.
///
/// # Errors
///
/// - [`AtlasError::Json`] if the bytes are not well-formed JSON matching the
///   manifest shape
/// - [`AtlasError::NoTextures`] / [`AtlasError::NoFrames`] for empty arrays
/// - [`AtlasError::MissingField`] / [`AtlasError::InvalidField`] naming the
///   offending field path for everything else
pub fn parse_manifest(bytes: &[u8]) -> Result<TextureSheet, AtlasError> {
	let raw: RawManifest = serde_json::from_slice(bytes)?;
	validate(raw)
}

fn validate(raw: RawManifest) -> Result<TextureSheet, AtlasError> {
	let textures = raw.textures.ok_or_else(|| missing("textures"))?;
	let extra = textures.len().saturating_sub(1);
	let Some(texture) = textures.into_iter().next() else {
		return Err(AtlasError::NoTextures);
	};
	if extra > 0 {
		log::debug!("manifest declares {} extra texture(s), only the first is used", extra);
	}

	let image = texture.image.ok_or_else(|| missing("textures[0].image"))?;
	let size = validate_size(texture.size, "textures[0].size")?;

	let raw_frames = texture.frames.ok_or_else(|| missing("textures[0].frames"))?;
	if raw_frames.is_empty() {
		return Err(AtlasError::NoFrames);
	}

	let mut frames = Vec::with_capacity(raw_frames.len());
	for (index, raw_frame) in raw_frames.into_iter().enumerate() {
		frames.push(validate_frame(raw_frame, index)?);
	}

	Ok(TextureSheet {
		image,
		size,
		frames,
	})
}

fn validate_frame(raw: RawFrame, index: usize) -> Result<Frame, AtlasError> {
	let path = |field: &str| format!("textures[0].frames[{index}].{field}");

	let filename = raw.filename.ok_or_else(|| missing(&path("filename")))?;
	if filename.trim().is_empty() {
		return Err(AtlasError::InvalidField {
			path: path("filename"),
			reason: "must not be blank".to_string(),
		});
	}

	let rect_raw = raw.frame.ok_or_else(|| missing(&path("frame")))?;
	let rect = validate_rect(rect_raw, &path("frame"))?;

	let source_raw = raw.source_size.ok_or_else(|| missing(&path("sourceSize")))?;
	let source_size = validate_size(Some(source_raw), &path("sourceSize"))?;

	let sprite_source = match raw.sprite_source_size {
		Some(trim_raw) => Some(validate_rect(trim_raw, &path("spriteSourceSize"))?),
		None => None,
	};

	let anchor = match raw.anchor {
		Some(raw_anchor) => {
			let x = raw_anchor.x.ok_or_else(|| missing(&path("anchor.x")))?;
			let y = raw_anchor.y.ok_or_else(|| missing(&path("anchor.y")))?;
			Some(Anchor {
				x: x as f32,
				y: y as f32,
			})
		}
		None => None,
	};

	Ok(Frame {
		filename,
		rect,
		source_size,
		sprite_source,
		rotated: raw.rotated.unwrap_or(false),
		trimmed: raw.trimmed.unwrap_or(false),
		anchor,
	})
}

/// Validates a rectangle: `x`/`y` present and non-negative (zero is valid),
/// `w`/`h` present and strictly positive.
fn validate_rect(raw: RawRect, path: &str) -> Result<Rect, AtlasError> {
	let x = coordinate(raw.x, path, "x")?;
	let y = coordinate(raw.y, path, "y")?;
	let w = extent(raw.w, path, "w")?;
	let h = extent(raw.h, path, "h")?;
	Ok(Rect::new(x, y, w, h))
}

fn validate_size(raw: Option<RawSize>, path: &str) -> Result<Size, AtlasError> {
	let raw = raw.ok_or_else(|| missing(path))?;
	let w = extent(raw.w, path, "w")?;
	let h = extent(raw.h, path, "h")?;
	Ok(Size::new(w, h))
}

fn coordinate(value: Option<f64>, path: &str, field: &str) -> Result<u32, AtlasError> {
	let value = value.ok_or_else(|| missing(&format!("{path}.{field}")))?;
	if !value.is_finite() || value < 0.0 {
		return Err(AtlasError::InvalidField {
			path: format!("{path}.{field}"),
			reason: format!("must be a non-negative number, got {value}"),
		});
	}
	Ok(value as u32)
}

fn extent(value: Option<f64>, path: &str, field: &str) -> Result<u32, AtlasError> {
	let value = value.ok_or_else(|| missing(&format!("{path}.{field}")))?;
	if !value.is_finite() || value <= 0.0 {
		return Err(AtlasError::InvalidField {
			path: format!("{path}.{field}"),
			reason: format!("must be a positive number, got {value}"),
		});
	}
	Ok(value as u32)
}

fn missing(path: &str) -> AtlasError {
	AtlasError::MissingField {
		path: path.to_string(),
	}
}
