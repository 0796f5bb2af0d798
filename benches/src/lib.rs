//! Benchmark helper utilities for atlasplay-rs
//!
//! This module generates synthetic atlas manifests of parameterized frame
//! counts, so the sort and validation benchmarks run without binary test
//! data in the tree. Filenames are emitted in shuffled, zero-pad-mixed
//! order to make the natural sort do real work.

/// Generates a manifest JSON string with `frame_count` 16x16 frames packed
/// into a virtual sheet wide enough to hold them in one row.
pub fn generate_test_manifest(frame_count: usize) -> String {
	let sheet_w = (frame_count as u32).max(1) * 16;
	let mut frames = Vec::with_capacity(frame_count);
	for index in 0..frame_count {
		// Mix padded and unpadded digits, walking the range backwards so
		// manifest order is far from sorted order.
		let n = frame_count - 1 - index;
		let name = if n % 3 == 0 {
			format!("sprite_{n:04}.png")
		} else {
			format!("sprite_{n}.png")
		};
		frames.push(format!(
			r#"{{
				"filename": "{name}",
				"rotated": false,
				"trimmed": false,
				"sourceSize": {{"w": 16, "h": 16}},
				"frame": {{"x": {x}, "y": 0, "w": 16, "h": 16}}
			}}"#,
			x = index as u32 * 16,
		));
	}
	format!(
		r#"{{
			"textures": [{{
				"image": "sprites.png",
				"format": "RGBA8888",
				"size": {{"w": {sheet_w}, "h": 16}},
				"scale": 1,
				"frames": [{}]
			}}]
		}}"#,
		frames.join(",")
	)
}

/// Generates just the shuffled filename list for sort-only benchmarks.
pub fn generate_test_filenames(count: usize) -> Vec<String> {
	(0..count)
		.map(|index| {
			let n = count - 1 - index;
			if n % 3 == 0 { format!("sprite_{n:04}.png") } else { format!("sprite_{n}.png") }
		})
		.collect()
}
