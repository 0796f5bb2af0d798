//! Numeric-aware filename ordering.
//!
//! Frame indices are assigned by sorting filenames with [`natural_cmp`]:
//! runs of ASCII digits compare by integer value, everything else compares
//! byte-wise. This makes `frame_9` sort before `frame_10`, which plain
//! lexicographic ordering gets wrong.

use std::cmp::Ordering;

/// Compares two filenames with embedded digit runs ordered numerically.
///
/// Digit runs are compared at arbitrary length without parsing into a fixed
/// integer width: leading zeros are stripped, then a longer run of
/// significant digits is the larger number, and equal-length runs compare
/// digit by digit. Numerically equal runs with different zero-padding
/// (`"1"` vs `"01"`) fall back to the shorter-run-first rule so the ordering
/// stays total and deterministic.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use atlasplay_types::atlas::natural_cmp;
///
/// assert_eq!(natural_cmp("frame_9", "frame_10"), Ordering::Less);
/// assert_eq!(natural_cmp("a_1.png", "a_02.png"), Ordering::Less);
/// assert_eq!(natural_cmp("idle", "walk"), Ordering::Less);
/// ```
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
	let a = a.as_bytes();
	let b = b.as_bytes();
	let mut i = 0;
	let mut j = 0;

	while i < a.len() && j < b.len() {
		if a[i].is_ascii_digit() && b[j].is_ascii_digit() {
			let (a_run, a_next) = digit_run(a, i);
			let (b_run, b_next) = digit_run(b, j);
			match compare_digit_runs(a_run, b_run) {
				Ordering::Equal => {
					i = a_next;
					j = b_next;
				}
				unequal => return unequal,
			}
		} else {
			match a[i].cmp(&b[j]) {
				Ordering::Equal => {
					i += 1;
					j += 1;
				}
				unequal => return unequal,
			}
		}
	}

	(a.len() - i).cmp(&(b.len() - j))
}

/// Returns the digit run starting at `start` and the index just past it.
fn digit_run(bytes: &[u8], start: usize) -> (&[u8], usize) {
	let mut end = start;
	while end < bytes.len() && bytes[end].is_ascii_digit() {
		end += 1;
	}
	(&bytes[start..end], end)
}

/// Compares two digit runs by numeric value, then by padding length.
fn compare_digit_runs(a: &[u8], b: &[u8]) -> Ordering {
	let a_sig = strip_leading_zeros(a);
	let b_sig = strip_leading_zeros(b);

	// More significant digits means a strictly larger number.
	match a_sig.len().cmp(&b_sig.len()) {
		Ordering::Equal => {}
		unequal => return unequal,
	}
	match a_sig.cmp(b_sig) {
		Ordering::Equal => {}
		unequal => return unequal,
	}

	// Same value; tie-break on total run length ("1" before "01").
	a.len().cmp(&b.len())
}

fn strip_leading_zeros(run: &[u8]) -> &[u8] {
	let first = run.iter().position(|&d| d != b'0').unwrap_or(run.len());
	&run[first..]
}
