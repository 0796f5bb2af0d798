//! Notification channel payloads.

use atlasplay_types::atlas::Frame;

/// Read-only frame lookup capability injected into the controller.
///
/// The controller never owns frame data; it resolves the payload of a
/// frame-change notification through this callback and forwards whatever it
/// returns. `None` marks an index outside the caller's known range.
pub type FrameLookup = Box<dyn Fn(usize) -> Option<Frame>>;

/// Events emitted by the playback controller.
///
/// Every frame-affecting operation emits exactly one [`FrameChanged`]
/// carrying the new index and the looked-up frame data. Frame changes are
/// level-triggered: re-setting the current index on a valid sequence still
/// notifies.
///
/// [`FrameChanged`]: PlayerEvent::FrameChanged
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerEvent {
	/// The current frame index changed (or was re-asserted)
	FrameChanged {
		/// New current frame index
		index: usize,
		/// Frame data from the injected lookup; `None` when the index is
		/// outside the lookup's range
		frame: Option<Frame>,
	},

	/// Playback started or stopped
	PlayStateChanged {
		/// `true` after `play()`, `false` after `pause()`
		playing: bool,
	},

	/// The frame rate changed
	FrameRateChanged {
		/// New rate in frames per second
		fps: u32,
	},
}
