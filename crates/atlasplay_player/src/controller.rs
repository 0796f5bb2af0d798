//! Playback controller state machine.
//!
//! The controller owns the playback state and nothing else. Frame data is
//! resolved through the injected [`FrameLookup`]; timing goes through the
//! injected [`Scheduler`]; consumers subscribe to [`PlayerEvent`]s. All
//! guard conditions are silent no-ops: this surface is driven by
//! interactive input, where out-of-range requests are ordinary, so nothing
//! here returns an error.

use std::time::Duration;

use crate::event::{FrameLookup, PlayerEvent};
use crate::schedule::{ScheduleHandle, Scheduler};

/// Valid frame-rate range in frames per second.
pub const FRAME_RATE_RANGE: std::ops::RangeInclusive<u32> = 1..=60;

/// Frame rate a fresh controller starts with.
pub const DEFAULT_FRAME_RATE: u32 = 12;

/// Mutable playback state, owned exclusively by [`PlayerController`].
///
/// `current_frame` stays in `0..total_frames` whenever `total_frames > 0`.
/// A controller with `total_frames == 0` is idle: every navigation request
/// is a no-op until [`PlayerController::initialize`] is called.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackState {
	/// Current frame index
	pub current_frame: usize,
	/// Number of frames in the active sequence
	pub total_frames: usize,
	/// Whether an advance schedule is active
	pub is_playing: bool,
	/// Automatic advance rate in frames per second
	pub frame_rate: u32,
	/// Whether automatic advance wraps at the last frame
	pub is_looping: bool,
}

impl Default for PlaybackState {
	fn default() -> Self {
		Self {
			current_frame: 0,
			total_frames: 0,
			is_playing: false,
			frame_rate: DEFAULT_FRAME_RATE,
			is_looping: false,
		}
	}
}

/// State machine over a frame index: play, pause, stop, step, scrub.
///
/// # Timing contract
///
/// `play()` requests one repeating schedule at the frame period from the
/// injected [`Scheduler`]; the host delivers each elapsed period by calling
/// [`tick`](Self::tick). At most one schedule is active per controller, and
/// `pause()` cancels it synchronously. `tick()` re-checks the playing flag
/// so a tick that raced with cancellation advances nothing.
///
/// # Examples
///
/// ```
/// use atlasplay_player::{ManualScheduler, PlayerController};
///
/// let mut player =
///     PlayerController::new(Box::new(ManualScheduler::new()), Box::new(|_| None));
/// player.initialize(3);
///
/// player.next_frame();
/// player.next_frame();
/// assert_eq!(player.current_frame(), 2);
///
/// // Not looping: advancing past the end holds the last frame.
/// player.next_frame();
/// assert_eq!(player.current_frame(), 2);
/// ```
pub struct PlayerController {
	state: PlaybackState,
	lookup: FrameLookup,
	scheduler: Box<dyn Scheduler>,
	schedule: Option<Box<dyn ScheduleHandle>>,
	observers: Vec<Box<dyn FnMut(&PlayerEvent)>>,
}

impl PlayerController {
	/// Creates an idle controller.
	///
	/// `lookup` is the read-only frame capability notifications are
	/// resolved through; the controller never stores frame data itself.
	pub fn new(scheduler: Box<dyn Scheduler>, lookup: FrameLookup) -> Self {
		Self {
			state: PlaybackState::default(),
			lookup,
			scheduler,
			schedule: None,
			observers: Vec::new(),
		}
	}

	/// Subscribes an observer to all controller events.
	///
	/// Observers stay subscribed across `initialize()` and `cleanup()`.
	pub fn subscribe(&mut self, observer: impl FnMut(&PlayerEvent) + 'static) {
		self.observers.push(Box::new(observer));
	}

	/// Resets the controller for a sequence of `total_frames` frames.
	///
	/// Cancels any active schedule, moves to frame 0 and notifies. Safe to
	/// call in any state; `total_frames == 0` parks the controller idle.
	pub fn initialize(&mut self, total_frames: usize) {
		self.pause();
		self.state.total_frames = total_frames;
		self.state.current_frame = 0;
		log::debug!("initialized for {total_frames} frame(s)");
		self.notify_frame();
	}

	/// Returns the controller to its idle default state.
	///
	/// Cancels any active schedule and forgets the sequence length.
	/// Subscribed observers are kept.
	pub fn cleanup(&mut self) {
		if let Some(mut schedule) = self.schedule.take() {
			schedule.cancel();
		}
		self.state = PlaybackState {
			frame_rate: self.state.frame_rate,
			is_looping: self.state.is_looping,
			..PlaybackState::default()
		};
	}

	/// Jumps to frame `index`.
	///
	/// Out-of-range indices are ignored. A valid index always notifies,
	/// including when it equals the current frame.
	pub fn set_frame(&mut self, index: usize) {
		if index >= self.state.total_frames {
			return;
		}
		self.state.current_frame = index;
		self.notify_frame();
	}

	/// Scrubs to the frame nearest to `progress` through the sequence.
	///
	/// `progress` is clamped into `0.0..=1.0`; the index is
	/// `floor(progress * (total - 1))`, so `0.0` is always the first frame
	/// and `1.0` always the last.
	pub fn set_frame_from_progress(&mut self, progress: f64) {
		if self.state.total_frames == 0 {
			return;
		}
		if self.state.total_frames == 1 {
			self.set_frame(0);
			return;
		}
		let progress = progress.clamp(0.0, 1.0);
		let span = (self.state.total_frames - 1) as f64;
		self.set_frame((progress * span).floor() as usize);
	}

	/// Starts automatic advance.
	///
	/// No-op while already playing or when the sequence has one frame or
	/// fewer. Requests a repeating schedule at the current frame period and
	/// notifies the play-state change.
	pub fn play(&mut self) {
		if self.state.is_playing || self.state.total_frames <= 1 {
			return;
		}
		self.state.is_playing = true;
		self.schedule = Some(self.scheduler.schedule_repeating(self.frame_interval()));
		self.emit(PlayerEvent::PlayStateChanged {
			playing: true,
		});
	}

	/// Stops automatic advance, keeping the current frame.
	///
	/// Cancellation is synchronous; no tick delivered after this call will
	/// advance the frame. No-op while not playing.
	pub fn pause(&mut self) {
		if !self.state.is_playing {
			return;
		}
		if let Some(mut schedule) = self.schedule.take() {
			schedule.cancel();
		}
		self.state.is_playing = false;
		self.emit(PlayerEvent::PlayStateChanged {
			playing: false,
		});
	}

	/// Pauses and rewinds to the first frame.
	pub fn stop(&mut self) {
		self.pause();
		self.set_frame(0);
	}

	/// Pauses when playing, plays when paused.
	pub fn toggle_play(&mut self) {
		if self.state.is_playing {
			self.pause();
		} else {
			self.play();
		}
	}

	/// Advances one frame.
	///
	/// At the last frame this wraps to 0 when looping; otherwise it pauses
	/// and leaves the last frame displayed. Looping only gates this
	/// automatic-style forward step, not manual backward steps.
	pub fn next_frame(&mut self) {
		if self.state.total_frames == 0 {
			return;
		}
		let next = self.state.current_frame + 1;
		if next >= self.state.total_frames {
			if self.state.is_looping {
				self.set_frame(0);
			} else {
				self.pause();
			}
		} else {
			self.set_frame(next);
		}
	}

	/// Steps one frame backward, wrapping unconditionally.
	pub fn previous_frame(&mut self) {
		if self.state.total_frames == 0 {
			return;
		}
		let previous = match self.state.current_frame {
			0 => self.state.total_frames - 1,
			current => current - 1,
		};
		self.set_frame(previous);
	}

	/// Jumps to the first frame.
	pub fn go_to_first_frame(&mut self) {
		self.set_frame(0);
	}

	/// Jumps to the last frame.
	pub fn go_to_last_frame(&mut self) {
		if self.state.total_frames > 0 {
			self.set_frame(self.state.total_frames - 1);
		}
	}

	/// Jumps `delta` frames forward (or backward for negative `delta`),
	/// clamped to the valid range.
	pub fn skip_frames(&mut self, delta: i64) {
		if self.state.total_frames == 0 {
			return;
		}
		let last = (self.state.total_frames - 1) as i64;
		let target = (self.state.current_frame as i64 + delta).clamp(0, last);
		self.set_frame(target as usize);
	}

	/// Sets the automatic advance rate in frames per second.
	///
	/// Rates outside [`FRAME_RATE_RANGE`] are ignored. While playing, the
	/// schedule restarts at the new period without resetting the current
	/// frame.
	pub fn set_frame_rate(&mut self, fps: u32) {
		if !FRAME_RATE_RANGE.contains(&fps) {
			return;
		}
		self.state.frame_rate = fps;
		self.emit(PlayerEvent::FrameRateChanged {
			fps,
		});
		if self.state.is_playing {
			if let Some(mut schedule) = self.schedule.take() {
				schedule.cancel();
			}
			self.schedule = Some(self.scheduler.schedule_repeating(self.frame_interval()));
		}
	}

	/// Sets whether automatic advance wraps at the last frame.
	///
	/// Pure flag update; takes effect at the next boundary crossing.
	pub fn set_looping(&mut self, looping: bool) {
		self.state.is_looping = looping;
	}

	/// Delivers one elapsed frame period.
	///
	/// The host calls this once per period of the active schedule. Ticks
	/// arriving after `pause()` are discarded here, so a queued tick that
	/// raced with cancellation is harmless.
	pub fn tick(&mut self) {
		if !self.state.is_playing {
			return;
		}
		self.next_frame();
	}

	/// Returns the period between automatic advances at the current rate.
	pub fn frame_interval(&self) -> Duration {
		Duration::from_secs_f64(1.0 / f64::from(self.state.frame_rate))
	}

	/// Returns the current frame index.
	pub fn current_frame(&self) -> usize {
		self.state.current_frame
	}

	/// Returns the active sequence length.
	pub fn total_frames(&self) -> usize {
		self.state.total_frames
	}

	/// Returns `true` while automatic advance is active.
	pub fn is_playing(&self) -> bool {
		self.state.is_playing
	}

	/// Returns the automatic advance rate in frames per second.
	pub fn frame_rate(&self) -> u32 {
		self.state.frame_rate
	}

	/// Returns `true` when automatic advance wraps at the last frame.
	pub fn is_looping(&self) -> bool {
		self.state.is_looping
	}

	/// Returns a copy of the full playback state.
	pub fn state(&self) -> PlaybackState {
		self.state
	}

	fn notify_frame(&mut self) {
		let index = self.state.current_frame;
		let frame = (self.lookup)(index);
		self.emit(PlayerEvent::FrameChanged {
			index,
			frame,
		});
	}

	fn emit(&mut self, event: PlayerEvent) {
		for observer in &mut self.observers {
			observer(&event);
		}
	}
}

impl std::fmt::Debug for PlayerController {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("PlayerController")
			.field("state", &self.state)
			.field("observers", &self.observers.len())
			.finish_non_exhaustive()
	}
}
