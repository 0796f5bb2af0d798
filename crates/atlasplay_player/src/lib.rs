//! Playback runtime for `atlasplay-rs`.
//!
//! This crate drives a scrubbable, playable cursor over a loaded frame
//! sequence. The [`PlayerController`] owns the playback state machine and
//! nothing else: frame data arrives through an injected read-only lookup,
//! timing arrives through an injected [`Scheduler`], and consumers observe
//! the controller through a subscription channel instead of being called
//! into directly.
//!
//! # Architecture
//!
//! - [`controller`] — the play/pause/stop/step/scrub state machine.
//! - [`schedule`] — the cancellable repeating-schedule abstraction used by
//!   `play()`, plus the single-threaded [`ManualScheduler`].
//! - [`event`] — the notification channel payloads.
//! - [`stage`] — the render-target adapter mapping frame-change events to
//!   display placements.
//!
//! # Examples
//!
//! ```
//! use atlasplay_player::{ManualScheduler, PlayerController};
//!
//! let scheduler = ManualScheduler::new();
//! let mut player = PlayerController::new(Box::new(scheduler.clone()), Box::new(|_| None));
//!
//! player.initialize(4);
//! player.play();
//! assert!(player.is_playing());
//!
//! // The host pumps ticks at the scheduled period.
//! player.tick();
//! assert_eq!(player.current_frame(), 1);
//! ```

pub mod controller;
pub mod event;
pub mod schedule;
pub mod stage;

pub use controller::{PlaybackState, PlayerController};
pub use event::{FrameLookup, PlayerEvent};
pub use schedule::{ManualScheduler, ScheduleHandle, Scheduler};
pub use stage::Stage;
