//! Cancellable repeating-schedule abstraction.
//!
//! `play()` needs a repeating callback at the frame period, but the core
//! never owns a timer primitive: it requests a schedule through the
//! injected [`Scheduler`] and the host delivers each tick by calling
//! [`PlayerController::tick`](crate::PlayerController::tick). Cancellation
//! is synchronous and idempotent, so pausing stops further advancement even
//! if the host already queued a tick; the controller re-checks its playing
//! flag on every tick as a safety net on top of that.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Handle to one active repeating schedule.
pub trait ScheduleHandle {
	/// Cancels the schedule.
	///
	/// Must take effect synchronously and be safe to call more than once.
	fn cancel(&mut self);
}

/// Source of repeating schedules.
///
/// The controller holds at most one active handle at a time; it cancels the
/// previous schedule before requesting a new one (rate changes, pause,
/// re-initialization).
pub trait Scheduler {
	/// Requests a repeating schedule at `period`.
	fn schedule_repeating(&mut self, period: Duration) -> Box<dyn ScheduleHandle>;
}

#[derive(Debug, Default)]
struct ManualState {
	next_id: u64,
	active: Vec<(u64, Duration)>,
}

/// Single-threaded scheduler for hosts that pump ticks themselves.
///
/// Keeps no thread or timer; it only records which schedule is active and
/// at what period. The host reads [`current_period`](Self::current_period)
/// and calls the controller's `tick()` at that cadence (or as fast as a
/// simulation wants). Cloning shares the underlying state, which is how
/// tests probe the schedule from outside the controller.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use atlasplay_player::{ManualScheduler, ScheduleHandle, Scheduler};
///
/// let mut scheduler = ManualScheduler::new();
/// let probe = scheduler.clone();
///
/// let mut handle = scheduler.schedule_repeating(Duration::from_millis(100));
/// assert_eq!(probe.active_count(), 1);
///
/// handle.cancel();
/// handle.cancel(); // idempotent
/// assert_eq!(probe.active_count(), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
	state: Rc<RefCell<ManualState>>,
}

impl ManualScheduler {
	/// Creates a new scheduler with no active schedules.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the number of active schedules.
	pub fn active_count(&self) -> usize {
		self.state.borrow().active.len()
	}

	/// Returns the period of the most recent active schedule, if any.
	pub fn current_period(&self) -> Option<Duration> {
		self.state.borrow().active.last().map(|(_, period)| *period)
	}
}

impl Scheduler for ManualScheduler {
	fn schedule_repeating(&mut self, period: Duration) -> Box<dyn ScheduleHandle> {
		let id = {
			let mut state = self.state.borrow_mut();
			let id = state.next_id;
			state.next_id += 1;
			state.active.push((id, period));
			id
		};
		Box::new(ManualHandle {
			state: Rc::clone(&self.state),
			id,
			cancelled: false,
		})
	}
}

struct ManualHandle {
	state: Rc<RefCell<ManualState>>,
	id: u64,
	cancelled: bool,
}

impl ScheduleHandle for ManualHandle {
	fn cancel(&mut self) {
		if self.cancelled {
			return;
		}
		self.cancelled = true;
		self.state.borrow_mut().active.retain(|(id, _)| *id != self.id);
	}
}

// A dropped handle can no longer be ticked against, so treat drop as cancel.
impl Drop for ManualHandle {
	fn drop(&mut self) {
		self.cancel();
	}
}
