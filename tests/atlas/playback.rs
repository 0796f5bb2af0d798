//! Controller behavior over a real loaded sequence.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use atlasplay_rs::prelude::*;

use crate::fixture;

#[test]
fn scripted_playback_advances_and_pauses_at_the_end() {
	let _guard = fixture::handle_lock();
	let atlas = fixture::walk_atlas();
	let (mut player, scheduler) = fixture::player_for(&atlas);

	player.set_frame_rate(10);
	player.play();
	assert_eq!(scheduler.current_period(), Some(Duration::from_millis(100)));

	// 0 -> 1 -> 2 -> 3 -> 4, then the boundary pauses without moving.
	for expected in [1usize, 2, 3, 4] {
		player.tick();
		assert_eq!(player.current_frame(), expected);
	}
	player.tick();
	assert_eq!(player.current_frame(), 4);
	assert!(!player.is_playing());
	assert_eq!(scheduler.active_count(), 0);
}

#[test]
fn looping_playback_wraps_forever() {
	let _guard = fixture::handle_lock();
	let atlas = fixture::walk_atlas();
	let (mut player, _scheduler) = fixture::player_for(&atlas);

	player.set_looping(true);
	player.play();
	let mut seen = Vec::new();
	for _ in 0..12 {
		player.tick();
		seen.push(player.current_frame());
	}
	assert_eq!(seen, vec![1, 2, 3, 4, 0, 1, 2, 3, 4, 0, 1, 2]);
	assert!(player.is_playing());
}

#[test]
fn scrubbing_maps_progress_onto_the_sequence() {
	let _guard = fixture::handle_lock();
	let atlas = fixture::walk_atlas();
	let (mut player, _scheduler) = fixture::player_for(&atlas);

	player.set_frame_from_progress(0.0);
	assert_eq!(player.current_frame(), 0);
	player.set_frame_from_progress(1.0);
	assert_eq!(player.current_frame(), 4);
	player.set_frame_from_progress(0.5);
	assert_eq!(player.current_frame(), 2);
}

#[test]
fn notifications_carry_looked_up_frames() {
	let _guard = fixture::handle_lock();
	let atlas = fixture::walk_atlas();
	let (mut player, _scheduler) = fixture::player_for(&atlas);

	let seen: Rc<RefCell<Vec<(usize, Option<String>)>>> = Rc::new(RefCell::new(Vec::new()));
	let sink = Rc::clone(&seen);
	player.subscribe(move |event| {
		if let PlayerEvent::FrameChanged {
			index,
			frame,
		} = event
		{
			sink.borrow_mut().push((*index, frame.as_ref().map(|f| f.filename.clone())));
		}
	});

	player.next_frame();
	player.go_to_last_frame();
	assert_eq!(
		*seen.borrow(),
		vec![
			(1, Some("walk_2.png".to_string())),
			(4, Some("walk_10.png".to_string())),
		]
	);
}

#[test]
fn switching_atlases_reinitializes_cleanly() {
	let _guard = fixture::handle_lock();
	let atlas = fixture::walk_atlas();
	let (mut player, scheduler) = fixture::player_for(&atlas);

	player.play();
	player.tick();
	assert!(player.is_playing());

	// A new sequence arrives: the active schedule must be gone before any
	// frame of the new list is exposed.
	let two = [fixture::plain_frame("b_1.png", 0, 0), fixture::plain_frame("b_2.png", 16, 0)];
	let json = fixture::manifest(32, 16, &two);
	let next = Atlas::load(json.as_bytes(), &fixture::png_bytes(32, 16)).expect("second atlas");
	player.initialize(next.frame_count());

	assert_eq!(scheduler.active_count(), 0);
	assert!(!player.is_playing());
	assert_eq!(player.current_frame(), 0);
	assert_eq!(player.total_frames(), 2);
}
