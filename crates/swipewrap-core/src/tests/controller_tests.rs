use super::*;

use crate::{CarouselBuilder, CarouselError, TransitionSpec};
use std::convert::Infallible;

#[derive(Default)]
struct Recorder {
    commands: Vec<(f32, bool)>,
}

impl OffsetRenderer for Recorder {
    type Error = Infallible;

    fn set_offset(&mut self, offset: f32, animated: bool) -> Result<(), Self::Error> {
        self.commands.push((offset, animated));
        Ok(())
    }
}

/// Renderer that refuses every command.
struct Broken;

impl OffsetRenderer for Broken {
    type Error = &'static str;

    fn set_offset(&mut self, _offset: f32, _animated: bool) -> Result<(), Self::Error> {
        Err("surface gone")
    }
}

fn carousel(slides: usize, width: f32) -> CarouselController<Recorder> {
    let mut controller = CarouselBuilder::new(slides, width)
        .build(Recorder::default())
        .expect("valid carousel");
    controller.renderer_mut().commands.clear();
    controller
}

fn last_command(controller: &CarouselController<Recorder>) -> (f32, bool) {
    *controller
        .renderer()
        .commands
        .last()
        .expect("renderer received a command")
}

#[test]
fn build_aligns_first_real_slide_instantly() {
    let controller = CarouselBuilder::new(6, 300.0)
        .build(Recorder::default())
        .expect("valid carousel");
    assert_eq!(controller.current_index(), 1);
    assert_eq!(controller.current_slide(), 0);
    assert!(controller.gestures_enabled());
    assert_eq!(controller.renderer().commands, vec![(-300.0, false)]);
}

#[test]
fn build_rejects_invalid_configuration() {
    assert_eq!(
        CarouselBuilder::new(2, 300.0).build(Recorder::default()).err(),
        Some(CarouselError::TooFewSlides { count: 2 })
    );
    assert_eq!(
        CarouselBuilder::new(6, 0.0).build(Recorder::default()).err(),
        Some(CarouselError::InvalidViewportWidth { width: 0.0 })
    );
    assert!(matches!(
        CarouselBuilder::new(6, f32::NAN).build(Recorder::default()),
        Err(CarouselError::InvalidViewportWidth { .. })
    ));
    assert_eq!(
        CarouselBuilder::new(6, 300.0)
            .with_swipe_threshold(-1.0)
            .build(Recorder::default())
            .err(),
        Some(CarouselError::InvalidSwipeThreshold { threshold: -1.0 })
    );
}

#[test]
fn build_survives_failing_initial_placement() {
    let controller = CarouselBuilder::new(6, 300.0)
        .build(Broken)
        .expect("placement failure is not fatal");
    assert_eq!(controller.current_index(), 1);
}

#[test]
fn drag_follows_finger_without_animation() {
    let mut controller = carousel(6, 300.0);
    controller.on_gesture_start(100.0);
    assert_eq!(controller.drag_origin(), 100.0);
    assert_eq!(controller.phase(), GesturePhase::Idle);

    let response = controller.on_gesture_move(50.0).unwrap();
    assert!(response.is_handled());
    assert_eq!(controller.phase(), GesturePhase::Dragging);
    assert_eq!(last_command(&controller), (-350.0, false));

    // Overscroll past the leading sentinel is not clamped.
    controller.on_gesture_move(900.0).unwrap();
    assert_eq!(last_command(&controller), (500.0, false));
}

#[test]
fn release_at_threshold_snaps_back() {
    let mut controller = carousel(6, 300.0);
    controller.on_gesture_start(100.0);
    controller.on_gesture_move(50.0).unwrap();
    controller.on_gesture_end(250.0).unwrap();

    assert_eq!(controller.current_index(), 1);
    assert_eq!(last_command(&controller), (-300.0, true));
    assert!(!controller.gestures_enabled());
    assert_eq!(controller.phase(), GesturePhase::Snapping);
}

#[test]
fn release_just_past_threshold_changes_slide_in_both_directions() {
    let mut controller = carousel(6, 300.0);
    controller.on_gesture_start(0.0);
    controller.on_gesture_end(-151.0).unwrap();
    assert_eq!(controller.current_index(), 2);
    controller.on_transition_complete().unwrap();

    controller.on_gesture_start(0.0);
    controller.on_gesture_end(151.0).unwrap();
    assert_eq!(controller.current_index(), 1);

    controller.on_transition_complete().unwrap();
    controller.on_gesture_start(0.0);
    controller.on_gesture_move(-150.0).unwrap();
    controller.on_gesture_end(-150.0).unwrap();
    assert_eq!(controller.current_index(), 1);
}

#[test]
fn left_swipe_advances_and_locks_until_transition_completes() {
    let mut controller = carousel(6, 300.0);
    controller.on_gesture_start(300.0);
    controller.on_gesture_end(130.0).unwrap();

    assert_eq!(controller.current_index(), 2);
    assert_eq!(last_command(&controller), (-600.0, true));
    assert!(!controller.gestures_enabled());

    controller.on_transition_complete().unwrap();
    assert!(controller.gestures_enabled());
    assert_eq!(controller.current_index(), 2);
    assert_eq!(last_command(&controller), (-600.0, false));
}

#[test]
fn events_while_snapping_change_nothing() {
    let mut controller = carousel(6, 300.0);
    controller.on_gesture_start(300.0);
    controller.on_gesture_end(0.0).unwrap();
    let commands_before = controller.renderer().commands.len();

    assert_eq!(
        controller.on_gesture_move(10.0).unwrap(),
        GestureResponse::Dropped
    );
    assert_eq!(
        controller.on_gesture_end(-1000.0).unwrap(),
        GestureResponse::Dropped
    );
    assert_eq!(
        controller.on_gesture_cancel().unwrap(),
        GestureResponse::Dropped
    );

    assert_eq!(controller.current_index(), 2);
    assert_eq!(controller.phase(), GesturePhase::Snapping);
    assert_eq!(controller.renderer().commands.len(), commands_before);
}

#[test]
fn start_while_snapping_still_records_origin() {
    let mut controller = carousel(6, 300.0);
    controller.on_gesture_start(300.0);
    controller.on_gesture_end(0.0).unwrap();

    controller.on_gesture_start(42.0);
    assert_eq!(controller.drag_origin(), 42.0);
    assert!(!controller.gestures_enabled());

    controller.on_transition_complete().unwrap();
    controller.on_gesture_move(52.0).unwrap();
    assert_eq!(last_command(&controller), (-590.0, false));
}

#[test]
fn swiping_right_from_first_slide_wraps_to_last_real_slide() {
    let mut controller = carousel(6, 300.0);
    controller.on_gesture_start(0.0);
    controller.on_gesture_end(200.0).unwrap();
    assert_eq!(controller.current_index(), 0);
    assert_eq!(last_command(&controller), (0.0, true));

    controller.on_transition_complete().unwrap();
    assert_eq!(controller.current_index(), 4);
    assert_eq!(controller.current_slide(), 3);
    assert_eq!(last_command(&controller), (-1200.0, false));
    assert!(controller.gestures_enabled());
}

#[test]
fn swiping_left_from_last_slide_wraps_to_first_real_slide() {
    let mut controller = carousel(6, 300.0);
    for _ in 0..4 {
        controller.on_gesture_start(400.0);
        controller.on_gesture_end(0.0).unwrap();
        controller.on_transition_complete().unwrap();
    }
    // Four real slides: the fourth swipe lands on the trailing sentinel.
    assert_eq!(controller.current_index(), 1);
    assert_eq!(last_command(&controller), (-300.0, false));
}

#[test]
fn transition_complete_is_idempotent_on_real_slides() {
    let mut controller = carousel(6, 300.0);
    controller.on_gesture_start(300.0);
    controller.on_gesture_end(0.0).unwrap();

    controller.on_transition_complete().unwrap();
    assert_eq!(controller.current_index(), 2);
    assert!(controller.gestures_enabled());

    controller.on_transition_complete().unwrap();
    assert_eq!(controller.current_index(), 2);
    assert!(controller.gestures_enabled());
}

#[test]
fn index_stays_in_real_range_after_every_settle() {
    let mut controller = carousel(5, 320.0);
    let strip = controller.strip();
    let swipes = [-400.0, 400.0, 400.0, 400.0, -400.0, -400.0, -400.0, -400.0, 10.0];
    for delta in swipes {
        controller.on_gesture_start(500.0);
        controller.on_gesture_move(500.0 + delta / 2.0).unwrap();
        controller.on_gesture_end(500.0 + delta).unwrap();
        assert!(strip.contains(controller.current_index()));
        controller.on_transition_complete().unwrap();
        let index = controller.current_index();
        assert!(
            (strip.first_real()..=strip.last_real()).contains(&index),
            "index {index} escaped the real range"
        );
    }
}

#[test]
fn cancel_snaps_back_without_changing_slide() {
    let mut controller = carousel(6, 300.0);
    controller.on_gesture_start(300.0);
    controller.on_gesture_move(0.0).unwrap();
    controller.on_gesture_cancel().unwrap();

    assert_eq!(controller.current_index(), 1);
    assert_eq!(last_command(&controller), (-300.0, true));
    assert!(!controller.gestures_enabled());

    controller.on_transition_complete().unwrap();
    assert!(controller.gestures_enabled());
}

#[test]
fn custom_threshold_is_honoured() {
    let mut controller = CarouselBuilder::new(6, 300.0)
        .with_swipe_threshold(40.0)
        .with_transition(TransitionSpec::linear(200))
        .build(Recorder::default())
        .unwrap();
    controller.on_gesture_start(100.0);
    controller.on_gesture_end(59.0).unwrap();
    assert_eq!(controller.current_index(), 2);
    assert_eq!(controller.settings().transition.duration_millis, 200);
}

#[test]
fn renderer_failure_does_not_lock_gestures() {
    let mut controller = CarouselBuilder::new(6, 300.0).build(Broken).unwrap();
    controller.on_gesture_start(300.0);
    assert_eq!(controller.on_gesture_end(0.0), Err("surface gone"));
    assert!(controller.gestures_enabled());
    // The strip never moved, so neither does the slide.
    assert_eq!(controller.current_index(), 1);
    assert_eq!(controller.on_transition_complete(), Err("surface gone"));
    assert!(controller.gestures_enabled());
}

#[test]
fn tap_without_move_settles_without_locking() {
    let mut controller = carousel(6, 300.0);
    controller.on_gesture_start(120.0);
    let response = controller.on_gesture_end(120.0).unwrap();

    assert!(response.is_handled());
    assert_eq!(controller.current_index(), 1);
    assert!(controller.gestures_enabled());
    assert_eq!(controller.phase(), GesturePhase::Idle);
    assert_eq!(controller.renderer().commands, vec![(-300.0, false)]);

    // The next real swipe still animates.
    controller.on_gesture_start(300.0);
    controller.on_gesture_end(0.0).unwrap();
    assert_eq!(last_command(&controller), (-600.0, true));
    assert!(!controller.gestures_enabled());
}

#[test]
fn release_back_at_origin_after_drag_still_animates() {
    let mut controller = carousel(6, 300.0);
    controller.on_gesture_start(120.0);
    controller.on_gesture_move(60.0).unwrap();
    controller.on_gesture_end(120.0).unwrap();

    assert_eq!(last_command(&controller), (-300.0, true));
    assert!(!controller.gestures_enabled());
}

#[test]
fn cancel_without_move_settles_without_locking() {
    let mut controller = carousel(6, 300.0);
    controller.on_gesture_start(50.0);
    controller.on_gesture_cancel().unwrap();
    assert!(controller.gestures_enabled());
    assert_eq!(last_command(&controller), (-300.0, false));
}

#[test]
fn zero_duration_transition_snaps_instantly_and_wraps() {
    let mut controller = CarouselBuilder::new(6, 300.0)
        .with_transition(TransitionSpec::linear(0))
        .build(Recorder::default())
        .unwrap();

    controller.on_gesture_start(0.0);
    controller.on_gesture_end(200.0).unwrap();
    assert_eq!(controller.current_index(), 4);
    assert!(controller.gestures_enabled());
    assert_eq!(last_command(&controller), (-1200.0, false));
    assert!(controller.renderer().commands.iter().all(|(_, animated)| !animated));
}
