//! Robot-style driver for headless carousel tests.
//!
//! The robot plays the part of both the finger and the platform: it feeds
//! touch coordinates into the controller and, when asked, reports the end of
//! the snap transition the way a browser fires `transitionend`.
//!
//! # Example
//!
//! ```
//! use swipewrap_testing::CarouselRobot;
//!
//! let mut robot = CarouselRobot::new(6, 300.0);
//! robot.swipe(300.0, 100.0);
//! assert_eq!(robot.controller().current_index(), 2);
//!
//! robot.finish_transition();
//! assert!(robot.controller().gestures_enabled());
//! ```

use crate::{OffsetCommand, RecordingRenderer};
use swipewrap_core::{CarouselBuilder, CarouselController, CarouselSettings, GestureResponse};

/// Number of intermediate touch moves generated by [`CarouselRobot::swipe`].
const SWIPE_STEPS: usize = 10;

pub struct CarouselRobot {
    controller: CarouselController<RecordingRenderer>,
}

impl CarouselRobot {
    /// Creates a carousel over `slide_count` slides with default settings.
    ///
    /// Panics if the configuration is invalid.
    pub fn new(slide_count: usize, viewport_width: f32) -> Self {
        Self::with_settings(slide_count, viewport_width, CarouselSettings::default())
    }

    pub fn with_settings(
        slide_count: usize,
        viewport_width: f32,
        settings: CarouselSettings,
    ) -> Self {
        let controller = CarouselBuilder::new(slide_count, viewport_width)
            .with_settings(settings)
            .build(RecordingRenderer::new())
            .unwrap_or_else(|err| panic!("invalid carousel under test: {err}"));
        Self { controller }
    }

    pub fn controller(&self) -> &CarouselController<RecordingRenderer> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut CarouselController<RecordingRenderer> {
        &mut self.controller
    }

    pub fn renderer(&self) -> &RecordingRenderer {
        self.controller.renderer()
    }

    /// Drains everything the renderer recorded so far.
    pub fn take_commands(&mut self) -> Vec<OffsetCommand> {
        self.controller.renderer_mut().take()
    }

    /// Puts a finger down at `x`.
    pub fn touch_down(&mut self, x: f32) -> GestureResponse {
        self.controller.on_gesture_start(x)
    }

    /// Moves the finger to `x`.
    pub fn drag_to(&mut self, x: f32) -> GestureResponse {
        match self.controller.on_gesture_move(x) {
            Ok(response) => response,
            Err(never) => match never {},
        }
    }

    /// Lifts the finger at `x`.
    pub fn release_at(&mut self, x: f32) -> GestureResponse {
        match self.controller.on_gesture_end(x) {
            Ok(response) => response,
            Err(never) => match never {},
        }
    }

    /// Platform-side cancellation of the touch sequence.
    pub fn cancel(&mut self) -> GestureResponse {
        match self.controller.on_gesture_cancel() {
            Ok(response) => response,
            Err(never) => match never {},
        }
    }

    /// Full touch sequence from `from` to `to` with intermediate moves.
    ///
    /// Returns the response to the release.
    pub fn swipe(&mut self, from: f32, to: f32) -> GestureResponse {
        self.touch_down(from);
        for step in 1..=SWIPE_STEPS {
            let t = step as f32 / SWIPE_STEPS as f32;
            self.drag_to(from + (to - from) * t);
        }
        self.release_at(to)
    }

    /// Reports the end of the snap transition.
    pub fn finish_transition(&mut self) {
        match self.controller.on_transition_complete() {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }

    /// Swipes and lets the snap finish.
    pub fn swipe_and_settle(&mut self, from: f32, to: f32) -> GestureResponse {
        let response = self.swipe(from, to);
        self.finish_transition();
        response
    }
}
