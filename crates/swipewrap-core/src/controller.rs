//! Gesture state machine driving the carousel.
//!
//! The controller reacts to four notifications from the host:
//!
//! - gesture start: remembers where the finger went down
//! - gesture move: the strip follows the finger 1:1, without animation
//! - gesture end: decides between the neighbouring slide and a snap-back,
//!   starts the animated snap and locks out further gesture input
//! - transition complete: if the snap landed on a sentinel, jumps instantly
//!   to the real slide it duplicates, then unlocks gesture input
//!
//! The lock is the only concurrency control. Events arriving while a snap is
//! in flight are dropped, never queued. If the platform never reports the
//! end of the transition the carousel stays locked; platforms are expected to
//! always deliver it.

use crate::{CarouselSettings, OffsetRenderer, SlideStrip, FIRST_REAL_INDEX};

/// Where the controller is in the gesture cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GesturePhase {
    /// Resting on a slide and accepting gestures.
    Idle,
    /// A finger is dragging the strip.
    Dragging,
    /// The animated snap is in flight; move, end and cancel are dropped.
    Snapping,
}

/// Whether the controller acted on an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureResponse {
    Handled,
    /// The event arrived while a snap was in flight and was ignored.
    Dropped,
}

impl GestureResponse {
    pub fn is_handled(self) -> bool {
        self == GestureResponse::Handled
    }
}

pub struct CarouselController<R: OffsetRenderer> {
    strip: SlideStrip,
    viewport_width: f32,
    settings: CarouselSettings,
    renderer: R,
    current_index: usize,
    drag_origin: f32,
    phase: GesturePhase,
    /// Offset the renderer last accepted.
    last_offset: Option<f32>,
}

impl<R: OffsetRenderer> CarouselController<R> {
    pub(crate) fn from_parts(
        strip: SlideStrip,
        viewport_width: f32,
        settings: CarouselSettings,
        renderer: R,
    ) -> Self {
        Self {
            strip,
            viewport_width,
            settings,
            renderer,
            current_index: FIRST_REAL_INDEX,
            drag_origin: 0.0,
            phase: GesturePhase::Idle,
            last_offset: None,
        }
    }

    /// Records the drag origin.
    ///
    /// Never guarded: a touch that lands while a snap is in flight still
    /// seeds the origin, although the moves that follow are dropped until
    /// the snap completes.
    pub fn on_gesture_start(&mut self, x: f32) -> GestureResponse {
        self.drag_origin = x;
        log::trace!("gesture start at {x} ({:?})", self.phase);
        GestureResponse::Handled
    }

    /// Makes the strip follow the finger.
    pub fn on_gesture_move(&mut self, x: f32) -> Result<GestureResponse, R::Error> {
        if !self.gestures_enabled() {
            log::trace!("gesture move dropped while snapping");
            return Ok(GestureResponse::Dropped);
        }
        self.phase = GesturePhase::Dragging;
        let offset = self.resting_offset() + (x - self.drag_origin);
        log::trace!("dragging strip to {offset}px");
        self.place(offset, false)?;
        Ok(GestureResponse::Handled)
    }

    /// Settles the gesture on the current slide or one of its neighbours and
    /// starts the animated snap.
    ///
    /// The new index is committed only once the renderer accepted the snap.
    pub fn on_gesture_end(&mut self, x: f32) -> Result<GestureResponse, R::Error> {
        if !self.gestures_enabled() {
            log::trace!("gesture end dropped while snapping");
            return Ok(GestureResponse::Dropped);
        }
        let delta = x - self.drag_origin;
        let target = if delta.abs() > self.settings.swipe_threshold {
            // Moving the finger right reveals the slide on the left.
            let target = if delta > 0.0 {
                self.current_index.saturating_sub(1)
            } else {
                (self.current_index + 1).min(self.strip.trailing_sentinel())
            };
            log::debug!(
                "swipe of {delta}px: slide {} -> {target}",
                self.current_index
            );
            target
        } else {
            log::debug!("drag of {delta}px below threshold, snapping back");
            self.current_index
        };
        self.snap_to(target)?;
        Ok(GestureResponse::Handled)
    }

    /// Abandons the gesture and snaps back to the current slide.
    ///
    /// Used when the platform cancels the touch sequence. Behaves like a
    /// sub-threshold release: the index is kept and the usual snap cycle
    /// runs.
    pub fn on_gesture_cancel(&mut self) -> Result<GestureResponse, R::Error> {
        if !self.gestures_enabled() {
            log::trace!("gesture cancel dropped while snapping");
            return Ok(GestureResponse::Dropped);
        }
        log::debug!("gesture cancelled, snapping back to {}", self.current_index);
        self.snap_to(self.current_index)?;
        Ok(GestureResponse::Handled)
    }

    /// Finishes a snap: swaps a sentinel for its real slide and unlocks input.
    ///
    /// Safe to call when no snap is in flight; it then just re-aligns the
    /// current slide and leaves input enabled.
    pub fn on_transition_complete(&mut self) -> Result<(), R::Error> {
        let wrapped = self.strip.wrap(self.current_index);
        if wrapped != self.current_index {
            log::debug!(
                "landed on sentinel {}, jumping to real slide {wrapped}",
                self.current_index
            );
            self.current_index = wrapped;
        }
        self.phase = GesturePhase::Idle;
        self.place(self.resting_offset(), false)
    }

    /// Moves the strip to slide `index` and locks input until the platform
    /// reports the end of the transition.
    ///
    /// A snap that would not visibly move the strip (a tap, or a zero
    /// duration transition) starts no platform transition, so no completion
    /// would ever arrive. Those settle immediately instead.
    fn snap_to(&mut self, index: usize) -> Result<(), R::Error> {
        let target = self.strip.offset_for(index, self.viewport_width);
        if self.settings.transition.duration_millis == 0 || self.last_offset == Some(target) {
            let settled = self.strip.wrap(index);
            log::debug!("snap to slide {index} needs no animation, settling on {settled}");
            self.phase = GesturePhase::Idle;
            self.place(self.strip.offset_for(settled, self.viewport_width), false)?;
            self.current_index = settled;
            return Ok(());
        }
        self.place(target, true)?;
        self.current_index = index;
        self.phase = GesturePhase::Snapping;
        Ok(())
    }

    fn place(&mut self, offset: f32, animated: bool) -> Result<(), R::Error> {
        self.renderer.set_offset(offset, animated)?;
        self.last_offset = Some(offset);
        Ok(())
    }

    pub(crate) fn place_at_rest(&mut self) -> Result<(), R::Error> {
        self.place(self.resting_offset(), false)
    }

    /// Index into the strip of the slide aligned with the viewport,
    /// sentinels included.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Zero-based position of the visible real slide.
    pub fn current_slide(&self) -> usize {
        self.strip.real_position(self.current_index)
    }

    pub fn gestures_enabled(&self) -> bool {
        self.phase != GesturePhase::Snapping
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    pub fn drag_origin(&self) -> f32 {
        self.drag_origin
    }

    pub fn strip(&self) -> SlideStrip {
        self.strip
    }

    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    pub fn settings(&self) -> &CarouselSettings {
        &self.settings
    }

    /// Offset that aligns the current slide with the viewport.
    pub fn resting_offset(&self) -> f32 {
        self.strip.offset_for(self.current_index, self.viewport_width)
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
