//! Timing of the animated snap.
//!
//! The platform performs the actual animation (a CSS transition on the web),
//! so this module only describes it: which curve, how long, and how to spell
//! that for the platform.

use crate::SNAP_DURATION_MILLIS;

/// Easing curves, each expressed as cubic-bezier control points.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Easing {
    /// Linear interpolation (no easing).
    Linear,
    /// The CSS default `ease` curve.
    #[default]
    Ease,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Material "standard" curve: fast out, slow in.
    FastOutSlowIn,
}

impl Easing {
    /// Control points `(x1, y1, x2, y2)` of the curve.
    pub fn control_points(&self) -> (f32, f32, f32, f32) {
        match self {
            Easing::Linear => (0.0, 0.0, 1.0, 1.0),
            Easing::Ease => (0.25, 0.1, 0.25, 1.0),
            Easing::EaseIn => (0.42, 0.0, 1.0, 1.0),
            Easing::EaseOut => (0.0, 0.0, 0.58, 1.0),
            Easing::EaseInOut => (0.42, 0.0, 0.58, 1.0),
            Easing::FastOutSlowIn => (0.4, 0.0, 0.2, 1.0),
        }
    }

    /// CSS `transition-timing-function` value for this curve.
    pub fn css(&self) -> String {
        match self {
            Easing::Linear => "linear".into(),
            Easing::Ease => "ease".into(),
            Easing::EaseIn => "ease-in".into(),
            Easing::EaseOut => "ease-out".into(),
            Easing::EaseInOut => "ease-in-out".into(),
            Easing::FastOutSlowIn => {
                let (x1, y1, x2, y2) = self.control_points();
                format!("cubic-bezier({x1}, {y1}, {x2}, {y2})")
            }
        }
    }
}

/// Duration and easing of the animated snap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionSpec {
    pub duration_millis: u64,
    pub easing: Easing,
}

impl Default for TransitionSpec {
    fn default() -> Self {
        Self::tween(SNAP_DURATION_MILLIS, Easing::default())
    }
}

impl TransitionSpec {
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
        }
    }

    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::Linear)
    }

    /// CSS `transition` shorthand for `property`, e.g. `transform 500ms ease`.
    pub fn css_transition(&self, property: &str) -> String {
        format!("{property} {}ms {}", self.duration_millis, self.easing.css())
    }
}
