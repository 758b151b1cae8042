//! Shared gesture constants for the swipe carousel.
//!
//! All distances are in logical (CSS) pixels, the same unit the platform
//! reports touch coordinates in.

/// Minimum horizontal travel, in logical pixels, for a released drag to
/// count as a swipe.
///
/// The comparison is strict: a drag of exactly this many pixels snaps back
/// to the slide it started on.
pub const SWIPE_THRESHOLD: f32 = 150.0;

/// Duration of the animated snap after a gesture ends.
pub const SNAP_DURATION_MILLIS: u64 = 500;

/// Index of the first real slide; slide 0 is the leading sentinel.
pub const FIRST_REAL_INDEX: usize = 1;

/// Smallest strip that can wrap: one real slide between two sentinels.
pub const MIN_SLIDE_COUNT: usize = 3;
