//! Geometry of a sentinel-padded slide strip.
//!
//! The strip is laid out as `[last', 1, 2, ..., n, first']` where the two
//! primed slides are duplicates of the real last and first slides. Landing
//! on either duplicate is indistinguishable from landing on the real slide,
//! which lets the controller jump back to the real one without the user
//! noticing.

use crate::{CarouselError, FIRST_REAL_INDEX, MIN_SLIDE_COUNT};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlideStrip {
    len: usize,
}

impl SlideStrip {
    /// Describes a strip of `len` slides, sentinels included.
    pub fn new(len: usize) -> Result<Self, CarouselError> {
        if len < MIN_SLIDE_COUNT {
            return Err(CarouselError::TooFewSlides { count: len });
        }
        Ok(Self { len })
    }

    /// Total number of slides including both sentinels.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of real (non-duplicate) slides.
    pub fn real_len(&self) -> usize {
        self.len - 2
    }

    pub fn leading_sentinel(&self) -> usize {
        0
    }

    pub fn trailing_sentinel(&self) -> usize {
        self.len - 1
    }

    pub fn first_real(&self) -> usize {
        FIRST_REAL_INDEX
    }

    pub fn last_real(&self) -> usize {
        self.len - 2
    }

    pub fn contains(&self, index: usize) -> bool {
        index < self.len
    }

    pub fn is_sentinel(&self, index: usize) -> bool {
        index == self.leading_sentinel() || index == self.trailing_sentinel()
    }

    /// Maps a sentinel index onto the real slide it duplicates.
    ///
    /// Real indices are returned unchanged.
    pub fn wrap(&self, index: usize) -> usize {
        if index == self.leading_sentinel() {
            self.last_real()
        } else if index == self.trailing_sentinel() {
            self.first_real()
        } else {
            index
        }
    }

    /// Zero-based position among the real slides of whatever is shown at
    /// `index`. Sentinels report the slide they duplicate.
    pub fn real_position(&self, index: usize) -> usize {
        self.wrap(index) - FIRST_REAL_INDEX
    }

    /// Horizontal translation that aligns slide `index` with the viewport.
    pub fn offset_for(&self, index: usize, viewport_width: f32) -> f32 {
        -(index as f32 * viewport_width)
    }
}
