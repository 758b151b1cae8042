//! Carousel configuration and construction.

use crate::{
    CarouselController, CarouselError, OffsetRenderer, SlideStrip, TransitionSpec, SWIPE_THRESHOLD,
};

/// Tunables of a carousel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselSettings {
    /// Released drags must travel strictly further than this to change slide.
    pub swipe_threshold: f32,
    /// Timing of the animated snap. Platforms use it to configure their
    /// transition; the controller itself never waits on it.
    pub transition: TransitionSpec,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            swipe_threshold: SWIPE_THRESHOLD,
            transition: TransitionSpec::default(),
        }
    }
}

impl CarouselSettings {
    pub(crate) fn validate(&self) -> Result<(), CarouselError> {
        if !self.swipe_threshold.is_finite() || self.swipe_threshold < 0.0 {
            return Err(CarouselError::InvalidSwipeThreshold {
                threshold: self.swipe_threshold,
            });
        }
        Ok(())
    }
}

/// Builder for a [`CarouselController`].
///
/// # Example
///
/// ```
/// use swipewrap_core::{CarouselBuilder, OffsetRenderer};
///
/// struct Noop;
///
/// impl OffsetRenderer for Noop {
///     type Error = std::convert::Infallible;
///
///     fn set_offset(&mut self, _offset: f32, _animated: bool) -> Result<(), Self::Error> {
///         Ok(())
///     }
/// }
///
/// let carousel = CarouselBuilder::new(6, 375.0)
///     .with_swipe_threshold(120.0)
///     .build(Noop)
///     .unwrap();
/// assert_eq!(carousel.current_index(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct CarouselBuilder {
    slide_count: usize,
    viewport_width: f32,
    settings: CarouselSettings,
}

impl CarouselBuilder {
    /// Starts a carousel over `slide_count` slides (sentinels included) in a
    /// viewport `viewport_width` logical pixels wide.
    pub fn new(slide_count: usize, viewport_width: f32) -> Self {
        Self {
            slide_count,
            viewport_width,
            settings: CarouselSettings::default(),
        }
    }

    pub fn with_swipe_threshold(mut self, threshold: f32) -> Self {
        self.settings.swipe_threshold = threshold;
        self
    }

    pub fn with_transition(mut self, transition: TransitionSpec) -> Self {
        self.settings.transition = transition;
        self
    }

    pub fn with_settings(mut self, settings: CarouselSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn settings(&self) -> &CarouselSettings {
        &self.settings
    }

    /// Validates the configuration and aligns the first real slide.
    ///
    /// Fails before touching the renderer if the configuration is invalid.
    /// A renderer failure during the initial placement is only logged, since
    /// the first gesture repositions the strip anyway.
    pub fn build<R: OffsetRenderer>(
        self,
        renderer: R,
    ) -> Result<CarouselController<R>, CarouselError> {
        let strip = SlideStrip::new(self.slide_count)?;
        if !self.viewport_width.is_finite() || self.viewport_width <= 0.0 {
            return Err(CarouselError::InvalidViewportWidth {
                width: self.viewport_width,
            });
        }
        self.settings.validate()?;

        let mut controller =
            CarouselController::from_parts(strip, self.viewport_width, self.settings, renderer);
        if let Err(err) = controller.place_at_rest() {
            log::warn!("initial carousel placement failed: {:?}", err);
        }
        log::debug!(
            "carousel ready: {} real slides, viewport {}px",
            strip.real_len(),
            self.viewport_width
        );
        Ok(controller)
    }
}
