use std::fmt;

/// Reasons a carousel cannot be constructed.
///
/// Events dropped while a snap is in flight are normal flow control and
/// never surface here.
#[derive(Debug, Clone, PartialEq)]
pub enum CarouselError {
    TooFewSlides { count: usize },
    InvalidViewportWidth { width: f32 },
    InvalidSwipeThreshold { threshold: f32 },
}

impl fmt::Display for CarouselError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CarouselError::TooFewSlides { count } => write!(
                f,
                "slide strip has {count} slides; need at least {} (one real slide and two sentinels)",
                crate::MIN_SLIDE_COUNT
            ),
            CarouselError::InvalidViewportWidth { width } => {
                write!(f, "viewport width must be a positive finite number, got {width}")
            }
            CarouselError::InvalidSwipeThreshold { threshold } => {
                write!(f, "swipe threshold must be finite and non-negative, got {threshold}")
            }
        }
    }
}

impl std::error::Error for CarouselError {}
