//! Touch-driven infinite image carousel.
//!
//! A strip of slides is translated horizontally under a fixed-width
//! viewport. Horizontal drags move the strip 1:1 with the finger; releasing
//! past [`SWIPE_THRESHOLD`] advances to the neighbouring slide, anything
//! shorter snaps back. Both ends of the strip carry a duplicate ("sentinel")
//! of the slide at the opposite end, so swiping past the last real slide
//! lands on a copy of the first one and the controller silently swaps it for
//! the real one once the snap animation finishes.
//!
//! The crate is headless: platforms feed coordinates into a
//! [`CarouselController`] and apply offsets through an [`OffsetRenderer`].

mod controller;
mod error;
pub mod gesture_constants;
mod renderer;
mod settings;
mod strip;
pub mod transition;

pub use controller::{CarouselController, GesturePhase, GestureResponse};
pub use error::CarouselError;
pub use gesture_constants::*;
pub use renderer::OffsetRenderer;
pub use settings::{CarouselBuilder, CarouselSettings};
pub use strip::SlideStrip;
pub use transition::{Easing, TransitionSpec};
