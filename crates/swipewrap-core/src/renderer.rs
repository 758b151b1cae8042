//! Rendering contract between the controller and a platform surface.

use std::fmt::Debug;

/// Abstraction implemented by anything that can translate the slide strip.
///
/// The controller never touches a platform surface directly; it only asks
/// the renderer to place the strip at a horizontal offset, either instantly
/// or through the platform's fixed-duration snap transition.
pub trait OffsetRenderer {
    type Error: Debug;

    /// Moves the strip to `offset` logical pixels.
    ///
    /// With `animated == false` any running transition is cleared first so
    /// the strip lands on `offset` in the same frame. With `animated == true`
    /// the snap transition is enabled before the offset changes, and the
    /// platform must later report its completion to
    /// [`CarouselController::on_transition_complete`](crate::CarouselController::on_transition_complete).
    /// Animated requests always target an offset different from the one
    /// last applied, with a non-zero transition duration, so a platform
    /// transition is guaranteed to start.
    fn set_offset(&mut self, offset: f32, animated: bool) -> Result<(), Self::Error>;
}

impl<R: OffsetRenderer + ?Sized> OffsetRenderer for &mut R {
    type Error = R::Error;

    fn set_offset(&mut self, offset: f32, animated: bool) -> Result<(), Self::Error> {
        (**self).set_offset(offset, animated)
    }
}

impl<R: OffsetRenderer + ?Sized> OffsetRenderer for Box<R> {
    type Error = R::Error;

    fn set_offset(&mut self, offset: f32, animated: bool) -> Result<(), Self::Error> {
        (**self).set_offset(offset, animated)
    }
}
