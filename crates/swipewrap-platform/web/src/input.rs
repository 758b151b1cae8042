use web_sys::TouchEvent;

/// Which touch list of a [`TouchEvent`] carries the coordinate we want.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchSource {
    /// `touches`: contacts currently on the surface. Used on `touchstart`.
    Active,
    /// `changedTouches`: contacts that changed in this event. Used on
    /// `touchmove`, `touchend` and `touchcancel`, where the lifted finger
    /// is no longer in `touches`.
    Changed,
}

impl TouchSource {
    pub fn for_event_type(event_type: &str) -> Self {
        match event_type {
            "touchstart" => TouchSource::Active,
            _ => TouchSource::Changed,
        }
    }
}

/// Horizontal viewport coordinate (CSS pixels) of the first contact point.
///
/// Returns `None` when the chosen list is empty.
pub fn touch_x(event: &TouchEvent, source: TouchSource) -> Option<f32> {
    let list = match source {
        TouchSource::Active => event.touches(),
        TouchSource::Changed => event.changed_touches(),
    };
    // clientX is already in CSS pixels, the unit the strip is laid out in.
    list.get(0).map(|touch| touch.client_x() as f32)
}
