//! DOM wiring: finds the carousel markup, builds the controller and routes
//! browser events into it.

use std::cell::RefCell;
use std::rc::Rc;

use swipewrap_core::{CarouselBuilder, CarouselController, CarouselSettings};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, HtmlElement, TouchEvent, TransitionEvent};

use crate::{install_sentinels, touch_x, StyleRenderer, TouchSource};

type SharedController = Rc<RefCell<CarouselController<StyleRenderer>>>;

const TOUCH_EVENTS: [&str; 4] = ["touchstart", "touchmove", "touchend", "touchcancel"];

/// CSS property the renderer animates.
const SNAP_PROPERTY: &str = "transform";

/// Builder that attaches a carousel to existing markup.
///
/// ```no_run
/// use swipewrap_platform_web::WebCarousel;
///
/// let handle = WebCarousel::new(".banner").attach()?;
/// handle.forget();
/// # Ok::<(), wasm_bindgen::JsValue>(())
/// ```
pub struct WebCarousel {
    selector: String,
    settings: CarouselSettings,
    install_sentinels: bool,
}

impl WebCarousel {
    /// Targets the viewport element matching `selector`. Its first element
    /// child is the slide strip.
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            settings: CarouselSettings::default(),
            install_sentinels: false,
        }
    }

    pub fn with_settings(mut self, settings: CarouselSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Clone the edge slides into sentinels before attaching, for markup
    /// that only contains the real slides.
    pub fn with_sentinels(mut self, install: bool) -> Self {
        self.install_sentinels = install;
        self
    }

    /// Measures the viewport, builds the controller and installs listeners.
    ///
    /// The viewport width is read once here; later layout changes are not
    /// tracked.
    pub fn attach(self) -> Result<CarouselHandle, JsValue> {
        let window = web_sys::window().ok_or("no global window exists")?;
        let document = window.document().ok_or("should have a document on window")?;

        let viewport = document
            .query_selector(&self.selector)?
            .ok_or_else(|| format!("carousel viewport '{}' not found", self.selector))?
            .dyn_into::<HtmlElement>()?;
        let strip = viewport
            .first_element_child()
            .ok_or_else(|| format!("carousel viewport '{}' has no slide strip", self.selector))?
            .dyn_into::<HtmlElement>()?;

        if self.install_sentinels {
            install_sentinels(&strip)?;
        }

        let width = viewport.offset_width() as f32;
        let slide_count = strip.child_element_count() as usize;
        let renderer = StyleRenderer::new(strip.clone(), &self.settings.transition);
        let controller = CarouselBuilder::new(slide_count, width)
            .with_settings(self.settings)
            .build(renderer)
            .map_err(|err| JsValue::from_str(&err.to_string()))?;
        log::info!(
            "carousel '{}' attached: {} slides, {}px wide",
            self.selector,
            slide_count,
            width
        );

        let controller: SharedController = Rc::new(RefCell::new(controller));
        let mut handle = CarouselHandle {
            controller: controller.clone(),
            listeners: Vec::with_capacity(TOUCH_EVENTS.len() + 1),
        };

        let document: EventTarget = document.into();
        for event_type in TOUCH_EVENTS {
            let closure = touch_listener(controller.clone(), event_type);
            handle.listen(document.clone(), event_type, closure)?;
        }

        let strip_target: EventTarget = strip.into();
        let closure = transition_listener(controller, strip_target.clone());
        handle.listen(strip_target, "transitionend", closure)?;

        Ok(handle)
    }
}

fn touch_listener(
    controller: SharedController,
    event_type: &'static str,
) -> Closure<dyn FnMut(Event)> {
    let source = TouchSource::for_event_type(event_type);
    Closure::wrap(Box::new(move |event: Event| {
        let Some(touch) = event.dyn_ref::<TouchEvent>() else {
            return;
        };
        let mut controller = controller.borrow_mut();
        if event_type == "touchcancel" {
            if let Err(err) = controller.on_gesture_cancel() {
                log::error!("carousel render failed on touchcancel: {:?}", err);
            }
            return;
        }
        let Some(x) = touch_x(touch, source) else {
            log::warn!("{} without a contact point ignored", event_type);
            return;
        };
        let result = match event_type {
            "touchstart" => Ok(controller.on_gesture_start(x)),
            "touchmove" => controller.on_gesture_move(x),
            _ => controller.on_gesture_end(x),
        };
        if let Err(err) = result {
            log::error!("carousel render failed on {}: {:?}", event_type, err);
        }
    }) as Box<dyn FnMut(_)>)
}

fn transition_listener(
    controller: SharedController,
    strip: EventTarget,
) -> Closure<dyn FnMut(Event)> {
    Closure::wrap(Box::new(move |event: Event| {
        // transitionend bubbles; only the strip's own transform counts.
        if event.target().as_ref() != Some(&strip) {
            return;
        }
        let Some(transition) = event.dyn_ref::<TransitionEvent>() else {
            return;
        };
        if !ends_snap(&transition.property_name()) {
            log::trace!("ignoring transitionend for {}", transition.property_name());
            return;
        }
        if let Err(err) = controller.borrow_mut().on_transition_complete() {
            log::error!("carousel render failed on transitionend: {:?}", err);
        }
    }) as Box<dyn FnMut(_)>)
}

fn ends_snap(property_name: &str) -> bool {
    property_name == SNAP_PROPERTY
}

struct Listener {
    target: EventTarget,
    event_type: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

/// Live carousel attached to the page.
///
/// Dropping the handle removes its listeners; call [`CarouselHandle::forget`]
/// to keep the carousel running for the lifetime of the page.
pub struct CarouselHandle {
    controller: SharedController,
    listeners: Vec<Listener>,
}

impl CarouselHandle {
    fn listen(
        &mut self,
        target: EventTarget,
        event_type: &'static str,
        closure: Closure<dyn FnMut(Event)>,
    ) -> Result<(), JsValue> {
        target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
        self.listeners.push(Listener {
            target,
            event_type,
            closure,
        });
        Ok(())
    }

    /// Zero-based position of the visible real slide.
    pub fn current_slide(&self) -> usize {
        self.controller.borrow().current_slide()
    }

    pub fn gestures_enabled(&self) -> bool {
        self.controller.borrow().gestures_enabled()
    }

    /// Removes all listeners. Equivalent to dropping the handle.
    pub fn detach(self) {
        drop(self);
    }

    /// Leaks the handle so its listeners stay installed.
    pub fn forget(self) {
        std::mem::forget(self);
    }
}

impl Drop for CarouselHandle {
    fn drop(&mut self) {
        for listener in self.listeners.drain(..) {
            if let Err(err) = listener.target.remove_event_listener_with_callback(
                listener.event_type,
                listener.closure.as_ref().unchecked_ref(),
            ) {
                log::warn!("failed to remove {} listener: {:?}", listener.event_type, err);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_transform_transition_ends_a_snap() {
        assert!(ends_snap("transform"));
        assert!(!ends_snap("opacity"));
        assert!(!ends_snap("background-color"));
        assert!(!ends_snap(""));
    }
}
