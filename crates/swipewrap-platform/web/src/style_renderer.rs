use swipewrap_core::{OffsetRenderer, TransitionSpec};
use wasm_bindgen::JsValue;
use web_sys::HtmlElement;

/// CSS `transform` value placing the strip at `offset` pixels.
pub fn translate_x(offset: f32) -> String {
    format!("translateX({}px)", offset)
}

/// Renders offsets by writing inline `transform` and `transition` styles.
pub struct StyleRenderer {
    element: HtmlElement,
    transition: String,
}

impl StyleRenderer {
    pub fn new(element: HtmlElement, transition: &TransitionSpec) -> Self {
        Self {
            element,
            transition: transition.css_transition("transform"),
        }
    }

    pub fn element(&self) -> &HtmlElement {
        &self.element
    }

    /// CSS `transition` value used for animated snaps.
    pub fn transition_css(&self) -> &str {
        &self.transition
    }
}

impl OffsetRenderer for StyleRenderer {
    type Error = JsValue;

    fn set_offset(&mut self, offset: f32, animated: bool) -> Result<(), Self::Error> {
        let style = self.element.style();
        // The transition has to be in place before the transform changes,
        // otherwise the browser applies the new transform instantly.
        let transition = if animated {
            self.transition.as_str()
        } else {
            "none"
        };
        style.set_property("transition", transition)?;
        style.set_property("transform", &translate_x(offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_x_formats_pixels() {
        assert_eq!(translate_x(-300.0), "translateX(-300px)");
        assert_eq!(translate_x(-350.5), "translateX(-350.5px)");
        assert_eq!(translate_x(120.0), "translateX(120px)");
    }
}
