//! Browser entry point for the swipewrap demo page.

use swipewrap_core::{CarouselSettings, Easing, TransitionSpec, SNAP_DURATION_MILLIS};
use swipewrap_platform_web::WebCarousel;

/// Viewport element of the demo page.
pub const BANNER_SELECTOR: &str = ".banner";

pub fn create_carousel() -> WebCarousel {
    WebCarousel::new(BANNER_SELECTOR).with_settings(CarouselSettings {
        transition: TransitionSpec::tween(SNAP_DURATION_MILLIS, Easing::Ease),
        ..CarouselSettings::default()
    })
}

#[cfg(target_arch = "wasm32")]
mod wasm {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(log::Level::Info));

        let handle = super::create_carousel().attach()?;
        log::info!("demo carousel showing slide {}", handle.current_slide());
        // The carousel lives as long as the page.
        handle.forget();
        Ok(())
    }
}
