//! Web platform adapter for swipewrap carousels.
//!
//! Binds a [`CarouselController`](swipewrap_core::CarouselController) to a
//! DOM structure of the form
//!
//! ```html
//! <div class="banner">        <!-- viewport, fixed width, overflow hidden -->
//!   <ul>                      <!-- strip, translated horizontally -->
//!     <li>last'</li> <li>1</li> ... <li>n</li> <li>first'</li>
//!   </ul>
//! </div>
//! ```
//!
//! Layout and styling of that structure belong to the page.

mod carousel;
mod input;
mod sentinels;
mod style_renderer;

pub use carousel::{CarouselHandle, WebCarousel};
pub use input::{touch_x, TouchSource};
pub use sentinels::install_sentinels;
pub use style_renderer::{translate_x, StyleRenderer};
