//! Slideshow widget: slide sequence, active-slide state and render model.
//!
//! The widget renders every slide at once and cross-fades between them.
//! Only the active slide is opaque and interactive. Arrow and indicator
//! controls exist only when there is more than one slide. Image slides can
//! be warmed in the background through a [`Preloader`].

mod positions;
mod preload;
mod slide;
mod state;
pub mod transition;
mod view;
mod widget;

pub use positions::{SlidePositions, normalize_id};
pub use preload::{ImageWarmer, Preloader};
pub use slide::{SlideContent, SlideItem};
pub use state::CarouselState;
pub use view::{CarouselView, ControlsView, FADE_TRANSITION, IndicatorView, SlideView};
pub use widget::{Carousel, DEFAULT_ASPECT_RATIO};
