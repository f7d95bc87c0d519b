use bon::bon;

use super::positions::SlidePositions;
use super::slide::{SlideContent, SlideItem};
use super::state::CarouselState;
use super::view::{CarouselView, ControlsView, IndicatorView, SlideView, slide_style};

pub const DEFAULT_ASPECT_RATIO: &str = "16 / 9";

/// Slides eagerly loaded regardless of the priority flag.
const EAGER_SLIDES: usize = 2;

/// Slideshow over a fixed sequence of slides.
///
/// The sequence never changes after construction; a different list of slides
/// means a new `Carousel`.
#[derive(Debug, Clone)]
pub struct Carousel {
    id: String,
    items: Vec<SlideItem>,
    state: Option<CarouselState>,
    aspect_ratio: String,
    sizes: Option<String>,
    priority: bool,
}

#[bon]
impl Carousel {
    #[builder]
    pub fn new(
        #[builder(into)] id: String,
        items: Vec<SlideItem>,
        #[builder(into, default = DEFAULT_ASPECT_RATIO.to_string())] aspect_ratio: String,
        #[builder(into)] sizes: Option<String>,
        #[builder(default)] priority: bool,
    ) -> Self {
        let state = CarouselState::new(items.len());
        Self {
            id,
            items,
            state,
            aspect_ratio,
            sizes,
            priority,
        }
    }
}

impl Carousel {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[SlideItem] {
        &self.items
    }

    /// Active slide index, `None` when there are no slides.
    pub fn active_index(&self) -> Option<usize> {
        self.state.map(|state| state.active_index())
    }

    pub fn active_slide(&self) -> Option<&SlideItem> {
        self.active_index().and_then(|index| self.items.get(index))
    }

    pub fn has_controls(&self) -> bool {
        self.items.len() > 1
    }

    pub fn previous(&mut self) {
        if let Some(state) = self.state.as_mut() {
            state.previous();
        }
    }

    pub fn next(&mut self) {
        if let Some(state) = self.state.as_mut() {
            state.next();
        }
    }

    pub fn jump_to(&mut self, index: usize) {
        if let Some(state) = self.state.as_mut() {
            state.jump_to(index);
        }
    }

    /// Move to the position recorded for this carousel in `positions`, if any.
    pub fn restore(&mut self, positions: &SlidePositions) {
        if let Some(index) = positions.get(&self.id) {
            self.jump_to(index);
        }
    }

    /// Image references worth warming ahead of display, without duplicates.
    pub fn image_sources(&self) -> Vec<String> {
        let mut sources: Vec<String> = Vec::new();
        for src in self.items.iter().filter_map(SlideItem::image_source) {
            if !sources.iter().any(|seen| seen == src) {
                sources.push(src.to_string());
            }
        }
        sources
    }

    /// Build the render model. Empty carousels render nothing.
    pub fn view(&self, positions: &SlidePositions) -> Option<CarouselView> {
        let state = self.state?;
        let active_index = state.active_index();

        let slides = self
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let active = index == active_index;
                let (image, html) = match &item.content {
                    SlideContent::Image(src) => (Some(src.clone()), None),
                    SlideContent::Block(html) => (None, Some(html.clone())),
                };
                SlideView {
                    key: item.key(index),
                    index,
                    active,
                    style: slide_style(active),
                    image,
                    html,
                    alt: item.alt.clone().unwrap_or_default(),
                    sizes: self.sizes.clone(),
                    priority: self.priority || index < EAGER_SLIDES,
                }
            })
            .collect();

        let controls = self.has_controls().then(|| ControlsView {
            previous_href: positions.href_with(&self.id, state.peek_previous()),
            next_href: positions.href_with(&self.id, state.peek_next()),
            indicators: (0..self.items.len())
                .map(|index| IndicatorView {
                    index,
                    active: index == active_index,
                    href: positions.href_with(&self.id, index),
                    label: format!("Show slide {} of {}", index + 1, self.items.len()),
                })
                .collect(),
        });

        Some(CarouselView {
            id: self.id.clone(),
            aspect_ratio: self.aspect_ratio.clone(),
            active_index,
            slides,
            controls,
        })
    }
}
