//! Render model handed to the page templates.

use serde::Serialize;

pub const FADE_TRANSITION: &str = "opacity 120ms linear";

#[derive(Debug, Clone, Serialize)]
pub struct CarouselView {
    pub id: String,
    pub aspect_ratio: String,
    pub active_index: usize,
    pub slides: Vec<SlideView>,
    /// Absent when the carousel holds a single slide.
    pub controls: Option<ControlsView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SlideView {
    pub key: String,
    pub index: usize,
    pub active: bool,
    pub style: String,
    pub image: Option<String>,
    pub html: Option<String>,
    pub alt: String,
    pub sizes: Option<String>,
    pub priority: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ControlsView {
    pub previous_href: String,
    pub next_href: String,
    pub indicators: Vec<IndicatorView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct IndicatorView {
    pub index: usize,
    pub active: bool,
    pub href: String,
    pub label: String,
}

/// Inline style for a slide layered over its siblings.
///
/// Inactive slides stay in the tree but are transparent and ignore pointer
/// events so the active one can fade in over them.
pub fn slide_style(active: bool) -> String {
    let (opacity, pointer_events) = if active { (1, "auto") } else { (0, "none") };
    format!("opacity: {opacity}; transition: {FADE_TRANSITION}; pointer-events: {pointer_events};")
}
