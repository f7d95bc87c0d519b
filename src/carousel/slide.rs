/// What a slide displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlideContent {
    /// Image reference, rendered as a media element and eligible for preloading.
    Image(String),
    /// Pre-rendered HTML block, inserted as-is.
    Block(String),
}

/// One displayable unit within a carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideItem {
    pub content: SlideContent,
    pub alt: Option<String>,
}

impl SlideItem {
    pub fn image(src: impl Into<String>) -> Self {
        Self {
            content: SlideContent::Image(src.into()),
            alt: None,
        }
    }

    pub fn block(html: impl Into<String>) -> Self {
        Self {
            content: SlideContent::Block(html.into()),
            alt: None,
        }
    }

    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        let alt = alt.into();
        self.alt = (!alt.is_empty()).then_some(alt);
        self
    }

    /// Image reference for image slides; blocks never participate in preloading.
    pub fn image_source(&self) -> Option<&str> {
        match &self.content {
            SlideContent::Image(src) => Some(src),
            SlideContent::Block(_) => None,
        }
    }

    /// Stable render key: the alt text (or "slide") suffixed with the position.
    pub fn key(&self, index: usize) -> String {
        format!("{}-{}", self.alt.as_deref().unwrap_or("slide"), index)
    }
}
