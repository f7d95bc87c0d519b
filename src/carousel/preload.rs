//! Best-effort image warming for carousel slides.
//!
//! Each image gets its own detached task. Nothing waits on the tasks, their
//! completion order does not matter and a failed warm-up is only logged.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use super::widget::Carousel;
use crate::assets::AssetError;
use crate::observability::Metrics;

/// Something that can fetch an image ahead of display.
#[async_trait]
pub trait ImageWarmer: Send + Sync {
    async fn warm(&self, src: &str) -> Result<(), AssetError>;
}

#[derive(Clone)]
pub struct Preloader {
    warmer: Arc<dyn ImageWarmer>,
    metrics: Arc<Metrics>,
}

impl Preloader {
    pub fn new(warmer: Arc<dyn ImageWarmer>, metrics: Arc<Metrics>) -> Self {
        Self { warmer, metrics }
    }

    /// Warm every image slide of `carousel`. Returns the number of tasks spawned.
    ///
    /// Must be called from within a tokio runtime.
    pub fn preload(&self, carousel: &Carousel) -> usize {
        self.preload_sources(carousel.image_sources())
    }

    pub fn preload_sources(&self, sources: Vec<String>) -> usize {
        let count = sources.len();

        for src in sources {
            let warmer = Arc::clone(&self.warmer);
            let metrics = Arc::clone(&self.metrics);
            metrics.preload_started();

            tokio::spawn(async move {
                match warmer.warm(&src).await {
                    Ok(()) => debug!(src = %src, "Preloaded slide image"),
                    Err(err) => {
                        metrics.preload_failed();
                        debug!(src = %src, error = %err, "Slide image preload failed");
                    }
                }
            });
        }

        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::SlideItem;
    use std::sync::Mutex;
    use tokio::time::{Duration, sleep};

    #[derive(Default)]
    struct RecordingWarmer {
        seen: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl ImageWarmer for RecordingWarmer {
        async fn warm(&self, src: &str) -> Result<(), AssetError> {
            self.seen.lock().unwrap().push(src.to_string());
            if src.contains("broken") {
                return Err(AssetError::NotFound(src.to_string()));
            }
            Ok(())
        }
    }

    async fn wait_for(condition: impl Fn() -> bool) {
        for _ in 0..100 {
            if condition() {
                return;
            }
            sleep(Duration::from_millis(10)).await;
        }
        panic!("condition not met in time");
    }

    #[tokio::test]
    async fn test_preload_only_image_slides() {
        let warmer = Arc::new(RecordingWarmer::default());
        let metrics = Arc::new(Metrics::new());
        let preloader = Preloader::new(warmer.clone(), metrics.clone());

        let carousel = Carousel::builder()
            .id("mixed")
            .items(vec![
                SlideItem::image("/images/a.png"),
                SlideItem::block("<p>text</p>"),
                SlideItem::image("/images/b.png"),
            ])
            .build();

        assert_eq!(preloader.preload(&carousel), 2);
        wait_for(|| warmer.seen.lock().unwrap().len() == 2).await;

        let mut seen = warmer.seen.lock().unwrap().clone();
        seen.sort();
        assert_eq!(seen, vec!["/images/a.png", "/images/b.png"]);
    }

    #[tokio::test]
    async fn test_preload_failures_are_swallowed() {
        let warmer = Arc::new(RecordingWarmer::default());
        let metrics = Arc::new(Metrics::new());
        let preloader = Preloader::new(warmer.clone(), metrics.clone());

        let spawned = preloader.preload_sources(vec![
            "/images/broken.png".to_string(),
            "/images/fine.png".to_string(),
        ]);
        assert_eq!(spawned, 2);

        wait_for(|| metrics.snapshot().preloads_failed == 1).await;
        assert_eq!(metrics.snapshot().preloads_started, 2);
    }
}
