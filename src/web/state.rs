use std::sync::Arc;
use tracing::warn;

use crate::assets::AssetStore;
use crate::carousel::Preloader;
use crate::config::Config;
use crate::observability::Metrics;
use crate::site::{Site, SiteError};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub site: Arc<Site>,
    pub assets: Arc<AssetStore>,
    pub metrics: Arc<Metrics>,
}

impl AppState {
    /// Wire the site to an asset store. The store also backs slide preloading.
    pub async fn new(config: Config, assets: AssetStore) -> Result<Self, SiteError> {
        let config = Arc::new(config);
        let assets = Arc::new(assets);
        let metrics = Arc::new(Metrics::new());
        let preloader = Preloader::new(assets.clone(), metrics.clone());
        let site = Site::load(config.clone(), Some(preloader)).await?;

        Ok(Self {
            config,
            site: Arc::new(site),
            assets,
            metrics,
        })
    }

    /// Build state over the configured public directory. Falls back to an
    /// empty in-memory store when the directory cannot be opened.
    pub async fn from_config(config: Config) -> Result<Self, SiteError> {
        let assets = match AssetStore::local(&config.content.public_dir) {
            Ok(store) => store,
            Err(err) => {
                warn!(
                    path = %config.content.public_dir.display(),
                    error = %err,
                    "Public directory unavailable, serving images from an empty store"
                );
                AssetStore::in_memory()
            }
        };
        Self::new(config, assets).await
    }
}
