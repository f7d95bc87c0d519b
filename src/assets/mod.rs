//! Static asset access for slide images and other public files.
//! Uses Apache Arrow object_store crate, with a warm in-memory cache in front.

use async_trait::async_trait;
use bytes::Bytes;
use object_store::{ObjectStore, PutPayload, local::LocalFileSystem, path::Path as StoragePath};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::carousel::ImageWarmer;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset not found: {0}")]
    NotFound(String),

    #[error("invalid asset path: {0}")]
    InvalidPath(String),

    #[error("external asset cannot be served locally: {0}")]
    External(String),

    #[error("object store error: {0}")]
    ObjectStore(#[from] object_store::Error),
}

pub type Result<T> = std::result::Result<T, AssetError>;

/// Asset store wrapping object_store, keyed by site-relative paths.
#[derive(Clone)]
pub struct AssetStore {
    store: Arc<dyn ObjectStore>,
    cache: Arc<RwLock<HashMap<String, Bytes>>>,
}

impl AssetStore {
    pub fn new(store: Arc<dyn ObjectStore>) -> Self {
        Self {
            store,
            cache: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Store backed by the public directory on disk.
    pub fn local(root: &Path) -> Result<Self> {
        let store = LocalFileSystem::new_with_prefix(root)?;
        Ok(Self::new(Arc::new(store)))
    }

    /// In-memory store for tests and exports
    pub fn in_memory() -> Self {
        Self::new(Arc::new(object_store::memory::InMemory::new()))
    }

    pub async fn put(&self, src: &str, data: impl Into<Bytes>) -> Result<()> {
        let key = key_for(src)?;
        let bytes: Bytes = data.into();
        let payload = PutPayload::from(bytes);
        self.store.put(&key, payload).await?;
        Ok(())
    }

    /// Fetch an asset, answering from the warm cache when possible.
    pub async fn fetch(&self, src: &str) -> Result<Bytes> {
        let key = key_for(src)?;

        if let Some(bytes) = self.cache.read().await.get(&key.to_string()) {
            return Ok(bytes.clone());
        }

        let bytes = self.load(&key).await?;
        tracing::debug!(key = %key, size = bytes.len(), "Loaded asset from store");
        Ok(bytes)
    }

    /// Load an asset into the warm cache.
    pub async fn warm_cache(&self, src: &str) -> Result<usize> {
        let key = key_for(src)?;
        if self.cache.read().await.contains_key(&key.to_string()) {
            return Ok(0);
        }

        let bytes = self.load(&key).await?;
        let size = bytes.len();
        self.cache.write().await.insert(key.to_string(), bytes);
        Ok(size)
    }

    pub async fn is_warm(&self, src: &str) -> bool {
        match key_for(src) {
            Ok(key) => self.cache.read().await.contains_key(&key.to_string()),
            Err(_) => false,
        }
    }

    async fn load(&self, key: &StoragePath) -> Result<Bytes> {
        match self.store.get(key).await {
            Ok(result) => Ok(result.bytes().await?),
            Err(object_store::Error::NotFound { .. }) => Err(AssetError::NotFound(key.to_string())),
            Err(err) => Err(err.into()),
        }
    }
}

#[async_trait]
impl ImageWarmer for AssetStore {
    async fn warm(&self, src: &str) -> Result<()> {
        self.warm_cache(src).await.map(|_| ())
    }
}

/// Map a site-relative reference such as `/images/a.png` onto a store key.
pub fn key_for(src: &str) -> Result<StoragePath> {
    if src.contains("://") || src.starts_with("//") {
        return Err(AssetError::External(src.to_string()));
    }

    let trimmed = src.split(['?', '#']).next().unwrap_or_default();
    let trimmed = trimmed.trim_start_matches('/');
    if trimmed.is_empty() {
        return Err(AssetError::InvalidPath(src.to_string()));
    }

    StoragePath::parse(trimmed).map_err(|_| AssetError::InvalidPath(src.to_string()))
}

/// Content type for a served asset, picked from its extension.
pub fn content_type(src: &str) -> mime::Mime {
    let extension = src
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "png" => mime::IMAGE_PNG,
        "jpg" | "jpeg" => mime::IMAGE_JPEG,
        "gif" => mime::IMAGE_GIF,
        "svg" => mime::IMAGE_SVG,
        "pdf" => mime::APPLICATION_PDF,
        "webp" => "image/webp".parse().unwrap_or(mime::APPLICATION_OCTET_STREAM),
        _ => mime::APPLICATION_OCTET_STREAM,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_for() {
        assert_eq!(key_for("/images/a.png").unwrap().to_string(), "images/a.png");
        assert_eq!(key_for("images/a.png?v=2").unwrap().to_string(), "images/a.png");
        assert!(matches!(
            key_for("https://cdn.example.com/a.png"),
            Err(AssetError::External(_))
        ));
        assert!(matches!(key_for("/"), Err(AssetError::InvalidPath(_))));
        assert!(matches!(
            key_for("/images/../secret"),
            Err(AssetError::InvalidPath(_))
        ));
    }

    #[test]
    fn test_content_type() {
        assert_eq!(content_type("/a.PNG"), mime::IMAGE_PNG);
        assert_eq!(content_type("/a.jpeg"), mime::IMAGE_JPEG);
        assert_eq!(content_type("/a.webp").essence_str(), "image/webp");
        assert_eq!(content_type("/a"), mime::APPLICATION_OCTET_STREAM);
    }

    #[tokio::test]
    async fn test_warm_then_fetch() {
        let assets = AssetStore::in_memory();
        assets.put("/images/a.png", vec![1u8, 2, 3]).await.unwrap();

        assert!(!assets.is_warm("/images/a.png").await);
        assert_eq!(assets.warm_cache("/images/a.png").await.unwrap(), 3);
        assert!(assets.is_warm("/images/a.png").await);
        assert_eq!(assets.warm_cache("/images/a.png").await.unwrap(), 0);

        let bytes = assets.fetch("/images/a.png").await.unwrap();
        assert_eq!(&bytes[..], &[1u8, 2, 3]);
    }

    #[tokio::test]
    async fn test_missing_asset() {
        let assets = AssetStore::in_memory();
        assert!(matches!(
            assets.fetch("/images/none.png").await,
            Err(AssetError::NotFound(_))
        ));
        assert!(assets.warm("/images/none.png").await.is_err());
    }
}
