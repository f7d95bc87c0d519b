use crate::carousel::DEFAULT_ASPECT_RATIO;
use crate::humanize::ByteSize;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Top-level configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub carousel: CarouselConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}

/// Where site content lives on disk
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContentConfig {
    /// Directory of project documents (`.mdx` / `.md`)
    #[serde(default = "default_projects_dir")]
    pub projects_dir: PathBuf,
    /// Document library descriptors (TOML)
    #[serde(default = "default_documents_file")]
    pub documents_file: PathBuf,
    /// Person, home, about and work copy (TOML)
    #[serde(default = "default_profile_file")]
    pub profile_file: PathBuf,
    /// Static files: images, previews, downloadable documents
    #[serde(default = "default_public_dir")]
    pub public_dir: PathBuf,
    #[serde(default = "default_max_file_bytes")]
    pub max_file_bytes: ByteSize,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            projects_dir: default_projects_dir(),
            documents_file: default_documents_file(),
            profile_file: default_profile_file(),
            public_dir: default_public_dir(),
            max_file_bytes: default_max_file_bytes(),
        }
    }
}

fn default_projects_dir() -> PathBuf {
    PathBuf::from("content/projects")
}

fn default_documents_file() -> PathBuf {
    PathBuf::from("content/documents.toml")
}

fn default_profile_file() -> PathBuf {
    PathBuf::from("content/profile.toml")
}

fn default_public_dir() -> PathBuf {
    PathBuf::from("public")
}

fn default_max_file_bytes() -> ByteSize {
    ByteSize(1024 * 1024) // 1 MB
}

/// Carousel rendering hints
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CarouselConfig {
    /// Warm slide images in the background when a page is rendered
    #[serde(default = "default_preload")]
    pub preload: bool,
    #[serde(default = "default_aspect_ratio")]
    pub aspect_ratio: String,
    #[serde(default = "default_sizes")]
    pub sizes: String,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            preload: default_preload(),
            aspect_ratio: default_aspect_ratio(),
            sizes: default_sizes(),
        }
    }
}

fn default_preload() -> bool {
    true
}

fn default_aspect_ratio() -> String {
    DEFAULT_ASPECT_RATIO.to_string()
}

fn default_sizes() -> String {
    "(max-width: 960px) 100vw, 960px".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.server.bind_addr.to_string(), "0.0.0.0:8080");
        assert_eq!(config.content.projects_dir, PathBuf::from("content/projects"));
        assert_eq!(config.content.max_file_bytes.as_u64(), 1024 * 1024);
        assert!(config.carousel.preload);
        assert_eq!(config.carousel.aspect_ratio, "16 / 9");
    }
}
