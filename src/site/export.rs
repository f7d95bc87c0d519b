//! Static snapshot of the site: every page written as `index.html` under its path.

use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::{Site, SiteError};
use crate::carousel::SlidePositions;

#[derive(Debug, Clone, Default, Serialize)]
pub struct ExportSummary {
    pub pages: usize,
    pub out_dir: PathBuf,
}

/// Render every page with all carousels at their first slide and write the
/// result under `out_dir`. Carousel controls are left out since their query
/// links would all resolve to the same static file.
pub async fn export(site: Site, out_dir: &Path) -> Result<ExportSummary, SiteError> {
    let site = site.without_navigation();
    let positions = SlidePositions::new();
    let mut pages = vec![
        (PathBuf::from("index.html"), site.home(&positions).await?),
        (PathBuf::from("about/index.html"), site.about(&positions).await?),
        (PathBuf::from("work/index.html"), site.work(&positions).await?),
        (PathBuf::from("404.html"), site.not_found()?),
    ];

    for slug in site.project_slugs().await? {
        let html = site.project(&slug, &positions).await?;
        pages.push((PathBuf::from("work").join(&slug).join("index.html"), html));
    }

    for (relative, html) in &pages {
        let path = out_dir.join(relative);
        write_page(&path, html).await?;
        debug!(path = %path.display(), bytes = html.len(), "Wrote page");
    }

    info!(out_dir = %out_dir.display(), pages = pages.len(), "Export complete");
    Ok(ExportSummary {
        pages: pages.len(),
        out_dir: out_dir.to_path_buf(),
    })
}

async fn write_page(path: &Path, html: &str) -> Result<(), SiteError> {
    let io_error = |source: std::io::Error| SiteError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await.map_err(io_error)?;
    }
    tokio::fs::write(path, html).await.map_err(io_error)
}
