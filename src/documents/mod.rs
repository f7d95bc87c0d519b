//! Document library: downloadable files grouped by category.
//!
//! Descriptors live in a TOML file as `[[documents]]` tables:
//!
//! ```toml
//! [[documents]]
//! title = "Vietnam Fintech Landscape"
//! card_title = "Fintech Landscape"
//! href = "/documents/industry/fintech.pdf"
//! type = "pdf"
//! size_mb = 2.4
//! category = "Industry Research"
//! ```

mod preview;

pub use preview::{base_name, preview_src};

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use crate::content::{Category, DocumentKind};
use crate::humanize::{file_count_label, format_size_mb};

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentDescriptor {
    pub title: String,
    #[serde(default, alias = "cardTitle")]
    pub card_title: Option<String>,
    pub href: String,
    #[serde(default, rename = "type")]
    pub kind: DocumentKind,
    #[serde(default, alias = "sizeMB")]
    pub size_mb: f64,
    pub category: Category,
    #[serde(default)]
    pub external: bool,
}

impl DocumentDescriptor {
    /// Title for compact cards, falling back to the full title.
    pub fn display_title(&self) -> &str {
        self.card_title
            .as_deref()
            .filter(|title| !title.is_empty())
            .unwrap_or(&self.title)
    }

    pub fn open_label(&self) -> &'static str {
        if self.kind.is_pdf_like() {
            "Open PDF"
        } else {
            "Open File"
        }
    }

    /// `PDF · 1.50MB`
    pub fn size_label(&self) -> String {
        format!("{} · {}", self.kind.label(), format_size_mb(self.size_mb))
    }
}

#[derive(Debug, Deserialize)]
struct DocumentsFile {
    #[serde(default)]
    documents: Vec<DocumentDescriptor>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentLibrary {
    documents: Vec<DocumentDescriptor>,
}

/// One category's share of the library, ready for display.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryGroup<'a> {
    pub category: Category,
    pub count_label: String,
    pub documents: Vec<&'a DocumentDescriptor>,
}

impl DocumentLibrary {
    pub fn new(documents: Vec<DocumentDescriptor>) -> Self {
        Self { documents }
    }

    /// Load descriptors from `path`. A missing file is an empty library.
    pub async fn load(path: &Path) -> Result<Self, DocumentError> {
        let raw = match tokio::fs::read_to_string(path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                warn!(path = %path.display(), "Documents file not found, library is empty");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(DocumentError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let library = Self::from_toml(&raw).map_err(|source| DocumentError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), count = library.len(), "Loaded document library");
        Ok(library)
    }

    pub fn from_toml(raw: &str) -> Result<Self, toml::de::Error> {
        let file: DocumentsFile = toml::from_str(raw)?;
        Ok(Self::new(file.documents))
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DocumentDescriptor> {
        self.documents.iter()
    }

    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &DocumentDescriptor> {
        self.documents
            .iter()
            .filter(move |document| document.category == category)
    }

    /// Every category in display order, including empty ones.
    pub fn grouped(&self) -> Vec<CategoryGroup<'_>> {
        Category::ALL
            .into_iter()
            .map(|category| {
                let documents: Vec<_> = self.in_category(category).collect();
                CategoryGroup {
                    category,
                    count_label: file_count_label(documents.len()),
                    documents,
                }
            })
            .collect()
    }
}
