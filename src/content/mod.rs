//! Content documents: YAML front-matter plus a body, one file per document.

mod frontmatter;
mod loader;
mod models;

pub use frontmatter::{parse_metadata, parse_timestamp, split};
pub use loader::ContentLoader;
pub use models::{
    Category, ContentRecord, Deliverable, DocumentKind, Glance, Metadata, TeamMember,
};

use crate::humanize::ByteSize;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("{}: missing required field '{field}'", .path.display())]
    MissingField { path: PathBuf, field: &'static str },

    #[error("{}: file is {size} bytes, limit is {limit}", .path.display())]
    TooLarge {
        path: PathBuf,
        size: u64,
        limit: ByteSize,
    },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
