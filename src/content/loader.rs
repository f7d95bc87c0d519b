use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::ContentError;
use super::frontmatter;
use super::models::ContentRecord;
use crate::humanize::ByteSize;

const EXTENSIONS: [&str; 2] = ["mdx", "md"];

/// Reads content documents (`.mdx` / `.md` with YAML front-matter) from disk.
#[derive(Debug, Clone)]
pub struct ContentLoader {
    max_file_bytes: ByteSize,
}

impl ContentLoader {
    pub fn new(max_file_bytes: ByteSize) -> Self {
        Self { max_file_bytes }
    }

    /// Load every document in `dir`.
    ///
    /// Records come back in file-name order; callers apply their own sorting.
    /// A document whose `publishedAt` is missing or unparseable is skipped with
    /// a warning so one bad file does not take down every listing.
    pub async fn load_dir(&self, dir: &Path) -> Result<Vec<ContentRecord>, ContentError> {
        ensure_dir(dir).await?;

        let mut entries = tokio::fs::read_dir(dir)
            .await
            .map_err(|source| io_error(dir, source))?;

        let mut files = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|source| io_error(dir, source))?
        {
            let path = entry.path();
            if has_content_extension(&path) {
                files.push(path);
            }
        }
        files.sort();

        let mut records = Vec::with_capacity(files.len());
        for path in files {
            match self.read_record(&path).await {
                Ok(record) => records.push(record),
                Err(error @ ContentError::MissingField { .. }) => {
                    warn!(path = %path.display(), %error, "Skipping document with unusable front-matter");
                }
                Err(error) => return Err(error),
            }
        }

        info!(dir = %dir.display(), count = records.len(), "Loaded content directory");
        Ok(records)
    }

    /// Load the document whose file stem is `slug`.
    pub async fn load_one(&self, dir: &Path, slug: &str) -> Result<ContentRecord, ContentError> {
        if !is_plain_slug(slug) {
            return Err(ContentError::NotFound(dir.join(slug)));
        }
        ensure_dir(dir).await?;

        for extension in EXTENSIONS {
            let path = dir.join(format!("{slug}.{extension}"));
            if tokio::fs::try_exists(&path).await.unwrap_or(false) {
                return self.read_record(&path).await;
            }
        }

        Err(ContentError::NotFound(dir.join(slug)))
    }

    async fn read_record(&self, path: &Path) -> Result<ContentRecord, ContentError> {
        let size = tokio::fs::metadata(path)
            .await
            .map_err(|source| io_error(path, source))?
            .len();
        if size > self.max_file_bytes.as_u64() {
            return Err(ContentError::TooLarge {
                path: path.to_path_buf(),
                size,
                limit: self.max_file_bytes,
            });
        }

        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| io_error(path, source))?;

        let (yaml, body) = frontmatter::split(&raw);
        let metadata = frontmatter::parse_metadata(yaml, path)?;
        let slug = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();

        debug!(slug = %slug, "Parsed content document");

        Ok(ContentRecord {
            metadata,
            slug,
            body: body.to_string(),
        })
    }
}

impl Default for ContentLoader {
    fn default() -> Self {
        Self::new(ByteSize(1024 * 1024))
    }
}

async fn ensure_dir(dir: &Path) -> Result<(), ContentError> {
    match tokio::fs::metadata(dir).await {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(ContentError::NotFound(dir.to_path_buf())),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            Err(ContentError::NotFound(dir.to_path_buf()))
        }
        Err(source) => Err(io_error(dir, source)),
    }
}

fn has_content_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| EXTENSIONS.contains(&ext))
}

fn is_plain_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug != "."
        && slug != ".."
        && !slug.contains(['/', '\\'])
}

fn io_error(path: &Path, source: std::io::Error) -> ContentError {
    ContentError::Io {
        path: PathBuf::from(path),
        source,
    }
}
