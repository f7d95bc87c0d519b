use crate::content::ContentRecord;

/// Newest first. Records published at the same instant keep their relative order.
pub fn sort_by_published_desc(records: &mut [ContentRecord]) {
    records.sort_by(|a, b| b.metadata.published_at.cmp(&a.metadata.published_at));
}

/// Selection applied to a project listing: exclusions, newest-first ordering,
/// then an optional window.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectQuery {
    /// Slugs to leave out (exact match).
    pub exclude: Vec<String>,
    /// 1-based start and optional 1-based inclusive end.
    pub range: Option<(usize, Option<usize>)>,
}

impl ProjectQuery {
    pub fn all() -> Self {
        Self::default()
    }

    /// The first `count` projects.
    pub fn latest(count: usize) -> Self {
        Self {
            exclude: Vec::new(),
            range: Some((1, Some(count))),
        }
    }

    pub fn excluding(mut self, slug: impl Into<String>) -> Self {
        self.exclude.push(slug.into());
        self
    }

    pub fn apply(&self, mut records: Vec<ContentRecord>) -> Vec<ContentRecord> {
        if !self.exclude.is_empty() {
            records.retain(|record| !self.exclude.contains(&record.slug));
        }

        sort_by_published_desc(&mut records);

        let Some((start, end)) = self.range else {
            return records;
        };

        let len = records.len();
        let from = start.saturating_sub(1).min(len);
        let to = end.unwrap_or(len).min(len);
        if from >= to {
            return Vec::new();
        }

        records.drain(from..to).collect()
    }
}
