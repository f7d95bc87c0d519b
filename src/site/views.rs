//! Serializable view models consumed by the page templates.

use serde::Serialize;

use crate::carousel::CarouselView;
use crate::content::{ContentRecord, Deliverable, Glance};
use crate::humanize::format_size_mb;

/// Items shown on a project card before the list is cut off.
const CARD_PREVIEW_ITEMS: usize = 3;

#[derive(Debug, Clone, Serialize)]
pub struct ProjectCardView {
    pub slug: String,
    pub href: String,
    pub title: String,
    pub description: String,
    pub has_body: bool,
    pub link: String,
    pub category: Option<&'static str>,
    pub deliverables_label: Option<String>,
    pub at_a_glance: Vec<Glance>,
    pub highlights: Vec<String>,
    pub avatars: Vec<String>,
    pub carousel: Option<CarouselView>,
}

impl ProjectCardView {
    pub fn new(record: &ContentRecord, carousel: Option<CarouselView>) -> Self {
        let metadata = &record.metadata;
        let deliverables = metadata.deliverables.len();

        Self {
            slug: record.slug.clone(),
            href: project_href(&record.slug),
            title: metadata.title.clone(),
            description: metadata.summary.trim().to_string(),
            has_body: !record.body.trim().is_empty(),
            link: metadata.link.clone(),
            category: metadata.category.map(|category| category.label()),
            deliverables_label: (deliverables > 0)
                .then(|| crate::humanize::file_count_label(deliverables)),
            at_a_glance: metadata
                .at_a_glance
                .iter()
                .take(CARD_PREVIEW_ITEMS)
                .cloned()
                .collect(),
            highlights: metadata
                .highlights
                .iter()
                .take(CARD_PREVIEW_ITEMS)
                .cloned()
                .collect(),
            avatars: metadata
                .team
                .iter()
                .filter(|member| !member.avatar.is_empty())
                .map(|member| member.avatar.clone())
                .collect(),
            carousel,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DocumentView {
    pub title: String,
    pub display_title: String,
    pub href: String,
    pub size_label: String,
    pub open_label: &'static str,
    pub preview: Option<String>,
    pub external: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct DocumentGroupView {
    pub category: &'static str,
    pub count_label: String,
    /// Academic reports are laid out as a card grid, everything else as a list.
    pub academic: bool,
    pub documents: Vec<DocumentView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeliverableView {
    pub title: String,
    pub href: String,
    pub external: bool,
    pub size_label: Option<String>,
}

impl From<&Deliverable> for DeliverableView {
    fn from(deliverable: &Deliverable) -> Self {
        let size_label = deliverable.size_mb.map(|size| match deliverable.kind {
            Some(kind) => format!("{} · {}", kind.label(), format_size_mb(size)),
            None => format_size_mb(size),
        });

        Self {
            title: deliverable.title.clone(),
            href: deliverable.href.clone(),
            external: deliverable.external,
            size_label,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ExperienceView {
    pub company: String,
    pub timeframe: String,
    pub role: String,
    pub achievements: Vec<String>,
    pub carousel: Option<CarouselView>,
}

pub fn project_href(slug: &str) -> String {
    format!("/work/{slug}")
}

/// Split a document body into paragraphs on blank lines.
pub fn paragraphs(body: &str) -> Vec<String> {
    body.replace("\r\n", "\n")
        .split("\n\n")
        .map(|chunk| chunk.trim())
        .filter(|chunk| !chunk.is_empty())
        .map(|chunk| chunk.lines().map(str::trim).collect::<Vec<_>>().join(" "))
        .collect()
}
