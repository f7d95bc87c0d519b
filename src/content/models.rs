use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Project and document categories, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Industry Research")]
    IndustryResearch,
    #[serde(rename = "Financial Modeling")]
    FinancialModeling,
    #[serde(rename = "Academic Report")]
    AcademicReport,
    #[serde(rename = "Competition")]
    Competition,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::IndustryResearch,
        Category::FinancialModeling,
        Category::AcademicReport,
        Category::Competition,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::IndustryResearch => "Industry Research",
            Category::FinancialModeling => "Financial Modeling",
            Category::AcademicReport => "Academic Report",
            Category::Competition => "Competition",
        }
    }

    /// Directory under `/images/previews` holding thumbnails for this category.
    pub fn preview_dir(&self) -> &'static str {
        match self {
            Category::IndustryResearch => "industry-research",
            Category::FinancialModeling => "financial-modeling",
            Category::AcademicReport => "academic-reports",
            Category::Competition => "competition",
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(label.trim()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// File type of a downloadable document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Pdf,
    Xlsx,
    Certificate,
    #[default]
    #[serde(other)]
    Other,
}

impl DocumentKind {
    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => "PDF",
            DocumentKind::Xlsx => "XLSX",
            DocumentKind::Certificate => "CERTIFICATE",
            DocumentKind::Other => "OTHER",
        }
    }

    /// PDFs and certificates open in the browser's PDF viewer.
    pub fn is_pdf_like(&self) -> bool {
        matches!(self, DocumentKind::Pdf | DocumentKind::Certificate)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub avatar: String,
    #[serde(rename = "linkedIn")]
    pub linked_in: String,
}

/// Label/value pair shown in a project's "at a glance" strip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Glance {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Deliverable {
    pub title: String,
    pub href: String,
    #[serde(default, rename = "sizeMB")]
    pub size_mb: Option<f64>,
    #[serde(default)]
    pub external: bool,
    #[serde(default, rename = "type")]
    pub kind: Option<DocumentKind>,
}

/// Front-matter of one content document, with defaults applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metadata {
    pub title: String,
    pub subtitle: String,
    pub published_at: DateTime<Utc>,
    pub summary: String,
    pub highlights: Vec<String>,
    pub at_a_glance: Vec<Glance>,
    pub image: String,
    pub images: Vec<String>,
    pub tag: Vec<String>,
    pub team: Vec<TeamMember>,
    pub link: String,
    pub category: Option<Category>,
    pub deliverables: Vec<Deliverable>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentRecord {
    pub metadata: Metadata,
    /// File stem of the source document, unique within its directory.
    pub slug: String,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_and_dirs() {
        assert_eq!(Category::parse("Academic Report"), Some(Category::AcademicReport));
        assert_eq!(Category::parse(" competition "), Some(Category::Competition));
        assert_eq!(Category::parse("Poetry"), None);
        assert_eq!(Category::AcademicReport.preview_dir(), "academic-reports");
    }

    #[test]
    fn test_document_kind_deserialize() {
        #[derive(Deserialize)]
        struct Doc {
            kind: DocumentKind,
        }
        let doc: Doc = toml::from_str("kind = \"pdf\"").unwrap();
        assert_eq!(doc.kind, DocumentKind::Pdf);
        let doc: Doc = toml::from_str("kind = \"docx\"").unwrap();
        assert_eq!(doc.kind, DocumentKind::Other);
        assert!(DocumentKind::Certificate.is_pdf_like());
        assert!(!DocumentKind::Xlsx.is_pdf_like());
    }
}
