use std::collections::HashMap;

use crate::content::{Category, ContentRecord};
use crate::documents::{DocumentLibrary, base_name};

pub const ACADEMIC_OVERVIEW_CAPTION: &str = "Academic Reports Overview";

/// Card titles of academic documents keyed by the base name of their href.
pub fn academic_card_titles(library: &DocumentLibrary) -> HashMap<String, String> {
    library
        .in_category(Category::AcademicReport)
        .map(|document| {
            (
                base_name(&document.href),
                document.display_title().to_string(),
            )
        })
        .collect()
}

/// Captions for a project's image slides.
///
/// Academic report projects open with an overview slide; each later image is
/// named after the academic document sharing its base name, or failing that
/// after the deliverable at the same position. Other projects get no captions.
pub fn slide_captions(record: &ContentRecord, card_titles: &HashMap<String, String>) -> Vec<String> {
    if record.metadata.category != Some(Category::AcademicReport) {
        return Vec::new();
    }

    record
        .metadata
        .images
        .iter()
        .enumerate()
        .map(|(index, image)| {
            if index == 0 {
                return ACADEMIC_OVERVIEW_CAPTION.to_string();
            }
            card_titles
                .get(&base_name(image))
                .cloned()
                .or_else(|| {
                    record
                        .metadata
                        .deliverables
                        .get(index - 1)
                        .map(|deliverable| deliverable.title.clone())
                })
                .unwrap_or_default()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Deliverable, parse_metadata};
    use std::path::Path;

    fn academic_record() -> ContentRecord {
        let metadata = parse_metadata(
            Some(
                r#"
title: Academic Reports
publishedAt: 2024-02-01
category: Academic Report
images:
  - /images/projects/academic-overview.png
  - /images/previews/academic-reports/thesis.png
  - /images/previews/academic-reports/essay.png
  - /images/previews/academic-reports/extra.png
"#,
            ),
            Path::new("academic.mdx"),
        )
        .unwrap();

        let mut record = ContentRecord {
            metadata,
            slug: "academic".to_string(),
            body: String::new(),
        };
        record.metadata.deliverables = vec![
            Deliverable {
                title: "Thesis deliverable".to_string(),
                href: "/documents/thesis.pdf".to_string(),
                ..Deliverable::default()
            },
            Deliverable {
                title: "Essay deliverable".to_string(),
                href: "/documents/essay.pdf".to_string(),
                ..Deliverable::default()
            },
        ];
        record
    }

    fn library() -> DocumentLibrary {
        DocumentLibrary::from_toml(
            r#"
[[documents]]
title = "A Long Thesis Title"
card_title = "Thesis"
href = "/documents/academic/Thesis.pdf"
type = "pdf"
category = "Academic Report"

[[documents]]
title = "Essay in industry"
href = "/documents/essay.pdf"
type = "pdf"
category = "Industry Research"
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_card_titles_only_academic() {
        let titles = academic_card_titles(&library());
        assert_eq!(titles.len(), 1);
        assert_eq!(titles.get("thesis").map(String::as_str), Some("Thesis"));
    }

    #[test]
    fn test_academic_captions() {
        let captions = slide_captions(&academic_record(), &academic_card_titles(&library()));
        assert_eq!(
            captions,
            vec![
                ACADEMIC_OVERVIEW_CAPTION.to_string(),
                "Thesis".to_string(),
                "Essay deliverable".to_string(),
                String::new(),
            ]
        );
    }

    #[test]
    fn test_other_categories_have_no_captions() {
        let mut record = academic_record();
        record.metadata.category = Some(Category::IndustryResearch);
        assert!(slide_captions(&record, &academic_card_titles(&library())).is_empty());
    }
}
