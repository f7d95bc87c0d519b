use super::DocumentDescriptor;

const PREVIEW_ROOT: &str = "/images/previews";

/// Thumbnail path for a document, derived from its file name and category.
///
/// Only PDFs and certificates whose href ends in a `.pdf` file get one. The
/// thumbnail may not exist on disk; pages render without it in that case.
pub fn preview_src(document: &DocumentDescriptor) -> Option<String> {
    if !document.kind.is_pdf_like() {
        return None;
    }

    let file_name = document.href.rsplit('/').next()?;
    let stem = file_name.strip_suffix(".pdf")?;
    if stem.is_empty() {
        return None;
    }

    Some(format!(
        "{PREVIEW_ROOT}/{}/{stem}.png",
        document.category.preview_dir()
    ))
}

/// Lower-cased file name without its extension, used to pair images with documents.
pub fn base_name(input: &str) -> String {
    let file_name = input.rsplit('/').next().unwrap_or_default();
    let stem = match file_name.rfind('.') {
        Some(pos) if pos > 0 => &file_name[..pos],
        _ => file_name,
    };
    stem.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Category, DocumentKind};

    fn document(href: &str, kind: DocumentKind, category: Category) -> DocumentDescriptor {
        DocumentDescriptor {
            title: "Doc".to_string(),
            card_title: None,
            href: href.to_string(),
            kind,
            size_mb: 1.0,
            category,
            external: false,
        }
    }

    #[test]
    fn test_academic_pdf_preview() {
        let doc = document(
            "/documents/academic/report.pdf",
            DocumentKind::Pdf,
            Category::AcademicReport,
        );
        assert_eq!(
            preview_src(&doc).as_deref(),
            Some("/images/previews/academic-reports/report.png")
        );
    }

    #[test]
    fn test_certificate_preview() {
        let doc = document(
            "/documents/cfa-level-1.pdf",
            DocumentKind::Certificate,
            Category::Competition,
        );
        assert_eq!(
            preview_src(&doc).as_deref(),
            Some("/images/previews/competition/cfa-level-1.png")
        );
    }

    #[test]
    fn test_no_preview_for_spreadsheets_or_non_pdf_hrefs() {
        let xlsx = document("/documents/model.xlsx", DocumentKind::Xlsx, Category::FinancialModeling);
        assert_eq!(preview_src(&xlsx), None);

        let odd = document("/documents/scan.jpg", DocumentKind::Pdf, Category::IndustryResearch);
        assert_eq!(preview_src(&odd), None);
    }

    #[test]
    fn test_base_name() {
        assert_eq!(base_name("/images/previews/academic-reports/Report.png"), "report");
        assert_eq!(base_name("/documents/report.final.pdf"), "report.final");
        assert_eq!(base_name("noext"), "noext");
        assert_eq!(base_name(".hidden"), ".hidden");
    }
}
