use super::ExtractError;
use crate::models::{Section, SectionContent};
use lopdf::Document;

/// What to do with a page that has no extractable text: keep it with a
/// placeholder body, or drop it from the section list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PdfTextPolicy {
    #[default]
    Placeholder,
    SkipPage,
}

pub const NO_TEXT_PLACEHOLDER: &str = "Text extraction not supported";

/// One section per page, in page order. A failed whole-document decode is an
/// error; a single page without text follows `policy` instead of failing the
/// document. Section ids stay contiguous and zero-indexed even when pages
/// are skipped; titles keep the source page number.
pub fn extract_pdf_sections(
    bytes: &[u8],
    policy: PdfTextPolicy,
) -> Result<Vec<Section>, ExtractError> {
    let doc = Document::load_mem(bytes).map_err(|e| ExtractError::PdfDecode(e.to_string()))?;

    let mut sections = Vec::new();
    for page_number in doc.get_pages().keys().copied() {
        let text = match doc.extract_text(&[page_number]) {
            Ok(text) if !text.trim().is_empty() => Some(text),
            _ => None,
        };

        let body = match text {
            Some(text) => text,
            None => match policy {
                PdfTextPolicy::Placeholder => NO_TEXT_PLACEHOLDER.to_string(),
                PdfTextPolicy::SkipPage => continue,
            },
        };

        sections.push(Section {
            id: sections.len().to_string(),
            title: format!("Page {}", page_number),
            content: SectionContent::RawText(body),
        });
    }

    Ok(sections)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Object, Stream};

    /// Build a minimal PDF where each entry is a page; `Some(text)` pages
    /// carry one text-showing operation, `None` pages have an empty content
    /// stream.
    fn build_pdf(pages: &[Option<&str>]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids: Vec<Object> = Vec::new();
        for text in pages {
            let operations = match text {
                Some(text) => vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 12.into()]),
                    Operation::new("Td", vec![50.into(), 700.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ],
                None => vec![],
            };
            let content = Content { operations };
            let content_id =
                doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();
        bytes
    }

    #[test]
    fn test_one_section_per_page_in_order() {
        let bytes = build_pdf(&[Some("First page text"), Some("Second page text")]);
        let sections = extract_pdf_sections(&bytes, PdfTextPolicy::Placeholder).unwrap();

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].id, "0");
        assert_eq!(sections[0].title, "Page 1");
        assert_eq!(sections[1].id, "1");
        assert_eq!(sections[1].title, "Page 2");
        assert!(sections[0].content.as_display_text().contains("First page"));
        assert!(sections[1].content.as_display_text().contains("Second page"));
    }

    #[test]
    fn test_textless_page_gets_placeholder() {
        let bytes = build_pdf(&[Some("Readable"), None]);
        let sections = extract_pdf_sections(&bytes, PdfTextPolicy::Placeholder).unwrap();

        assert_eq!(sections.len(), 2);
        assert_eq!(
            sections[1].content,
            SectionContent::RawText(NO_TEXT_PLACEHOLDER.to_string())
        );
    }

    #[test]
    fn test_skip_policy_drops_textless_pages_and_renumbers_ids() {
        let bytes = build_pdf(&[None, Some("Only real page")]);
        let sections = extract_pdf_sections(&bytes, PdfTextPolicy::SkipPage).unwrap();

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].id, "0");
        assert_eq!(sections[0].title, "Page 2");
    }

    #[test]
    fn test_garbage_bytes_fail_decode() {
        let err = extract_pdf_sections(b"not a pdf at all", PdfTextPolicy::Placeholder)
            .unwrap_err();
        assert!(matches!(err, ExtractError::PdfDecode(_)));
    }
}
