pub mod pdf;
pub mod tabular;

use crate::models::{Section, SectionContent};
use crate::picker::file_extension;
use std::fs;
use std::path::Path;
use thiserror::Error;

pub use pdf::PdfTextPolicy;

/// Whole-file decode happens in memory; refuse anything past this bound
/// instead of reading it.
pub const MAX_DOCUMENT_BYTES: u64 = 16 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported file format: {0}. Please upload .csv, .txt, or .pdf files only")]
    UnsupportedType(String),

    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("File is {size} bytes, over the {limit} byte limit")]
    TooLarge { size: u64, limit: u64 },

    #[error("Failed to parse PDF content: {0}")]
    PdfDecode(String),

    #[error("File is not valid UTF-8 text")]
    NotText,
}

/// Extraction either yields sections or explicitly yields none; hard
/// failures travel as `ExtractError`. Callers branch on the variant rather
/// than parsing message strings.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractionOutcome {
    Sections(Vec<Section>),
    Empty,
}

impl ExtractionOutcome {
    fn from_sections(sections: Vec<Section>) -> Self {
        if sections.is_empty() {
            ExtractionOutcome::Empty
        } else {
            ExtractionOutcome::Sections(sections)
        }
    }
}

/// Type-dispatched extraction over the file's extension. Never panics past
/// this boundary: every failure mode is a typed error.
pub fn extract_sections(
    path: &Path,
    policy: PdfTextPolicy,
) -> Result<ExtractionOutcome, ExtractError> {
    let ext = file_extension(path).unwrap_or_default();

    let size = fs::metadata(path)?.len();
    if size > MAX_DOCUMENT_BYTES {
        return Err(ExtractError::TooLarge {
            size,
            limit: MAX_DOCUMENT_BYTES,
        });
    }

    match ext.as_str() {
        "pdf" => {
            let bytes = fs::read(path)?;
            let sections = pdf::extract_pdf_sections(&bytes, policy)?;
            Ok(ExtractionOutcome::from_sections(sections))
        }
        "csv" => {
            let content = read_text(path)?;
            let sections = tabular::extract_tabular_sections(&content);
            Ok(ExtractionOutcome::from_sections(sections))
        }
        "txt" => {
            let content = read_text(path)?;
            Ok(ExtractionOutcome::Sections(vec![text_file_section(content)]))
        }
        other => Err(ExtractError::UnsupportedType(other.to_string())),
    }
}

fn read_text(path: &Path) -> Result<String, ExtractError> {
    let bytes = fs::read(path)?;
    String::from_utf8(bytes).map_err(|_| ExtractError::NotText)
}

/// A plain text file is a single section holding the file verbatim.
fn text_file_section(content: String) -> Section {
    Section {
        id: "1".to_string(),
        title: "Text File Content".to_string(),
        content: SectionContent::RawText(content),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut f = fs::File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_txt_round_trips_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let body = "Line one\nLine two\n  indented tail  ";
        let path = write_file(&dir, "notes.txt", body);

        let outcome = extract_sections(&path, PdfTextPolicy::default()).unwrap();
        match outcome {
            ExtractionOutcome::Sections(sections) => {
                assert_eq!(sections.len(), 1);
                assert_eq!(sections[0].id, "1");
                assert_eq!(sections[0].title, "Text File Content");
                assert_eq!(sections[0].content, SectionContent::RawText(body.to_string()));
            }
            ExtractionOutcome::Empty => panic!("expected one section"),
        }
    }

    #[test]
    fn test_unsupported_extension_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "slides.docx", "whatever");

        let err = extract_sections(&path, PdfTextPolicy::default()).unwrap_err();
        assert!(matches!(err, ExtractError::UnsupportedType(ref ext) if ext == "docx"));
    }

    #[test]
    fn test_extension_dispatch_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "NOTES.TXT", "hello");

        let outcome = extract_sections(&path, PdfTextPolicy::default()).unwrap();
        assert!(matches!(outcome, ExtractionOutcome::Sections(_)));
    }

    #[test]
    fn test_csv_with_only_header_is_empty_outcome() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "empty.csv", "title,content\n");

        let outcome = extract_sections(&path, PdfTextPolicy::default()).unwrap();
        assert_eq!(outcome, ExtractionOutcome::Empty);
    }

    #[test]
    fn test_csv_sections_have_contiguous_zero_indexed_ids() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "book.csv", "title,body\nIntro,a\nMiddle,b\nEnd,c\n");

        let outcome = extract_sections(&path, PdfTextPolicy::default()).unwrap();
        let sections = match outcome {
            ExtractionOutcome::Sections(s) => s,
            ExtractionOutcome::Empty => panic!("expected sections"),
        };
        let ids: Vec<&str> = sections.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["0", "1", "2"]);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err =
            extract_sections(Path::new("no/such/file.txt"), PdfTextPolicy::default()).unwrap_err();
        assert!(matches!(err, ExtractError::Io(_)));
    }

    #[test]
    fn test_invalid_pdf_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "broken.pdf", "this is not a pdf");

        let err = extract_sections(&path, PdfTextPolicy::default()).unwrap_err();
        assert!(matches!(err, ExtractError::PdfDecode(_)));
    }
}
