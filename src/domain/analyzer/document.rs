//! Uploaded contract documents.

use serde::Serialize;
use std::fmt;
use std::path::Path;

/// File types the analyzer accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Pdf,
    Docx,
    Txt,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 3] = [DocumentKind::Pdf, DocumentKind::Docx, DocumentKind::Txt];

    pub fn extension(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => "pdf",
            DocumentKind::Docx => "docx",
            DocumentKind::Txt => "txt",
        }
    }

    /// Detects the kind from a file name's extension, ignoring case.
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let extension = Path::new(file_name).extension()?.to_str()?;
        Self::ALL
            .into_iter()
            .find(|kind| kind.extension().eq_ignore_ascii_case(extension))
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Metadata of an uploaded document. The content itself is not retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedDocument {
    pub file_name: String,
    pub content_type: Option<String>,
    pub size_bytes: usize,
}

impl UploadedDocument {
    pub fn new(
        file_name: impl Into<String>,
        content_type: Option<String>,
        size_bytes: usize,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type,
            size_bytes,
        }
    }

    pub fn kind(&self) -> Option<DocumentKind> {
        DocumentKind::from_file_name(&self.file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_supported_extensions() {
        assert_eq!(DocumentKind::from_file_name("contract.pdf"), Some(DocumentKind::Pdf));
        assert_eq!(DocumentKind::from_file_name("terms.DOCX"), Some(DocumentKind::Docx));
        assert_eq!(
            DocumentKind::from_file_name("notes.v2.txt"),
            Some(DocumentKind::Txt)
        );
    }

    #[test]
    fn rejects_other_or_missing_extensions() {
        assert_eq!(DocumentKind::from_file_name("contract.exe"), None);
        assert_eq!(DocumentKind::from_file_name("contract"), None);
        assert_eq!(DocumentKind::from_file_name(""), None);
    }

    #[test]
    fn uploaded_document_reports_kind() {
        let doc = UploadedDocument::new("bcbs.pdf", Some("application/pdf".to_string()), 2048);
        assert_eq!(doc.kind(), Some(DocumentKind::Pdf));
        assert_eq!(doc.size_bytes, 2048);
    }
}
