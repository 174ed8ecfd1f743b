//! Contract Ingestor Port - Uploaded contract analysis.
//!
//! Implementations receive the metadata of an uploaded document and return
//! an analysis. Document content is never part of the contract.

use async_trait::async_trait;

use crate::domain::analyzer::{FixedAnalysisResult, UploadedDocument};

/// Port for analyzing uploaded contracts.
///
/// # Contract
///
/// Implementations must:
/// - Reject uploads without a file name (`MissingFile`)
/// - Accept only pdf, docx and txt files (`UnsupportedFileType`)
/// - Reject uploads above their size limit (`FileTooLarge`)
/// - Never block the calling thread while waiting
#[async_trait]
pub trait ContractIngestor: Send + Sync {
    /// Analyzes an uploaded document.
    async fn analyze(&self, document: &UploadedDocument)
        -> Result<FixedAnalysisResult, IngestError>;
}

/// Errors that can occur when analyzing an upload
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IngestError {
    #[error("No contract file was uploaded")]
    MissingFile,

    #[error("Unsupported file type '{0}': upload a PDF, Word (.docx) or text file")]
    UnsupportedFileType(String),

    #[error("File is {size} bytes, larger than the {limit} byte limit")]
    FileTooLarge { size: usize, limit: usize },
}
