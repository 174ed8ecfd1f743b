//! Contract ingestor returning the fixed analysis.

use async_trait::async_trait;
use std::time::Duration;

use crate::config::AnalyzerConfig;
use crate::domain::analyzer::{FixedAnalysisResult, UploadedDocument};
use crate::ports::{ContractIngestor, IngestError};

/// Accepts supported uploads and answers with [`FixedAnalysisResult::canned`].
#[derive(Debug, Clone)]
pub struct FixedContractIngestor {
    simulated_latency: Duration,
    max_upload_bytes: usize,
}

impl FixedContractIngestor {
    pub fn new(simulated_latency: Duration, max_upload_bytes: usize) -> Self {
        Self {
            simulated_latency,
            max_upload_bytes,
        }
    }

    pub fn from_config(config: &AnalyzerConfig) -> Self {
        Self::new(config.simulated_latency(), config.max_upload_bytes)
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_bytes
    }

    fn check(&self, document: &UploadedDocument) -> Result<(), IngestError> {
        if document.file_name.trim().is_empty() {
            return Err(IngestError::MissingFile);
        }
        if document.size_bytes > self.max_upload_bytes {
            return Err(IngestError::FileTooLarge {
                size: document.size_bytes,
                limit: self.max_upload_bytes,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl ContractIngestor for FixedContractIngestor {
    async fn analyze(
        &self,
        document: &UploadedDocument,
    ) -> Result<FixedAnalysisResult, IngestError> {
        self.check(document)?;
        let kind = document
            .kind()
            .ok_or_else(|| IngestError::UnsupportedFileType(document.file_name.clone()))?;

        if !self.simulated_latency.is_zero() {
            tokio::time::sleep(self.simulated_latency).await;
        }

        tracing::debug!(
            file_name = %document.file_name,
            kind = %kind,
            size_bytes = document.size_bytes,
            "Returning fixed contract analysis"
        );
        Ok(FixedAnalysisResult::canned(&document.file_name, kind))
    }
}
