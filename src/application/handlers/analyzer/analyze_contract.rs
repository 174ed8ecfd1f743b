//! AnalyzeContractHandler - Command handler for contract uploads.

use std::sync::Arc;

use crate::domain::analyzer::{FixedAnalysisResult, UploadedDocument};
use crate::ports::{ContractIngestor, IngestError};

/// Command to analyze one uploaded contract.
#[derive(Debug, Clone)]
pub struct AnalyzeContractCommand {
    pub document: UploadedDocument,
}

/// Result of a successful analysis.
pub type AnalyzeContractResult = FixedAnalysisResult;

/// Handler for contract analysis.
pub struct AnalyzeContractHandler {
    ingestor: Arc<dyn ContractIngestor>,
}

impl AnalyzeContractHandler {
    pub fn new(ingestor: Arc<dyn ContractIngestor>) -> Self {
        Self { ingestor }
    }

    pub async fn handle(
        &self,
        cmd: AnalyzeContractCommand,
    ) -> Result<AnalyzeContractResult, IngestError> {
        match self.ingestor.analyze(&cmd.document).await {
            Ok(result) => {
                tracing::info!(
                    analysis_id = %result.analysis_id,
                    file_name = %result.file_name,
                    size_bytes = cmd.document.size_bytes,
                    "Contract analyzed"
                );
                Ok(result)
            }
            Err(e) => {
                tracing::warn!(
                    file_name = %cmd.document.file_name,
                    error = %e,
                    "Contract upload rejected"
                );
                Err(e)
            }
        }
    }
}
