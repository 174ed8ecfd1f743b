//! HTTP handlers for the contract analyzer.

use std::sync::Arc;

use axum::extract::multipart::MultipartError;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Json, Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use crate::application::handlers::{AnalyzeContractCommand, AnalyzeContractHandler};
use crate::domain::analyzer::{DocumentKind, UploadedDocument};
use crate::domain::foundation::ErrorCode;
use crate::ports::{ContractIngestor, IngestError};

use super::super::error::ErrorResponse;

/// Multipart field carrying the contract.
pub const UPLOAD_FIELD: &str = "file";

const OVERSIZE_BODY_MESSAGE: &str = "Upload is larger than the configured size limit";

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Analyzer API error that implements IntoResponse.
#[derive(Debug)]
pub enum AnalyzerApiError {
    Rejected(IngestError),
    MalformedUpload { status: StatusCode, message: String },
}

impl IntoResponse for AnalyzerApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            AnalyzerApiError::Rejected(err) => rejection_response(&err),
            AnalyzerApiError::MalformedUpload { status, message } => {
                let error = if status == StatusCode::PAYLOAD_TOO_LARGE {
                    ErrorResponse::new(ErrorCode::FileTooLarge, message)
                } else {
                    ErrorResponse::malformed(message)
                };
                (status, error)
            }
        };
        (status, Json(error)).into_response()
    }
}

fn rejection_response(err: &IngestError) -> (StatusCode, ErrorResponse) {
    match err {
        IngestError::MissingFile => (
            StatusCode::BAD_REQUEST,
            ErrorResponse::new(ErrorCode::MissingFile, err.to_string())
                .with_details(json!({ "field": UPLOAD_FIELD })),
        ),
        IngestError::UnsupportedFileType(_) => {
            let allowed: Vec<&str> = DocumentKind::ALL.iter().map(|k| k.extension()).collect();
            (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new(ErrorCode::UnsupportedFileType, err.to_string())
                    .with_details(json!({ "allowed": allowed })),
            )
        }
        IngestError::FileTooLarge { size, limit } => (
            StatusCode::PAYLOAD_TOO_LARGE,
            ErrorResponse::new(ErrorCode::FileTooLarge, err.to_string())
                .with_details(json!({ "size": size, "limit": limit })),
        ),
    }
}

impl From<IngestError> for AnalyzerApiError {
    fn from(err: IngestError) -> Self {
        AnalyzerApiError::Rejected(err)
    }
}

impl From<MultipartError> for AnalyzerApiError {
    fn from(err: MultipartError) -> Self {
        let status = err.status();
        let message = if status == StatusCode::PAYLOAD_TOO_LARGE {
            OVERSIZE_BODY_MESSAGE.to_string()
        } else {
            err.body_text()
        };
        AnalyzerApiError::MalformedUpload { status, message }
    }
}

impl From<MultipartRejection> for AnalyzerApiError {
    fn from(rejection: MultipartRejection) -> Self {
        AnalyzerApiError::MalformedUpload {
            status: StatusCode::BAD_REQUEST,
            message: rejection.body_text(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing analyzer dependencies.
#[derive(Clone)]
pub struct AnalyzerAppState {
    pub ingestor: Arc<dyn ContractIngestor>,
}

impl AnalyzerAppState {
    pub fn new(ingestor: Arc<dyn ContractIngestor>) -> Self {
        Self { ingestor }
    }

    pub fn analyze_handler(&self) -> AnalyzeContractHandler {
        AnalyzeContractHandler::new(self.ingestor.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/contracts/analyze
pub async fn analyze_contract(
    State(state): State<AnalyzerAppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, AnalyzerApiError> {
    let mut multipart = multipart?;
    let mut document = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await?;
        document = Some(UploadedDocument::new(file_name, content_type, bytes.len()));
        break;
    }

    let document = document.ok_or(IngestError::MissingFile)?;
    let result = state
        .analyze_handler()
        .handle(AnalyzeContractCommand { document })
        .await?;

    Ok((StatusCode::OK, Json(result)))
}
