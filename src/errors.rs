use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::models::ErrorResponse;
use crate::services::{CredentialError, ModelError};

#[derive(Error, Debug)]
pub enum AnalyzeError {
    #[error("Missing Gemini API Key in request headers.")]
    MissingCredential,

    #[error("API Key configuration error: {0}")]
    BadCredential(String),

    #[error("Validation error: {0}")]
    InvalidRequest(String),

    #[error("AI generation failed: {0}")]
    Generation(#[from] ModelError),
}

impl From<CredentialError> for AnalyzeError {
    fn from(err: CredentialError) -> Self {
        AnalyzeError::BadCredential(err.to_string())
    }
}

impl AnalyzeError {
    fn label(&self) -> &'static str {
        match self {
            AnalyzeError::MissingCredential => "Unauthorized",
            AnalyzeError::BadCredential(_) => "Invalid API key",
            AnalyzeError::InvalidRequest(_) => "Invalid request",
            AnalyzeError::Generation(_) => "Generation failed",
        }
    }
}

impl ResponseError for AnalyzeError {
    fn status_code(&self) -> StatusCode {
        match self {
            AnalyzeError::MissingCredential => StatusCode::UNAUTHORIZED,
            AnalyzeError::BadCredential(_) | AnalyzeError::InvalidRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AnalyzeError::Generation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(ErrorResponse::with_details(self.label(), self.to_string()))
    }
}
