use actix_web::{web, HttpResponse};
use tracing::{error, info};
use uuid::Uuid;
use validator::Validate;

use crate::errors::AnalyzeError;
use crate::extractors::GeminiCredential;
use crate::models::AnalysisRequest;
use crate::AppState;

#[tracing::instrument(
    name = "analyze",
    skip_all,
    fields(request_id = %Uuid::new_v4(), domain = %req.domain)
)]
pub async fn analyze(
    state: web::Data<AppState>,
    credential: GeminiCredential,
    req: web::Json<AnalysisRequest>,
) -> Result<HttpResponse, AnalyzeError> {
    req.validate()
        .map_err(|e| AnalyzeError::InvalidRequest(e.to_string()))?;

    let model = state.model_provider.connect(credential.expose())?;

    info!(
        has_competitor = req.competitor_url().is_some(),
        "Running strategy analysis"
    );

    match state.analysis_service.analyze(model.as_ref(), &req).await {
        Ok(result) => Ok(HttpResponse::Ok().json(result)),
        Err(e) => {
            error!(error = %e, "AI generation failed");
            Err(e.into())
        }
    }
}
