use crate::models::{AnalysisRequest, AnalysisResult};
use crate::services::{CompetitorService, GenerativeModel, ModelError};
use crate::utils::{generate_analysis_prompt, strip_json_fences};

#[derive(Clone)]
pub struct AnalysisService {
    competitor_service: CompetitorService,
}

impl AnalysisService {
    pub fn new(competitor_service: CompetitorService) -> Self {
        Self { competitor_service }
    }

    /// Competitor lookup, then prompt, then model call. Only the model call can fail.
    pub async fn analyze(
        &self,
        model: &dyn GenerativeModel,
        req: &AnalysisRequest,
    ) -> Result<AnalysisResult, ModelError> {
        let competitor = self.competitor_service.context(req.competitor_url()).await;
        let prompt = generate_analysis_prompt(&req.domain, &req.persona, &competitor);

        let raw = model.generate_content(&prompt).await?;
        tracing::debug!(raw_len = raw.len(), "Model response received");

        Ok(AnalysisResult {
            result: strip_json_fences(&raw),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScraperSettings;
    use crate::services::MockGenerativeModel;

    fn service() -> AnalysisService {
        AnalysisService::new(
            CompetitorService::new(&ScraperSettings {
                timeout_ms: 500,
                user_agent: "Mozilla/5.0".to_string(),
            })
            .unwrap(),
        )
    }

    fn request(competitor_url: Option<&str>) -> AnalysisRequest {
        AnalysisRequest {
            domain: "example.com".to_string(),
            competitor_url: competitor_url.map(str::to_string),
            persona: "budget traveler".to_string(),
        }
    }

    #[actix_rt::test]
    async fn prompts_without_competitor_and_unwraps_fences() {
        let mut model = MockGenerativeModel::new();
        model
            .expect_generate_content()
            .withf(|prompt: &str| {
                prompt.contains("'example.com'")
                    && prompt.contains("'budget traveler'")
                    && prompt.contains("Competitor Context: No competitor data provided.")
            })
            .times(1)
            .returning(|_| Ok("```json\n{\"gap_analysis\":\"g\"}\n```".to_string()));

        let result = service().analyze(&model, &request(None)).await.unwrap();
        assert_eq!(result.result, "{\"gap_analysis\":\"g\"}");
    }

    #[actix_rt::test]
    async fn failed_competitor_fetch_still_reaches_model() {
        let mut model = MockGenerativeModel::new();
        model
            .expect_generate_content()
            .withf(|prompt: &str| prompt.contains("Could not analyze competitor:"))
            .times(1)
            .returning(|_| Ok("{}".to_string()));

        let result = service()
            .analyze(&model, &request(Some("http://127.0.0.1:1")))
            .await
            .unwrap();
        assert_eq!(result.result, "{}");
    }

    #[actix_rt::test]
    async fn model_failure_propagates() {
        let mut model = MockGenerativeModel::new();
        model
            .expect_generate_content()
            .times(1)
            .returning(|_| Err(ModelError::EmptyResponse));

        let err = service().analyze(&model, &request(None)).await.unwrap_err();
        assert!(matches!(err, ModelError::EmptyResponse));
    }
}
