pub mod config;
pub mod errors;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use std::sync::Arc;

use config::Config;
use services::{AnalysisService, CompetitorService, GeminiProvider, ModelProvider};

#[derive(Clone)]
pub struct AppState {
    pub analysis_service: AnalysisService,
    pub model_provider: Arc<dyn ModelProvider>,
}

impl AppState {
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let competitor_service = CompetitorService::new(&config.scraper)?;
        let gemini = GeminiProvider::new(config.gemini.clone())?;

        Ok(Self {
            analysis_service: AnalysisService::new(competitor_service),
            model_provider: Arc::new(gemini),
        })
    }
}
