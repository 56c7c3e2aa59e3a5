use reqwest::{Client, StatusCode, Url};
use scraper::{Html, Selector};
use std::time::Duration;
use thiserror::Error;

use crate::config::ScraperSettings;
use crate::models::{CompetitorContext, NO_TITLE_FOUND};
use crate::utils::normalize_url;

#[derive(Error, Debug)]
pub enum CompetitorError {
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("competitor site returned HTTP {0}")]
    Status(StatusCode),

    #[error(transparent)]
    Request(#[from] reqwest::Error),
}

/// Fetches a competitor page and summarises it by its title.
#[derive(Clone)]
pub struct CompetitorService {
    client: Client,
}

impl CompetitorService {
    pub fn new(settings: &ScraperSettings) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(settings.timeout_ms))
            .user_agent(settings.user_agent.clone())
            .build()?;

        Ok(Self { client })
    }

    /// Never fails: fetch problems become [`CompetitorContext::Unavailable`].
    pub async fn context(&self, competitor_url: Option<&str>) -> CompetitorContext {
        let Some(raw_url) = competitor_url.map(str::trim).filter(|u| !u.is_empty()) else {
            return CompetitorContext::NotProvided;
        };

        match self.fetch_title(raw_url).await {
            Ok(title) => {
                tracing::debug!(url = %raw_url, %title, "Extracted competitor title");
                CompetitorContext::Title(title)
            }
            Err(e) => {
                tracing::warn!(url = %raw_url, error = %e, "Competitor analysis failed");
                CompetitorContext::Unavailable(e.to_string())
            }
        }
    }

    pub async fn fetch_title(&self, raw_url: &str) -> Result<String, CompetitorError> {
        let normalized = normalize_url(raw_url);
        let url = Url::parse(&normalized).map_err(|e| CompetitorError::InvalidUrl {
            url: normalized.clone(),
            reason: e.to_string(),
        })?;

        let response = self.client.get(url).send().await?;
        if response.status() != StatusCode::OK {
            return Err(CompetitorError::Status(response.status()));
        }

        let body = response.text().await?;
        Ok(extract_title(&body).unwrap_or_else(|| NO_TITLE_FOUND.to_string()))
    }
}

/// Text of the first `<title>` element, trimmed.
pub fn extract_title(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("title").ok()?;
    document
        .select(&selector)
        .next()
        .map(|title| title.text().collect::<String>().trim().to_string())
}
