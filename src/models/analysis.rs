use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

pub const NO_TITLE_FOUND: &str = "No Title Found";

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AnalysisRequest {
    #[validate(length(min = 1, message = "domain must not be empty"))]
    pub domain: String,
    #[serde(default)]
    pub competitor_url: Option<String>,
    #[validate(length(min = 1, message = "persona must not be empty"))]
    pub persona: String,
}

impl AnalysisRequest {
    /// The competitor URL, if one was actually supplied.
    pub fn competitor_url(&self) -> Option<&str> {
        self.competitor_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub result: String,
}

/// What we managed to learn about the competitor before prompting the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompetitorContext {
    NotProvided,
    Title(String),
    Unavailable(String),
}

impl fmt::Display for CompetitorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompetitorContext::NotProvided => write!(f, "No competitor data provided"),
            CompetitorContext::Title(title) => write!(f, "Competitor's Page Title: {}", title),
            CompetitorContext::Unavailable(reason) => {
                write!(f, "Could not analyze competitor: {}", reason)
            }
        }
    }
}
