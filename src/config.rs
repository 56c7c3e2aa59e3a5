use actix_web::http::{header::HeaderValue, Uri};
use anyhow::{anyhow, bail};
use serde::{Deserialize, Serialize};
use std::env;

pub const DEFAULT_ALLOWED_ORIGINS: [&str; 3] = [
    "https://seosiri-app-992.web.app",
    "http://localhost",
    "http://127.0.0.1",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub gemini: GeminiSettings,
    pub scraper: ScraperSettings,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
    pub max_json_payload_size: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiSettings {
    pub api_base_url: String,
    pub model_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScraperSettings {
    pub timeout_ms: u64,
    pub user_agent: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    pub allowed_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
                workers: num_cpus::get(),
                max_json_payload_size: 2_000_000, // 2MB
            },
            gemini: GeminiSettings {
                api_base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
                model_name: "gemini-pro".to_string(),
            },
            scraper: ScraperSettings {
                timeout_ms: 7_000,
                user_agent: "Mozilla/5.0".to_string(),
            },
            security: SecurityConfig {
                allowed_origins: DEFAULT_ALLOWED_ORIGINS
                    .iter()
                    .map(|origin| origin.to_string())
                    .collect(),
            },
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();

        let mut config = Config::default();

        // Server configuration
        if let Ok(host) = env::var("HOST") {
            config.server.host = host;
        }
        if let Ok(port) = env::var("PORT") {
            config.server.port = port.parse()?;
        }
        if let Ok(workers) = env::var("WORKERS") {
            config.server.workers = workers.parse()?;
        }
        if let Ok(max_json_payload_size) = env::var("MAX_JSON_PAYLOAD_SIZE") {
            config.server.max_json_payload_size = max_json_payload_size.parse()?;
        }

        // Gemini configuration
        if let Ok(api_base_url) = env::var("GEMINI_API_BASE_URL") {
            config.gemini.api_base_url = api_base_url.trim_end_matches('/').to_string();
        }
        if let Ok(model_name) = env::var("GEMINI_MODEL") {
            config.gemini.model_name = model_name;
        }

        // Competitor scraper configuration
        if let Ok(timeout_ms) = env::var("SCRAPER_TIMEOUT_MS") {
            config.scraper.timeout_ms = timeout_ms.parse()?;
        }
        if let Ok(user_agent) = env::var("SCRAPER_USER_AGENT") {
            config.scraper.user_agent = user_agent;
        }

        // Security configuration
        if let Ok(allowed_origins) = env::var("ALLOWED_ORIGINS") {
            config.security.allowed_origins = parse_origins(&allowed_origins)?;
        }

        Ok(config)
    }
}

/// Splits a comma-separated origin list. Each entry must be `*` or a bare
/// `scheme://host[:port]` origin, which is all a browser `Origin` header carries.
pub fn parse_origins(raw: &str) -> anyhow::Result<Vec<String>> {
    let origins: Vec<String> = raw
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    for origin in &origins {
        if origin != "*" {
            validate_origin(origin)?;
        }
    }

    Ok(origins)
}

fn validate_origin(origin: &str) -> anyhow::Result<()> {
    let authority = origin
        .strip_prefix("http://")
        .or_else(|| origin.strip_prefix("https://"))
        .ok_or_else(|| {
            anyhow!("invalid CORS origin '{}': expected http(s)://host or *", origin)
        })?;

    if authority.is_empty() || authority.contains(['/', '?', '#']) {
        bail!("invalid CORS origin '{}': expected http(s)://host[:port]", origin);
    }

    let uri: Uri = origin
        .parse()
        .map_err(|e| anyhow!("invalid CORS origin '{}': {}", origin, e))?;
    if uri.host().map_or(true, str::is_empty) {
        bail!("invalid CORS origin '{}': missing host", origin);
    }

    HeaderValue::from_str(origin)
        .map_err(|e| anyhow!("invalid CORS origin '{}': {}", origin, e))?;

    Ok(())
}
