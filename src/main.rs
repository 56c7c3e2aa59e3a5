use actix_web::{middleware::Logger, web, App, HttpServer};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use seosiri_intelligence::config::Config;
use seosiri_intelligence::handlers::not_found;
use seosiri_intelligence::middleware::build_cors;
use seosiri_intelligence::routes::api;
use seosiri_intelligence::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(config) => {
            info!("Configuration loaded successfully");
            config
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let state = match AppState::from_config(&config) {
        Ok(state) => state,
        Err(e) => {
            error!("Failed to initialize HTTP clients: {}", e);
            std::process::exit(1);
        }
    };

    info!(
        model = %config.gemini.model_name,
        origins = ?config.security.allowed_origins,
        "Starting SEOSiri Intelligence API on port {}",
        config.server.port
    );

    let security = config.security.clone();
    let max_json_payload_size = config.server.max_json_payload_size;

    // Create HTTP server
    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(api::json_config(max_json_payload_size))
            .wrap(build_cors(&security))
            .wrap(Logger::default())
            .configure(api::configure)
            .default_service(web::route().to(not_found))
    })
    .bind(format!("{}:{}", config.server.host, config.server.port))?;

    info!(
        "Server started successfully at http://{}:{}",
        config.server.host, config.server.port
    );

    server.workers(config.server.workers).run().await
}
