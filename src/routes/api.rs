use crate::handlers;
use crate::models::ErrorResponse;
use actix_web::{error::InternalError, web, HttpResponse, ResponseError};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::health_check))
        .service(web::scope("/api").route("/analyze", web::post().to(handlers::analyze)));
}

/// Body limit plus JSON-shaped errors for undecodable request bodies.
pub fn json_config(max_json_payload_size: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(max_json_payload_size)
        .error_handler(|err, _req| {
            let detail = format!("Validation error: {}", err);
            let response = HttpResponse::build(err.status_code())
                .json(ErrorResponse::with_details("Invalid request", detail));
            InternalError::from_response(err, response).into()
        })
}
