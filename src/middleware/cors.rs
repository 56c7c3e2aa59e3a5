use actix_cors::Cors;

use crate::config::SecurityConfig;

/// CORS policy for the configured origin allow-list. Methods and headers are
/// unrestricted and credentials are allowed; `*` opens the list to any origin.
pub fn build_cors(settings: &SecurityConfig) -> Cors {
    let cors = Cors::default()
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
        .max_age(3600);

    settings
        .allowed_origins
        .iter()
        .fold(cors, |cors, origin| {
            if origin == "*" {
                cors.allow_any_origin()
            } else {
                cors.allowed_origin(origin)
            }
        })
}
