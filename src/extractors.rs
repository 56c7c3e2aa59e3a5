use actix_web::{dev::Payload, FromRequest, HttpRequest};
use futures_util::future::{err, ok, Ready};

use crate::errors::AnalyzeError;

pub const CREDENTIAL_HEADER: &str = "x-gemini-api-key";

/// The caller's Gemini API key, taken from [`CREDENTIAL_HEADER`].
///
/// Extraction runs before the JSON body, so a missing key is reported as 401
/// even when the body is malformed. Not `Debug`: the key must never reach logs.
pub struct GeminiCredential(String);

impl GeminiCredential {
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl FromRequest for GeminiCredential {
    type Error = AnalyzeError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let Some(value) = req.headers().get(CREDENTIAL_HEADER) else {
            return err(AnalyzeError::MissingCredential);
        };

        match value.to_str() {
            Ok(key) if key.trim().is_empty() => err(AnalyzeError::MissingCredential),
            Ok(key) => ok(GeminiCredential(key.to_string())),
            Err(_) => err(AnalyzeError::BadCredential(
                "API key contains non-ASCII characters".to_string(),
            )),
        }
    }
}
