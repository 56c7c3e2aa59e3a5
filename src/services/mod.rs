pub mod analysis_service;
pub mod competitor_service;
pub mod gemini_service;

pub use analysis_service::*;
pub use competitor_service::*;
pub use gemini_service::*;
