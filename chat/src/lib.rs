pub mod controller;
pub mod error;
pub mod file_encoder;
pub mod gemini_service;
pub mod models;
pub mod query_service;
pub mod speech;

pub use controller::ChatController;
pub use error::ChatError;
pub use gemini_service::GeminiService;
pub use models::*;
pub use query_service::QueryService;
