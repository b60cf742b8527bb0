pub mod analytics_client;
pub mod conversation_service;
pub mod schema_inference;
pub mod value_format;
pub mod visualization_selector;

pub use analytics_client::{AnalyticsBackend, HttpAnalyticsClient};
pub use conversation_service::ConversationService;
