pub mod analytics_error;

pub use analytics_error::{AnalyticsError, AnalyticsResult};
