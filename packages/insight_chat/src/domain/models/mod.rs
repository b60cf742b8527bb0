pub mod conversation;
pub mod query_result;
pub mod render_plan;
pub mod row;

pub use conversation::ConversationTurn;
pub use query_result::{QueryResult, VisualizationHint};
pub use render_plan::RenderPlan;
pub use row::{ColumnRole, MeasureKind, Row, ScalarValue};
