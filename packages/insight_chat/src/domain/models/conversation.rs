use serde::{Deserialize, Serialize};

use super::query_result::QueryResult;

/// One entry of the conversation transcript: either the user's question or
/// the backend's complete answer. Turns are immutable once appended; a
/// failed request becomes a distinct assistant turn, never a mutation of a
/// pending one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content", rename_all = "lowercase")]
pub enum ConversationTurn {
    User(String),
    Assistant(QueryResult),
}

impl ConversationTurn {
    pub fn is_user(&self) -> bool {
        matches!(self, ConversationTurn::User(_))
    }

    pub fn is_assistant(&self) -> bool {
        matches!(self, ConversationTurn::Assistant(_))
    }

    pub fn as_result(&self) -> Option<&QueryResult> {
        match self {
            ConversationTurn::Assistant(result) => Some(result),
            ConversationTurn::User(_) => None,
        }
    }
}
