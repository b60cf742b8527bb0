//! The conversation transcript and its single in-flight query.
//!
//! One service instance owns one session: an append-only ordered list of
//! user/assistant turns plus the boolean guarding at-most-one outstanding
//! query. All mutation goes through `submit`; the presentation layer reads
//! snapshots and renders them.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::debug;

use crate::domain::models::{ConversationTurn, QueryResult};

use super::analytics_client::AnalyticsBackend;

#[derive(Default)]
struct ConversationState {
    transcript: Vec<ConversationTurn>,
    in_flight: bool,
}

pub struct ConversationService {
    backend: Arc<dyn AnalyticsBackend>,
    state: Mutex<ConversationState>,
}

impl ConversationService {
    pub fn new(backend: Arc<dyn AnalyticsBackend>) -> Self {
        Self {
            backend,
            state: Mutex::new(ConversationState::default()),
        }
    }

    /// Submits a question to the backend and appends the user turn and
    /// exactly one assistant turn.
    ///
    /// Blank input and submissions made while another query is in flight
    /// are silently ignored (returns `false`). The in-flight flag is set
    /// before the request is issued and cleared once it settles; the
    /// backend contract is infallible, so there is no path that leaves the
    /// flag set. There is no retry and no cancellation: a failed call
    /// produces one error turn and control returns to the caller.
    pub async fn submit(&self, query: &str) -> bool {
        let query = query.trim();
        if query.is_empty() {
            return false;
        }

        {
            let mut state = self.state.lock().await;
            if state.in_flight {
                debug!(%query, "ignoring submission while a query is in flight");
                return false;
            }
            state.in_flight = true;
            state.transcript.push(ConversationTurn::User(query.to_string()));
        }

        // The network call is the sole suspension point. The lock is not
        // held across it so readers can observe the in-flight state.
        let result = self.backend.ask(query).await;

        let mut state = self.state.lock().await;
        state.transcript.push(ConversationTurn::Assistant(result));
        state.in_flight = false;
        true
    }

    /// An ordered copy of the transcript as it stands.
    pub async fn snapshot(&self) -> Vec<ConversationTurn> {
        self.state.lock().await.transcript.clone()
    }

    pub async fn is_in_flight(&self) -> bool {
        self.state.lock().await.in_flight
    }

    /// The most recent assistant answer, if any.
    pub async fn last_result(&self) -> Option<QueryResult> {
        self.state
            .lock()
            .await
            .transcript
            .iter()
            .rev()
            .find_map(|turn| turn.as_result().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::VisualizationHint;
    use async_trait::async_trait;

    /// Answers every question with a fixed result, echoing the query back.
    struct CannedBackend {
        result: QueryResult,
    }

    #[async_trait]
    impl AnalyticsBackend for CannedBackend {
        async fn ask(&self, query: &str) -> QueryResult {
            let mut result = self.result.clone();
            result.query = query.to_string();
            result
        }
    }

    fn canned_service() -> ConversationService {
        let result = QueryResult {
            query: String::new(),
            generated_query: "SELECT 1;".to_string(),
            rows: Vec::new(),
            visualization_hint: VisualizationHint::Table,
            error: None,
            title: None,
            description: None,
        };
        ConversationService::new(Arc::new(CannedBackend { result }))
    }

    #[tokio::test]
    async fn test_submit_appends_user_then_assistant() {
        let service = canned_service();

        let accepted = service.submit("faturamento de hoje").await;
        assert!(accepted);

        let transcript = service.snapshot().await;
        assert_eq!(transcript.len(), 2);
        assert!(transcript[0].is_user());
        assert!(transcript[1].is_assistant());
        assert_eq!(
            transcript[1].as_result().unwrap().query,
            "faturamento de hoje"
        );
    }

    #[tokio::test]
    async fn test_blank_input_is_ignored() {
        let service = canned_service();

        assert!(!service.submit("").await);
        assert!(!service.submit("   ").await);
        assert!(service.snapshot().await.is_empty());
    }

    #[tokio::test]
    async fn test_n_submissions_yield_2n_turns_in_order() {
        let service = canned_service();

        for question in ["primeira", "segunda", "terceira"] {
            assert!(service.submit(question).await);
        }

        let transcript = service.snapshot().await;
        assert_eq!(transcript.len(), 6);
        for pair in transcript.chunks(2) {
            assert!(pair[0].is_user());
            assert!(pair[1].is_assistant());
        }
        assert_eq!(
            transcript[0],
            ConversationTurn::User("primeira".to_string())
        );
        assert_eq!(transcript[4], ConversationTurn::User("terceira".to_string()));
    }

    #[tokio::test]
    async fn test_flag_clear_after_completion() {
        let service = canned_service();

        service.submit("pergunta").await;
        assert!(!service.is_in_flight().await);
    }

    #[tokio::test]
    async fn test_input_is_trimmed() {
        let service = canned_service();

        service.submit("  faturamento  ").await;
        let transcript = service.snapshot().await;
        assert_eq!(
            transcript[0],
            ConversationTurn::User("faturamento".to_string())
        );
    }
}
