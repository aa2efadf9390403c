use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::{ConversationState, SendAction, UploadedFile};
use crate::query_service::QueryService;

/// Owns the conversation and drives the query service. State lives behind a
/// lock that is NOT held across the outbound request: `begin_send` runs under
/// it, the await runs lock-free, and `finish_send` reacquires. The `pending`
/// flag, not queuing, keeps requests to one at a time.
#[derive(Clone)]
pub struct ChatController {
    state: Arc<RwLock<ConversationState>>,
    query_service: Arc<dyn QueryService>,
}

impl ChatController {
    pub fn new(query_service: Arc<dyn QueryService>) -> Self {
        Self {
            state: Arc::new(RwLock::new(ConversationState::default())),
            query_service,
        }
    }

    /// Start with a document already attached. This is the preloaded variant:
    /// the conversation opens empty, the guard in `begin_send` is always
    /// satisfied, and attach/detach keep working as usual.
    pub fn with_document(query_service: Arc<dyn QueryService>, document: UploadedFile) -> Self {
        let mut state = ConversationState::default();
        state.attached = Some(document);

        Self {
            state: Arc::new(RwLock::new(state)),
            query_service,
        }
    }

    pub async fn snapshot(&self) -> ConversationState {
        self.state.read().await.clone()
    }

    pub async fn set_input(&self, text: &str) {
        self.state.write().await.set_input(text);
    }

    /// Sample questions only populate the input field, they never send.
    pub async fn pick_sample(&self, question: &str) {
        self.state.write().await.set_input(question);
    }

    pub async fn attach(&self, file: UploadedFile) {
        log::info!("Attached document: {}", file.name);
        self.state.write().await.attach_document(file);
    }

    pub async fn detach(&self) {
        self.state.write().await.detach_document();
    }

    pub async fn send(&self) {
        let action = self.state.write().await.begin_send();

        let (prompt, document) = match action {
            SendAction::Ignored => return,
            SendAction::Rejected(err) => {
                log::warn!("Send refused: {}", err);
                return;
            }
            SendAction::Dispatch { prompt, document } => (prompt, document),
        };

        log::info!("Asking about {}", document.name);

        let outcome = self
            .query_service
            .ask_with_document(&prompt, &document)
            .await;

        if let Err(err) = &outcome {
            log::error!("AI query failed: {}", err);
        }

        self.state.write().await.finish_send(outcome);
    }
}
