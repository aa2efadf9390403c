use serde::Serialize;

use chat_system::{ChatMessage, ConversationState};

/// What the frontend polls after every intent.
#[derive(Serialize)]
pub struct ConversationSnapshot {
    pub messages: Vec<ChatMessage>,
    pub pending: bool,
    pub input: String,
    pub attached_file: Option<String>,
    pub error: Option<String>,
}

impl From<ConversationState> for ConversationSnapshot {
    fn from(state: ConversationState) -> Self {
        Self {
            messages: state.history,
            pending: state.pending,
            input: state.input,
            attached_file: state.attached.map(|file| file.name),
            error: state.last_error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chat_system::UploadedFile;

    #[test]
    fn test_snapshot_exposes_file_name_only() {
        let mut state = ConversationState::default();
        state.attach_document(UploadedFile::new(
            "handbook.pdf",
            "application/pdf",
            "JVBERi0xLjQ=".to_string(),
        ));

        let snapshot = ConversationSnapshot::from(state);

        assert_eq!(snapshot.attached_file.as_deref(), Some("handbook.pdf"));
        assert_eq!(snapshot.messages.len(), 1);
        let value = serde_json::to_value(&snapshot).unwrap();
        assert!(value.get("attached_file").is_some());
        // Raw document bytes never leave the controller.
        assert!(value.to_string().find("JVBERi0xLjQ=").is_none());
    }
}
