use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ChatError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageAuthor {
    User,
    Ai,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub author: MessageAuthor,
    pub text: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_error: bool,
}

impl ChatMessage {
    pub fn user(text: &str) -> Self {
        Self {
            author: MessageAuthor::User,
            text: text.to_string(),
            is_error: false,
        }
    }

    pub fn ai(text: &str) -> Self {
        Self {
            author: MessageAuthor::Ai,
            text: text.to_string(),
            is_error: false,
        }
    }

    pub fn ai_error(text: &str) -> Self {
        Self {
            author: MessageAuthor::Ai,
            text: text.to_string(),
            is_error: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadedFile {
    pub id: String,
    pub name: String,
    pub mime_type: String,
    pub data: String,
}

impl UploadedFile {
    pub fn new(name: &str, mime_type: &str, data: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            mime_type: mime_type.to_string(),
            data,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: String,
    pub error: String,
}

/// What `begin_send` decided to do with a send intent.
#[derive(Debug)]
pub enum SendAction {
    /// Empty input or a request already in flight. Nothing changed.
    Ignored,
    /// No document attached. An error turn was appended, no request goes out.
    Rejected(ChatError),
    /// A user turn was appended and the request should be dispatched.
    Dispatch {
        prompt: String,
        document: UploadedFile,
    },
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ConversationState {
    pub history: Vec<ChatMessage>,
    pub pending: bool,
    pub input: String,
    pub attached: Option<UploadedFile>,
    pub last_error: Option<String>,
}

impl ConversationState {
    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
    }

    /// Replace the attachment and restart the conversation with a single
    /// welcome turn naming the new file.
    pub fn attach_document(&mut self, file: UploadedFile) {
        self.history.clear();
        self.history.push(ChatMessage::ai(&format!(
            "I've loaded \"{}\". Ask me anything about its contents.",
            file.name
        )));
        self.last_error = None;
        self.attached = Some(file);
    }

    /// Clear the attachment. History is left untouched.
    pub fn detach_document(&mut self) {
        self.attached = None;
    }

    /// The Idle -> AwaitingResponse transition. Guards first: a blank input
    /// or an in-flight request is ignored outright, a missing attachment is
    /// answered with an inline error turn instead of a request.
    pub fn begin_send(&mut self) -> SendAction {
        if self.input.trim().is_empty() || self.pending {
            return SendAction::Ignored;
        }

        let document = match self.attached.clone() {
            Some(document) => document,
            None => {
                self.history.push(ChatMessage::ai_error(
                    "Please upload a PDF document before asking a question.",
                ));
                return SendAction::Rejected(ChatError::MissingAttachment);
            }
        };

        let prompt = self.input.clone();
        self.history.push(ChatMessage::user(&prompt));
        self.input.clear();
        self.last_error = None;
        self.pending = true;

        SendAction::Dispatch { prompt, document }
    }

    /// The AwaitingResponse -> Idle transition. Applied to whatever history
    /// exists when the resolution lands, even if the attachment changed in
    /// the meantime.
    pub fn finish_send(&mut self, outcome: Result<String, ChatError>) {
        match outcome {
            Ok(text) => {
                self.history.push(ChatMessage::ai(&text));
            }
            Err(err) => {
                let message = err.to_string();
                self.history.push(ChatMessage::ai_error(&format!(
                    "Sorry, something went wrong. {}",
                    message
                )));
                self.last_error = Some(message);
            }
        }
        self.pending = false;
    }
}
