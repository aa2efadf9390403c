use async_trait::async_trait;

use crate::error::ChatError;
use crate::models::UploadedFile;

/// The single seam between the conversation controller and the hosted model.
/// One question, one document, one attempt; failures come back as
/// `ChatError::QueryFailed` and are never retried here.
#[async_trait]
pub trait QueryService: Send + Sync {
    async fn ask_with_document(
        &self,
        prompt: &str,
        document: &UploadedFile,
    ) -> Result<String, ChatError>;
}
