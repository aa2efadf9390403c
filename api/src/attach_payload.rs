use serde::Deserialize;

/// A document as the browser ships it: already base64-encoded client-side.
#[derive(Deserialize)]
pub struct AttachPayload {
    pub name: String,
    pub mime_type: String,
    pub data: String,
}
