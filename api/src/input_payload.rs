use serde::Deserialize;

#[derive(Deserialize)]
pub struct InputPayload {
    pub text: String,
}
