use serde::Deserialize;

#[derive(Deserialize)]
pub struct SamplePickPayload {
    pub index: usize,
}
