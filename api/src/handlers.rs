use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use chat_system::file_encoder;
use chat_system::{ChatError, ErrorResponse};

use crate::attach_payload::AttachPayload;
use crate::conversation_snapshot::ConversationSnapshot;
use crate::input_payload::InputPayload;
use crate::sample_payload::SamplePickPayload;
use crate::samples::{SampleQuestion, SAMPLE_QUESTIONS};
use crate::AppState;

type HandlerError = (StatusCode, Json<ErrorResponse>);

pub async fn get_conversation(State(state): State<AppState>) -> Json<ConversationSnapshot> {
    Json(ConversationSnapshot::from(state.controller.snapshot().await))
}

pub async fn set_input(
    State(state): State<AppState>,
    Json(payload): Json<InputPayload>,
) -> Json<ConversationSnapshot> {
    state.controller.set_input(&payload.text).await;
    Json(ConversationSnapshot::from(state.controller.snapshot().await))
}

pub async fn send_message(State(state): State<AppState>) -> Json<ConversationSnapshot> {
    state.controller.send().await;
    Json(ConversationSnapshot::from(state.controller.snapshot().await))
}

pub async fn attach_document(
    State(state): State<AppState>,
    Json(payload): Json<AttachPayload>,
) -> Result<Json<ConversationSnapshot>, HandlerError> {
    let file = match file_encoder::from_base64_payload(&payload.name, &payload.mime_type, &payload.data)
    {
        Ok(file) => file,
        Err(err) => {
            log::warn!("Rejected upload of {}: {}", payload.name, err);
            // An unreadable payload also drops whatever was attached before;
            // an unsupported type leaves the conversation untouched.
            if matches!(err, ChatError::FileRead(_)) {
                state.controller.detach().await;
            }
            return Err(error_response(err));
        }
    };

    state.controller.attach(file).await;
    Ok(Json(ConversationSnapshot::from(
        state.controller.snapshot().await,
    )))
}

pub async fn detach_document(State(state): State<AppState>) -> Json<ConversationSnapshot> {
    state.controller.detach().await;
    Json(ConversationSnapshot::from(state.controller.snapshot().await))
}

pub async fn list_samples() -> Json<Vec<SampleQuestion>> {
    Json(SAMPLE_QUESTIONS.to_vec())
}

pub async fn pick_sample(
    State(state): State<AppState>,
    Json(payload): Json<SamplePickPayload>,
) -> Result<Json<ConversationSnapshot>, HandlerError> {
    let question = match SAMPLE_QUESTIONS.get(payload.index) {
        Some(sample) => sample.question,
        None => {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    status: "error".to_string(),
                    error: format!("no sample question at index {}", payload.index),
                }),
            ))
        }
    };

    state.controller.pick_sample(question).await;
    Ok(Json(ConversationSnapshot::from(
        state.controller.snapshot().await,
    )))
}

fn error_response(err: ChatError) -> HandlerError {
    let status = match err {
        ChatError::UnsupportedFileType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        ChatError::FileRead(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        Json(ErrorResponse {
            status: "error".to_string(),
            error: err.to_string(),
        }),
    )
}
