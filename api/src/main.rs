mod attach_payload;
mod conversation_snapshot;
mod handlers;
mod input_payload;
mod sample_payload;
mod samples;

use anyhow::Context;
use axum::routing::{get, post};
use axum::Router;
use std::env;
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use chat_system::file_encoder;
use chat_system::{ChatController, GeminiService, UploadedFile};

#[derive(Clone)]
pub struct AppState {
    pub controller: ChatController,
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    env_logger::init();

    let query_service = match GeminiService::new() {
        Ok(service) => Arc::new(service),
        Err(e) => {
            eprintln!("Failed to initialize the AI service: {}", e);
            std::process::exit(1);
        }
    };

    let controller = match preloaded_document() {
        Ok(Some(document)) => {
            log::info!("Serving preloaded document: {}", document.name);
            ChatController::with_document(query_service, document)
        }
        Ok(None) => ChatController::new(query_service),
        Err(e) => {
            eprintln!("Failed to load the preloaded document: {}", e);
            std::process::exit(1);
        }
    };

    let state = AppState { controller };

    let app = Router::new()
        .route("/conversation", get(handlers::get_conversation))
        .route("/input", post(handlers::set_input))
        .route("/send", post(handlers::send_message))
        .route(
            "/attach",
            post(handlers::attach_document).delete(handlers::detach_document),
        )
        .route("/samples", get(handlers::list_samples))
        .route("/samples/pick", post(handlers::pick_sample))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
    println!("Listening on {}", listener.local_addr().unwrap());
    axum::serve(listener, app).await.unwrap();
}

/// The preloaded-document variant: when `HANDBOOK_PDF` names a file, it is
/// encoded once here and the conversation starts with it attached. A path
/// that cannot be encoded is a fatal startup error, not a runtime one.
fn preloaded_document() -> anyhow::Result<Option<UploadedFile>> {
    let path = match env::var("HANDBOOK_PDF") {
        Ok(path) => path,
        Err(_) => return Ok(None),
    };

    let document = file_encoder::encode_pdf_file(Path::new(&path))
        .with_context(|| format!("could not load handbook from {}", path))?;

    Ok(Some(document))
}
