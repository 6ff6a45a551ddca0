// src/routes/chat.rs
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tokio::task::JoinHandle;
use tracing::Instrument;
use uuid::Uuid;

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse, StatusResponse},
    state::SharedState,
};

pub async fn status_handler(State(state): State<SharedState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "Server is running".to_string(),
        ai_available: state.responder.is_available(),
    })
}

pub async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(ChatRequest { message }) = payload?;

    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("chat", %request_id, message_len = message.len());
    let responder = state.responder.clone();

    // A panic inside the responder surfaces here as a JoinError instead of
    // tearing down the connection. Dropping the handler aborts the task.
    let mut task = AbortOnDrop(tokio::spawn(
        async move { responder.respond(&message).await }.instrument(span),
    ));
    let response = (&mut task.0)
        .await
        .map_err(|e| {
            tracing::error!(%request_id, error = %e, "error in chat endpoint");
            AppError::Internal(e.to_string())
        })?;

    Ok(Json(ChatResponse { response }))
}

struct AbortOnDrop<T>(JoinHandle<T>);

impl<T> Drop for AbortOnDrop<T> {
    fn drop(&mut self) {
        self.0.abort();
    }
}
