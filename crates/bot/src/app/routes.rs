use axum::{
    Json, Router,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};

use crate::app::{AppState, dto, errors};

pub fn router() -> Router {
    Router::new().route("/messages", post(post_message))
}

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// Handle one chat message forwarded by the gateway.
pub async fn post_message(
    Extension(state): Extension<AppState>,
    Json(body): Json<dto::InboundMessage>,
) -> axum::response::Response {
    if state.shutdown.is_triggered() {
        return errors::shutting_down();
    }

    let reply = state.bot.handle(&body.text).await;
    if reply.shutdown {
        tracing::info!(chat_id = ?body.chat_id, "exit requested; shutting down");
        state.shutdown.trigger();
    }

    (
        StatusCode::OK,
        Json(dto::reply_to_outbound(body.chat_id, reply)),
    )
        .into_response()
}
