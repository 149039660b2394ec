use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

pub fn shutting_down() -> axum::response::Response {
    json_error(
        StatusCode::SERVICE_UNAVAILABLE,
        "shutting_down",
        "the bot is shutting down",
    )
}
