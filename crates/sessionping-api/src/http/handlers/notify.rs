//! POST /notify - relay a session-completed notification.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;

use sessionping_core::relay::NotifyRequest;

use crate::http::error::AppError;
use crate::state::AppState;

/// Consume `{ key, project?, message? }`, validate the key, and deliver
/// the notification to the key's chat.
///
/// The body is parsed by hand (not via the `Json` extractor) so that a
/// malformed payload produces our `{"success": false, "error": ...}`
/// shape instead of the framework's rejection. Delivery failure is not
/// an error: the response is 200 with `success` reflecting the outcome.
pub async fn notify(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<serde_json::Value>, AppError> {
    let request: NotifyRequest =
        serde_json::from_slice(&body).map_err(|e| AppError::Malformed(e.to_string()))?;

    let outcome = state.relay.relay(&request).await?;

    Ok(Json(serde_json::json!({ "success": outcome.delivered })))
}
