//! Handler for the invocation endpoint.

use axum::extract::State;
use axum::Json;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use carledger_contract::dispatch;
use carledger_core::error::CoreError;

use crate::error::AppResult;
use crate::invocation::{InvocationRequest, InvocationResponse};
use crate::state::AppState;

/// POST /api/v1/invoke -- run one ledger invocation.
///
/// Decodes the base64 credential, runs the router (identity resolution,
/// authorization, arity check, dispatch), and wraps the payload bytes into
/// the response envelope.
pub async fn invoke(
    State(state): State<AppState>,
    Json(request): Json<InvocationRequest>,
) -> AppResult<Json<InvocationResponse>> {
    let credential = BASE64.decode(request.credential.as_bytes()).map_err(|e| {
        CoreError::MalformedCredential(format!("credential is not valid base64: {e}"))
    })?;

    let payload = dispatch(
        state.ledger.as_ref(),
        &state.policy,
        &credential,
        &request.operation,
        &request.args,
    )
    .await?;

    let payload = String::from_utf8(payload)
        .map_err(|_| CoreError::EncodingFailed("payload is not valid UTF-8".into()))?;

    Ok(Json(InvocationResponse::ok(payload)))
}
