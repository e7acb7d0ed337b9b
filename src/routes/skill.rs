use axum::{extract::State, routing::post, Json, Router};
use tracing::{debug, info, warn};

use crate::{
    error::AppError,
    models::{
        envelope::{RequestBody, SkillRequest, SkillResponse},
        speech::IntentRequest,
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/skill", post(handle_skill_request))
}

async fn handle_skill_request(
    State(state): State<AppState>,
    Json(envelope): Json<SkillRequest>,
) -> Result<Json<SkillResponse>, AppError> {
    verify_application_id(state.config.application_id.as_deref(), &envelope)?;

    if envelope.is_new_session() {
        debug!(
            session_id = ?envelope.session.as_ref().and_then(|s| s.session_id.as_deref()),
            "session started"
        );
    }

    let request_id = envelope.request.request_id().map(str::to_string);
    let response: SkillResponse = match envelope.request {
        RequestBody::Launch { .. } => state.skill.on_launch().await.into(),
        RequestBody::Intent { intent, .. } => {
            let intent = IntentRequest::from(intent);
            info!(intent = %intent.name, request_id = ?request_id, "intent received");
            state.skill.on_intent(&intent).await?.into()
        }
        RequestBody::SessionEnded { reason, .. } => {
            state.skill.on_session_ended(reason.as_deref()).await;
            SkillResponse::empty()
        }
    };

    Ok(Json(response))
}

/// Rejects envelopes addressed to another skill when an application id is configured.
fn verify_application_id(expected: Option<&str>, envelope: &SkillRequest) -> Result<(), AppError> {
    let Some(expected) = expected else {
        return Ok(());
    };
    match envelope.application_id() {
        Some(actual) if actual == expected => Ok(()),
        actual => {
            warn!(expected, actual = ?actual, "request for a different application");
            Err(AppError::InvalidApplicationId)
        }
    }
}
