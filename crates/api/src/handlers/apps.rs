//! Handlers for the `/apps` resource and script generation.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use setupforme_core::types::DbId;
use setupforme_core::validation::AppDraft;

use crate::error::{AppError, AppResult};
use crate::extract::ApiJson;
use crate::middleware::auth::AuthUser;
use crate::response::MessageResponse;
use crate::state::AppState;

/// Payload of `GET /api/apps/script`.
#[derive(Debug, Serialize)]
pub struct ScriptPayload {
    pub script: String,
}

/// Parse the `{id}` path segment, rejecting anything but an integer.
fn parse_app_id(raw: &str) -> AppResult<DbId> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid app id: {raw}")))
}

/// GET /api/apps
///
/// The caller's apps in insertion order, as a bare array.
pub async fn list_apps(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let apps = state.registry.list(user.identity()).await?;
    Ok(Json(apps))
}

/// POST /api/apps
pub async fn create_app(
    user: AuthUser,
    State(state): State<AppState>,
    ApiJson(input): ApiJson<AppDraft>,
) -> AppResult<impl IntoResponse> {
    let app = state.registry.create(user.identity(), &input).await?;
    Ok((StatusCode::CREATED, Json(app)))
}

/// PUT /api/apps/{id}
///
/// Full replace; fields missing from the body are cleared.
pub async fn update_app(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(input): ApiJson<AppDraft>,
) -> AppResult<impl IntoResponse> {
    let id = parse_app_id(&id)?;
    let app = state.registry.update(user.identity(), id, &input).await?;
    Ok(Json(app))
}

/// DELETE /api/apps/{id}
pub async fn delete_app(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_app_id(&id)?;
    state.registry.delete(user.identity(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/apps/script
pub async fn generate_script(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let generated = state.registry.generate_script(user.identity()).await?;

    Ok(Json(MessageResponse {
        message: "Script generated successfully",
        data: ScriptPayload {
            script: generated.script,
        },
    }))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn app_id_must_be_numeric() {
        assert_eq!(parse_app_id("42").unwrap(), 42);
        assert_matches!(parse_app_id("abc"), Err(AppError::BadRequest(_)));
        assert_matches!(parse_app_id("1.5"), Err(AppError::BadRequest(_)));
    }
}
