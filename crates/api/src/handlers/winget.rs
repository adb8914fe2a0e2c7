//! Package search suggestions backed by winget.run.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use setupforme_winget::WingetError;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// GET /api/winget/search?q=
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<impl IntoResponse> {
    let q = query.q.trim();
    if q.is_empty() {
        return Err(AppError::BadRequest("Search query is required".into()));
    }

    let packages = state.winget.search(q).await.map_err(|e| match e {
        WingetError::EmptyQuery => AppError::BadRequest("Search query is required".into()),
        other => AppError::InternalError(format!("Package search failed: {other}")),
    })?;

    if packages.is_empty() {
        return Err(AppError::NotFound(format!("No packages found for '{q}'")));
    }

    Ok(Json(DataResponse { data: packages }))
}
