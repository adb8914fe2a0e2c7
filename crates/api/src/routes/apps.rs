//! Route definitions for the `/apps` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::apps;
use crate::state::AppState;

/// Routes mounted at `/apps`.
///
/// ```text
/// GET    /           -> list_apps
/// POST   /           -> create_app
/// GET    /script     -> generate_script
/// PUT    /{id}       -> update_app
/// DELETE /{id}       -> delete_app
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(apps::list_apps).post(apps::create_app))
        .route("/script", get(apps::generate_script))
        .route("/{id}", put(apps::update_app).delete(apps::delete_app))
}
