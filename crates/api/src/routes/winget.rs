use axum::routing::get;
use axum::Router;

use crate::handlers::winget;
use crate::state::AppState;

/// Routes mounted at `/winget`.
pub fn router() -> Router<AppState> {
    Router::new().route("/search", get(winget::search))
}
