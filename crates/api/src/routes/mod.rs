pub mod apps;
pub mod auth;
pub mod health;
pub mod winget;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /auth/signup                 register (public)
/// /auth/login                  login (public)
///
/// /winget/search?q=            package search (public)
///
/// /apps                        list, create (requires auth)
/// /apps/script                 generate install script (requires auth)
/// /apps/{id}                   replace, delete (requires auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/winget", winget::router())
        .nest("/apps", apps::router())
}
