use std::sync::Arc;

use setupforme_db::store::{AppStore, UserStore};
use setupforme_winget::WingetClient;

use crate::config::ServerConfig;
use crate::registry::AppRegistry;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (JWT settings are read by the auth extractor).
    pub config: Arc<ServerConfig>,
    /// Application record storage, also checked by `/health`.
    pub apps: Arc<dyn AppStore>,
    /// User account storage.
    pub users: Arc<dyn UserStore>,
    /// Owner-scoped registry operations and script generation.
    pub registry: AppRegistry,
    /// winget.run client backing the search endpoint.
    pub winget: WingetClient,
}
