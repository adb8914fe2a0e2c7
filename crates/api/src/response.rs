//! Shared response envelope types for API handlers.
//!
//! Most API responses use a `{ "data": ... }` envelope. The app list and
//! single-app responses are returned bare for compatibility with the web
//! client.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// `{ "message": ..., "data": T }` envelope for actions that report an outcome.
#[derive(Debug, Serialize)]
pub struct MessageResponse<T: Serialize> {
    pub message: &'static str,
    pub data: T,
}
