//! Request handlers.
//!
//! Handlers extract the caller, delegate to the registry or stores held in
//! [`AppState`](crate::state::AppState), and map errors via
//! [`AppError`](crate::error::AppError).

pub mod apps;
pub mod auth;
pub mod winget;
