//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod app_repo;
pub mod user_repo;

pub use app_repo::AppRepo;
pub use user_repo::UserRepo;
