//! Storage seams consumed by the API layer.
//!
//! [`AppStore`] and [`UserStore`] are implemented by [`PgStore`] (Postgres
//! via the repositories) and [`MemoryStore`] (process-local, used when no
//! database is configured and in tests).

mod memory;
mod postgres;

use async_trait::async_trait;
use setupforme_core::types::DbId;
use setupforme_core::validation::ValidatedDraft;

pub use memory::MemoryStore;
pub use postgres::PgStore;

use crate::models::app::App;
use crate::models::user::{CreateUser, User};

/// Owner-scoped access to application records.
///
/// Ownership is checked by the caller before mutating; the `owner_id`
/// arguments make the write itself refuse to touch another owner's row.
#[async_trait]
pub trait AppStore: Send + Sync {
    /// An owner's records, oldest first.
    async fn list_by_owner(&self, owner_id: DbId) -> Result<Vec<App>, sqlx::Error>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<App>, sqlx::Error>;

    async fn create(&self, owner_id: DbId, input: &ValidatedDraft) -> Result<App, sqlx::Error>;

    /// Full replace. `None` when no row matches `id` and `owner_id`.
    async fn update(
        &self,
        id: DbId,
        owner_id: DbId,
        input: &ValidatedDraft,
    ) -> Result<Option<App>, sqlx::Error>;

    /// `true` when a row was removed.
    async fn delete(&self, id: DbId, owner_id: DbId) -> Result<bool, sqlx::Error>;

    /// Whether the backing store is reachable.
    async fn health_check(&self) -> Result<(), sqlx::Error>;
}

/// User accounts for the authentication layer.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// `None` when the email is already registered.
    async fn create(&self, input: &CreateUser) -> Result<Option<User>, sqlx::Error>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, sqlx::Error>;
}
