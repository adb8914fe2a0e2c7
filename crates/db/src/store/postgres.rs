use async_trait::async_trait;
use setupforme_core::types::DbId;
use setupforme_core::validation::ValidatedDraft;

use super::{AppStore, UserStore};
use crate::models::app::App;
use crate::models::user::{CreateUser, User};
use crate::repositories::{AppRepo, UserRepo};
use crate::DbPool;

/// Postgres-backed store delegating to the repositories.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AppStore for PgStore {
    async fn list_by_owner(&self, owner_id: DbId) -> Result<Vec<App>, sqlx::Error> {
        AppRepo::list_by_owner(&self.pool, owner_id).await
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<App>, sqlx::Error> {
        AppRepo::find_by_id(&self.pool, id).await
    }

    async fn create(&self, owner_id: DbId, input: &ValidatedDraft) -> Result<App, sqlx::Error> {
        AppRepo::create(&self.pool, owner_id, input).await
    }

    async fn update(
        &self,
        id: DbId,
        owner_id: DbId,
        input: &ValidatedDraft,
    ) -> Result<Option<App>, sqlx::Error> {
        AppRepo::update(&self.pool, id, owner_id, input).await
    }

    async fn delete(&self, id: DbId, owner_id: DbId) -> Result<bool, sqlx::Error> {
        AppRepo::delete(&self.pool, id, owner_id).await
    }

    async fn health_check(&self) -> Result<(), sqlx::Error> {
        crate::health_check(&self.pool).await
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn create(&self, input: &CreateUser) -> Result<Option<User>, sqlx::Error> {
        UserRepo::create(&self.pool, input).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, sqlx::Error> {
        UserRepo::find_by_email(&self.pool, email).await
    }
}
