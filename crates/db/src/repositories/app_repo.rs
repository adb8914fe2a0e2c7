//! Repository for the `apps` table.

use setupforme_core::types::DbId;
use setupforme_core::validation::ValidatedDraft;
use sqlx::PgPool;

use crate::models::app::App;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, owner_id, name, package_id, download_url, install_args, \
                       created_at, updated_at";

/// Provides CRUD operations for application records.
pub struct AppRepo;

impl AppRepo {
    /// List an owner's apps in insertion order.
    pub async fn list_by_owner(pool: &PgPool, owner_id: DbId) -> Result<Vec<App>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM apps WHERE owner_id = $1 ORDER BY id ASC");
        sqlx::query_as::<_, App>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// Find an app by internal ID, regardless of owner.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<App>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM apps WHERE id = $1");
        sqlx::query_as::<_, App>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new app for `owner_id`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        owner_id: DbId,
        input: &ValidatedDraft,
    ) -> Result<App, sqlx::Error> {
        let query = format!(
            "INSERT INTO apps (owner_id, name, package_id, download_url, install_args)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, App>(&query)
            .bind(owner_id)
            .bind(&input.name)
            .bind(&input.package_id)
            .bind(&input.download_url)
            .bind(&input.install_args)
            .fetch_one(pool)
            .await
    }

    /// Replace every mutable field of an app owned by `owner_id`.
    ///
    /// Returns `None` if no matching row exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        owner_id: DbId,
        input: &ValidatedDraft,
    ) -> Result<Option<App>, sqlx::Error> {
        let query = format!(
            "UPDATE apps SET
                name = $3,
                package_id = $4,
                download_url = $5,
                install_args = $6,
                updated_at = NOW()
             WHERE id = $1 AND owner_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, App>(&query)
            .bind(id)
            .bind(owner_id)
            .bind(&input.name)
            .bind(&input.package_id)
            .bind(&input.download_url)
            .bind(&input.install_args)
            .fetch_optional(pool)
            .await
    }

    /// Delete an app owned by `owner_id`.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId, owner_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM apps WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
