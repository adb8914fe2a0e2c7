//! Owner-scoped operations on application records.
//!
//! Every operation takes the caller's [`Identity`] explicitly. Update and
//! delete load the record first so a missing id and a foreign owner are
//! reported differently (`404` vs `403`).

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use setupforme_core::error::CoreError;
use setupforme_core::resolver::{resolve_best_effort, PackageResolver};
use setupforme_core::script::{generate_script_with_summary, InstallTarget, ScriptSummary};
use setupforme_core::types::{DbId, Identity};
use setupforme_core::validation::{prepare_draft, validate_draft, AppDraft};
use setupforme_db::models::app::App;
use setupforme_db::store::AppStore;

use crate::error::AppResult;

const ENTITY: &str = "App";

/// A generated script together with what it will attempt.
#[derive(Debug, Clone)]
pub struct GeneratedScript {
    pub script: String,
    pub summary: ScriptSummary,
}

#[derive(Clone)]
pub struct AppRegistry {
    store: Arc<dyn AppStore>,
    resolver: Arc<dyn PackageResolver>,
    resolve_timeout: Duration,
}

impl AppRegistry {
    pub fn new(
        store: Arc<dyn AppStore>,
        resolver: Arc<dyn PackageResolver>,
        resolve_timeout: Duration,
    ) -> Self {
        Self {
            store,
            resolver,
            resolve_timeout,
        }
    }

    /// The caller's records in insertion order.
    pub async fn list(&self, identity: Identity) -> AppResult<Vec<App>> {
        Ok(self.store.list_by_owner(identity.user_id).await?)
    }

    /// Validate and insert a record owned by the caller.
    ///
    /// When neither a package id nor a download URL is given, the name is
    /// looked up once; if that finds nothing the draft is rejected.
    pub async fn create(&self, identity: Identity, draft: &AppDraft) -> AppResult<App> {
        let mut validated = prepare_draft(draft)?;

        if !validated.has_installer() {
            validated.package_id =
                resolve_best_effort(self.resolver.as_ref(), &validated.name, self.resolve_timeout)
                    .await;
        }
        let validated = validated.require_installer()?;

        let app = self.store.create(identity.user_id, &validated).await?;
        tracing::info!(
            user_id = identity.user_id,
            app_id = app.id,
            name = %app.name,
            "App created"
        );
        Ok(app)
    }

    /// Full replace of a record the caller owns.
    pub async fn update(&self, identity: Identity, id: DbId, draft: &AppDraft) -> AppResult<App> {
        self.load_owned(identity, id).await?;
        let validated = validate_draft(draft)?;

        let app = self
            .store
            .update(id, identity.user_id, &validated)
            .await?
            .ok_or(CoreError::NotFound { entity: ENTITY, id })?;
        tracing::info!(user_id = identity.user_id, app_id = id, "App updated");
        Ok(app)
    }

    /// Remove a record the caller owns.
    pub async fn delete(&self, identity: Identity, id: DbId) -> AppResult<()> {
        self.load_owned(identity, id).await?;

        if !self.store.delete(id, identity.user_id).await? {
            return Err(CoreError::NotFound { entity: ENTITY, id }.into());
        }
        tracing::info!(user_id = identity.user_id, app_id = id, "App deleted");
        Ok(())
    }

    /// Build the installation script for all of the caller's records.
    pub async fn generate_script(&self, identity: Identity) -> AppResult<GeneratedScript> {
        let apps = self.store.list_by_owner(identity.user_id).await?;
        let targets: Vec<InstallTarget<'_>> = apps.iter().map(App::install_target).collect();
        let (script, summary) = generate_script_with_summary(&targets, Utc::now());

        tracing::info!(
            user_id = identity.user_id,
            app_count = summary.total,
            package_manager = summary.package_manager,
            download = summary.download,
            skipped = summary.skipped,
            "Install script generated"
        );
        Ok(GeneratedScript { script, summary })
    }

    async fn load_owned(&self, identity: Identity, id: DbId) -> AppResult<App> {
        let app = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(CoreError::NotFound { entity: ENTITY, id })?;

        if !identity.owns(app.owner_id) {
            tracing::warn!(
                user_id = identity.user_id,
                app_id = id,
                "Rejected access to another user's app"
            );
            return Err(CoreError::Forbidden("You do not own this app".to_string()).into());
        }
        Ok(app)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
