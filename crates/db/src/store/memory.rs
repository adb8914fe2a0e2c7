use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use setupforme_core::types::DbId;
use setupforme_core::validation::ValidatedDraft;
use tokio::sync::RwLock;

use super::{AppStore, UserStore};
use crate::models::app::App;
use crate::models::user::{CreateUser, User};

#[derive(Default)]
struct Tables {
    last_app_id: DbId,
    last_user_id: DbId,
    // Keyed by id; ids only grow, so iteration order is insertion order.
    apps: BTreeMap<DbId, App>,
    users: BTreeMap<DbId, User>,
}

/// Process-local store. Contents are lost on restart.
///
/// Thread-safe via interior `RwLock`; designed to be wrapped in `Arc` and
/// shared across the application.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AppStore for MemoryStore {
    async fn list_by_owner(&self, owner_id: DbId) -> Result<Vec<App>, sqlx::Error> {
        let tables = self.tables.read().await;
        Ok(tables
            .apps
            .values()
            .filter(|app| app.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<App>, sqlx::Error> {
        Ok(self.tables.read().await.apps.get(&id).cloned())
    }

    async fn create(&self, owner_id: DbId, input: &ValidatedDraft) -> Result<App, sqlx::Error> {
        let mut tables = self.tables.write().await;
        tables.last_app_id += 1;
        let now = Utc::now();
        let app = App {
            id: tables.last_app_id,
            owner_id,
            name: input.name.clone(),
            package_id: input.package_id.clone(),
            download_url: input.download_url.clone(),
            install_args: input.install_args.clone(),
            created_at: now,
            updated_at: now,
        };
        tables.apps.insert(app.id, app.clone());
        Ok(app)
    }

    async fn update(
        &self,
        id: DbId,
        owner_id: DbId,
        input: &ValidatedDraft,
    ) -> Result<Option<App>, sqlx::Error> {
        let mut tables = self.tables.write().await;
        let Some(app) = tables
            .apps
            .get_mut(&id)
            .filter(|app| app.owner_id == owner_id)
        else {
            return Ok(None);
        };
        app.name = input.name.clone();
        app.package_id = input.package_id.clone();
        app.download_url = input.download_url.clone();
        app.install_args = input.install_args.clone();
        app.updated_at = Utc::now();
        Ok(Some(app.clone()))
    }

    async fn delete(&self, id: DbId, owner_id: DbId) -> Result<bool, sqlx::Error> {
        let mut tables = self.tables.write().await;
        match tables.apps.get(&id) {
            Some(app) if app.owner_id == owner_id => {
                tables.apps.remove(&id);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn health_check(&self) -> Result<(), sqlx::Error> {
        Ok(())
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn create(&self, input: &CreateUser) -> Result<Option<User>, sqlx::Error> {
        let mut tables = self.tables.write().await;
        if tables.users.values().any(|u| u.email == input.email) {
            return Ok(None);
        }
        tables.last_user_id += 1;
        let now = Utc::now();
        let user = User {
            id: tables.last_user_id,
            email: input.email.clone(),
            password_hash: input.password_hash.clone(),
            created_at: now,
            updated_at: now,
        };
        tables.users.insert(user.id, user.clone());
        Ok(Some(user))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, sqlx::Error> {
        Ok(self
            .tables
            .read()
            .await
            .users
            .values()
            .find(|u| u.email == email)
            .cloned())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str) -> ValidatedDraft {
        ValidatedDraft {
            name: name.to_string(),
            package_id: Some(format!("{name}.{name}")),
            download_url: None,
            install_args: None,
        }
    }

    #[tokio::test]
    async fn list_is_owner_scoped_and_insertion_ordered() {
        let store = MemoryStore::new();
        AppStore::create(&store, 1, &draft("Zeta")).await.unwrap();
        AppStore::create(&store, 2, &draft("Other")).await.unwrap();
        AppStore::create(&store, 1, &draft("Alpha")).await.unwrap();

        let names: Vec<String> = store
            .list_by_owner(1)
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.name)
            .collect();
        assert_eq!(names, ["Zeta", "Alpha"]);
        assert!(store.list_by_owner(3).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_replaces_fields_for_owner_only() {
        let store = MemoryStore::new();
        let app = AppStore::create(&store, 1, &draft("Git")).await.unwrap();

        let replacement = ValidatedDraft {
            name: "Git SCM".into(),
            package_id: None,
            download_url: Some("https://example.com/git.exe".into()),
            install_args: Some("/VERYSILENT".into()),
        };
        assert_eq!(store.update(app.id, 2, &replacement).await.unwrap(), None);

        let updated = store.update(app.id, 1, &replacement).await.unwrap().unwrap();
        assert_eq!(updated.name, "Git SCM");
        assert_eq!(updated.package_id, None);
        assert_eq!(updated.owner_id, 1);
        assert_eq!(updated.created_at, app.created_at);
    }

    #[tokio::test]
    async fn delete_requires_matching_owner() {
        let store = MemoryStore::new();
        let app = AppStore::create(&store, 1, &draft("Git")).await.unwrap();

        assert!(!store.delete(app.id, 2).await.unwrap());
        assert!(AppStore::find_by_id(&store, app.id).await.unwrap().is_some());
        assert!(store.delete(app.id, 1).await.unwrap());
        assert!(AppStore::find_by_id(&store, app.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = MemoryStore::new();
        let first = AppStore::create(&store, 1, &draft("A")).await.unwrap();
        store.delete(first.id, 1).await.unwrap();
        let second = AppStore::create(&store, 1, &draft("B")).await.unwrap();
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn duplicate_email_yields_none() {
        let store = MemoryStore::new();
        let input = CreateUser {
            email: "a@example.com".into(),
            password_hash: "hash".into(),
        };
        let user = UserStore::create(&store, &input).await.unwrap().unwrap();
        assert!(UserStore::create(&store, &input).await.unwrap().is_none());

        let found = store.find_by_email("a@example.com").await.unwrap().unwrap();
        assert_eq!(found.id, user.id);
        assert!(store.find_by_email("b@example.com").await.unwrap().is_none());
    }
}
