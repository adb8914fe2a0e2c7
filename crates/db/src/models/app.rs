//! Application record model.
//!
//! Inserts and full replaces take a
//! [`ValidatedDraft`](setupforme_core::validation::ValidatedDraft), so only
//! drafts that passed validation can reach the table.

use serde::Serialize;
use setupforme_core::script::InstallTarget;
use setupforme_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `apps` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct App {
    pub id: DbId,
    pub owner_id: DbId,
    pub name: String,
    pub package_id: Option<String>,
    pub download_url: Option<String>,
    pub install_args: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl App {
    /// Borrow this record as input for the script generator.
    pub fn install_target(&self) -> InstallTarget<'_> {
        InstallTarget {
            name: &self.name,
            package_id: self.package_id.as_deref(),
            download_url: self.download_url.as_deref(),
            install_args: self.install_args.as_deref(),
        }
    }
}
