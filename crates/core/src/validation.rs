//! Validation rules for application drafts, applied before anything is
//! persisted.

use serde::{Deserialize, Deserializer};
use url::Url;

use crate::error::CoreError;

/// Maximum length of an application name.
pub const MAX_NAME_LENGTH: usize = 255;

/// Maximum length of a package identifier.
pub const MAX_PACKAGE_ID_LENGTH: usize = 255;

/// Maximum length of a download URL.
pub const MAX_URL_LENGTH: usize = 2048;

/// The only accepted download scheme.
pub const SECURE_SCHEME: &str = "https";

/// Create / full-replace payload for an application record.
///
/// Accepts the legacy field names `winget_id` and `args`, and camelCase
/// spellings of each field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppDraft {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, alias = "winget_id", alias = "packageId")]
    pub package_id: Option<String>,
    #[serde(default, alias = "downloadUrl")]
    pub download_url: Option<String>,
    #[serde(default, alias = "args", alias = "installArgs")]
    pub install_args: Option<String>,
}

/// A draft that passed validation, with blank fields normalized to `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedDraft {
    pub name: String,
    pub package_id: Option<String>,
    pub download_url: Option<String>,
    pub install_args: Option<String>,
}

impl ValidatedDraft {
    pub fn has_installer(&self) -> bool {
        self.package_id.is_some() || self.download_url.is_some()
    }

    /// Enforce that at least one of package id or download URL is present.
    pub fn require_installer(self) -> Result<Self, CoreError> {
        if self.has_installer() {
            Ok(self)
        } else {
            Err(CoreError::Validation(
                "Either package_id or download_url is required".to_string(),
            ))
        }
    }
}

/// Deserialize an explicit JSON `null` the same way as an absent field.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn trimmed(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Check that `raw` is an absolute `https` URL with a non-empty host.
pub fn validate_download_url(raw: &str) -> Result<(), CoreError> {
    let invalid = || CoreError::Validation("Invalid download URL".to_string());

    if raw.len() > MAX_URL_LENGTH {
        return Err(CoreError::Validation(format!(
            "Download URL exceeds maximum length of {MAX_URL_LENGTH} characters"
        )));
    }
    let parsed = Url::parse(raw).map_err(|_| invalid())?;
    if parsed.scheme() != SECURE_SCHEME {
        return Err(invalid());
    }
    match parsed.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(invalid()),
    }
}

/// Normalize and validate the name, package id and URL of a draft.
///
/// Does not require an installer source; callers decide whether to try
/// auto-resolution first (create) or enforce it directly (update).
pub fn prepare_draft(draft: &AppDraft) -> Result<ValidatedDraft, CoreError> {
    let name = draft.name.trim();
    if name.is_empty() {
        return Err(CoreError::Validation("App name is required".to_string()));
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "App name exceeds maximum length of {MAX_NAME_LENGTH} characters"
        )));
    }

    let package_id = trimmed(draft.package_id.as_deref());
    if let Some(id) = &package_id {
        if id.chars().count() > MAX_PACKAGE_ID_LENGTH {
            return Err(CoreError::Validation(format!(
                "Package id exceeds maximum length of {MAX_PACKAGE_ID_LENGTH} characters"
            )));
        }
    }

    let download_url = trimmed(draft.download_url.as_deref());
    if let Some(url) = &download_url {
        validate_download_url(url)?;
    }

    let install_args = draft
        .install_args
        .clone()
        .filter(|a| !a.trim().is_empty());

    Ok(ValidatedDraft {
        name: name.to_string(),
        package_id,
        download_url,
        install_args,
    })
}

/// Full validation used for updates: [`prepare_draft`] plus an installer source.
pub fn validate_draft(draft: &AppDraft) -> Result<ValidatedDraft, CoreError> {
    prepare_draft(draft)?.require_installer()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
