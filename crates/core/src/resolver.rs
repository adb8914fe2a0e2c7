//! Best-effort lookup of a package id from a free-text application name.
//!
//! The lookup is an external service. Its failures never fail a request:
//! [`resolve_best_effort`] is the one call site and maps timeouts, errors and
//! empty answers to `None`.

use std::time::Duration;

use async_trait::async_trait;

/// Error reported by a [`PackageResolver`] implementation.
#[derive(Debug, thiserror::Error)]
#[error("package lookup failed: {0}")]
pub struct ResolveError(pub String);

/// Capability: translate an application name into a package identifier.
#[async_trait]
pub trait PackageResolver: Send + Sync {
    /// Return the best matching package id, or `None` when nothing matched.
    async fn resolve(&self, name: &str) -> Result<Option<String>, ResolveError>;
}

/// Resolver used when lookup is disabled. Never finds anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopResolver;

#[async_trait]
impl PackageResolver for NoopResolver {
    async fn resolve(&self, _name: &str) -> Result<Option<String>, ResolveError> {
        Ok(None)
    }
}

/// Ask `resolver` for a package id, giving up after `timeout`.
///
/// Every failure mode yields `None`.
pub async fn resolve_best_effort(
    resolver: &dyn PackageResolver,
    name: &str,
    timeout: Duration,
) -> Option<String> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }

    match tokio::time::timeout(timeout, resolver.resolve(name)).await {
        Ok(Ok(Some(id))) if !id.trim().is_empty() => {
            tracing::debug!(name, package_id = %id, "Resolved package id");
            Some(id.trim().to_string())
        }
        Ok(Ok(_)) => {
            tracing::debug!(name, "No package id found");
            None
        }
        Ok(Err(err)) => {
            tracing::warn!(name, error = %err, "Package id lookup failed");
            None
        }
        Err(_) => {
            tracing::warn!(
                name,
                timeout_ms = timeout.as_millis() as u64,
                "Package id lookup timed out"
            );
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
