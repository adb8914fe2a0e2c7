//! REST client for `GET /v2/packages?query=...`.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use setupforme_core::resolver::{PackageResolver, ResolveError};

/// Public winget.run API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.winget.run";

/// One search hit, flattened for API consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageSummary {
    pub id: String,
    pub name: String,
    pub publisher: String,
}

/// Errors from the search API layer.
#[derive(Debug, thiserror::Error)]
pub enum WingetError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// winget.run returned a non-2xx status code.
    #[error("winget.run API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The search query was blank.
    #[error("search query is empty")]
    EmptyQuery,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(rename = "Packages", default)]
    packages: Vec<RawPackage>,
}

#[derive(Debug, Deserialize)]
struct RawPackage {
    #[serde(rename = "Id")]
    id: String,
    #[serde(rename = "Latest", default)]
    latest: RawLatest,
}

#[derive(Debug, Default, Deserialize)]
struct RawLatest {
    #[serde(rename = "Name", default)]
    name: String,
    #[serde(rename = "Publisher", default)]
    publisher: String,
}

impl From<RawPackage> for PackageSummary {
    fn from(raw: RawPackage) -> Self {
        Self {
            id: raw.id,
            name: raw.latest.name,
            publisher: raw.latest.publisher,
        }
    }
}

/// HTTP client for the winget.run search API.
#[derive(Clone)]
pub struct WingetClient {
    client: reqwest::Client,
    base_url: String,
}

impl WingetClient {
    /// Create a client whose every request is bounded by `timeout`.
    ///
    /// * `base_url` - e.g. `https://api.winget.run` (no trailing slash needed).
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, WingetError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// Search packages matching `query`, best match first.
    pub async fn search(&self, query: &str) -> Result<Vec<PackageSummary>, WingetError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(WingetError::EmptyQuery);
        }

        let response = self
            .client
            .get(format!("{}/v2/packages", self.base_url))
            .query(&[("query", query)])
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(WingetError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body: SearchResponse = response.json().await?;
        tracing::debug!(query, hits = body.packages.len(), "winget.run search completed");
        Ok(parse_packages(body))
    }
}

fn parse_packages(body: SearchResponse) -> Vec<PackageSummary> {
    body.packages
        .into_iter()
        .filter(|p| !p.id.trim().is_empty())
        .map(PackageSummary::from)
        .collect()
}

#[async_trait]
impl PackageResolver for WingetClient {
    async fn resolve(&self, name: &str) -> Result<Option<String>, ResolveError> {
        let hits = self
            .search(name)
            .await
            .map_err(|e| ResolveError(e.to_string()))?;
        Ok(hits.into_iter().next().map(|p| p.id))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Vec<PackageSummary> {
        parse_packages(serde_json::from_str(json).expect("valid response JSON"))
    }

    #[test]
    fn parses_packages_in_order() {
        let hits = parse(
            r#"{
                "Packages": [
                    {"Id": "Git.Git", "Latest": {"Name": "Git", "Publisher": "The Git Team"}},
                    {"Id": "GitHub.GitLFS", "Latest": {"Name": "Git LFS", "Publisher": "GitHub"}}
                ],
                "Total": 2
            }"#,
        );
        assert_eq!(hits.len(), 2);
        assert_eq!(
            hits[0],
            PackageSummary {
                id: "Git.Git".into(),
                name: "Git".into(),
                publisher: "The Git Team".into(),
            }
        );
        assert_eq!(hits[1].id, "GitHub.GitLFS");
    }

    #[test]
    fn tolerates_missing_fields() {
        let hits = parse(r#"{"Packages": [{"Id": "Foo.Bar"}, {"Id": "  "}]}"#);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "");
        assert!(parse(r#"{"Total": 0}"#).is_empty());
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = WingetClient::with_client(reqwest::Client::new(), "https://api.winget.run/");
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
    }

    #[tokio::test]
    async fn blank_query_is_rejected_locally() {
        let client = WingetClient::with_client(reqwest::Client::new(), DEFAULT_BASE_URL);
        assert!(matches!(
            client.search("   ").await,
            Err(WingetError::EmptyQuery)
        ));
    }

    #[tokio::test]
    async fn resolver_maps_errors() {
        let client = WingetClient::with_client(reqwest::Client::new(), DEFAULT_BASE_URL);
        let err = client.resolve("").await.unwrap_err();
        assert!(err.to_string().contains("search query is empty"));
    }
}
