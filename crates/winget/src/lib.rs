//! Client for the winget.run package search API.
//!
//! Used for name-to-package-id auto-resolution (via
//! [`PackageResolver`](setupforme_core::resolver::PackageResolver)) and for
//! the search suggestions endpoint.

pub mod api;

pub use api::{PackageSummary, WingetClient, WingetError};
