//! Per-application script block.
//!
//! Each block calls exactly one helper inside its own `try`/`catch`, so a
//! failing install is reported and the script moves on to the next app.

use url::Url;

use super::helpers::{DOWNLOAD_HELPER, FALLBACK_FILE_NAME, WINGET_HELPER};
use crate::quoting::quote_literal;

/// Display name used when a record has a blank name.
pub const UNKNOWN_APP_NAME: &str = "Unknown App";

/// Borrowed view of one application record, as consumed by the generator.
///
/// `None` and blank strings are treated the same way.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstallTarget<'a> {
    pub name: &'a str,
    pub package_id: Option<&'a str>,
    pub download_url: Option<&'a str>,
    pub install_args: Option<&'a str>,
}

/// How a single application gets installed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallStrategy {
    /// `winget install --id <id>`.
    PackageManager { id: String },
    /// Download `url` to a temp file named after `file_name` and run it.
    Download { url: String, file_name: String },
    /// No usable installer information.
    Nothing,
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

impl<'a> InstallTarget<'a> {
    /// Package id wins over download URL when both are present.
    pub fn strategy(&self) -> InstallStrategy {
        if let Some(id) = non_blank(self.package_id) {
            InstallStrategy::PackageManager { id: id.to_string() }
        } else if let Some(url) = non_blank(self.download_url) {
            InstallStrategy::Download {
                url: url.to_string(),
                file_name: file_name_from_url(url),
            }
        } else {
            InstallStrategy::Nothing
        }
    }

    /// Name shown in messages, defaulting to [`UNKNOWN_APP_NAME`].
    pub fn display_name(&self) -> &'a str {
        let trimmed = self.name.trim();
        if trimmed.is_empty() {
            UNKNOWN_APP_NAME
        } else {
            trimmed
        }
    }

    /// Install arguments, or `None` when blank. Not trimmed otherwise.
    pub fn arguments(&self) -> Option<&'a str> {
        self.install_args.filter(|a| !a.trim().is_empty())
    }
}

/// Derive the installer file name from the last path segment of `url`.
///
/// Only `[A-Za-z0-9._-]` survive; anything else becomes `_`. Falls back to
/// [`FALLBACK_FILE_NAME`] when there is no segment or only dots remain.
pub fn file_name_from_url(url: &str) -> String {
    let segment = Url::parse(url).ok().and_then(|parsed| {
        parsed
            .path_segments()
            .and_then(|mut segments| segments.next_back().map(str::to_string))
    });

    let sanitized: String = segment
        .unwrap_or_default()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    if sanitized.chars().all(|c| c == '.') {
        FALLBACK_FILE_NAME.to_string()
    } else {
        sanitized
    }
}

/// Replace control characters so the text cannot leave a `#` comment line.
fn comment_safe(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

/// Script lines for one application, numbered `index` (1-based).
pub fn app_block_lines(target: &InstallTarget<'_>, index: usize) -> Vec<String> {
    let name = target.display_name();
    let quoted_name = quote_literal(name);
    let args_suffix = target
        .arguments()
        .map(|a| format!(" -Arguments {}", quote_literal(a)))
        .unwrap_or_default();

    let install_line = match target.strategy() {
        InstallStrategy::PackageManager { id } => {
            format!("  {WINGET_HELPER} -Id {}{args_suffix}", quote_literal(&id))
        }
        InstallStrategy::Download { url, file_name } => format!(
            "  {DOWNLOAD_HELPER} -Url {} -FileName {}{args_suffix}",
            quote_literal(&url),
            quote_literal(&file_name),
        ),
        InstallStrategy::Nothing => {
            "  Write-Host 'No installer info provided.' -ForegroundColor DarkYellow".to_string()
        }
    };

    vec![
        format!("# App {index}: {}", comment_safe(name)),
        format!("Write-Host ('Installing ' + {quoted_name} + '...') -ForegroundColor Yellow"),
        "try {".to_string(),
        install_line,
        format!("  Write-Host ('Finished: ' + {quoted_name}) -ForegroundColor Green"),
        "} catch {".to_string(),
        format!(
            "  Write-Host ('Failed: ' + {quoted_name} + ' - ' + $_.Exception.Message) -ForegroundColor Red"
        ),
        "}".to_string(),
    ]
}

/// One application's block as a single string.
pub fn generate_app_block(target: &InstallTarget<'_>, index: usize) -> String {
    app_block_lines(target, index).join("\n")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
