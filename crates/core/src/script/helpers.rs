//! Fixed preamble text: header, strict mode, install helpers and banner.
//!
//! Helper bodies never contain user data. Values reach them only as
//! parameters, and each call site wraps the call in its own `try`/`catch`.

use crate::quoting::quote_literal;
use crate::types::Timestamp;

/// Title written on the first line of every script.
pub const SCRIPT_TITLE: &str = "SetupForMe - Generated Installation Script";

/// Name of the package-manager helper routine.
pub const WINGET_HELPER: &str = "Install-WingetApp";

/// Name of the download-and-run helper routine.
pub const DOWNLOAD_HELPER: &str = "Install-FromUrl";

/// File name used when a download URL has no usable final path segment.
pub const FALLBACK_FILE_NAME: &str = "installer.exe";

/// Flags always passed to `winget install`.
pub const WINGET_BASE_FLAGS: &[&str] = &[
    "-e",
    "--accept-source-agreements",
    "--accept-package-agreements",
    "--disable-interactivity",
];

/// `winget install` exit codes treated as success.
///
/// Besides 0: `0x8A15002B` (no applicable upgrade) and `0x8A150061`
/// (package already installed), which a re-run hits for every app that is
/// already present.
pub const WINGET_SUCCESS_EXIT_CODES: &[i32] = &[0, -1978335189, -1978335135];

/// Header comment lines.
pub fn header(generated_at: Timestamp) -> Vec<String> {
    vec![
        format!("# {SCRIPT_TITLE}"),
        format!(
            "# Generated on: {}",
            generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ),
    ]
}

/// Stop on the first error unless a caller catches it.
pub const STRICT_MODE: &str = "$ErrorActionPreference = 'Stop'";

/// Definition of the package-manager helper.
pub fn winget_helper() -> Vec<String> {
    let flags = WINGET_BASE_FLAGS
        .iter()
        .map(|f| quote_literal(f))
        .collect::<Vec<_>>()
        .join(", ");
    let accepted = WINGET_SUCCESS_EXIT_CODES
        .iter()
        .map(i32::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    vec![
        format!("function {WINGET_HELPER} {{"),
        "  param([string]$Id, [string]$Arguments)".to_string(),
        format!("  $argList = @('install', '--id', $Id, {flags})"),
        "  if ($Arguments -and $Arguments.Trim() -ne '') { $argList += $Arguments }".to_string(),
        "  Write-Host ('winget ' + ($argList -join ' ')) -ForegroundColor Cyan".to_string(),
        "  $p = Start-Process 'winget' -ArgumentList $argList -Wait -NoNewWindow -PassThru"
            .to_string(),
        format!("  $ok = @({accepted})"),
        "  if ($ok -notcontains $p.ExitCode) { throw ('winget exited with code ' + $p.ExitCode) }"
            .to_string(),
        "}".to_string(),
    ]
}

/// Definition of the download-and-run helper.
pub fn download_helper() -> Vec<String> {
    vec![
        format!("function {DOWNLOAD_HELPER} {{"),
        "  param([string]$Url, [string]$FileName, [string]$Arguments)".to_string(),
        format!(
            "  if ([string]::IsNullOrWhiteSpace($FileName)) {{ $FileName = {} }}",
            quote_literal(FALLBACK_FILE_NAME)
        ),
        "  $dest = Join-Path $env:TEMP ('SetupForMe_' + [guid]::NewGuid().ToString() + '_' + $FileName)"
            .to_string(),
        "  Write-Host ('Downloading ' + $Url + ' to ' + $dest) -ForegroundColor DarkCyan"
            .to_string(),
        "  Invoke-WebRequest -Uri $Url -OutFile $dest -UseBasicParsing".to_string(),
        "  try {".to_string(),
        "    if ($Arguments -and $Arguments.Trim() -ne '') {".to_string(),
        "      $p = Start-Process -FilePath $dest -ArgumentList $Arguments -Wait -PassThru"
            .to_string(),
        "    } else {".to_string(),
        "      $p = Start-Process -FilePath $dest -Wait -PassThru".to_string(),
        "    }".to_string(),
        "    if ($p.ExitCode -ne 0) { throw ('Installer exited with code ' + $p.ExitCode) }"
            .to_string(),
        "  } finally {".to_string(),
        "    Remove-Item -LiteralPath $dest -Force -ErrorAction SilentlyContinue".to_string(),
        "  }".to_string(),
        "}".to_string(),
    ]
}

pub const BANNER: &str = "Write-Host 'Starting application installation...' -ForegroundColor Green";

pub const NOTHING_TO_INSTALL: &str =
    "Write-Host 'No applications to install.' -ForegroundColor Yellow";

pub const INSTALLATION_COMPLETE: &str =
    "Write-Host 'Installation complete!' -ForegroundColor Green";

/// Summary line emitted before the completion notice.
pub fn processed_count(count: usize) -> String {
    format!("Write-Host ('Processed ' + {count} + ' application(s).') -ForegroundColor Green")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
