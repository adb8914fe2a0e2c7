//! Installation script assembly.
//!
//! The generated script has, in order: a header comment, strict error mode,
//! the two install helpers, a start banner, one numbered block per app in
//! input order, and a footer. Generation is a pure function of its input.

pub mod block;
pub mod builder;
pub mod helpers;

use chrono::Utc;
use serde::Serialize;

pub use block::{generate_app_block, InstallStrategy, InstallTarget};
pub use builder::ScriptBuilder;

use crate::types::Timestamp;

/// Counts of what a generated script will attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScriptSummary {
    pub total: usize,
    pub package_manager: usize,
    pub download: usize,
    pub skipped: usize,
}

impl ScriptSummary {
    fn record(&mut self, strategy: &InstallStrategy) {
        self.total += 1;
        match strategy {
            InstallStrategy::PackageManager { .. } => self.package_manager += 1,
            InstallStrategy::Download { .. } => self.download += 1,
            InstallStrategy::Nothing => self.skipped += 1,
        }
    }
}

/// Generate the installation script for `targets`, stamped with the current time.
pub fn generate_script(targets: &[InstallTarget<'_>]) -> String {
    generate_script_at(targets, Utc::now())
}

/// Generate the installation script with an explicit generation timestamp.
pub fn generate_script_at(targets: &[InstallTarget<'_>], generated_at: Timestamp) -> String {
    generate_script_with_summary(targets, generated_at).0
}

/// Generate the script and report what it will do.
pub fn generate_script_with_summary(
    targets: &[InstallTarget<'_>],
    generated_at: Timestamp,
) -> (String, ScriptSummary) {
    let mut script = ScriptBuilder::new();
    let mut summary = ScriptSummary::default();

    script
        .extend(helpers::header(generated_at))
        .blank()
        .line(helpers::STRICT_MODE)
        .blank()
        .extend(helpers::winget_helper())
        .blank()
        .extend(helpers::download_helper())
        .blank()
        .line(helpers::BANNER)
        .blank();

    for (position, target) in targets.iter().enumerate() {
        summary.record(&target.strategy());
        script.extend(block::app_block_lines(target, position + 1)).blank();
    }

    if summary.total == 0 {
        script.line(helpers::NOTHING_TO_INSTALL);
    } else {
        script
            .line(helpers::processed_count(summary.total))
            .line(helpers::INSTALLATION_COMPLETE);
    }

    (script.finish(), summary)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
