//! Pure formatting functions for terminal output.
//!
//! Functions here have no side effects beyond printing and are safe to call
//! from anywhere in the gate.

use console::style;

use crate::artifact::ArtifactName;
use crate::boundary::GateWarning;
use crate::domain::ReleaseRef;
use crate::gate::GateOutcome;
use crate::validator::ValidationResult;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a non-fatal gate warning.
pub fn display_warning(warning: &GateWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Display the gate verdict.
///
/// The mismatch report always prints (it is the one user-visible failure);
/// everything else is suppressed in quiet mode.
///
/// # Arguments
/// * `outcome` - The completed gate outcome
/// * `quiet` - Suppress non-failure output
pub fn display_outcome(outcome: &GateOutcome, quiet: bool) {
    // Skipped runs never read the manifest, so the version is only
    // guaranteed present on Match/Mismatch.
    let manifest_version = outcome
        .manifest_version
        .as_ref()
        .map(|v| v.as_str())
        .unwrap_or("<unread>");

    match outcome.result {
        ValidationResult::Match => {
            if !quiet {
                display_success(&format!(
                    "Release tag '{}' matches manifest version {}",
                    outcome.git_ref, manifest_version
                ));
            }
        }
        ValidationResult::Mismatch => {
            let tag_version = match ReleaseRef::parse(&outcome.git_ref) {
                ReleaseRef::Tag { version } => version,
                ReleaseRef::Branch { name } => name,
            };
            eprintln!(
                "{} tag '{}' declares version {}, manifest declares {}",
                style("VERSION MISMATCH:").red().bold(),
                outcome.git_ref,
                style(&tag_version).red(),
                style(manifest_version).green(),
            );
        }
        ValidationResult::Skipped => {
            if !quiet {
                display_status(&format!(
                    "Ref '{}' is not a release tag; version check skipped",
                    outcome.git_ref
                ));
            }
        }
    }
}

/// Display the expected release asset names, one per line.
pub fn display_artifacts(artifacts: &[ArtifactName]) {
    if artifacts.is_empty() {
        return;
    }

    println!("{}", style("Expected release assets:").bold());
    for artifact in artifacts {
        println!("  {}", artifact);
    }
}
