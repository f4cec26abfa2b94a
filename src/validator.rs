//! Release-tag validation - the single decision point of the gate.
//!
//! Decides whether a CI run triggered by a given ref may proceed, by
//! comparing the tag's version part against the manifest's declared version.

use crate::domain::ReleaseRef;

/// Outcome of validating a triggering ref against a manifest version.
///
/// `Skipped` is an explicit third state rather than a boolean so that
/// "not a release build" is distinguishable from "release build that checks
/// out". Only `Mismatch` should block a pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationResult {
    /// Tag-triggered build whose version part equals the manifest version
    Match,
    /// Tag-triggered build whose version part differs from the manifest version
    Mismatch,
    /// Not a tag-triggered build (branch push or unrecognized ref)
    Skipped,
}

impl ValidationResult {
    /// Whether the pipeline may continue. Only `Mismatch` blocks.
    pub fn allows_release(&self) -> bool {
        !matches!(self, ValidationResult::Mismatch)
    }
}

/// Validate a triggering ref against a manifest version.
///
/// Rules, in order:
/// 1. `"main"` is never a release ref; return `Skipped`.
/// 2. A ref that does not begin with `v<digits>.<digits>.<digits>` is a
///    branch push or some other non-release ref; return `Skipped`.
/// 3. Otherwise strip the leading `v` and compare the remainder to
///    `manifest_version` with exact string equality. This is deliberately
///    not a semantic-version comparison: a qualifier like `-beta` on the
///    tag causes a `Mismatch` even when the numeric triple agrees.
///
/// Pure function: no I/O, never panics, never errors. Malformed input yields
/// `Skipped` or `Mismatch`, never a fault.
///
/// # Arguments
/// * `release_ref` - The ref that triggered the run (tag or branch name)
/// * `manifest_version` - The version string declared in the manifest
///
/// # Example
/// ```
/// use release_gate::validator::{validate, ValidationResult};
///
/// assert_eq!(validate("v1.2.3", "1.2.3"), ValidationResult::Match);
/// assert_eq!(validate("v1.2.3", "1.2.4"), ValidationResult::Mismatch);
/// assert_eq!(validate("main", "1.2.3"), ValidationResult::Skipped);
/// ```
pub fn validate(release_ref: &str, manifest_version: &str) -> ValidationResult {
    if release_ref == "main" {
        return ValidationResult::Skipped;
    }

    match ReleaseRef::parse(release_ref) {
        ReleaseRef::Tag { version } => {
            if version == manifest_version {
                ValidationResult::Match
            } else {
                ValidationResult::Mismatch
            }
        }
        ReleaseRef::Branch { .. } => ValidationResult::Skipped,
    }
}
