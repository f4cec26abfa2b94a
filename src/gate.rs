//! Gate orchestration.
//!
//! Ties the pieces together: resolve the triggering ref, read the manifest,
//! run the validation, and collect the expected artifact names. Separated
//! from main.rs so the whole flow can be exercised in tests with a mock ref
//! source and a temp-file manifest.

use crate::artifact::ArtifactName;
use crate::boundary::{collect_warnings, GateWarning};
use crate::config::Config;
use crate::domain::{ManifestVersion, ReleaseRef};
use crate::error::Result;
use crate::manifest;
use crate::refsource::RefSource;
use crate::validator::{validate, ValidationResult};

/// Environment variable the CI context uses to hand over the triggering ref
pub const REF_ENV_VAR: &str = "GITHUB_REF_NAME";

/// Arguments for a gate run
///
/// Mirrors the CLI args but in a format suitable for orchestration logic, so
/// the gate can be called programmatically without depending on clap.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GateArgs {
    /// Explicitly supplied ref; overrides environment and repository lookup
    pub git_ref: Option<String>,

    /// Path to the manifest file (defaults to ./Cargo.toml)
    pub manifest_path: Option<String>,
}

/// Result of a completed gate run
#[derive(Debug, Clone, PartialEq)]
pub struct GateOutcome {
    /// The ref the run was gated on
    pub git_ref: String,

    /// The validation verdict
    pub result: ValidationResult,

    /// The version declared by the manifest; `None` on skipped runs, which
    /// never read the manifest
    pub manifest_version: Option<ManifestVersion>,

    /// Non-fatal observations collected along the way
    pub warnings: Vec<GateWarning>,

    /// Expected release asset names; empty unless the verdict is `Match`
    pub artifacts: Vec<ArtifactName>,
}

/// Resolve the triggering ref.
///
/// Precedence: explicit argument, then the CI environment variable, then the
/// local repository.
pub fn resolve_ref<R: RefSource>(args: &GateArgs, ref_source: &R) -> Result<String> {
    if let Some(git_ref) = &args.git_ref {
        return Ok(git_ref.clone());
    }

    if let Ok(env_ref) = std::env::var(REF_ENV_VAR) {
        if !env_ref.is_empty() {
            return Ok(env_ref);
        }
    }

    ref_source.current_ref()
}

/// Run the gate end to end.
///
/// 1. Resolve the triggering ref
/// 2. Short-circuit to `Skipped` for branch pushes and configured
///    non-release refs; these never read the manifest and so can never
///    block on a missing or broken one
/// 3. Read the manifest version
/// 4. Validate tag version against manifest version
/// 5. On `Match`, compute the expected artifact names
///
/// # Arguments
/// * `args` - Gate arguments (ref override, manifest path)
/// * `config` - Gate configuration
/// * `ref_source` - Fallback source for the triggering ref
///
/// # Returns
/// Result containing the gate outcome, or an error for I/O-shaped failures
/// on tag-triggered runs (missing manifest, unresolvable ref). A version
/// mismatch is an outcome, not an error.
pub fn run_gate<R: RefSource>(
    args: &GateArgs,
    config: &Config,
    ref_source: &R,
) -> Result<GateOutcome> {
    let git_ref = resolve_ref(args, ref_source)?;

    let parsed_ref = ReleaseRef::parse(&git_ref);
    if config.is_skipped_ref(&git_ref) || !parsed_ref.is_tag() {
        return Ok(GateOutcome {
            git_ref,
            result: ValidationResult::Skipped,
            manifest_version: None,
            warnings: Vec::new(),
            artifacts: Vec::new(),
        });
    }

    let manifest = manifest::load_manifest(args.manifest_path.as_deref())?;
    let manifest_version = manifest.version();

    let result = validate(&git_ref, manifest_version.as_str());

    let tag_version = match &parsed_ref {
        ReleaseRef::Tag { version } => Some(version.as_str()),
        ReleaseRef::Branch { .. } => None,
    };
    let warnings = collect_warnings(tag_version, &manifest_version);

    // Mismatch halts before any artifact naming is surfaced
    let artifacts = if result == ValidationResult::Match {
        config.artifact_names(&git_ref)?
    } else {
        Vec::new()
    };

    Ok(GateOutcome {
        git_ref,
        result,
        manifest_version: Some(manifest_version),
        warnings,
        artifacts,
    })
}
