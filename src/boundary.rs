use std::fmt;

use crate::domain::ManifestVersion;

/// Warnings raised while gating a release that never change the outcome.
/// These are non-fatal issues that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum GateWarning {
    /// Manifest version does not parse as a semantic version
    NonSemverManifestVersion { version: String },
    /// Tag version carries a pre-release or build qualifier
    QualifiedTagVersion { version: String },
}

impl fmt::Display for GateWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GateWarning::NonSemverManifestVersion { version } => {
                write!(
                    f,
                    "Manifest version '{}' is not a valid semantic version",
                    version
                )
            }
            GateWarning::QualifiedTagVersion { version } => {
                write!(
                    f,
                    "Tag version '{}' carries a qualifier; it must match the manifest exactly",
                    version
                )
            }
        }
    }
}

/// Collect warnings for a tag version / manifest version pair.
///
/// A tag version is "qualified" when anything follows the leading numeric
/// triple (e.g. "2.0.0-beta").
pub fn collect_warnings(
    tag_version: Option<&str>,
    manifest_version: &ManifestVersion,
) -> Vec<GateWarning> {
    let mut warnings = Vec::new();

    if !manifest_version.is_semver() {
        warnings.push(GateWarning::NonSemverManifestVersion {
            version: manifest_version.as_str().to_string(),
        });
    }

    if let Some(version) = tag_version {
        if let Ok(re) = regex::Regex::new(r"^\d+\.\d+\.\d+$") {
            if !re.is_match(version) {
                warnings.push(GateWarning::QualifiedTagVersion {
                    version: version.to_string(),
                });
            }
        }
    }

    warnings
}
