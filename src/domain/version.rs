use std::fmt;

/// Version string declared by a package manifest.
///
/// Kept as the literal string from the manifest: the gate compares versions
/// with exact string equality, so no numeric normalization happens here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestVersion(String);

impl ManifestVersion {
    /// Wrap a manifest version string
    pub fn new(version: impl Into<String>) -> Self {
        ManifestVersion(version.into())
    }

    /// The literal version string as declared
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the string parses as a semantic version.
    ///
    /// Only used for diagnostics; a non-semver version still participates in
    /// the exact-equality check.
    pub fn is_semver(&self) -> bool {
        semver::Version::parse(&self.0).is_ok()
    }
}

impl fmt::Display for ManifestVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str() {
        let v = ManifestVersion::new("1.2.3");
        assert_eq!(v.as_str(), "1.2.3");
    }

    #[test]
    fn test_display() {
        assert_eq!(ManifestVersion::new("0.1.0").to_string(), "0.1.0");
    }

    #[test]
    fn test_is_semver() {
        assert!(ManifestVersion::new("1.2.3").is_semver());
        assert!(ManifestVersion::new("2.0.0-beta.1").is_semver());
        assert!(!ManifestVersion::new("1.2").is_semver());
        assert!(!ManifestVersion::new("not-a-version").is_semver());
    }

    #[test]
    fn test_equality_is_literal() {
        // "1.2.3" and "1.02.3" are numerically equal but not the same string
        assert_ne!(ManifestVersion::new("1.2.3"), ManifestVersion::new("1.02.3"));
    }
}
