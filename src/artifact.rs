//! Published-artifact naming.
//!
//! Release assets embed the triggering ref and the platform identifiers, e.g.
//! `sqld-v1.2.3-linux-x86_64.tar.gz`. Downstream asset matching relies on
//! these exact shapes, so the naming lives in one place.

use std::fmt;

use crate::error::{ReleaseGateError, Result};

/// Target operating system of a published artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Linux,
    MacOs,
    Windows,
}

impl Platform {
    /// Parse a platform from its config/os-segment spelling
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "linux" => Ok(Platform::Linux),
            "macos" | "darwin" => Ok(Platform::MacOs),
            "windows" => Ok(Platform::Windows),
            other => Err(ReleaseGateError::config(format!(
                "Unknown platform: '{}' - expected linux, macos, or windows",
                other
            ))),
        }
    }

    /// The OS segment used in artifact filenames
    pub fn os_name(&self) -> &'static str {
        match self {
            Platform::Linux => "linux",
            Platform::MacOs => "macos",
            Platform::Windows => "windows",
        }
    }

    /// Archive extension: tarballs on Linux, zip everywhere else
    pub fn archive_ext(&self) -> &'static str {
        match self {
            Platform::Linux => "tar.gz",
            Platform::MacOs | Platform::Windows => "zip",
        }
    }
}

/// Filename of a single published release asset.
///
/// Formats as `<binary>-<ref>-<os>-<arch>.<ext>`, with the ref kept verbatim
/// (`v` prefix included for tags).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactName {
    pub binary: String,
    pub git_ref: String,
    pub platform: Platform,
    pub arch: String,
}

impl ArtifactName {
    /// Create an artifact name for one target
    pub fn new(
        binary: impl Into<String>,
        git_ref: impl Into<String>,
        platform: Platform,
        arch: impl Into<String>,
    ) -> Self {
        ArtifactName {
            binary: binary.into(),
            git_ref: git_ref.into(),
            platform,
            arch: arch.into(),
        }
    }
}

impl fmt::Display for ArtifactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}-{}.{}",
            self.binary,
            self.git_ref,
            self.platform.os_name(),
            self.arch,
            self.platform.archive_ext()
        )
    }
}
