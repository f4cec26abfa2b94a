use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::domain::ManifestVersion;
use crate::error::{ReleaseGateError, Result};

/// Package manifest as far as the gate cares about it.
///
/// Only the `[package]` table is read; everything else in the manifest is
/// ignored.
#[derive(Debug, Deserialize, Clone)]
pub struct Manifest {
    pub package: Package,
}

/// The `[package]` section of a manifest
#[derive(Debug, Deserialize, Clone)]
pub struct Package {
    #[serde(default)]
    pub name: Option<String>,

    pub version: String,
}

impl Manifest {
    /// The declared version as a domain type
    pub fn version(&self) -> ManifestVersion {
        ManifestVersion::new(self.package.version.clone())
    }
}

/// Loads a manifest from the given path, or `./Cargo.toml` when no path is
/// provided.
///
/// # Arguments
/// * `manifest_path` - Optional path to the manifest file
///
/// # Returns
/// * `Ok(Manifest)` - Parsed manifest with a `[package] version` entry
/// * `Err` - If the file is missing, unreadable, not valid TOML, or lacks
///   a `[package]` table with a `version` key
pub fn load_manifest(manifest_path: Option<&str>) -> Result<Manifest> {
    let path = manifest_path.unwrap_or("./Cargo.toml");

    if !Path::new(path).exists() {
        return Err(ReleaseGateError::manifest(format!(
            "Manifest file not found: {}",
            path
        )));
    }

    let manifest_str = fs::read_to_string(path)?;
    parse_manifest(&manifest_str)
        .map_err(|e| ReleaseGateError::manifest(format!("Failed to parse '{}': {}", path, e)))
}

/// Parse manifest text into a [Manifest]
pub fn parse_manifest(manifest_str: &str) -> std::result::Result<Manifest, toml::de::Error> {
    toml::from_str(manifest_str)
}
