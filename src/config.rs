use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::artifact::{ArtifactName, Platform};
use crate::error::{ReleaseGateError, Result};

/// Represents the complete configuration for release-gate.
///
/// Controls which refs are always treated as non-release, and how published
/// artifact names are composed.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_skip_refs")]
    pub skip_refs: Vec<String>,

    #[serde(default)]
    pub artifacts: ArtifactsConfig,
}

/// Returns the default list of refs that never gate a release.
fn default_skip_refs() -> Vec<String> {
    vec!["main".to_string()]
}

/// Configuration for artifact naming.
///
/// `binary` is the leading filename segment; `targets` is the set of
/// platform/arch pairs the pipeline builds for.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ArtifactsConfig {
    #[serde(default = "default_binary")]
    pub binary: String,

    #[serde(default = "default_targets")]
    pub targets: Vec<TargetConfig>,
}

/// A single build target (platform + architecture)
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TargetConfig {
    pub os: String,
    pub arch: String,
}

/// Returns the default artifact binary name.
fn default_binary() -> String {
    "sqld".to_string()
}

/// Returns the default build target matrix.
fn default_targets() -> Vec<TargetConfig> {
    let pairs = [
        ("linux", "x86_64"),
        ("linux", "aarch64"),
        ("macos", "x86_64"),
        ("macos", "aarch64"),
        ("windows", "x86_64"),
    ];

    pairs
        .iter()
        .map(|(os, arch)| TargetConfig {
            os: os.to_string(),
            arch: arch.to_string(),
        })
        .collect()
}

impl Default for ArtifactsConfig {
    fn default() -> Self {
        ArtifactsConfig {
            binary: default_binary(),
            targets: default_targets(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            skip_refs: default_skip_refs(),
            artifacts: ArtifactsConfig::default(),
        }
    }
}

impl Config {
    /// Whether a ref is configured to bypass the gate entirely.
    ///
    /// `"main"` always bypasses, even if removed from `skip_refs`.
    pub fn is_skipped_ref(&self, git_ref: &str) -> bool {
        git_ref == "main" || self.skip_refs.iter().any(|r| r == git_ref)
    }

    /// Expected artifact filenames for a given ref, one per target
    pub fn artifact_names(&self, git_ref: &str) -> Result<Vec<ArtifactName>> {
        self.artifacts
            .targets
            .iter()
            .map(|target| {
                let platform = Platform::parse(&target.os)?;
                Ok(ArtifactName::new(
                    self.artifacts.binary.clone(),
                    git_ref,
                    platform,
                    target.arch.clone(),
                ))
            })
            .collect()
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `releasegate.toml` in current directory
/// 3. `.releasegate.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./releasegate.toml").exists() {
        fs::read_to_string("./releasegate.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".releasegate.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)
        .map_err(|e| ReleaseGateError::config(format!("Invalid configuration: {}", e)))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.skip_refs, vec!["main".to_string()]);
        assert_eq!(config.artifacts.binary, "sqld");
        assert_eq!(config.artifacts.targets.len(), 5);
    }

    #[test]
    fn test_main_always_skipped() {
        let config = Config {
            skip_refs: vec![],
            ..Config::default()
        };
        assert!(config.is_skipped_ref("main"));
    }

    #[test]
    fn test_configured_skip_ref() {
        let config = Config {
            skip_refs: vec!["develop".to_string()],
            ..Config::default()
        };
        assert!(config.is_skipped_ref("develop"));
        assert!(!config.is_skipped_ref("v1.2.3"));
    }

    #[test]
    fn test_artifact_names_default_targets() {
        let config = Config::default();
        let names: Vec<String> = config
            .artifact_names("v1.2.3")
            .unwrap()
            .iter()
            .map(|n| n.to_string())
            .collect();

        assert_eq!(names.len(), 5);
        assert!(names.contains(&"sqld-v1.2.3-linux-x86_64.tar.gz".to_string()));
        assert!(names.contains(&"sqld-v1.2.3-windows-x86_64.zip".to_string()));
    }

    #[test]
    fn test_artifact_names_bad_platform() {
        let config = Config {
            artifacts: ArtifactsConfig {
                binary: "sqld".to_string(),
                targets: vec![TargetConfig {
                    os: "plan9".to_string(),
                    arch: "x86_64".to_string(),
                }],
            },
            ..Config::default()
        };
        assert!(config.artifact_names("v1.2.3").is_err());
    }
}
