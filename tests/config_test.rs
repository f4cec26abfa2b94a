use std::io::Write;

use release_gate::config::{load_config, Config};
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("failed to create temp config");
    file.write_all(contents.as_bytes())
        .expect("failed to write temp config");
    file
}

#[test]
fn test_load_full_config() {
    let file = write_config(
        r#"
skip_refs = ["main", "develop"]

[artifacts]
binary = "mytool"
targets = [
    { os = "linux", arch = "x86_64" },
    { os = "windows", arch = "x86_64" },
]
"#,
    );

    let config = load_config(Some(file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.skip_refs, vec!["main", "develop"]);
    assert_eq!(config.artifacts.binary, "mytool");
    assert_eq!(config.artifacts.targets.len(), 2);

    let names: Vec<String> = config
        .artifact_names("v0.3.0")
        .unwrap()
        .iter()
        .map(|n| n.to_string())
        .collect();
    assert_eq!(
        names,
        vec![
            "mytool-v0.3.0-linux-x86_64.tar.gz".to_string(),
            "mytool-v0.3.0-windows-x86_64.zip".to_string(),
        ]
    );
}

#[test]
fn test_partial_config_fills_defaults() {
    let file = write_config("skip_refs = [\"release-freeze\"]\n");

    let config = load_config(Some(file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.skip_refs, vec!["release-freeze"]);
    // Artifact settings fall back to the defaults
    assert_eq!(config.artifacts.binary, "sqld");
    assert_eq!(config.artifacts.targets.len(), 5);
}

#[test]
fn test_empty_config_is_all_defaults() {
    let file = write_config("");
    let config = load_config(Some(file.path().to_str().unwrap())).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_invalid_config_is_an_error() {
    let file = write_config("skip_refs = \"should be a list\"\n");
    let result = load_config(Some(file.path().to_str().unwrap()));
    assert!(result.is_err());
    assert!(
        result
            .unwrap_err()
            .to_string()
            .contains("Invalid configuration"),
        "Type errors in the config should surface as configuration errors"
    );
}

#[test]
fn test_missing_custom_config_path_is_an_error() {
    let result = load_config(Some("/nope/releasegate.toml"));
    assert!(result.is_err());
}

#[test]
fn test_main_skipped_even_when_not_listed() {
    let file = write_config("skip_refs = [\"develop\"]\n");
    let config = load_config(Some(file.path().to_str().unwrap())).unwrap();
    assert!(config.is_skipped_ref("main"));
    assert!(config.is_skipped_ref("develop"));
    assert!(!config.is_skipped_ref("v1.0.0"));
}
