use thiserror::Error;

/// Unified error type for release-gate operations
#[derive(Error, Debug)]
pub enum ReleaseGateError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("Ref resolution error: {0}")]
    Ref(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in release-gate
pub type Result<T> = std::result::Result<T, ReleaseGateError>;

impl ReleaseGateError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseGateError::Config(msg.into())
    }

    /// Create a manifest error with context
    pub fn manifest(msg: impl Into<String>) -> Self {
        ReleaseGateError::Manifest(msg.into())
    }

    /// Create a ref resolution error with context
    pub fn git_ref(msg: impl Into<String>) -> Self {
        ReleaseGateError::Ref(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ReleaseGateError::config("test config issue");
        assert_eq!(err.to_string(), "Configuration error: test config issue");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ReleaseGateError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_constructors() {
        assert!(ReleaseGateError::manifest("test")
            .to_string()
            .contains("Manifest"));
        assert!(ReleaseGateError::git_ref("test")
            .to_string()
            .contains("Ref"));
    }

    #[test]
    fn test_error_all_variants() {
        let errors = vec![
            ReleaseGateError::config("config issue"),
            ReleaseGateError::manifest("manifest issue"),
            ReleaseGateError::git_ref("ref issue"),
        ];

        for err in errors {
            let msg = err.to_string();
            assert!(!msg.is_empty());
        }
    }

    #[test]
    fn test_error_empty_messages() {
        let errors = vec![
            ReleaseGateError::config(""),
            ReleaseGateError::manifest(""),
            ReleaseGateError::git_ref(""),
        ];

        for err in errors {
            let msg = err.to_string();
            // Even with empty message, the error type prefix should be present
            assert!(!msg.is_empty());
        }
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (ReleaseGateError::config("x"), "Configuration error"),
            (ReleaseGateError::manifest("x"), "Manifest error"),
            (ReleaseGateError::git_ref("x"), "Ref resolution error"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }
}
