use crate::error::{ReleaseGateError, Result};
use crate::refsource::RefSource;

/// Mock ref source for testing without a git repository
pub struct MockRefSource {
    git_ref: Option<String>,
}

impl MockRefSource {
    /// Create a mock that resolves to the given ref
    pub fn new(git_ref: impl Into<String>) -> Self {
        MockRefSource {
            git_ref: Some(git_ref.into()),
        }
    }

    /// Create a mock that fails to resolve any ref
    pub fn unresolvable() -> Self {
        MockRefSource { git_ref: None }
    }
}

impl RefSource for MockRefSource {
    fn current_ref(&self) -> Result<String> {
        self.git_ref
            .clone()
            .ok_or_else(|| ReleaseGateError::git_ref("No ref available"))
    }
}
