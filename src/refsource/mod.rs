//! Triggering-ref discovery.
//!
//! In CI the triggering ref arrives through the pipeline context; when the
//! gate runs locally it has to be recovered from the repository itself. The
//! [RefSource] trait abstracts that lookup so the orchestration can be tested
//! without a real repository.
//!
//! - [git::Git2RefSource]: real implementation using the `git2` crate
//! - [mock::MockRefSource]: mock implementation for testing

pub mod git;
pub mod mock;

pub use git::Git2RefSource;
pub use mock::MockRefSource;

use crate::error::{ReleaseGateError, Result};

/// Source of the ref that triggered the current run.
///
/// Implementations return the ref in its short form: a tag name like
/// `v1.2.3` or a branch name like `main`.
pub trait RefSource {
    /// Resolve the current ref.
    ///
    /// # Returns
    /// * `Ok(String)` - Tag or branch name
    /// * `Err` - If no ref can be determined (e.g. detached HEAD with no
    ///   version tag)
    fn current_ref(&self) -> Result<String>;
}

/// Ref source for environments without a repository.
///
/// Used when repository discovery fails; the ref must then come from the
/// CLI flag or the CI environment.
pub struct NoRefSource;

impl RefSource for NoRefSource {
    fn current_ref(&self) -> Result<String> {
        Err(ReleaseGateError::git_ref(
            "Not inside a git repository and no ref was supplied",
        ))
    }
}
