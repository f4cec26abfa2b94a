use crate::domain::ReleaseRef;
use crate::error::{ReleaseGateError, Result};
use crate::refsource::RefSource;

/// Ref source backed by a real git repository via the `git2` crate.
///
/// Mirrors what the CI context would report: a version tag pointing at HEAD
/// wins over the branch name, so a tagged commit is treated as a
/// tag-triggered build even when checked out on a branch.
pub struct Git2RefSource {
    repo: git2::Repository,
}

impl Git2RefSource {
    /// Discover the repository containing the current directory
    pub fn discover() -> Result<Self> {
        let repo = git2::Repository::discover(".")?;
        Ok(Git2RefSource { repo })
    }

    /// Open a repository at an explicit path
    pub fn open(path: &str) -> Result<Self> {
        let repo = git2::Repository::open(path)?;
        Ok(Git2RefSource { repo })
    }

    /// Find a version tag whose target commit is `head_oid`
    fn version_tag_at(&self, head_oid: git2::Oid) -> Result<Option<String>> {
        let tag_names = self.repo.tag_names(None)?;

        for name in tag_names.iter().flatten() {
            if !ReleaseRef::parse(name).is_tag() {
                continue;
            }

            // Annotated tags need peeling to reach the commit
            if let Ok(obj) = self.repo.revparse_single(&format!("refs/tags/{}", name)) {
                if let Ok(commit) = obj.peel(git2::ObjectType::Commit) {
                    if commit.id() == head_oid {
                        return Ok(Some(name.to_string()));
                    }
                }
            }
        }

        Ok(None)
    }
}

impl RefSource for Git2RefSource {
    fn current_ref(&self) -> Result<String> {
        let head = self.repo.head()?;
        let head_oid = head.peel_to_commit()?.id();

        if let Some(tag) = self.version_tag_at(head_oid)? {
            return Ok(tag);
        }

        if head.is_branch() {
            if let Some(name) = head.shorthand() {
                return Ok(name.to_string());
            }
        }

        Err(ReleaseGateError::git_ref(
            "HEAD is detached and no version tag points at it",
        ))
    }
}
