/// Parsed form of the ref that triggered a pipeline run.
///
/// A ref is a release tag when it begins with `v` followed by a dotted
/// numeric triple; anything after the triple (a `-beta` qualifier, build
/// metadata) stays part of the version. Every other ref is a branch push.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseRef {
    /// Version tag, e.g. "v1.2.3" or "v2.0.0-beta"
    Tag {
        /// The ref with the leading `v` stripped (qualifiers included)
        version: String,
    },
    /// Branch or other non-release ref, e.g. "main" or "feature/foo"
    Branch { name: String },
}

impl ReleaseRef {
    /// Classify a ref string as a version tag or a branch.
    ///
    /// The tag pattern is anchored only at the start: `v1.2.3-rc1` is still
    /// a tag (with version "1.2.3-rc1"), so a qualified tag is judged by the
    /// version comparison rather than silently skipped.
    ///
    /// # Example
    /// ```
    /// use release_gate::domain::ReleaseRef;
    ///
    /// assert_eq!(
    ///     ReleaseRef::parse("v1.2.3"),
    ///     ReleaseRef::Tag { version: "1.2.3".to_string() }
    /// );
    /// assert_eq!(
    ///     ReleaseRef::parse("main"),
    ///     ReleaseRef::Branch { name: "main".to_string() }
    /// );
    /// ```
    pub fn parse(git_ref: &str) -> Self {
        if let Ok(re) = regex::Regex::new(r"^v\d+\.\d+\.\d+") {
            if re.is_match(git_ref) {
                return ReleaseRef::Tag {
                    version: git_ref[1..].to_string(),
                };
            }
        }

        ReleaseRef::Branch {
            name: git_ref.to_string(),
        }
    }

    /// Whether this ref marks a tag-triggered build
    pub fn is_tag(&self) -> bool {
        matches!(self, ReleaseRef::Tag { .. })
    }

    /// The raw ref string, `v` prefix included for tags
    pub fn as_ref_str(&self) -> String {
        match self {
            ReleaseRef::Tag { version } => format!("v{}", version),
            ReleaseRef::Branch { name } => name.clone(),
        }
    }
}
