//! Domain logic - pure types independent of git and the filesystem

pub mod refname;
pub mod version;

pub use refname::ReleaseRef;
pub use version::ManifestVersion;
