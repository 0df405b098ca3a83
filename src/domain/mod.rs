//! Domain logic - tag grammar and classification, independent of git operations

pub mod prerelease;
pub mod tag;
pub mod tagset;
pub mod version;

pub use prerelease::{PreRelease, PreReleaseKind};
pub use tag::{Classification, Tag};
pub use tagset::TagSet;
pub use version::{Version, VersionBump};
