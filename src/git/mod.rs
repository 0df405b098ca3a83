//! Tag storage abstraction layer
//!
//! This module provides a trait-based abstraction over the tag store that
//! git-vcm reads from and writes to, allowing for a real Git backend and an
//! in-memory implementation for testing.
//!
//! # Overview
//!
//! The primary abstraction is the [Repository] trait. The concrete
//! implementations are:
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: A mock implementation for testing
//!
//! # Usage
//!
//! The version computation itself never touches a repository: callers list the
//! tags, build a [TagSet](crate::domain::TagSet) and hand the proposed tag back
//! to [Repository::create_tag].
//!
//! ```rust
//! # use git_vcm::git::Repository;
//! # use git_vcm::domain::{PreReleaseKind, TagSet};
//! # use git_vcm::lifecycle::VersionStateMachine;
//! # fn example<R: Repository>(repo: &R) -> Result<(), Box<dyn std::error::Error>> {
//! let tags = TagSet::from_names(repo.list_tags()?);
//! let next = VersionStateMachine::default().increment(&tags, PreReleaseKind::Dev)?;
//! repo.create_tag(&next.to_string(), None, None)?;
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// Common tag store trait for abstraction
///
/// ## Error Handling
///
/// All methods return [crate::error::Result<T>]. Implementations map backend
/// errors (like `git2::Error`) to the appropriate [crate::error::VcmError]
/// variants.
///
/// ## Concurrency
///
/// Listing and creating are separate calls. Two writers computing the next tag
/// from the same snapshot will propose the same name; implementations must
/// reject the second creation instead of overwriting, and callers that need
/// more than that must serialize the read-compute-create sequence themselves.
pub trait Repository {
    /// Get all tag names in the repository
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Tag names, possibly empty, in no guaranteed order
    /// * `Err` - If the tags cannot be read
    fn list_tags(&self) -> Result<Vec<String>>;

    /// Create a tag
    ///
    /// # Arguments
    /// * `name` - Name for the new tag
    /// * `target` - Existing tag whose commit the new tag points to; HEAD when `None`
    /// * `message` - Annotation message; a lightweight tag is created when `None`
    ///
    /// # Returns
    /// * `Ok(())` - Success
    /// * `Err` - If the tag already exists, the target cannot be resolved, or the
    ///   backend fails
    ///
    /// # Example
    /// ```rust
    /// # use git_vcm::git::Repository;
    /// # fn example<R: Repository>(repo: &R) -> Result<(), Box<dyn std::error::Error>> {
    /// repo.create_tag(
    ///     "1.1.0-rc.0",
    ///     Some("1.1.0-dev.4"),
    ///     Some("Release candidate version: 1.1.0-rc.0"),
    /// )?;
    /// # Ok(())
    /// # }
    /// ```
    fn create_tag(&self, name: &str, target: Option<&str>, message: Option<&str>) -> Result<()>;
}
