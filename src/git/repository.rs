use crate::error::{Result, VcmError};
use git2::{ErrorCode, Object, ObjectType, Repository as Git2Repo};
use std::path::Path;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    /// Commit that a new tag should point to
    fn resolve_target(&self, target: Option<&str>) -> Result<Object<'_>> {
        match target {
            Some(tag_name) => {
                let reference = self
                    .repo
                    .find_reference(&format!("refs/tags/{}", tag_name))
                    .map_err(|e| {
                        VcmError::tag(format!("Cannot find tag '{}': {}", tag_name, e))
                    })?;
                reference.peel(ObjectType::Commit).map_err(|e| {
                    VcmError::tag(format!("Cannot peel tag '{}': {}", tag_name, e))
                })
            }
            None => {
                let head = self
                    .repo
                    .head()
                    .map_err(|e| VcmError::tag(format!("Cannot resolve HEAD: {}", e)))?;
                Ok(head.peel(ObjectType::Commit)?)
            }
        }
    }
}

impl super::Repository for Git2Repository {
    fn list_tags(&self) -> Result<Vec<String>> {
        let tags = self.repo.tag_names(None)?;

        Ok(tags.iter().flatten().map(|s| s.to_string()).collect())
    }

    fn create_tag(&self, name: &str, target: Option<&str>, message: Option<&str>) -> Result<()> {
        let object = self.resolve_target(target)?;

        let created = match message {
            Some(message) => {
                let tagger = self.repo.signature()?;
                self.repo.tag(name, &object, &tagger, message, false)
            }
            None => self.repo.tag_lightweight(name, &object, false),
        };

        match created {
            Ok(_) => {
                log::debug!("Created tag '{}' at {}", name, object.id());
                Ok(())
            }
            Err(e) if e.code() == ErrorCode::Exists => {
                Err(VcmError::tag(format!("Tag '{}' already exists", name)))
            }
            Err(e) => Err(VcmError::tag(format!("Cannot create tag '{}': {}", name, e))),
        }
    }
}
