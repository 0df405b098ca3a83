use crate::error::{Result, VcmError};
use crate::git::Repository;
use std::cell::RefCell;
use std::collections::BTreeMap;

/// A tag recorded by [`MockRepository`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockTag {
    pub name: String,
    pub target: Option<String>,
    pub message: Option<String>,
}

/// Mock repository for testing without actual git operations
#[derive(Debug, Default)]
pub struct MockRepository {
    tags: RefCell<BTreeMap<String, MockTag>>,
    created: RefCell<Vec<String>>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository::default()
    }

    /// Create a mock repository that already holds the given tags
    pub fn with_tags<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let repo = MockRepository::new();
        for name in names {
            repo.add_tag(name);
        }
        repo
    }

    /// Add a lightweight tag without recording it as created
    pub fn add_tag(&self, name: impl Into<String>) {
        let name = name.into();
        self.tags.borrow_mut().insert(
            name.clone(),
            MockTag {
                name,
                target: None,
                message: None,
            },
        );
    }

    /// Names passed to successful `create_tag` calls, in call order
    pub fn created_tags(&self) -> Vec<String> {
        self.created.borrow().clone()
    }

    /// Look up a tag by name
    pub fn get(&self, name: &str) -> Option<MockTag> {
        self.tags.borrow().get(name).cloned()
    }
}

impl Repository for MockRepository {
    fn list_tags(&self) -> Result<Vec<String>> {
        Ok(self.tags.borrow().keys().cloned().collect())
    }

    fn create_tag(&self, name: &str, target: Option<&str>, message: Option<&str>) -> Result<()> {
        if self.tags.borrow().contains_key(name) {
            return Err(VcmError::tag(format!("Tag '{}' already exists", name)));
        }
        if let Some(target) = target {
            if !self.tags.borrow().contains_key(target) {
                return Err(VcmError::tag(format!("Cannot find tag '{}'", target)));
            }
        }

        self.tags.borrow_mut().insert(
            name.to_string(),
            MockTag {
                name: name.to_string(),
                target: target.map(str::to_string),
                message: message.map(str::to_string),
            },
        );
        self.created.borrow_mut().push(name.to_string());
        Ok(())
    }
}
