//! Git repository setup utilities for integration tests

#![allow(dead_code)]

use git2::{Oid, Repository, Signature};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary repository. The TempDir must be kept alive for the duration
/// of the test to prevent cleanup.
pub struct TestRepo {
    pub temp_dir: TempDir,
    pub path: PathBuf,
}

impl TestRepo {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn open(&self) -> Repository {
        Repository::open(&self.path).expect("test repository should open")
    }

    /// Create an empty commit on HEAD and return its id
    pub fn commit(&self, message: &str) -> Oid {
        let repo = self.open();
        let sig = Signature::now("Test User", "test@example.com").unwrap();
        let tree_id = repo.index().unwrap().write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();

        let parents = match repo.head() {
            Ok(head) => vec![head.peel_to_commit().unwrap()],
            Err(_) => Vec::new(),
        };
        let parent_refs: Vec<&git2::Commit> = parents.iter().collect();

        repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parent_refs)
            .unwrap()
    }

    /// Create a lightweight tag on HEAD, bypassing git-vcm
    pub fn tag(&self, name: &str) {
        let repo = self.open();
        let head = repo.head().unwrap().peel_to_commit().unwrap();
        repo.tag_lightweight(name, head.as_object(), false).unwrap();
    }

    /// Commit the tag points to
    pub fn tag_commit(&self, name: &str) -> Oid {
        let repo = self.open();
        let reference = repo.find_reference(&format!("refs/tags/{}", name)).unwrap();
        let commit = reference.peel_to_commit().unwrap();
        commit.id()
    }
}

/// Sets up a fresh git repository with identity configured and one commit
pub fn setup_test_repo() -> TestRepo {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().to_path_buf();

    let repo = Repository::init(&path).unwrap();
    let mut config = repo.config().unwrap();
    config.set_str("user.name", "Test User").unwrap();
    config.set_str("user.email", "test@example.com").unwrap();

    let test_repo = TestRepo { temp_dir, path };
    test_repo.commit("Initial commit");
    test_repo
}
