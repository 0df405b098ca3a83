//! Read-only snapshot of the tags present in a repository

use std::collections::HashSet;

use crate::domain::{Classification, PreReleaseKind, Tag, Version};

/// The recognized tags of a repository plus the names that were skipped
///
/// The snapshot never changes once built; operations that reason about a
/// hypothetical extra tag use [`TagSet::with`], which returns a new set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    tags: Vec<Tag>,
    index: HashSet<Tag>,
    unrecognized: Vec<String>,
}

impl TagSet {
    /// Create an empty tag set
    pub fn new() -> Self {
        TagSet::default()
    }

    /// Classify raw tag names into a tag set.
    ///
    /// Names outside the tag grammar are kept aside as diagnostics and never
    /// abort the batch. Duplicate names collapse into one tag.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = TagSet::new();
        for name in names {
            match Tag::classify(name.as_ref()) {
                Classification::Recognized(tag) => set.insert(tag),
                Classification::Unrecognized(raw) => {
                    log::debug!("Skipping unrecognized tag '{}'", raw);
                    set.unrecognized.push(raw);
                }
            }
        }
        set
    }

    fn insert(&mut self, tag: Tag) {
        if self.index.insert(tag) {
            self.tags.push(tag);
        }
    }

    /// A new set containing every tag of this one plus `tag`
    pub fn with(&self, tag: Tag) -> TagSet {
        let mut set = self.clone();
        set.insert(tag);
        set
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Names that did not follow the tag grammar, in input order
    pub fn unrecognized(&self) -> &[String] {
        &self.unrecognized
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn contains(&self, tag: &Tag) -> bool {
        self.index.contains(tag)
    }

    /// Whether a production tag exists for exactly `version`
    pub fn has_production(&self, version: Version) -> bool {
        self.contains(&Tag::production(version))
    }

    /// Tags of one class (`None` meaning production), in no particular order
    pub fn of_class(&self, kind: Option<PreReleaseKind>) -> impl Iterator<Item = &Tag> + '_ {
        self.tags.iter().filter(move |tag| tag.is_class(kind))
    }

    /// Latest tag of a class: highest version, ties broken by highest counter.
    ///
    /// The result does not depend on the order the backend listed the tags in.
    pub fn current(&self, kind: Option<PreReleaseKind>) -> Option<&Tag> {
        self.of_class(kind).max_by_key(|tag| latest_key(tag))
    }

    /// Latest pre-release of `kind` within a single version
    pub fn current_in_version(&self, kind: PreReleaseKind, version: Version) -> Option<&Tag> {
        self.of_class(Some(kind))
            .filter(|tag| tag.version() == version)
            .max_by_key(|tag| latest_key(tag))
    }

    /// Highest production version, if any production tag exists
    pub fn latest_production(&self) -> Option<Version> {
        self.current(None).map(|tag| tag.version())
    }
}

/// Ordering key for "latest" selection within one class
fn latest_key(tag: &Tag) -> (Version, Option<u32>) {
    (tag.version(), tag.counter())
}

impl FromIterator<Tag> for TagSet {
    fn from_iter<T: IntoIterator<Item = Tag>>(iter: T) -> Self {
        let mut set = TagSet::new();
        for tag in iter {
            set.insert(tag);
        }
        set
    }
}
