use crate::domain::{PreRelease, PreReleaseKind, Version};
use crate::error::{Result, VcmError};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// `X.Y.Z` with an optional `-dev.N`, `-rc.N` or `-patch.N` suffix; numbers without leading zeros
const TAG_PATTERN: &str = r"^(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)(?:-(dev|rc|patch)\.(0|[1-9][0-9]*))?$";

static TAG_GRAMMAR: OnceLock<Regex> = OnceLock::new();

fn tag_grammar() -> &'static Regex {
    TAG_GRAMMAR.get_or_init(|| Regex::new(TAG_PATTERN).expect("tag grammar pattern is valid"))
}

/// A recognized version tag
///
/// A production tag has no pre-release part; every pre-release tag carries a counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tag {
    version: Version,
    pre_release: Option<PreRelease>,
}

/// Outcome of classifying a raw tag name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Recognized(Tag),
    /// The name does not follow the tag grammar and takes no part in version computation
    Unrecognized(String),
}

impl Tag {
    /// Create a production tag (`X.Y.Z`)
    pub fn production(version: Version) -> Self {
        Tag {
            version,
            pre_release: None,
        }
    }

    /// Create a pre-release tag (`X.Y.Z-kind.N`)
    pub fn pre_release(version: Version, kind: PreReleaseKind, counter: u32) -> Self {
        Tag {
            version,
            pre_release: Some(PreRelease::new(kind, counter)),
        }
    }

    /// Classify a raw tag name.
    ///
    /// Pure and total: every input maps to exactly one classification.
    pub fn classify(raw: &str) -> Classification {
        match Self::parse_recognized(raw) {
            Some(tag) => Classification::Recognized(tag),
            None => Classification::Unrecognized(raw.to_string()),
        }
    }

    fn parse_recognized(raw: &str) -> Option<Tag> {
        let caps = tag_grammar().captures(raw)?;

        // Captures are validated digits; parse only fails on u32 overflow
        let major = caps[1].parse::<u32>().ok()?;
        let minor = caps[2].parse::<u32>().ok()?;
        let patch = caps[3].parse::<u32>().ok()?;
        let version = Version::new(major, minor, patch);

        match (caps.get(4), caps.get(5)) {
            (Some(kind), Some(counter)) => {
                let kind = kind.as_str().parse::<PreReleaseKind>().ok()?;
                let counter = counter.as_str().parse::<u32>().ok()?;
                Some(Tag::pre_release(version, kind, counter))
            }
            _ => Some(Tag::production(version)),
        }
    }

    pub fn version(&self) -> Version {
        self.version
    }

    /// Pre-release kind, `None` for production tags
    pub fn kind(&self) -> Option<PreReleaseKind> {
        self.pre_release.map(|pr| pr.kind)
    }

    /// Pre-release counter, `None` for production tags
    pub fn counter(&self) -> Option<u32> {
        self.pre_release.map(|pr| pr.counter)
    }

    pub fn is_production(&self) -> bool {
        self.pre_release.is_none()
    }

    /// Whether this tag belongs to the given class (`None` meaning production)
    pub fn is_class(&self, kind: Option<PreReleaseKind>) -> bool {
        self.kind() == kind
    }

    /// The tag with the next counter in the same stream.
    ///
    /// # Returns
    /// * `None` - For production tags, or when the counter cannot be incremented
    pub fn next_pre_release(&self) -> Option<Tag> {
        let next = self.pre_release?.next()?;
        Some(Tag {
            version: self.version,
            pre_release: Some(next),
        })
    }
}

impl FromStr for Tag {
    type Err = VcmError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_recognized(s).ok_or_else(|| VcmError::UnrecognizedTag(s.to_string()))
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.version)?;
        if let Some(pr) = self.pre_release {
            write!(f, "-{}", pr)?;
        }
        Ok(())
    }
}
