//! Pre-release classes of the release flow
//!
//! Every non-production tag carries one of three identifiers with a counter:
//! `dev` for integration builds, `rc` for release candidates and `patch` for
//! hotfixes on a released version.

use crate::error::{Result, VcmError};
use std::fmt;
use std::str::FromStr;

/// Lifecycle class of a pre-release tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PreReleaseKind {
    /// Development build (`X.Y.Z-dev.N`)
    Dev,
    /// Release candidate (`X.Y.Z-rc.N`)
    Rc,
    /// Hotfix on top of a production version (`X.Y.Z-patch.N`)
    Patch,
}

impl PreReleaseKind {
    /// All kinds, in the order they are listed to users
    pub const ALL: [PreReleaseKind; 3] =
        [PreReleaseKind::Dev, PreReleaseKind::Rc, PreReleaseKind::Patch];

    /// The identifier used inside tag names
    pub fn identifier(&self) -> &'static str {
        match self {
            PreReleaseKind::Dev => "dev",
            PreReleaseKind::Rc => "rc",
            PreReleaseKind::Patch => "patch",
        }
    }
}

impl FromStr for PreReleaseKind {
    type Err = VcmError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "dev" => Ok(PreReleaseKind::Dev),
            "rc" => Ok(PreReleaseKind::Rc),
            "patch" => Ok(PreReleaseKind::Patch),
            other => Err(VcmError::version(format!(
                "Invalid pre-release identifier: '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for PreReleaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

/// Pre-release part of a tag: a kind and its counter
///
/// # Examples
/// - "dev.0" -> PreRelease { kind: Dev, counter: 0 }
/// - "rc.3" -> PreRelease { kind: Rc, counter: 3 }
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PreRelease {
    pub kind: PreReleaseKind,
    pub counter: u32,
}

impl PreRelease {
    /// Create a new pre-release
    pub fn new(kind: PreReleaseKind, counter: u32) -> Self {
        PreRelease { kind, counter }
    }

    /// First pre-release of a stream
    pub fn first(kind: PreReleaseKind) -> Self {
        PreRelease { kind, counter: 0 }
    }

    /// The following pre-release of the same kind, or `None` when the counter is exhausted
    pub fn next(&self) -> Option<Self> {
        self.counter.checked_add(1).map(|counter| PreRelease {
            kind: self.kind,
            counter,
        })
    }
}

impl fmt::Display for PreRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.kind, self.counter)
    }
}
