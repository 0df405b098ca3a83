use crate::error::{VcmError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Semantic version representation, ordered lexicographically on (major, minor, patch)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    /// Create a new version
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse a bare `X.Y.Z` version.
    ///
    /// Components are non-negative integers without leading zeros (`0` itself is allowed).
    pub fn parse(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() != 3 {
            return Err(VcmError::version(format!(
                "Invalid version format: '{}' - expected X.Y.Z",
                s
            )));
        }

        let major = parse_component(parts[0])
            .ok_or_else(|| VcmError::version(format!("Invalid major version: {}", parts[0])))?;
        let minor = parse_component(parts[1])
            .ok_or_else(|| VcmError::version(format!("Invalid minor version: {}", parts[1])))?;
        let patch = parse_component(parts[2])
            .ok_or_else(|| VcmError::version(format!("Invalid patch version: {}", parts[2])))?;

        Ok(Version {
            major,
            minor,
            patch,
        })
    }

    /// Bump version according to bump type
    ///
    /// Returns `None` when the bumped component is already `u32::MAX`.
    pub fn bump(&self, bump_type: VersionBump) -> Option<Self> {
        let bumped = match bump_type {
            VersionBump::Major => Version {
                major: self.major.checked_add(1)?,
                minor: 0,
                patch: 0,
            },
            VersionBump::Minor => Version {
                major: self.major,
                minor: self.minor.checked_add(1)?,
                patch: 0,
            },
            VersionBump::Patch => Version {
                major: self.major,
                minor: self.minor,
                patch: self.patch.checked_add(1)?,
            },
        };
        Some(bumped)
    }
}

/// Parse one numeric identifier, rejecting signs, empty strings and leading zeros
fn parse_component(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if s.len() > 1 && s.starts_with('0') {
        return None;
    }
    s.parse::<u32>().ok()
}

impl FromStr for Version {
    type Err = VcmError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Which component a new version stream advances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum VersionBump {
    Major,
    #[default]
    Minor,
    Patch,
}

impl FromStr for VersionBump {
    type Err = VcmError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "major" => Ok(VersionBump::Major),
            "minor" => Ok(VersionBump::Minor),
            "patch" => Ok(VersionBump::Patch),
            other => Err(VcmError::config(format!(
                "Unknown bump '{}' - expected major, minor or patch",
                other
            ))),
        }
    }
}

impl fmt::Display for VersionBump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionBump::Major => write!(f, "major"),
            VersionBump::Minor => write!(f, "minor"),
            VersionBump::Patch => write!(f, "patch"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_parse() {
        let v = Version::parse("1.2.3").unwrap();
        assert_eq!(v.major, 1);
        assert_eq!(v.minor, 2);
        assert_eq!(v.patch, 3);
    }

    #[test]
    fn test_version_parse_zero_components() {
        assert_eq!(Version::parse("0.0.0").unwrap(), Version::new(0, 0, 0));
        assert_eq!(Version::parse("10.0.20").unwrap(), Version::new(10, 0, 20));
    }

    #[test]
    fn test_version_parse_invalid() {
        assert!(Version::parse("1.2").is_err());
        assert!(Version::parse("1.2.3.4").is_err());
        assert!(Version::parse("v1.2.3").is_err());
        assert!(Version::parse("1.-2.3").is_err());
        assert!(Version::parse("1..3").is_err());
    }

    #[test]
    fn test_version_parse_rejects_leading_zeros() {
        assert!(Version::parse("01.2.3").is_err());
        assert!(Version::parse("1.02.3").is_err());
        assert!(Version::parse("1.2.00").is_err());
    }

    #[test]
    fn test_version_parse_rejects_overflow() {
        assert!(Version::parse("4294967296.0.0").is_err());
    }

    #[test]
    fn test_version_ordering_is_lexicographic() {
        assert!(Version::new(1, 0, 0) < Version::new(1, 0, 1));
        assert!(Version::new(1, 9, 9) < Version::new(2, 0, 0));
        assert!(Version::new(1, 10, 0) > Version::new(1, 9, 0));
    }

    #[test]
    fn test_version_bump_major() {
        let v = Version::new(1, 2, 3);
        assert_eq!(v.bump(VersionBump::Major), Some(Version::new(2, 0, 0)));
    }

    #[test]
    fn test_version_bump_minor() {
        let v = Version::new(1, 2, 3);
        assert_eq!(v.bump(VersionBump::Minor), Some(Version::new(1, 3, 0)));
    }

    #[test]
    fn test_version_bump_patch() {
        let v = Version::new(1, 2, 3);
        assert_eq!(v.bump(VersionBump::Patch), Some(Version::new(1, 2, 4)));
    }

    #[test]
    fn test_version_bump_exhausted() {
        let max = u32::MAX;
        assert_eq!(Version::new(max, 0, 0).bump(VersionBump::Major), None);
        assert_eq!(Version::new(1, max, 7).bump(VersionBump::Minor), None);
        assert_eq!(Version::new(1, 2, max).bump(VersionBump::Patch), None);
        assert_eq!(
            Version::new(1, 2, max).bump(VersionBump::Minor),
            Some(Version::new(1, 3, 0))
        );
    }

    #[test]
    fn test_version_display() {
        let v = Version::new(1, 2, 3);
        assert_eq!(v.to_string(), "1.2.3");
    }

    #[test]
    fn test_version_bump_from_str() {
        assert_eq!("major".parse::<VersionBump>().unwrap(), VersionBump::Major);
        assert_eq!("Minor".parse::<VersionBump>().unwrap(), VersionBump::Minor);
        assert!("huge".parse::<VersionBump>().is_err());
    }
}
