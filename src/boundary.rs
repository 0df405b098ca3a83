use std::fmt;

/// Warnings about the tag snapshot a computation was based on.
/// These are non-fatal issues that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// Tag exists but does not follow the `X.Y.Z[-dev|rc|patch.N]` grammar
    UnrecognizedTag { tag: String },
    /// The repository has no version tags at all
    NoVersionTags { skipped: usize },
}

impl BoundaryWarning {
    /// Warnings describing what was left out when classifying `unrecognized` names
    pub fn for_snapshot(recognized: usize, unrecognized: &[String]) -> Vec<BoundaryWarning> {
        let mut warnings: Vec<BoundaryWarning> = unrecognized
            .iter()
            .map(|tag| BoundaryWarning::UnrecognizedTag { tag: tag.clone() })
            .collect();

        if recognized == 0 {
            warnings.push(BoundaryWarning::NoVersionTags {
                skipped: unrecognized.len(),
            });
        }
        warnings
    }
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::UnrecognizedTag { tag } => {
                write!(f, "Ignoring tag '{}': not a recognized version tag", tag)
            }
            BoundaryWarning::NoVersionTags { skipped: 0 } => {
                write!(f, "Repository has no tags; starting from the initial version")
            }
            BoundaryWarning::NoVersionTags { skipped } => {
                write!(
                    f,
                    "Repository has no version tags ({} other tag(s) ignored)",
                    skipped
                )
            }
        }
    }
}
