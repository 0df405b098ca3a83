use thiserror::Error;

/// Unified error type for git-vcm operations
#[derive(Error, Debug)]
pub enum VcmError {
    /// A tag of the requested class was required but none exists
    #[error("No tag found: {0}")]
    NotFound(String),

    /// A lifecycle rule forbids the requested transition
    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    /// Promotion from a tag of the wrong class or onto a released version
    #[error("Invalid source tag: {0}")]
    InvalidSource(String),

    /// A string that does not follow the tag grammar was used where a tag is required
    #[error("Unrecognized tag: '{0}'")]
    UnrecognizedTag(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Tag error: {0}")]
    Tag(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-vcm
pub type Result<T> = std::result::Result<T, VcmError>;

impl VcmError {
    /// Create a not-found error with context
    pub fn not_found(msg: impl Into<String>) -> Self {
        VcmError::NotFound(msg.into())
    }

    /// Create an invalid transition error with context
    pub fn invalid_transition(msg: impl Into<String>) -> Self {
        VcmError::InvalidTransition(msg.into())
    }

    /// Create an invalid source error with context
    pub fn invalid_source(msg: impl Into<String>) -> Self {
        VcmError::InvalidSource(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        VcmError::Version(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        VcmError::Config(msg.into())
    }

    /// Create a tag error with context
    pub fn tag(msg: impl Into<String>) -> Self {
        VcmError::Tag(msg.into())
    }

    /// True for failures caused by the tag lifecycle rules rather than by I/O
    pub fn is_lifecycle(&self) -> bool {
        matches!(
            self,
            VcmError::NotFound(_) | VcmError::InvalidTransition(_) | VcmError::InvalidSource(_)
        )
    }
}
