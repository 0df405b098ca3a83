use crate::config::VersioningConfig;
use crate::domain::{PreReleaseKind, Tag, TagSet, Version, VersionBump};
use crate::error::{Result, VcmError};

/// Computes next tags from a snapshot of existing tags and enforces the release flow.
///
/// Streams per version: `dev` increments freely, `rc` is opened by
/// [`init_rc`](Self::init_rc) and closed by promotion, `patch` is opened on a
/// production version by [`init_patch`](Self::init_patch) and closed by promotion
/// to the next patch version. Production tags are terminal for their version.
///
/// The machine never creates tags; it only proposes them. Reading the tags,
/// computing a proposal and creating the tag must be serialized by the caller
/// when several writers share a repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionStateMachine {
    initial_version: Version,
    bump: VersionBump,
}

impl Default for VersionStateMachine {
    fn default() -> Self {
        VersionStateMachine::new(Version::new(0, 1, 0), VersionBump::Minor)
    }
}

impl VersionStateMachine {
    /// Create a state machine
    ///
    /// # Arguments
    /// * `initial_version` - Version of the first stream in a repository without tags
    /// * `bump` - How a new stream advances from the latest production version
    pub fn new(initial_version: Version, bump: VersionBump) -> Self {
        VersionStateMachine {
            initial_version,
            bump,
        }
    }

    /// Create a state machine from the `[versioning]` configuration section
    pub fn from_config(config: &VersioningConfig) -> Result<Self> {
        Ok(VersionStateMachine::new(
            config.initial_version()?,
            config.bump,
        ))
    }

    pub fn initial_version(&self) -> Version {
        self.initial_version
    }

    pub fn bump(&self) -> VersionBump {
        self.bump
    }

    /// Latest tag of a class (`None` meaning production), or `None` when the class is empty
    pub fn current(&self, tags: &TagSet, kind: Option<PreReleaseKind>) -> Option<Tag> {
        tags.current(kind).copied()
    }

    /// Next tag in the latest stream of `kind`: same version, counter + 1.
    ///
    /// # Returns
    /// * `Err(NotFound)` - No tag of `kind` exists; the stream must be initialized first
    /// * `Err(InvalidTransition)` - The stream's version was already released
    pub fn increment(&self, tags: &TagSet, kind: PreReleaseKind) -> Result<Tag> {
        let current = tags.current(Some(kind)).copied().ok_or_else(|| {
            VcmError::not_found(format!(
                "no {} tag exists yet; initialize the stream first",
                kind
            ))
        })?;
        self.next_in_stream(tags, current)
    }

    /// Like [`increment`](Self::increment), for the stream of one specific version
    pub fn increment_in_version(
        &self,
        tags: &TagSet,
        kind: PreReleaseKind,
        version: Version,
    ) -> Result<Tag> {
        let current = tags
            .current_in_version(kind, version)
            .copied()
            .ok_or_else(|| {
                VcmError::not_found(format!("no {} tag exists for version {}", kind, version))
            })?;
        self.next_in_stream(tags, current)
    }

    fn next_in_stream(&self, tags: &TagSet, current: Tag) -> Result<Tag> {
        ensure_stream_open(tags, &current)?;
        current.next_pre_release().ok_or_else(|| {
            VcmError::invalid_transition(format!(
                "counter of '{}' cannot be incremented any further",
                current
            ))
        })
    }

    /// First release candidate (`-rc.0`) of the next version to be released.
    ///
    /// The target version is the current dev version; without dev tags it is the
    /// latest production version advanced by the configured bump, and in an
    /// empty repository the configured initial version.
    ///
    /// # Returns
    /// * `Err(InvalidTransition)` - A production tag at or above the target exists,
    ///   or release candidates for the target already exist
    pub fn init_rc(&self, tags: &TagSet) -> Result<Tag> {
        let target = self.rc_baseline(tags)?;

        if let Some(production) = tags.latest_production() {
            if production >= target {
                return Err(VcmError::invalid_transition(format!(
                    "production version {} available; cannot create a release candidate for {}",
                    production, target
                )));
            }
        }

        if let Some(existing) = tags.current_in_version(PreReleaseKind::Rc, target) {
            return Err(VcmError::invalid_transition(format!(
                "release candidates for {} already exist (latest '{}'); increment instead",
                target, existing
            )));
        }

        Ok(Tag::pre_release(target, PreReleaseKind::Rc, 0))
    }

    fn rc_baseline(&self, tags: &TagSet) -> Result<Version> {
        if let Some(dev) = tags.current(Some(PreReleaseKind::Dev)) {
            log::debug!("Release candidate baseline taken from dev tag '{}'", dev);
            return Ok(dev.version());
        }

        match tags.latest_production() {
            Some(production) => {
                let target = bumped(production, self.bump)?;
                log::debug!(
                    "No dev tags; release candidate baseline {} bumped ({}) from production {}",
                    target,
                    self.bump,
                    production
                );
                Ok(target)
            }
            None => {
                log::debug!(
                    "Empty repository; release candidate baseline is the initial version {}",
                    self.initial_version
                );
                Ok(self.initial_version)
            }
        }
    }

    /// First patch tag (`-patch.0`) on the latest production version.
    ///
    /// # Returns
    /// * `Err(InvalidTransition)` - No production tag exists, or a patch stream
    ///   for the latest production version is already open
    pub fn init_patch(&self, tags: &TagSet) -> Result<Tag> {
        let production = tags.latest_production().ok_or_else(|| {
            VcmError::invalid_transition(
                "production version not available; cannot create a patch version",
            )
        })?;

        if let Some(existing) = tags.current_in_version(PreReleaseKind::Patch, production) {
            return Err(VcmError::invalid_transition(format!(
                "patch stream for {} already open (latest '{}'); increment instead",
                production, existing
            )));
        }

        Ok(Tag::pre_release(production, PreReleaseKind::Patch, 0))
    }

    /// Production tag released from an RC or patch tag.
    ///
    /// `X.Y.Z-rc.N` releases `X.Y.Z`; `X.Y.Z-patch.N` is a hotfix on the released
    /// `X.Y.Z` and releases `X.Y.(Z+1)`.
    ///
    /// # Returns
    /// * `Err(InvalidSource)` - `source` is not an RC or patch tag, is not in
    ///   `tags`, or the production tag it would release already exists
    /// * `Err(InvalidTransition)` - The patch version of `source` cannot be incremented
    pub fn promote(&self, tags: &TagSet, source: &Tag) -> Result<Tag> {
        let target = match source.kind() {
            Some(PreReleaseKind::Rc) => source.version(),
            Some(PreReleaseKind::Patch) => bumped(source.version(), VersionBump::Patch)?,
            _ => {
                return Err(VcmError::invalid_source(format!(
                    "only rc or patch tags can be promoted, got '{}'",
                    source
                )))
            }
        };

        if !tags.contains(source) {
            return Err(VcmError::invalid_source(format!(
                "tag '{}' does not exist; cannot promote it",
                source
            )));
        }

        if tags.has_production(target) {
            return Err(VcmError::invalid_source(format!(
                "production version {} already exists; '{}' cannot be promoted",
                target, source
            )));
        }

        Ok(Tag::production(target))
    }

    /// Next development tag.
    ///
    /// Increments the current dev stream, or starts a new stream at `-dev.0` when
    /// there is none yet or when the current one was already cut for release
    /// (an RC or production tag exists at or above its version).
    pub fn advance_dev(&self, tags: &TagSet, bump: VersionBump) -> Result<Tag> {
        let latest_production = tags.latest_production();

        let Some(dev) = tags.current(Some(PreReleaseKind::Dev)).copied() else {
            let version = match latest_production {
                Some(production) => bumped(production, bump)?,
                None => self.initial_version,
            };
            return Ok(Tag::pre_release(version, PreReleaseKind::Dev, 0));
        };

        let version = dev.version();
        let released = latest_production.is_some_and(|production| production >= version)
            || tags
                .current_in_version(PreReleaseKind::Rc, version)
                .is_some();

        if !released {
            return self.next_in_stream(tags, dev);
        }

        let base = latest_production.map_or(version, |production| production.max(version));
        let next = Tag::pre_release(bumped(base, bump)?, PreReleaseKind::Dev, 0);
        log::debug!(
            "Dev stream {} was cut for release; starting {}",
            version,
            next
        );
        Ok(next)
    }
}

/// `version` advanced by `bump`, or an invalid transition when a component is exhausted
fn bumped(version: Version, bump: VersionBump) -> Result<Version> {
    version.bump(bump).ok_or_else(|| {
        VcmError::invalid_transition(format!(
            "version {} cannot be bumped ({}) any further",
            version, bump
        ))
    })
}

/// Production is terminal: no rc after its version is released, no patch after its hotfix is
fn ensure_stream_open(tags: &TagSet, tag: &Tag) -> Result<()> {
    let version = tag.version();
    match tag.kind() {
        Some(PreReleaseKind::Rc) if tags.has_production(version) => {
            Err(VcmError::invalid_transition(format!(
                "production version {} available; cannot create a release candidate",
                version
            )))
        }
        Some(PreReleaseKind::Patch) => match version.bump(VersionBump::Patch) {
            Some(hotfix) if tags.has_production(hotfix) => Err(VcmError::invalid_transition(
                format!("patch of {} already released as {}", version, hotfix),
            )),
            _ => Ok(()),
        },
        _ => Ok(()),
    }
}
