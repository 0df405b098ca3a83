//! Tagging workflow orchestration
//!
//! Connects the tag store, the state machine and the configuration. Kept apart
//! from `main.rs` so the workflow can be driven programmatically and tested
//! against [`MockRepository`](crate::git::MockRepository) without clap.

use crate::boundary::BoundaryWarning;
use crate::config::Config;
use crate::domain::{PreReleaseKind, Tag, TagSet, Version, VersionBump};
use crate::error::Result;
use crate::git::Repository;
use crate::lifecycle::VersionStateMachine;

/// A tag-producing request
#[derive(Debug, Clone, PartialEq)]
pub enum TagCommand {
    /// Next counter in the latest stream of `kind`, or of `version`'s stream when given
    Increment {
        kind: PreReleaseKind,
        version: Option<Version>,
    },
    /// Next development tag, opening a new stream when the current one was released
    AdvanceDev { bump: VersionBump },
    /// First release candidate of the next version
    InitRc,
    /// First patch tag on the latest production version
    InitPatch,
    /// Production tag released from an rc or patch tag
    Promote { source: Tag },
}

/// A computed tag together with where and how it should be written
#[derive(Debug, Clone, PartialEq)]
pub struct TagProposal {
    /// The tag to create
    pub tag: Tag,
    /// Existing tag the proposal was derived from, for display
    pub derived_from: Option<Tag>,
    /// Existing tag whose commit the new tag points to; HEAD when `None`
    pub target: Option<Tag>,
    /// Annotation message; lightweight tag when `None`
    pub message: Option<String>,
}

/// A proposal plus the diagnostics of the snapshot it was computed from
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedTag {
    pub proposal: TagProposal,
    pub warnings: Vec<BoundaryWarning>,
}

/// Arguments for the tagging workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowArgs {
    pub command: TagCommand,

    /// Preview mode - compute the tag without creating it
    pub dry_run: bool,
}

/// Result of a successful tagging workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// The tag that was (or would be) created
    pub tag: String,

    /// The tag whose commit it points to, HEAD when `None`
    pub target: Option<String>,

    /// Whether the tag was written to the repository
    pub created: bool,

    pub warnings: Vec<BoundaryWarning>,
}

/// Compute the proposal for `command` from a tag snapshot.
///
/// Pure: the snapshot is not modified and nothing is written.
///
/// # Arguments
/// * `tags` - Snapshot of the repository's tags
/// * `machine` - State machine holding the versioning settings
/// * `command` - The requested transition
/// * `annotate` - Attach messages to stream-opening and release tags
pub fn plan(
    tags: &TagSet,
    machine: &VersionStateMachine,
    command: &TagCommand,
    annotate: bool,
) -> Result<TagProposal> {
    let mut proposal = match command {
        TagCommand::Increment { kind, version } => {
            let (derived_from, tag) = match version {
                Some(version) => (
                    tags.current_in_version(*kind, *version).copied(),
                    machine.increment_in_version(tags, *kind, *version)?,
                ),
                None => (
                    tags.current(Some(*kind)).copied(),
                    machine.increment(tags, *kind)?,
                ),
            };
            TagProposal {
                tag,
                derived_from,
                target: None,
                message: None,
            }
        }
        TagCommand::AdvanceDev { bump } => TagProposal {
            tag: machine.advance_dev(tags, *bump)?,
            derived_from: tags.current(Some(PreReleaseKind::Dev)).copied(),
            target: None,
            message: None,
        },
        TagCommand::InitRc => {
            let tag = machine.init_rc(tags)?;
            let dev = tags
                .current(Some(PreReleaseKind::Dev))
                .copied()
                .filter(|dev| dev.version() == tag.version());
            let message = match dev {
                Some(dev) => format!(
                    "Release candidate version: {} created from Development version: {}",
                    tag, dev
                ),
                None => format!("Release candidate version: {}", tag),
            };
            TagProposal {
                tag,
                derived_from: dev,
                target: dev,
                message: Some(message),
            }
        }
        TagCommand::InitPatch => {
            let tag = machine.init_patch(tags)?;
            let production = tags.current(None).copied();
            let message = match production {
                Some(production) => format!(
                    "Patch version: {} created from Production version: {}",
                    tag, production
                ),
                None => format!("Patch version: {}", tag),
            };
            TagProposal {
                tag,
                derived_from: production,
                target: production,
                message: Some(message),
            }
        }
        TagCommand::Promote { source } => {
            let tag = machine.promote(tags, source)?;
            let origin = match source.kind() {
                Some(PreReleaseKind::Patch) => "Patch",
                _ => "Release Candidate",
            };
            TagProposal {
                tag,
                derived_from: Some(*source),
                target: Some(*source),
                message: Some(format!(
                    "Production version: {} created from {} version: {}",
                    tag, origin, source
                )),
            }
        }
    };

    if !annotate {
        proposal.message = None;
    }
    Ok(proposal)
}

/// Read the repository's tags and compute the proposal for `command`
pub fn prepare<R: Repository>(
    repo: &R,
    config: &Config,
    command: &TagCommand,
) -> Result<PreparedTag> {
    let tags = TagSet::from_names(repo.list_tags()?);
    let warnings = BoundaryWarning::for_snapshot(tags.len(), tags.unrecognized());
    log::debug!(
        "Read {} version tag(s), skipped {}",
        tags.len(),
        tags.unrecognized().len()
    );

    let machine = VersionStateMachine::from_config(&config.versioning)?;
    let proposal = plan(&tags, &machine, command, config.behavior.annotate)?;

    Ok(PreparedTag { proposal, warnings })
}

/// Write a proposal to the repository
pub fn apply<R: Repository>(repo: &R, proposal: &TagProposal) -> Result<()> {
    let name = proposal.tag.to_string();
    let target = proposal.target.map(|t| t.to_string());

    repo.create_tag(&name, target.as_deref(), proposal.message.as_deref())?;
    log::info!(
        "Created tag {} at {}",
        name,
        target.as_deref().unwrap_or("HEAD")
    );
    Ok(())
}

/// Main tagging workflow
///
/// 1. Read the tag snapshot from the repository
/// 2. Compute the next tag for the requested transition
/// 3. Create it, unless this is a dry run
pub fn run_tag_workflow<R: Repository>(
    repo: &R,
    config: &Config,
    args: &WorkflowArgs,
) -> Result<WorkflowResult> {
    run_tag_workflow_with(repo, config, args, |_| Ok(true))
}

/// Tagging workflow with a review step between planning and writing
///
/// `review` sees the proposal and its warnings before anything is written,
/// including on dry runs. Returning `Ok(false)` cancels the write.
pub fn run_tag_workflow_with<R, F>(
    repo: &R,
    config: &Config,
    args: &WorkflowArgs,
    review: F,
) -> Result<WorkflowResult>
where
    R: Repository,
    F: FnOnce(&PreparedTag) -> Result<bool>,
{
    let prepared = prepare(repo, config, &args.command)?;

    let approved = review(&prepared)?;
    let created = approved && !args.dry_run;
    if created {
        apply(repo, &prepared.proposal)?;
    } else if !approved {
        log::info!("Tag {} was not approved", prepared.proposal.tag);
    }

    Ok(WorkflowResult {
        tag: prepared.proposal.tag.to_string(),
        target: prepared.proposal.target.map(|t| t.to_string()),
        created,
        warnings: prepared.warnings,
    })
}
