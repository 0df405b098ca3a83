use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use git_vcm::boundary::BoundaryWarning;
use git_vcm::cli::{self, TagCommand, WorkflowArgs};
use git_vcm::config;
use git_vcm::domain::{PreReleaseKind, Tag, TagSet, Version, VersionBump};
use git_vcm::git::{Git2Repository, Repository};
use git_vcm::lifecycle::VersionStateMachine;
use git_vcm::ui;

#[derive(Parser)]
#[command(
    name = "git-vcm",
    version,
    about = "Manage Semantic Versioning tags for a Gitflow release flow"
)]
struct Args {
    #[arg(short, long, global = true, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, global = true, default_value = ".", help = "Path to the git repository")]
    repo: String,

    #[arg(short, long, global = true, help = "Skip confirmation prompts")]
    force: bool,

    #[arg(long, global = true, help = "Preview the tag without creating it")]
    dry_run: bool,

    #[arg(long, global = true, help = "Enable debug logging")]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

/// Tag class selectable on the command line
#[derive(Clone, Copy, Debug, ValueEnum)]
enum Class {
    Prod,
    Dev,
    Rc,
    Patch,
}

impl Class {
    fn kind(self) -> Option<PreReleaseKind> {
        match self {
            Class::Prod => None,
            Class::Dev => Some(PreReleaseKind::Dev),
            Class::Rc => Some(PreReleaseKind::Rc),
            Class::Patch => Some(PreReleaseKind::Patch),
        }
    }
}

/// Pre-release stream selectable on the command line
#[derive(Clone, Copy, Debug, ValueEnum)]
enum Stream {
    Dev,
    Rc,
    Patch,
}

impl From<Stream> for PreReleaseKind {
    fn from(stream: Stream) -> Self {
        match stream {
            Stream::Dev => PreReleaseKind::Dev,
            Stream::Rc => PreReleaseKind::Rc,
            Stream::Patch => PreReleaseKind::Patch,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Show the latest tag of every class
    List,
    /// Print the latest tag of one class
    Current {
        #[arg(short, long, value_enum, default_value = "dev")]
        kind: Class,
    },
    /// Create the next tag of an open dev, rc or patch stream
    Increment {
        #[arg(value_enum)]
        kind: Stream,
        /// Increment the stream of this X.Y.Z version instead of the latest one
        #[arg(long = "on", value_name = "X.Y.Z")]
        version: Option<Version>,
    },
    /// Create the next development tag, starting a new version after a release
    Dev {
        /// Start the next stream with a major bump
        #[arg(long)]
        major: bool,
    },
    /// Create the first release candidate of the next version
    InitRc,
    /// Create the first patch tag on the latest production version
    InitPatch,
    /// Release an rc or patch tag as a production version
    Promote {
        /// The rc or patch tag to promote (e.g. 1.2.0-rc.3)
        source: Tag,
    },
}

fn main() {
    let args = Args::parse();

    let level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(e) = run(args) {
        ui::display_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = config::load_config(args.config.as_deref())?;
    let repo = Git2Repository::open(&args.repo)?;

    let command = match args.command {
        Command::List => {
            let tags = TagSet::from_names(repo.list_tags()?);
            for warning in BoundaryWarning::for_snapshot(tags.len(), tags.unrecognized()) {
                ui::display_boundary_warning(&warning);
            }
            ui::display_tag_listing(&tags);
            return Ok(());
        }
        Command::Current { kind } => {
            let tags = TagSet::from_names(repo.list_tags()?);
            let machine = VersionStateMachine::from_config(&config.versioning)?;
            match machine.current(&tags, kind.kind()) {
                Some(tag) => println!("{}", tag),
                None => {
                    ui::display_status(&format!(
                        "No {} tag found",
                        ui::formatter::class_label(kind.kind())
                    ));
                }
            }
            return Ok(());
        }
        Command::Increment { kind, version } => TagCommand::Increment {
            kind: kind.into(),
            version,
        },
        Command::Dev { major } => TagCommand::AdvanceDev {
            bump: if major {
                VersionBump::Major
            } else {
                config.versioning.bump
            },
        },
        Command::InitRc => TagCommand::InitRc,
        Command::InitPatch => TagCommand::InitPatch,
        Command::Promote { source } => TagCommand::Promote { source },
    };

    let workflow = WorkflowArgs {
        command,
        dry_run: args.dry_run,
    };
    let prompt = config.behavior.confirm && !args.force;

    let result = cli::run_tag_workflow_with(&repo, &config, &workflow, |prepared| {
        for warning in &prepared.warnings {
            ui::display_boundary_warning(warning);
        }

        let proposal = &prepared.proposal;
        let derived_from = proposal.derived_from.map(|t| t.to_string());
        ui::display_proposed_tag(derived_from.as_deref(), &proposal.tag.to_string());

        if workflow.dry_run || !prompt {
            return Ok(true);
        }
        ui::confirm_action(&format!("Create tag {}?", proposal.tag))
    })?;

    if result.created {
        ui::display_success(&format!("Created tag: {}", result.tag));
        ui::display_manual_push_instruction(&result.tag, "origin");
    } else if args.dry_run {
        ui::display_status(&format!("Dry run: tag {} was not created", result.tag));
    } else {
        println!("Tag creation cancelled by user.");
    }

    Ok(())
}
