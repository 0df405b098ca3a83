mod common;

use common::setup_test_repo;
use git_vcm::cli::{run_tag_workflow, TagCommand, WorkflowArgs};
use git_vcm::config::Config;
use git_vcm::domain::{PreReleaseKind, VersionBump};
use git_vcm::git::{Git2Repository, Repository};
use git_vcm::VcmError;

fn workflow(repo: &Git2Repository, command: TagCommand) -> git_vcm::Result<String> {
    let args = WorkflowArgs {
        command,
        dry_run: false,
    };
    run_tag_workflow(repo, &Config::default(), &args).map(|r| r.tag)
}

#[test]
fn test_list_tags_of_fresh_repository() {
    let test_repo = setup_test_repo();
    let repo = Git2Repository::open(test_repo.path()).unwrap();

    assert!(repo.list_tags().unwrap().is_empty());
}

#[test]
fn test_list_tags_includes_foreign_tags() {
    let test_repo = setup_test_repo();
    test_repo.tag("1.0.0");
    test_repo.tag("nightly");

    let repo = Git2Repository::open(test_repo.path()).unwrap();
    let mut tags = repo.list_tags().unwrap();
    tags.sort();

    assert_eq!(tags, vec!["1.0.0".to_string(), "nightly".to_string()]);
}

#[test]
fn test_create_lightweight_tag_on_head() {
    let test_repo = setup_test_repo();
    let head = test_repo.commit("feature work");

    let repo = Git2Repository::open(test_repo.path()).unwrap();
    repo.create_tag("0.1.0-dev.0", None, None).unwrap();

    assert_eq!(test_repo.tag_commit("0.1.0-dev.0"), head);
    let reference = test_repo
        .open()
        .find_reference("refs/tags/0.1.0-dev.0")
        .unwrap()
        .target()
        .unwrap();
    // lightweight: the reference points straight at the commit
    assert_eq!(reference, head);
}

#[test]
fn test_create_annotated_tag_on_target() {
    let test_repo = setup_test_repo();
    let dev_commit = test_repo.commit("dev work");
    test_repo.tag("1.0.0-dev.0");
    test_repo.commit("later work");

    let repo = Git2Repository::open(test_repo.path()).unwrap();
    repo.create_tag("1.0.0-rc.0", Some("1.0.0-dev.0"), Some("Release candidate"))
        .unwrap();

    assert_eq!(test_repo.tag_commit("1.0.0-rc.0"), dev_commit);

    let git = test_repo.open();
    let tag_object = git
        .find_reference("refs/tags/1.0.0-rc.0")
        .unwrap()
        .peel_to_tag()
        .unwrap();
    assert_eq!(tag_object.message().map(str::trim), Some("Release candidate"));
}

#[test]
fn test_create_existing_tag_is_rejected() {
    let test_repo = setup_test_repo();
    test_repo.tag("1.0.0");

    let repo = Git2Repository::open(test_repo.path()).unwrap();
    let err = repo.create_tag("1.0.0", None, None).unwrap_err();

    assert!(matches!(err, VcmError::Tag(_)));
    assert!(err.to_string().contains("already exists"));
}

#[test]
fn test_create_tag_on_missing_target() {
    let test_repo = setup_test_repo();

    let repo = Git2Repository::open(test_repo.path()).unwrap();
    let err = repo
        .create_tag("1.0.0", Some("1.0.0-rc.9"), None)
        .unwrap_err();

    assert!(matches!(err, VcmError::Tag(_)));
}

#[test]
fn test_release_cycle_against_git() {
    let test_repo = setup_test_repo();
    let repo = Git2Repository::open(test_repo.path()).unwrap();

    test_repo.commit("first feature");
    assert_eq!(
        workflow(
            &repo,
            TagCommand::AdvanceDev {
                bump: VersionBump::Minor
            }
        )
        .unwrap(),
        "0.1.0-dev.0"
    );

    let release_commit = test_repo.commit("second feature");
    assert_eq!(
        workflow(
            &repo,
            TagCommand::Increment {
                kind: PreReleaseKind::Dev,
                version: None
            }
        )
        .unwrap(),
        "0.1.0-dev.1"
    );

    test_repo.commit("work after the cut");
    assert_eq!(workflow(&repo, TagCommand::InitRc).unwrap(), "0.1.0-rc.0");
    assert_eq!(test_repo.tag_commit("0.1.0-rc.0"), release_commit);

    assert_eq!(
        workflow(
            &repo,
            TagCommand::Promote {
                source: "0.1.0-rc.0".parse().unwrap()
            }
        )
        .unwrap(),
        "0.1.0"
    );
    assert_eq!(test_repo.tag_commit("0.1.0"), release_commit);

    assert_eq!(workflow(&repo, TagCommand::InitPatch).unwrap(), "0.1.0-patch.0");
    assert_eq!(test_repo.tag_commit("0.1.0-patch.0"), release_commit);

    let err = workflow(&repo, TagCommand::InitRc).unwrap_err();
    assert!(matches!(err, VcmError::InvalidTransition(_)));
}
