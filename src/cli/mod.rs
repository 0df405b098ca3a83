//! Command-line workflow support

pub mod orchestration;

pub use orchestration::{
    apply, plan, prepare, run_tag_workflow, run_tag_workflow_with, PreparedTag, TagCommand,
    TagProposal, WorkflowArgs, WorkflowResult,
};
