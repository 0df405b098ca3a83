//! Tag lifecycle engine for the dev → rc → production → patch release flow

pub mod state_machine;

pub use state_machine::VersionStateMachine;
