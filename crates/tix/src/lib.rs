//! tix — command-line client for Jira-compatible issue trackers.
//!
//! The library carries the whole bulk-operation engine so tests can drive it
//! in-process against a fake remote; the binary is a thin clap dispatcher.
//!
//! # Bulk pipeline
//!
//! Every bulk command runs the same pipeline: resolve a target set
//! (arguments, stdin, or jql), resolve the actor once per batch, apply one
//! remote call per target without aborting on failures, then report one of
//! three outcomes (all succeeded / partial / all failed).

pub mod bulk;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod output;
pub mod remote;

// Re-export commonly used types
pub use bulk::{BatchResult, Outcome, TargetInput, TargetResolver, TargetSet};
pub use commands::{KeyFeed, MoveOptions, Runner, WatchDirection};
pub use config::TixConfig;
pub use domain::{IssueKey, Transition, User};
pub use errors::BulkError;
pub use output::{ExitCode, OutputContext};
pub use remote::{HttpRemote, Remote, RemoteError};
