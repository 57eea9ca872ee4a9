//! Shared bulk-operation engine.
//!
//! Every bulk command follows the same pipeline: resolve a target set from
//! arguments, stdin, or a jql query; resolve the actor (user, sentinel, or
//! transition) once per batch; apply one remote call per target collecting
//! per-key outcomes; report one of three results (all succeeded, partial,
//! all failed). The command wrappers in `crate::commands` stay thin by
//! delegating everything here.
//!
//! Submodules:
//! - `targets`: target-set resolution and deduplication
//! - `actor`: sentinel vocabulary and best-match user resolution
//! - `executor`: continue-on-error sequential execution
//! - `report`: three-outcome reporting and exit semantics
//! - `transition`: state-name-to-transition validation

pub mod actor;
pub mod executor;
pub mod report;
pub mod targets;
pub mod transition;

pub use actor::{Actor, Sentinel};
pub use executor::{execute, BatchResult, KeyFailure};
pub use report::{report, Outcome, ReportPhrases};
pub use targets::{TargetInput, TargetResolver, TargetSet};
pub use transition::resolve_transition;

/// Page cap for jql-sourced target sets. Results past this bound are
/// silently truncated; a documented limitation, not an error.
pub const JQL_PAGE_LIMIT: u32 = 1000;

/// Result cap for directory user searches.
pub const USER_SEARCH_LIMIT: u32 = 100;
