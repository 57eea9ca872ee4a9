//! Command execution logic for the bulk operations.
//!
//! `Runner` holds the remote client, the effective project key, and the
//! output context; each submodule implements one command family as a thin
//! wrapper over the shared engine in `crate::bulk`:
//!
//! - `assign`: bulk assignment with sentinel handling
//! - `comment`: bulk commenting
//! - `label`: bulk label add/remove with the positional split heuristic
//! - `transition`: bulk state moves with first-target validation
//! - `watch`: bulk watch/unwatch
//! - `fields`: story points and generic custom-field updates

mod assign;
mod comment;
mod fields;
mod label;
mod transition;
mod watch;

pub use transition::MoveOptions;
pub use watch::WatchDirection;

use std::io::BufRead;

use crate::bulk::{TargetInput, TargetResolver, TargetSet};
use crate::errors::BulkError;
use crate::output::OutputContext;
use crate::remote::Remote;

/// Where a command's issue keys come from, decided by the CLI flags.
/// Positional keys are ignored when stdin or jql is selected.
pub enum KeyFeed<'a> {
    /// Positional arguments (payload already stripped).
    Args,
    Stdin(Box<dyn BufRead + 'a>),
    Jql(&'a str),
}

impl<'a> KeyFeed<'a> {
    /// Build a feed from the shared `--stdin`/`--jql` flag pair.
    pub fn from_flags<F, B>(stdin: bool, jql: Option<&'a str>, reader: F) -> Self
    where
        F: FnOnce() -> B,
        B: BufRead + 'a,
    {
        if stdin {
            Self::Stdin(Box::new(reader()))
        } else if let Some(query) = jql.filter(|q| !q.is_empty()) {
            Self::Jql(query)
        } else {
            Self::Args
        }
    }
}

/// Executes bulk commands against a remote tracker.
///
/// Generic over the remote client so integration tests drive the full
/// pipeline against a scripted fake.
pub struct Runner<'a, R: Remote> {
    remote: &'a R,
    project: String,
    out: &'a OutputContext,
}

impl<'a, R: Remote> Runner<'a, R> {
    pub fn new(remote: &'a R, project: impl Into<String>, out: &'a OutputContext) -> Self {
        Self {
            remote,
            project: project.into(),
            out,
        }
    }

    /// Resolve the target set for a command from its key feed.
    fn resolve_targets(
        &self,
        keys: &[String],
        feed: KeyFeed<'_>,
    ) -> Result<TargetSet, BulkError> {
        let resolver = TargetResolver::new(self.remote, &self.project);
        let input = match feed {
            KeyFeed::Args => {
                if keys.is_empty() {
                    return Err(BulkError::usage("no issue keys provided"));
                }
                TargetInput::Keys(keys)
            }
            KeyFeed::Stdin(reader) => TargetInput::Stdin(reader),
            KeyFeed::Jql(query) => TargetInput::Jql(query),
        };
        resolver.resolve(input)
    }
}
