//! Bulk state transitions.

use super::assign::split_trailing;
use super::{KeyFeed, Runner};
use crate::bulk::{self, resolve_transition, ReportPhrases};
use crate::errors::BulkError;
use crate::remote::{Remote, TransitionRequest};

/// Optional fields applied identically to every transitioned issue.
#[derive(Debug, Default, Clone)]
pub struct MoveOptions {
    pub comment: Option<String>,
    pub assignee: Option<String>,
    pub resolution: Option<String>,
}

impl<R: Remote> Runner<'_, R> {
    /// Transition every target to the same state.
    ///
    /// The state name is resolved against the first target's transition list
    /// and the resolved transition is reused for the whole batch; a later
    /// target with a different workflow fails as a per-key error.
    pub fn move_bulk(&self, args: &[String], options: &MoveOptions) -> Result<(), BulkError> {
        let (keys, state) = split_trailing(args, "target state required")?;
        let targets = self.resolve_targets(keys, KeyFeed::Args)?;

        let first = targets
            .first()
            .ok_or_else(|| BulkError::resolution("no issues found"))?;
        let transition = resolve_transition(self.remote, first, state)?;

        let request = TransitionRequest {
            transition,
            assignee: options.assignee.clone(),
            resolution: options.resolution.clone(),
            comment: options.comment.clone(),
        };

        self.out.info(format!(
            "Transitioning {} issues to {:?}...",
            targets.len(),
            state
        ));

        let result = bulk::execute(&targets, |key| {
            self.remote.transition_issue(key.as_str(), &request)
        });

        bulk::report(
            self.out,
            &result,
            &ReportPhrases {
                success: format!(
                    "Successfully transitioned {} issues to state {:?}",
                    result.succeeded.len(),
                    state
                ),
                partial: format!(
                    "Transitioned {} issues successfully, {} failed",
                    result.succeeded.len(),
                    result.failed.len()
                ),
                all_failed: "failed to transition all issues".to_string(),
            },
        )
    }
}
