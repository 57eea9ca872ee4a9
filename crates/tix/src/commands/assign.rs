//! Bulk assignment.

use super::{KeyFeed, Runner};
use crate::bulk::{self, actor, Actor, ReportPhrases};
use crate::errors::BulkError;
use crate::remote::{Assignment, Remote};

impl<R: Remote> Runner<'_, R> {
    /// Assign every target to the same user or sentinel.
    ///
    /// The last positional is the assignee; the rest are issue keys unless
    /// stdin/jql supplies them.
    pub fn assign_bulk(&self, args: &[String], feed: KeyFeed<'_>) -> Result<(), BulkError> {
        let (keys, assignee) = split_trailing(args, "assignee required")?;
        let targets = self.resolve_targets(keys, feed)?;

        let actor = actor::resolve_assignee(self.remote, &self.project, assignee)?;
        let actor_name = actor.describe();
        let assignment = match &actor {
            Actor::User(user) => Assignment::User(user.clone()),
            Actor::Unassign => Assignment::Unassign,
            Actor::DefaultAssignee => Assignment::Default,
        };

        self.out.info(format!(
            "Assigning {} issues to {:?}...",
            targets.len(),
            actor_name
        ));

        let result = bulk::execute(&targets, |key| {
            self.remote.assign_issue(key.as_str(), &assignment)
        });

        let success = match &actor {
            Actor::Unassign => {
                format!("Successfully unassigned {} issues", result.succeeded.len())
            }
            _ => format!(
                "Successfully assigned {} issues to {:?}",
                result.succeeded.len(),
                actor_name
            ),
        };
        bulk::report(
            self.out,
            &result,
            &ReportPhrases {
                success,
                partial: format!(
                    "Assigned {} issues successfully, {} failed",
                    result.succeeded.len(),
                    result.failed.len()
                ),
                all_failed: "failed to assign all issues".to_string(),
            },
        )
    }
}

/// Split the trailing payload argument off the positional list.
pub(super) fn split_trailing<'a>(
    args: &'a [String],
    missing: &str,
) -> Result<(&'a [String], &'a str), BulkError> {
    match args.split_last() {
        Some((payload, keys)) if !payload.is_empty() => Ok((keys, payload)),
        _ => Err(BulkError::usage(missing)),
    }
}
