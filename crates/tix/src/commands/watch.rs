//! Bulk watch and unwatch.

use super::{KeyFeed, Runner};
use crate::bulk::{self, actor, ReportPhrases};
use crate::domain::{IssueKey, User};
use crate::errors::BulkError;
use crate::remote::Remote;

/// Whether the command adds or removes the watcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchDirection {
    Watch,
    Unwatch,
}

impl<R: Remote> Runner<'_, R> {
    /// Add or remove the same watcher on every target.
    ///
    /// A trailing positional that does not look like an issue key names the
    /// watcher; otherwise the authenticated user is used.
    pub fn watch_bulk(
        &self,
        args: &[String],
        direction: WatchDirection,
        feed: KeyFeed<'_>,
    ) -> Result<(), BulkError> {
        let (keys, watcher_query) = split_watcher(args);
        let targets = self.resolve_targets(keys, feed)?;

        let watcher = self.resolve_watcher(watcher_query)?;
        let watcher_name = watcher.queryable_name().to_string();

        let (progress, verb) = match direction {
            WatchDirection::Watch => ("Adding watcher to", "add watcher to"),
            WatchDirection::Unwatch => ("Removing watcher from", "remove watcher from"),
        };
        self.out
            .info(format!("{} {} issues...", progress, targets.len()));

        let result = bulk::execute(&targets, |key| match direction {
            WatchDirection::Watch => self.remote.watch(key.as_str(), &watcher),
            WatchDirection::Unwatch => self.remote.unwatch(key.as_str(), &watcher),
        });

        let success = match direction {
            WatchDirection::Watch => format!(
                "Successfully added {:?} as watcher to {} issues",
                watcher_name,
                result.succeeded.len()
            ),
            WatchDirection::Unwatch => format!(
                "Successfully removed {:?} from watchers of {} issues",
                watcher_name,
                result.succeeded.len()
            ),
        };
        bulk::report(
            self.out,
            &result,
            &ReportPhrases {
                success,
                partial: format!(
                    "{} {} issues successfully, {} failed",
                    progress_done(direction),
                    result.succeeded.len(),
                    result.failed.len()
                ),
                all_failed: format!("failed to {} all issues", verb),
            },
        )
    }

    fn resolve_watcher(&self, query: Option<&str>) -> Result<User, BulkError> {
        match query {
            Some(q) => actor::resolve_user(self.remote, &self.project, q),
            None => self
                .remote
                .myself()
                .map_err(|e| BulkError::remote("failed to get current user", e)),
        }
    }
}

fn progress_done(direction: WatchDirection) -> &'static str {
    match direction {
        WatchDirection::Watch => "Added watcher to",
        WatchDirection::Unwatch => "Removed watcher from",
    }
}

/// Peel an optional trailing watcher off the positional list. A token shaped
/// like an issue key is never a watcher.
fn split_watcher(args: &[String]) -> (&[String], Option<&str>) {
    match args.split_last() {
        Some((last, keys)) if !IssueKey::looks_like_key(last) => (keys, Some(last)),
        _ => (args, None),
    }
}
