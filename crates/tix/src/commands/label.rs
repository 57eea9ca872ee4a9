//! Bulk label add/remove.

use super::{KeyFeed, Runner};
use crate::bulk::{self, ReportPhrases};
use crate::domain::IssueKey;
use crate::errors::BulkError;
use crate::remote::{LabelDelta, Remote};

impl<R: Remote> Runner<'_, R> {
    /// Add or remove the same labels on every target.
    ///
    /// In positional mode leading key-shaped tokens are targets and the rest
    /// are labels; under stdin/jql every positional is a label. Adding a
    /// label an issue already has is a set merge: no error, no duplicate.
    pub fn label_bulk(
        &self,
        args: &[String],
        remove: bool,
        feed: KeyFeed<'_>,
    ) -> Result<(), BulkError> {
        let positional = matches!(feed, KeyFeed::Args);
        let (keys, labels) = if positional {
            split_keys_from_labels(args)
        } else {
            (&args[..0], args)
        };
        if labels.is_empty() {
            return Err(BulkError::usage("no labels provided"));
        }

        let targets = self.resolve_targets(keys, feed)?;

        let deltas: Vec<LabelDelta> = labels
            .iter()
            .map(|l| LabelDelta {
                label: l.clone(),
                remove,
            })
            .collect();

        let action = if remove { "Removing" } else { "Adding" };
        self.out.info(format!(
            "{} labels on {} issues...",
            action,
            targets.len()
        ));

        let result = bulk::execute(&targets, |key| {
            self.remote.edit_labels(key.as_str(), &deltas)
        });

        let verb = if remove { "removed" } else { "added" };
        bulk::report(
            self.out,
            &result,
            &ReportPhrases {
                success: format!(
                    "Successfully {} labels on {} issues",
                    verb,
                    result.succeeded.len()
                ),
                partial: format!(
                    "{} labels on {} issues successfully, {} failed",
                    action,
                    result.succeeded.len(),
                    result.failed.len()
                ),
                all_failed: format!("failed to {} labels on all issues", verb_infinitive(remove)),
            },
        )
    }
}

fn verb_infinitive(remove: bool) -> &'static str {
    if remove {
        "remove"
    } else {
        "add"
    }
}

/// Split positionals into leading keys and trailing labels.
///
/// A token is a key while it matches the issue-key shape; the first
/// non-key-shaped token starts the label list. Known fragility: a label
/// that itself matches the shape (e.g. "v2-1") placed first is taken as a
/// key; stdin/jql mode avoids the heuristic entirely.
fn split_keys_from_labels(args: &[String]) -> (&[String], &[String]) {
    let boundary = args
        .iter()
        .position(|a| !IssueKey::looks_like_key(a))
        .unwrap_or(args.len());
    args.split_at(boundary)
}
