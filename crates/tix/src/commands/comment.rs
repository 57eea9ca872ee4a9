//! Bulk commenting.

use super::assign::split_trailing;
use super::{KeyFeed, Runner};
use crate::bulk::{self, ReportPhrases};
use crate::errors::BulkError;
use crate::remote::Remote;

impl<R: Remote> Runner<'_, R> {
    /// Add the same comment body to every target.
    pub fn comment_bulk(
        &self,
        args: &[String],
        internal: bool,
        feed: KeyFeed<'_>,
    ) -> Result<(), BulkError> {
        let (keys, comment) = split_trailing(args, "comment text required")?;
        let targets = self.resolve_targets(keys, feed)?;

        self.out
            .info(format!("Adding comment to {} issues...", targets.len()));

        let result = bulk::execute(&targets, |key| {
            self.remote.add_comment(key.as_str(), comment, internal)
        });

        bulk::report(
            self.out,
            &result,
            &ReportPhrases {
                success: format!(
                    "Successfully added comment to {} issues",
                    result.succeeded.len()
                ),
                partial: format!(
                    "Added comment to {} issues successfully, {} failed",
                    result.succeeded.len(),
                    result.failed.len()
                ),
                all_failed: "failed to add comment to all issues".to_string(),
            },
        )
    }
}
