//! Sequential, continue-on-error batch execution.

use crate::domain::IssueKey;
use crate::remote::RemoteError;

use super::targets::TargetSet;

/// One failed target with the remote error text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyFailure {
    pub key: IssueKey,
    pub detail: String,
}

/// Per-batch tally. Every target lands in exactly one of the two lists,
/// in execution order.
#[derive(Debug, Clone, Default)]
pub struct BatchResult {
    pub succeeded: Vec<IssueKey>,
    pub failed: Vec<KeyFailure>,
}

impl BatchResult {
    pub fn total(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }

    /// The failed keys joined by `", "` — the machine-parsable indicator of
    /// partial failure.
    pub fn failed_keys(&self) -> String {
        self.failed
            .iter()
            .map(|f| f.key.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Apply `op` to every target in order.
///
/// A failing key is recorded and skipped, never aborting the batch: a
/// 50-issue bulk assign must not discard 49 successful assignments because
/// the last issue lacks permission. No retries here; that is the transport's
/// concern.
pub fn execute<F>(targets: &TargetSet, mut op: F) -> BatchResult
where
    F: FnMut(&IssueKey) -> Result<(), RemoteError>,
{
    let mut result = BatchResult::default();
    for key in targets.keys() {
        match op(key) {
            Ok(()) => result.succeeded.push(key.clone()),
            Err(err) => result.failed.push(KeyFailure {
                key: key.clone(),
                detail: err.to_string(),
            }),
        }
    }
    result
}
