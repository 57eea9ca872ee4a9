//! Three-outcome batch reporting.
//!
//! Partial success is deliberately a soft success: scripts chaining on the
//! exit code treat "some failures" as 0 and parse the `Failed:` line when
//! they care which keys were skipped.

use super::executor::BatchResult;
use crate::errors::BulkError;
use crate::output::OutputContext;

/// The three user-facing outcomes of a batch, evaluated in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    AllSucceeded,
    Partial,
    AllFailed,
}

impl BatchResult {
    pub fn outcome(&self) -> Outcome {
        if self.failed.is_empty() {
            Outcome::AllSucceeded
        } else if self.succeeded.is_empty() {
            Outcome::AllFailed
        } else {
            Outcome::Partial
        }
    }
}

/// Per-command message set; the engine stays shared while each command keeps
/// its own phrasing.
pub struct ReportPhrases {
    /// Full-success line, e.g. `Successfully assigned 3 issues to "jane"`.
    pub success: String,
    /// Partial warning with both counts, e.g. `Assigned 2 issues
    /// successfully, 1 failed`.
    pub partial: String,
    /// All-failed error, e.g. `failed to assign all issues`.
    pub all_failed: String,
}

/// Report a finished batch.
///
/// All-succeeded prints the success line; partial prints the warning plus the
/// explicit failed-key list and still returns `Ok` (exit 0); all-failed is a
/// hard error. The failed-key list is never suppressed, `--quiet` included.
pub fn report(
    out: &OutputContext,
    result: &BatchResult,
    phrases: &ReportPhrases,
) -> Result<(), BulkError> {
    match result.outcome() {
        Outcome::AllSucceeded => {
            out.success(&phrases.success);
            Ok(())
        }
        Outcome::Partial => {
            out.warning(&phrases.partial);
            out.data(&format!("Failed: {}", result.failed_keys()));
            Ok(())
        }
        Outcome::AllFailed => Err(BulkError::AllFailed(phrases.all_failed.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bulk::executor::KeyFailure;
    use crate::domain::IssueKey;

    fn key(s: &str) -> IssueKey {
        IssueKey::normalize("", s)
    }

    fn failure(s: &str) -> KeyFailure {
        KeyFailure {
            key: key(s),
            detail: "remote returned 403: forbidden".to_string(),
        }
    }

    #[test]
    fn outcome_selection() {
        let all_ok = BatchResult {
            succeeded: vec![key("K-1")],
            failed: vec![],
        };
        assert_eq!(all_ok.outcome(), Outcome::AllSucceeded);

        let partial = BatchResult {
            succeeded: vec![key("K-1")],
            failed: vec![failure("K-2")],
        };
        assert_eq!(partial.outcome(), Outcome::Partial);

        let all_failed = BatchResult {
            succeeded: vec![],
            failed: vec![failure("K-1")],
        };
        assert_eq!(all_failed.outcome(), Outcome::AllFailed);
    }

    #[test]
    fn failed_keys_are_comma_joined() {
        let result = BatchResult {
            succeeded: vec![key("K-1")],
            failed: vec![failure("K-2"), failure("K-4")],
        };
        assert_eq!(result.failed_keys(), "K-2, K-4");
    }

    #[test]
    fn all_failed_is_an_error_with_the_command_phrase() {
        let out = OutputContext::new(false);
        let result = BatchResult {
            succeeded: vec![],
            failed: vec![failure("K-1")],
        };
        let phrases = ReportPhrases {
            success: String::new(),
            partial: String::new(),
            all_failed: "failed to assign all issues".to_string(),
        };
        let err = report(&out, &result, &phrases).unwrap_err();
        assert!(matches!(err, BulkError::AllFailed(_)));
        assert_eq!(err.to_string(), "failed to assign all issues");
    }

    #[test]
    fn partial_is_not_an_error() {
        let out = OutputContext::new(true);
        let result = BatchResult {
            succeeded: vec![key("K-1")],
            failed: vec![failure("K-2")],
        };
        let phrases = ReportPhrases {
            success: String::new(),
            partial: "Assigned 1 issues successfully, 1 failed".to_string(),
            all_failed: String::new(),
        };
        assert!(report(&out, &result, &phrases).is_ok());
    }
}
