//! State-name-to-transition validation for transition-based bulk commands.

use crate::domain::{IssueKey, Transition};
use crate::errors::BulkError;
use crate::remote::Remote;

/// Resolve a human-readable state name against the first target's available
/// transitions. The resolved id/name pair is reused for every later target
/// in the batch without re-fetching; batches are assumed workflow-homogeneous,
/// and a later target that rejects the transition fails as an ordinary
/// per-key error.
///
/// Matching is case-insensitive and exact; with duplicate names the first in
/// server order wins. No match enumerates every available name so the user
/// can correct the input.
pub fn resolve_transition<R: Remote>(
    remote: &R,
    first: &IssueKey,
    desired_state: &str,
) -> Result<Transition, BulkError> {
    let transitions = remote
        .transitions(first.as_str())
        .map_err(|e| BulkError::remote("failed to fetch transitions", e))?;

    let wanted = desired_state.to_lowercase();
    if let Some(t) = transitions.iter().find(|t| t.name.to_lowercase() == wanted) {
        return Ok(t.clone());
    }

    let available = transitions
        .iter()
        .map(|t| format!("'{}'", t.name))
        .collect::<Vec<_>>()
        .join(", ");
    Err(BulkError::resolution(format!(
        "invalid transition state {:?}\nAvailable states: {}",
        desired_state, available
    )))
}
