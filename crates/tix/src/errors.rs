//! Error taxonomy for the bulk engine.
//!
//! Two kinds of failure abort a batch before any per-key work happens:
//! usage errors (bad argument shape, empty payload) and resolution errors
//! (no targets, unknown actor, invalid transition name). Per-key remote
//! failures are never errors at this level; the executor records them in
//! the batch result and keeps going.

use thiserror::Error;

use crate::remote::RemoteError;

/// A batch-level failure raised before or instead of running the executor.
#[derive(Debug, Error)]
pub enum BulkError {
    /// The invocation itself is malformed; nothing was attempted.
    #[error("{0}")]
    Usage(String),

    /// A batch-wide precondition failed: no targets, actor not found or
    /// inactive, transition name invalid. Nothing was attempted.
    #[error("{0}")]
    Resolution(String),

    /// A collaborator call needed for resolution failed (user search, jql
    /// search, transition fetch, current-user lookup).
    #[error("{context}: {source}")]
    Remote {
        context: String,
        #[source]
        source: RemoteError,
    },

    /// Every target in the batch failed.
    #[error("{0}")]
    AllFailed(String),
}

impl BulkError {
    pub fn usage(msg: impl Into<String>) -> Self {
        Self::Usage(msg.into())
    }

    pub fn resolution(msg: impl Into<String>) -> Self {
        Self::Resolution(msg.into())
    }

    pub fn remote(context: impl Into<String>, source: RemoteError) -> Self {
        Self::Remote {
            context: context.into(),
            source,
        }
    }
}
