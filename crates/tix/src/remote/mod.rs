//! Collaborator boundary to the remote issue tracker.
//!
//! The bulk engine is generic over [`Remote`]; the binary wires in
//! [`HttpRemote`], tests wire in a scripted fake. Every method maps to one
//! REST call. Retry and timeout policy live below this trait, not above it.

mod http;

pub use http::{AuthScheme, HttpRemote};

use serde_json::Value;
use thiserror::Error;

use crate::domain::{IssueRef, Transition, User};

/// Error surface of the remote layer.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// The server answered with a non-2xx status.
    #[error("remote returned {status}: {message}")]
    Api { status: u16, message: String },

    /// The request never produced a response (DNS, TLS, timeout, ...).
    #[error("transport error: {0}")]
    Transport(String),

    /// The response body could not be decoded.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

/// How an assignment is applied to an issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Assignment {
    /// Assign to a concrete directory user.
    User(User),
    /// Clear the assignee.
    Unassign,
    /// Hand the issue to the project's default assignee.
    Default,
}

/// One label change; `remove` distinguishes `-label` deltas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelDelta {
    pub label: String,
    pub remove: bool,
}

impl LabelDelta {
    /// Parse the wire form: a leading `-` marks a removal.
    pub fn parse(raw: &str) -> Self {
        match raw.strip_prefix('-') {
            Some(label) => Self {
                label: label.to_string(),
                remove: true,
            },
            None => Self {
                label: raw.to_string(),
                remove: false,
            },
        }
    }
}

/// Optional fields attached to a transition request, applied identically to
/// every issue in a batch.
#[derive(Debug, Clone)]
pub struct TransitionRequest {
    pub transition: Transition,
    pub assignee: Option<String>,
    pub resolution: Option<String>,
    pub comment: Option<String>,
}

impl TransitionRequest {
    pub fn new(transition: Transition) -> Self {
        Self {
            transition,
            assignee: None,
            resolution: None,
            comment: None,
        }
    }
}

/// Blocking client interface to the issue tracker.
pub trait Remote {
    /// Search the user directory, scoped to a project, relevance-ranked.
    fn search_users(
        &self,
        query: &str,
        project: &str,
        max_results: u32,
    ) -> Result<Vec<User>, RemoteError>;

    /// Run a jql query and return matching issue references, capped at
    /// `limit` rows. Truncation past the cap is silent.
    fn search_issues(
        &self,
        jql: &str,
        offset: u32,
        limit: u32,
    ) -> Result<Vec<IssueRef>, RemoteError>;

    fn assign_issue(&self, key: &str, assignment: &Assignment) -> Result<(), RemoteError>;

    /// Apply label deltas atomically. Adding a label the issue already has
    /// is a server-side set merge: no error, no duplicate.
    fn edit_labels(&self, key: &str, deltas: &[LabelDelta]) -> Result<(), RemoteError>;

    fn add_comment(&self, key: &str, body: &str, internal: bool) -> Result<(), RemoteError>;

    fn transitions(&self, key: &str) -> Result<Vec<Transition>, RemoteError>;

    fn transition_issue(&self, key: &str, request: &TransitionRequest)
        -> Result<(), RemoteError>;

    fn watch(&self, key: &str, user: &User) -> Result<(), RemoteError>;

    fn unwatch(&self, key: &str, user: &User) -> Result<(), RemoteError>;

    /// Set issue fields by field key (custom fields included).
    fn set_fields(&self, key: &str, fields: &[(String, Value)]) -> Result<(), RemoteError>;

    /// The authenticated user.
    fn myself(&self) -> Result<User, RemoteError>;
}
