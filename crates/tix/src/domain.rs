//! Core domain types shared across the bulk engine and the remote client.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A normalized issue key in canonical `PROJECT-NUMBER` form.
///
/// Keys are normalized once at the resolver boundary and treated as opaque
/// strings afterwards. Normalization is idempotent: feeding an already
/// normalized key back through [`IssueKey::normalize`] is a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IssueKey(String);

impl IssueKey {
    /// Build a canonical key from raw user input.
    ///
    /// A bare number gets the configured default project prepended
    /// (`42` → `PROJ-42`); anything else is uppercased. With no configured
    /// project a bare number passes through unchanged.
    pub fn normalize(project: &str, raw: &str) -> Self {
        let raw = raw.trim();
        if project.is_empty() {
            return Self(raw.to_uppercase());
        }
        if !raw.is_empty() && raw.chars().all(|c| c.is_ascii_digit()) {
            return Self(format!("{}-{}", project, raw));
        }
        Self(raw.to_uppercase())
    }

    /// The canonical string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether a raw token has the shape of an issue key: a single `-`
    /// separating a project segment from a numeric tail, or a bare number
    /// that normalization would complete with the default project.
    ///
    /// Used by commands that must split positional keys from a trailing
    /// payload (labels, watcher). Known limitation: a payload token that
    /// happens to match this shape is misclassified; documented in the
    /// command help.
    pub fn looks_like_key(token: &str) -> bool {
        if !token.is_empty() && token.chars().all(|c| c.is_ascii_digit()) {
            return true;
        }
        let mut parts = token.splitn(3, '-');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(project), Some(number), None) => {
                !project.is_empty()
                    && !number.is_empty()
                    && number.chars().all(|c| c.is_ascii_digit())
            }
            _ => false,
        }
    }
}

impl fmt::Display for IssueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A directory user record as returned by the remote user search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Internal account name; may be empty on cloud instances.
    #[serde(default)]
    pub name: String,
    /// Account id; the preferred identifier on cloud instances.
    #[serde(default, rename = "accountId")]
    pub account_id: String,
    #[serde(default, rename = "displayName")]
    pub display_name: String,
    #[serde(default, rename = "emailAddress")]
    pub email: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl User {
    /// The name the directory can be queried by: the internal account name
    /// when non-empty, else the display name.
    pub fn queryable_name(&self) -> &str {
        if self.name.is_empty() {
            &self.display_name
        } else {
            &self.name
        }
    }
}

/// A minimal issue reference from a search result.
#[derive(Debug, Clone, Deserialize)]
pub struct IssueRef {
    pub key: String,
}

/// One workflow transition available on an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub id: String,
    pub name: String,
    /// Whether the server marks the transition as currently available.
    #[serde(default = "default_active", rename = "isAvailable")]
    pub available: bool,
}
