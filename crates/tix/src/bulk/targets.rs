//! Target-set resolution: from arguments, stdin, or a jql query to a
//! normalized, deduplicated, ordered list of issue keys.

use std::collections::HashSet;
use std::io::BufRead;

use super::JQL_PAGE_LIMIT;
use crate::domain::IssueKey;
use crate::errors::BulkError;
use crate::remote::Remote;

/// Where a batch's issue keys come from. The three sources are mutually
/// exclusive; the CLI layer enforces that before the resolver runs.
pub enum TargetInput<'a> {
    /// Positional arguments, payload already stripped by the caller.
    Keys(&'a [String]),
    /// One key per non-blank line.
    Stdin(Box<dyn BufRead + 'a>),
    /// Keys of every issue matching a jql query, capped at [`JQL_PAGE_LIMIT`].
    Jql(&'a str),
}

/// The ordered, deduplicated batch of issue keys one bulk command operates on.
///
/// Built once per invocation and immutable afterwards. Order is first-seen
/// order in the source; duplicates keep their first position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetSet(Vec<IssueKey>);

impl TargetSet {
    pub fn keys(&self) -> &[IssueKey] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The first target; used by the transition validator. The resolver
    /// guarantees a non-empty set, so this only returns `None` for sets
    /// constructed directly in tests.
    pub fn first(&self) -> Option<&IssueKey> {
        self.0.first()
    }
}

/// Resolves raw key sources into a [`TargetSet`].
pub struct TargetResolver<'a, R: Remote> {
    remote: &'a R,
    project: &'a str,
}

impl<'a, R: Remote> TargetResolver<'a, R> {
    pub fn new(remote: &'a R, project: &'a str) -> Self {
        Self { remote, project }
    }

    /// Resolve one source into a normalized target set.
    ///
    /// Fails with a resolution error when the source yields no keys: a
    /// zero-target batch would report a misleading success.
    pub fn resolve(&self, input: TargetInput<'_>) -> Result<TargetSet, BulkError> {
        let raw = match input {
            TargetInput::Keys(args) => args.to_vec(),
            TargetInput::Stdin(reader) => read_stdin_keys(reader)?,
            TargetInput::Jql(query) => self.query_keys(query)?,
        };

        let mut seen = HashSet::new();
        let mut keys = Vec::with_capacity(raw.len());
        for token in &raw {
            let key = IssueKey::normalize(self.project, token);
            if seen.insert(key.clone()) {
                keys.push(key);
            }
        }

        if keys.is_empty() {
            return Err(BulkError::resolution("no issues found"));
        }
        Ok(TargetSet(keys))
    }

    fn query_keys(&self, jql: &str) -> Result<Vec<String>, BulkError> {
        let issues = self
            .remote
            .search_issues(jql, 0, JQL_PAGE_LIMIT)
            .map_err(|e| BulkError::remote("failed to search issues", e))?;
        Ok(issues.into_iter().map(|i| i.key).collect())
    }
}

fn read_stdin_keys(reader: Box<dyn BufRead + '_>) -> Result<Vec<String>, BulkError> {
    let mut keys = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|e| BulkError::usage(format!("failed to read from stdin: {}", e)))?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            keys.push(trimmed.to_string());
        }
    }
    Ok(keys)
}
