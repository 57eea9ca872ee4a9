//! Actor resolution: from a free-text assignee/watcher query to exactly one
//! directory user or a sentinel action.
//!
//! The sentinel vocabulary lives here and nowhere else; callers match on the
//! closed [`Actor`] enum instead of comparing magic strings.

use super::USER_SEARCH_LIMIT;
use crate::domain::User;
use crate::errors::BulkError;
use crate::remote::Remote;

/// Reserved tokens recognized before any directory lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentinel {
    /// Clear the assignment (`x`, `none`, `unassign`).
    None,
    /// Defer to the project's default assignee (`default`).
    Default,
}

impl Sentinel {
    /// Case-insensitive sentinel recognition. Returns `None` for anything
    /// that must go through the directory search.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_lowercase().as_str() {
            "x" | "none" | "unassign" => Some(Self::None),
            "default" => Some(Self::Default),
            _ => None,
        }
    }
}

/// The resolved thing a bulk operation applies to every target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Actor {
    User(User),
    Unassign,
    DefaultAssignee,
}

impl Actor {
    /// Human-readable name for progress and success messages.
    pub fn describe(&self) -> String {
        match self {
            Self::User(user) => user.queryable_name().to_string(),
            Self::Unassign => "unassigned".to_string(),
            Self::DefaultAssignee => "default assignee".to_string(),
        }
    }
}

/// Resolve an assignee query to an [`Actor`], recognizing sentinels first.
///
/// Fatal for the whole batch on failure: without a resolved actor no per-key
/// operation is meaningful. Inactive accounts are rejected here because bulk
/// commands have no interactive selection step to filter them.
pub fn resolve_assignee<R: Remote>(
    remote: &R,
    project: &str,
    query: &str,
) -> Result<Actor, BulkError> {
    if let Some(sentinel) = Sentinel::parse(query) {
        return Ok(match sentinel {
            Sentinel::None => Actor::Unassign,
            Sentinel::Default => Actor::DefaultAssignee,
        });
    }
    let user = resolve_user(remote, project, query)?;
    if !user.active {
        return Err(BulkError::resolution(format!(
            "user {:?} is not active",
            user.queryable_name()
        )));
    }
    Ok(Actor::User(user))
}

/// Resolve a query to exactly one directory user, no sentinel handling.
/// Used for watchers, where "x" would be a legitimate (if unfortunate) name.
pub fn resolve_user<R: Remote>(
    remote: &R,
    project: &str,
    query: &str,
) -> Result<User, BulkError> {
    let users = remote
        .search_users(query, project, USER_SEARCH_LIMIT)
        .map_err(|e| BulkError::remote("failed to search for user", e))?;
    if users.is_empty() {
        return Err(BulkError::resolution(format!("user {:?} not found", query)));
    }
    Ok(best_match(&users, query))
}

/// Deterministic best-match policy, rules applied strictly in order:
///
/// 1. exact case-insensitive match on the queryable name;
/// 2. exact case-insensitive match on the email address;
/// 3. the first record — the directory search ranks by relevance, and
///    failing every near-miss would make the tool unusable for users with
///    unconventional display names.
fn best_match(users: &[User], query: &str) -> User {
    let wanted = query.to_lowercase();
    if let Some(user) = users
        .iter()
        .find(|u| u.queryable_name().to_lowercase() == wanted)
    {
        return user.clone();
    }
    if let Some(user) = users.iter().find(|u| u.email.to_lowercase() == wanted) {
        return user.clone();
    }
    users[0].clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str, display: &str, email: &str, active: bool) -> User {
        User {
            name: name.to_string(),
            display_name: display.to_string(),
            email: email.to_string(),
            active,
            ..User::default()
        }
    }

    #[test]
    fn sentinel_vocabulary() {
        assert_eq!(Sentinel::parse("x"), Some(Sentinel::None));
        assert_eq!(Sentinel::parse("X"), Some(Sentinel::None));
        assert_eq!(Sentinel::parse("None"), Some(Sentinel::None));
        assert_eq!(Sentinel::parse("UNASSIGN"), Some(Sentinel::None));
        assert_eq!(Sentinel::parse("Default"), Some(Sentinel::Default));
        assert_eq!(Sentinel::parse("jane"), None);
        assert_eq!(Sentinel::parse("xx"), None);
    }

    #[test]
    fn exact_name_match_wins_over_order() {
        let users = vec![
            user("first", "First Hit", "first@x.com", true),
            user("jdoe", "John Doe", "jdoe@x.com", true),
        ];
        assert_eq!(best_match(&users, "JDOE").name, "jdoe");
    }

    #[test]
    fn email_match_applies_when_name_misses() {
        let users = vec![
            user("other", "Other", "other@x.com", true),
            user("", "Jon", "JON@X.COM", true),
        ];
        assert_eq!(best_match(&users, "jon@x.com").display_name, "Jon");
    }

    #[test]
    fn name_rule_is_checked_for_all_users_before_email_rule() {
        // First user matches by email, second by name; the name rule is a
        // full pass of its own, so the second user wins.
        let users = vec![
            user("a", "A", "jane@x.com", true),
            user("jane@x.com", "Jane", "other@x.com", true),
        ];
        assert_eq!(best_match(&users, "jane@x.com").display_name, "Jane");
    }

    #[test]
    fn falls_back_to_first_result() {
        let users = vec![
            user("top", "Top Ranked", "top@x.com", true),
            user("second", "Second", "second@x.com", true),
        ];
        assert_eq!(best_match(&users, "jane").name, "top");
    }

    #[test]
    fn empty_name_falls_back_to_display_name_for_matching() {
        let users = vec![user("", "Jane Doe", "jane@x.com", true)];
        assert_eq!(best_match(&users, "jane doe").display_name, "Jane Doe");
    }
}
