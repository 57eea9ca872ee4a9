//! `ureq`-backed implementation of [`Remote`] against the Jira REST v2 API.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde_json::{json, Value};
use std::time::Duration;

use super::{Assignment, LabelDelta, Remote, RemoteError, TransitionRequest};
use crate::domain::{IssueRef, Transition, User};

/// Authentication scheme for the remote server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScheme {
    /// `Authorization: Basic base64(login:token)` — Jira Cloud API tokens.
    Basic,
    /// `Authorization: Bearer token` — on-prem personal access tokens.
    Bearer,
}

/// Blocking HTTP client for a Jira-compatible server.
pub struct HttpRemote {
    agent: ureq::Agent,
    base_url: String,
    login: String,
    token: String,
    auth: AuthScheme,
    debug: bool,
}

impl HttpRemote {
    pub fn new(
        server_url: &str,
        login: impl Into<String>,
        token: impl Into<String>,
        auth: AuthScheme,
        debug: bool,
    ) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(30))
            .build();
        Self {
            agent,
            base_url: format!("{}/rest/api/2", server_url.trim_end_matches('/')),
            login: login.into(),
            token: token.into(),
            auth,
            debug,
        }
    }

    fn auth_header(&self) -> String {
        match self.auth {
            AuthScheme::Basic => {
                let credentials = format!("{}:{}", self.login, self.token);
                format!("Basic {}", BASE64.encode(credentials))
            }
            AuthScheme::Bearer => format!("Bearer {}", self.token),
        }
    }

    fn request(&self, method: &str, path: &str) -> ureq::Request {
        let url = format!("{}{}", self.base_url, path);
        if self.debug {
            eprintln!("[debug] {} {}", method, url);
        }
        self.agent
            .request(method, &url)
            .set("Authorization", &self.auth_header())
            .set("Accept", "application/json")
    }

    /// Issue a request with a JSON body, discarding any response payload.
    fn send_json(&self, method: &str, path: &str, body: Value) -> Result<(), RemoteError> {
        self.request(method, path)
            .send_json(body)
            .map(|_| ())
            .map_err(into_remote_error)
    }
}

impl Remote for HttpRemote {
    fn search_users(
        &self,
        query: &str,
        project: &str,
        max_results: u32,
    ) -> Result<Vec<User>, RemoteError> {
        let response = self
            .request("GET", "/user/assignable/search")
            .query("project", project)
            .query("query", query)
            .query("maxResults", &max_results.to_string())
            .call()
            .map_err(into_remote_error)?;
        response
            .into_json::<Vec<User>>()
            .map_err(|e| RemoteError::Decode(e.to_string()))
    }

    fn search_issues(
        &self,
        jql: &str,
        offset: u32,
        limit: u32,
    ) -> Result<Vec<IssueRef>, RemoteError> {
        #[derive(serde::Deserialize)]
        struct SearchResult {
            #[serde(default)]
            issues: Vec<IssueRef>,
        }

        let response = self
            .request("POST", "/search")
            .send_json(json!({
                "jql": jql,
                "startAt": offset,
                "maxResults": limit,
                "fields": ["key"],
            }))
            .map_err(into_remote_error)?;
        let result: SearchResult = response
            .into_json()
            .map_err(|e| RemoteError::Decode(e.to_string()))?;
        Ok(result.issues)
    }

    fn assign_issue(&self, key: &str, assignment: &Assignment) -> Result<(), RemoteError> {
        let body = match assignment {
            Assignment::User(user) if !user.account_id.is_empty() => {
                json!({ "accountId": user.account_id })
            }
            Assignment::User(user) => json!({ "name": user.name }),
            // Jira convention: null name unassigns, "-1" selects the default.
            Assignment::Unassign => json!({ "name": Value::Null }),
            Assignment::Default => json!({ "name": "-1" }),
        };
        self.send_json("PUT", &format!("/issue/{}/assignee", key), body)
    }

    fn edit_labels(&self, key: &str, deltas: &[LabelDelta]) -> Result<(), RemoteError> {
        let ops: Vec<Value> = deltas
            .iter()
            .map(|d| {
                if d.remove {
                    json!({ "remove": d.label })
                } else {
                    json!({ "add": d.label })
                }
            })
            .collect();
        self.send_json(
            "PUT",
            &format!("/issue/{}", key),
            json!({ "update": { "labels": ops } }),
        )
    }

    fn add_comment(&self, key: &str, body: &str, internal: bool) -> Result<(), RemoteError> {
        let mut payload = json!({ "body": body });
        if internal {
            payload["properties"] = json!([
                { "key": "sd.public.comment", "value": { "internal": true } }
            ]);
        }
        self.send_json("POST", &format!("/issue/{}/comment", key), payload)
    }

    fn transitions(&self, key: &str) -> Result<Vec<Transition>, RemoteError> {
        #[derive(serde::Deserialize)]
        struct TransitionList {
            #[serde(default)]
            transitions: Vec<Transition>,
        }

        let response = self
            .request("GET", &format!("/issue/{}/transitions", key))
            .call()
            .map_err(into_remote_error)?;
        let list: TransitionList = response
            .into_json()
            .map_err(|e| RemoteError::Decode(e.to_string()))?;
        Ok(list.transitions)
    }

    fn transition_issue(
        &self,
        key: &str,
        request: &TransitionRequest,
    ) -> Result<(), RemoteError> {
        let mut fields = serde_json::Map::new();
        if let Some(assignee) = &request.assignee {
            fields.insert("assignee".into(), json!({ "name": assignee }));
        }
        if let Some(resolution) = &request.resolution {
            fields.insert("resolution".into(), json!({ "name": resolution }));
        }

        let mut body = json!({
            "transition": { "id": request.transition.id, "name": request.transition.name },
        });
        if !fields.is_empty() {
            body["fields"] = Value::Object(fields);
        }
        if let Some(comment) = &request.comment {
            body["update"] = json!({
                "comment": [ { "add": { "body": comment } } ],
            });
        }
        self.send_json("POST", &format!("/issue/{}/transitions", key), body)
    }

    fn watch(&self, key: &str, user: &User) -> Result<(), RemoteError> {
        // The watchers endpoint takes a bare JSON string identifying the user.
        let body = if user.account_id.is_empty() {
            Value::String(user.name.clone())
        } else {
            Value::String(user.account_id.clone())
        };
        self.send_json("POST", &format!("/issue/{}/watchers", key), body)
    }

    fn unwatch(&self, key: &str, user: &User) -> Result<(), RemoteError> {
        let (param, value) = if user.account_id.is_empty() {
            ("username", user.name.as_str())
        } else {
            ("accountId", user.account_id.as_str())
        };
        self.request("DELETE", &format!("/issue/{}/watchers", key))
            .query(param, value)
            .call()
            .map(|_| ())
            .map_err(into_remote_error)
    }

    fn set_fields(&self, key: &str, fields: &[(String, Value)]) -> Result<(), RemoteError> {
        let mut map = serde_json::Map::new();
        for (field_key, value) in fields {
            map.insert(field_key.clone(), value.clone());
        }
        self.send_json(
            "PUT",
            &format!("/issue/{}", key),
            json!({ "fields": Value::Object(map) }),
        )
    }

    fn myself(&self) -> Result<User, RemoteError> {
        let response = self
            .request("GET", "/myself")
            .call()
            .map_err(into_remote_error)?;
        response
            .into_json::<User>()
            .map_err(|e| RemoteError::Decode(e.to_string()))
    }
}

fn into_remote_error(err: ureq::Error) -> RemoteError {
    match err {
        ureq::Error::Status(status, response) => {
            let message = response
                .into_string()
                .unwrap_or_else(|_| String::from("<unreadable body>"));
            RemoteError::Api {
                status,
                message: summarize(&message),
            }
        }
        ureq::Error::Transport(t) => RemoteError::Transport(t.to_string()),
    }
}

/// Keep error payloads readable in one-line per-key reports.
fn summarize(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.chars().count() <= 200 {
        trimmed.to_string()
    } else {
        let head: String = trimmed.chars().take(200).collect();
        format!("{}...", head)
    }
}
