//! Configuration loading and parsing.
//!
//! `tix` reads a TOML config file resolved in order: `--config PATH`, the
//! `TIX_CONFIG` environment variable, then `<config_dir>/tix/config.toml`.
//! The API token never lives in the file; it comes from `TIX_API_TOKEN`.
//! `TIX_PROJECT` overrides the configured project key per invocation.

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

use crate::remote::AuthScheme;

/// Root configuration structure loaded from `config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TixConfig {
    pub server: Option<ServerConfig>,
    pub project: Option<ProjectConfig>,
    pub fields: Option<FieldsConfig>,
}

/// Remote server connection settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Base URL, e.g. `https://jira.example.com`.
    pub url: String,
    /// Login used for basic auth; ignored for bearer.
    pub login: Option<String>,
    /// Auth scheme: "basic" (default) or "bearer".
    pub auth: Option<String>,
}

/// Default project used to complete bare-number issue keys.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectConfig {
    pub key: String,
}

/// Custom field registry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FieldsConfig {
    #[serde(default)]
    pub custom: Vec<CustomFieldConfig>,
}

/// One configured custom field.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomFieldConfig {
    /// Human-readable name, e.g. "Story Points".
    pub name: String,
    /// Wire key, e.g. "customfield_10016".
    pub key: String,
    /// Declared datatype; "number" values are sent as JSON numbers,
    /// everything else as strings.
    pub schema: Option<String>,
}

impl TixConfig {
    /// Load configuration from an explicit path or the lookup chain.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(p) => p.to_path_buf(),
            None => default_path()?,
        };
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// The effective project key: the `--project` flag value passed in,
    /// `TIX_PROJECT`, or the configured key. Empty when none is set, in
    /// which case bare-number keys pass through unnormalized.
    pub fn project_key(&self, flag: Option<&str>) -> String {
        if let Some(p) = flag {
            return p.to_uppercase();
        }
        if let Ok(p) = env::var("TIX_PROJECT") {
            return p.to_uppercase();
        }
        self.project
            .as_ref()
            .map(|p| p.key.to_uppercase())
            .unwrap_or_default()
    }

    /// Server settings, required for any command that talks to the remote.
    pub fn server(&self) -> Result<&ServerConfig> {
        self.server
            .as_ref()
            .ok_or_else(|| anyhow!("no [server] section in config; set server.url"))
    }

    /// Configured custom fields, possibly empty.
    pub fn custom_fields(&self) -> &[CustomFieldConfig] {
        self.fields
            .as_ref()
            .map(|f| f.custom.as_slice())
            .unwrap_or(&[])
    }
}

impl ServerConfig {
    pub fn auth_scheme(&self) -> Result<AuthScheme> {
        match self.auth.as_deref() {
            None | Some("basic") => Ok(AuthScheme::Basic),
            Some("bearer") => Ok(AuthScheme::Bearer),
            Some(other) => Err(anyhow!(
                "unknown auth scheme {:?} in config (expected \"basic\" or \"bearer\")",
                other
            )),
        }
    }
}

/// The API token, environment-only by design.
pub fn api_token() -> Result<String> {
    env::var("TIX_API_TOKEN").map_err(|_| anyhow!("TIX_API_TOKEN environment variable not set"))
}

fn default_path() -> Result<PathBuf> {
    if let Ok(path) = env::var("TIX_CONFIG") {
        return Ok(PathBuf::from(path));
    }
    let base = dirs::config_dir().ok_or_else(|| anyhow!("could not determine config directory"))?;
    Ok(base.join("tix").join("config.toml"))
}
