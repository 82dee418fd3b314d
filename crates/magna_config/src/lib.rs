//! Magna site configuration
//!
//! The site reads its backend endpoint, public API key, and optional
//! per-table name overrides once at process start. A missing required value
//! is a fatal configuration error for any page that needs the backend.
//!
//! Environment variables keep the names the hosted frontend used
//! (`NEXT_PUBLIC_SUPABASE_URL` and friends) so one deployment environment
//! serves both. A TOML file (`magna.toml`) can stand in for the environment
//! in local tooling.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Environment variable holding the backend endpoint URL
pub const ENV_BACKEND_URL: &str = "NEXT_PUBLIC_SUPABASE_URL";
/// Environment variable holding the backend public (anon) API key
pub const ENV_BACKEND_ANON_KEY: &str = "NEXT_PUBLIC_SUPABASE_ANON_KEY";

/// Errors raised while loading site configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is absent or empty
    #[error("missing required configuration value: {0}")]
    MissingVar(&'static str),

    /// Config file could not be read
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be parsed
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Connection settings for the hosted backend
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct BackendConfig {
    /// Backend endpoint URL
    pub url: String,
    /// Public (anon) API key
    pub anon_key: String,
}

/// Names of the backend tables the site reads and writes.
///
/// Every name can be overridden per environment; defaults match the hosted
/// schema.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TableNames {
    pub users: String,
    pub user_roles: String,
    pub user_categories: String,
    pub projects: String,
    pub project_contributors: String,
    pub user_preferences: String,
    pub user_skills: String,
}

impl Default for TableNames {
    fn default() -> Self {
        Self {
            users: "users".into(),
            user_roles: "user_roles".into(),
            user_categories: "user_categories".into(),
            projects: "projects".into(),
            project_contributors: "project_contributors".into(),
            user_preferences: "user_preferences".into(),
            user_skills: "user_skills".into(),
        }
    }
}

/// Full site configuration, read once at startup
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SiteConfig {
    pub backend: BackendConfig,
    #[serde(default)]
    pub tables: TableNames,
}

impl SiteConfig {
    /// Load from the process environment.
    ///
    /// Table overrides follow the frontend's `NEXT_PUBLIC_*_TABLE` scheme.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from any key/value source. Used by `from_env` and by tests.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| -> Result<String> {
            match lookup(key) {
                Some(v) if !v.trim().is_empty() => Ok(v),
                _ => Err(ConfigError::MissingVar(key)),
            }
        };

        let mut tables = TableNames::default();
        let overrides = [
            ("NEXT_PUBLIC_USERS_TABLE", &mut tables.users),
            ("NEXT_PUBLIC_ROLES_TABLE", &mut tables.user_roles),
            ("NEXT_PUBLIC_CATEGORIES_TABLE", &mut tables.user_categories),
            ("NEXT_PUBLIC_PROJECTS_TABLE", &mut tables.projects),
            (
                "NEXT_PUBLIC_PROJECT_CONTRIBUTORS_TABLE",
                &mut tables.project_contributors,
            ),
            (
                "NEXT_PUBLIC_USER_PREFERENCES_TABLE",
                &mut tables.user_preferences,
            ),
            ("NEXT_PUBLIC_USER_SKILLS_TABLE", &mut tables.user_skills),
        ];
        for (key, slot) in overrides {
            if let Some(value) = lookup(key).filter(|v| !v.trim().is_empty()) {
                tracing::debug!("table override {} = {}", key, value);
                *slot = value;
            }
        }

        Ok(Self {
            backend: BackendConfig {
                url: required(ENV_BACKEND_URL)?,
                anon_key: required(ENV_BACKEND_ANON_KEY)?,
            },
            tables,
        })
    }

    /// Load from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_missing_url_is_fatal() {
        let vars = env(&[(ENV_BACKEND_ANON_KEY, "anon")]);
        let err = SiteConfig::from_lookup(|k| vars.get(k).cloned()).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar(ENV_BACKEND_URL)));
    }

    #[test]
    fn test_empty_key_counts_as_missing() {
        let vars = env(&[
            (ENV_BACKEND_URL, "https://example.supabase.co"),
            (ENV_BACKEND_ANON_KEY, "   "),
        ]);
        let err = SiteConfig::from_lookup(|k| vars.get(k).cloned()).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar(ENV_BACKEND_ANON_KEY)));
    }

    #[test]
    fn test_defaults_and_overrides() {
        let vars = env(&[
            (ENV_BACKEND_URL, "https://example.supabase.co"),
            (ENV_BACKEND_ANON_KEY, "anon"),
            ("NEXT_PUBLIC_USERS_TABLE", "members"),
        ]);
        let config = SiteConfig::from_lookup(|k| vars.get(k).cloned()).unwrap();
        assert_eq!(config.tables.users, "members");
        assert_eq!(config.tables.projects, "projects");
        assert_eq!(config.tables.user_skills, "user_skills");
    }

    #[test]
    fn test_toml_round_trip() {
        let vars = env(&[
            (ENV_BACKEND_URL, "https://example.supabase.co"),
            (ENV_BACKEND_ANON_KEY, "anon"),
        ]);
        let config = SiteConfig::from_lookup(|k| vars.get(k).cloned()).unwrap();
        let text = toml::to_string(&config).unwrap();
        let parsed: SiteConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.tables, config.tables);
        assert_eq!(parsed.backend.url, config.backend.url);
    }
}
