use crate::utils::error::{Result, TennisError};
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};

pub const DEFAULT_OWNER: &str = "stonehenge-collective";
pub const DEFAULT_REPO: &str = "tennis";
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Checked in order; the first non-empty value wins.
pub const TOKEN_ENV_VARS: &[&str] = &["GITHUB_TOKEN", "GH_TOKEN"];
pub const REPOSITORY_ENV_VAR: &str = "GITHUB_REPOSITORY";
pub const API_URL_ENV_VAR: &str = "GITHUB_API_URL";

/// Values supplied explicitly on the command line.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub token: Option<String>,
    pub owner: Option<String>,
    pub repo: Option<String>,
    pub api_url: Option<String>,
}

/// Immutable connection settings, resolved once at startup.
#[derive(Clone)]
pub struct Settings {
    pub token: String,
    pub owner: String,
    pub repo: String,
    pub api_url: String,
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("token", &"***")
            .field("owner", &self.owner)
            .field("repo", &self.repo)
            .field("api_url", &self.api_url)
            .finish()
    }
}

impl Settings {
    pub fn from_env(overrides: SettingsOverrides) -> Result<Self> {
        Self::resolve(overrides, |key| std::env::var(key).ok())
    }

    /// Flag > environment > default, per field. `lookup` reads one variable.
    pub fn resolve<F>(overrides: SettingsOverrides, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let token = non_empty(overrides.token)
            .or_else(|| TOKEN_ENV_VARS.iter().find_map(|&key| lookup(key)))
            .ok_or_else(|| {
                TennisError::config(
                    "GitHub token required. Set GITHUB_TOKEN environment variable or use --token flag",
                )
            })?;

        let (env_owner, env_repo) = lookup(REPOSITORY_ENV_VAR)
            .as_deref()
            .and_then(split_repository)
            .map(|(owner, repo)| (Some(owner), Some(repo)))
            .unwrap_or((None, None));

        let owner = non_empty(overrides.owner)
            .or(env_owner)
            .unwrap_or_else(|| DEFAULT_OWNER.to_string());
        let repo = non_empty(overrides.repo)
            .or(env_repo)
            .unwrap_or_else(|| DEFAULT_REPO.to_string());

        let api_url = non_empty(overrides.api_url)
            .or_else(|| lookup(API_URL_ENV_VAR))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let settings = Self {
            token,
            owner,
            repo,
            api_url,
        };
        settings.validate()?;

        tracing::debug!("Resolved settings: {:?}", settings);
        Ok(settings)
    }

    /// Web page listing workflow runs. Assumes github.com hosting.
    pub fn actions_url(&self) -> String {
        format!("https://github.com/{}/{}/actions", self.owner, self.repo)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("token", &self.token)?;
        validate_non_empty_string("owner", &self.owner)?;
        validate_non_empty_string("repo", &self.repo)?;
        validate_url("api_url", &self.api_url)?;
        Ok(())
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Splits `owner/repo` on the first `/`; both halves must be non-empty.
fn split_repository(value: &str) -> Option<(String, String)> {
    let (owner, repo) = value.split_once('/')?;
    if owner.is_empty() || repo.is_empty() {
        return None;
    }
    Some((owner.to_string(), repo.to_string()))
}
