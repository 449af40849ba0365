//! Optional dotenv file holding the Jira credentials.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::BaseDirs;

/// Location of the env file, relative to the home directory.
pub const DEFAULT_ENV_FILE: &str = ".jira-tools/jira.env";

/// `~/.jira-tools/jira.env`, if a home directory can be determined.
pub fn default_env_file() -> Option<PathBuf> {
  BaseDirs::new().map(|dirs| dirs.home_dir().join(DEFAULT_ENV_FILE))
}

/// Load variables from `explicit`, or from `fallback` when it exists.
///
/// An explicit path must exist; a missing fallback is skipped. Variables
/// already present in the process environment are left untouched. Returns the
/// path that was loaded.
pub fn load_env_file(explicit: Option<&Path>, fallback: Option<PathBuf>) -> Result<Option<PathBuf>> {
  let path = match explicit {
    Some(path) => path.to_path_buf(),
    None => match fallback {
      Some(path) if path.is_file() => path,
      _ => return Ok(None),
    },
  };

  dotenvy::from_path(&path).with_context(|| format!("Failed to load environment file {}", path.display()))?;
  Ok(Some(path))
}

#[cfg(test)]
mod tests {
  use jira_tools::{ENV_JIRA_API_TOKEN, ENV_JIRA_BASE_URL, ENV_JIRA_EMAIL, JiraConfig};
  use jira_tools_test_utils::{EnvFileGuard, EnvVarGuard};

  use super::*;

  const JIRA_VARS: [&str; 3] = [ENV_JIRA_BASE_URL, ENV_JIRA_EMAIL, ENV_JIRA_API_TOKEN];

  #[test]
  fn test_explicit_env_file_feeds_config() {
    let _env = EnvVarGuard::new(&JIRA_VARS);
    let file = EnvFileGuard::new(
      "jira.env",
      "JIRA_BASE_URL=https://acme.atlassian.net\nJIRA_EMAIL=dev@acme.io\nJIRA_API_TOKEN=from-file\n",
    );

    let loaded = load_env_file(Some(file.path()), None).unwrap();
    assert_eq!(loaded.as_deref(), Some(file.path()));

    let config = JiraConfig::from_env().unwrap();
    assert_eq!(config.base_url(), "https://acme.atlassian.net");
    assert_eq!(config.api_token(), "from-file");
  }

  #[test]
  fn test_process_environment_wins_over_file() {
    let env = EnvVarGuard::new(&JIRA_VARS);
    env.set(ENV_JIRA_API_TOKEN, "from-env");
    let file = EnvFileGuard::new(
      ".jira-tools/jira.env",
      "JIRA_BASE_URL=https://acme.atlassian.net\nJIRA_EMAIL=dev@acme.io\nJIRA_API_TOKEN=from-file\n",
    );

    let fallback = file.dir().join(DEFAULT_ENV_FILE);
    assert!(load_env_file(None, Some(fallback)).unwrap().is_some());

    assert_eq!(JiraConfig::from_env().unwrap().api_token(), "from-env");
  }

  #[test]
  fn test_missing_files() {
    let file = EnvFileGuard::new("other.env", "");

    assert!(load_env_file(None, Some(file.dir().join(DEFAULT_ENV_FILE))).unwrap().is_none());
    assert!(load_env_file(None, None).unwrap().is_none());
    assert!(load_env_file(Some(&file.dir().join("missing.env")), None).is_err());
  }
}
