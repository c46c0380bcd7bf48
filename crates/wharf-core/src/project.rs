use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::HashError;
use crate::hash::config_hash;
use crate::state::ProjectState;
use crate::types::ProjectConfig;

/// Secret the project's agent uses to call back into the server.
///
/// Never serialized or deserialized, and `Debug` does not print it.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

/// A provisioned project inside a workspace.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(flatten)]
    pub config: ProjectConfig,
    pub workspace_id: String,
    #[serde(skip)]
    pub api_key: ApiKey,
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<ProjectState>,
}

impl Project {
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Cache key over the build config and the pinned revision.
    pub fn config_hash(&self) -> Result<String, HashError> {
        config_hash(&self.config.build_config, &self.config.repository.sha)
    }

    /// Swap in a new observation (or clear it). State is only ever replaced
    /// as a whole so uptime and git status come from the same instant.
    pub fn replace_state(&mut self, state: Option<ProjectState>) -> Option<ProjectState> {
        std::mem::replace(&mut self.state, state)
    }

    pub fn is_running(&self) -> bool {
        self.state.as_ref().is_some_and(ProjectState::is_running)
    }
}

/// Named group of projects sharing one target.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    pub id: String,
    pub name: String,
    pub target: String,
    pub projects: Vec<Project>,
}


#[cfg(test)]
mod tests {
    use super::fixtures::project;
    use super::*;
    use crate::types::{BuildConfig, DevcontainerConfig};

    #[test]
    fn config_hash_is_deterministic() {
        let a = project("api", None);
        let b = project("api", Some(40));
        assert_eq!(a.config_hash().unwrap(), b.config_hash().unwrap());
    }

    #[test]
    fn config_hash_ignores_env_vars() {
        let a = project("api", None);
        let mut b = project("api", None);
        b.config
            .env_vars
            .insert("WORKSPACE_TOKEN".to_string(), "per-workspace".to_string());
        assert_eq!(a.config_hash().unwrap(), b.config_hash().unwrap());
    }

    #[test]
    fn config_hash_tracks_build_config_and_revision() {
        let base = project("api", None);

        let mut other_sha = base.clone();
        other_sha.config.repository.sha = "ffffff0".to_string();

        let mut other_build = base.clone();
        other_build.config.build_config = Some(BuildConfig {
            devcontainer: Some(DevcontainerConfig {
                file_path: "tools/devcontainer.json".to_string(),
            }),
        });

        let mut no_build = base.clone();
        no_build.config.build_config = None;

        let hashes = [
            base.config_hash().unwrap(),
            other_sha.config_hash().unwrap(),
            other_build.config_hash().unwrap(),
            no_build.config_hash().unwrap(),
        ];
        for (i, a) in hashes.iter().enumerate() {
            for b in &hashes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn api_key_never_serialized() {
        let p = project("api", Some(5));
        let json = serde_json::to_string(&p).unwrap();
        assert!(!json.contains("sk-super-secret-key"));
        assert!(!json.contains("apiKey"));
        assert!(!format!("{p:?}").contains("sk-super-secret-key"));
    }

    #[test]
    fn api_key_ignored_on_input() {
        let mut json = serde_json::to_value(project("api", None)).unwrap();
        json["apiKey"] = serde_json::json!("smuggled");
        let p: Project = serde_json::from_value(json).unwrap();
        assert!(p.api_key.is_empty());
    }

    #[test]
    fn flattened_config_and_absent_state() {
        let json = serde_json::to_value(project("api", None)).unwrap();
        assert_eq!(json["name"], "api");
        assert_eq!(json["workspaceId"], "ws1");
        assert!(json.get("state").is_none());
    }

    #[test]
    fn replace_state_swaps_whole_snapshot() {
        let mut p = project("api", None);
        assert!(!p.is_running());
        let next = project("api", Some(9)).state;
        assert_eq!(p.replace_state(next), None);
        assert!(p.is_running());
        let prev = p.replace_state(None).unwrap();
        assert_eq!(prev.uptime, 9);
        assert!(p.state.is_none());
    }
}
