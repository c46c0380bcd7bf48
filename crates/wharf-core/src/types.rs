use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Devcontainer-based build: path to the devcontainer definition inside
/// the repository.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DevcontainerConfig {
    pub file_path: String,
}

/// How a project's image is built. An empty config means "use the
/// configured image as-is".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub devcontainer: Option<DevcontainerConfig>,
}

/// Source repository a project is cloned from.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GitRepository {
    pub id: String,
    pub url: String,
    pub name: String,
    pub owner: String,
    /// Revision the project is pinned to (usually a commit id).
    pub sha: String,
    /// Hosting provider id, e.g. "github.com".
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pr_number: Option<u32>,
}

/// Persisted build/runtime configuration of a project.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    pub name: String,
    pub image: String,
    pub user: String,
    #[serde(default)]
    pub build_config: Option<BuildConfig>,
    pub repository: GitRepository,
    #[serde(default)]
    pub env_vars: BTreeMap<String, String>,
    #[serde(default)]
    pub is_default: bool,
}
