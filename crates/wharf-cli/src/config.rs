use serde::Deserialize;
use std::path::{Path, PathBuf};
use wharf_core::ProjectEnvVarParams;

/// Server connection settings used when composing agent environments.
/// Read from `<config_dir>/wharf/config.json`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AgentEnvConfig {
    #[serde(default)]
    pub server_url: String,
    #[serde(default)]
    pub api_url: String,
    #[serde(default)]
    pub client_id: String,
    /// Defaults to this binary's version.
    #[serde(default)]
    pub server_version: Option<String>,
    #[serde(default)]
    pub telemetry_enabled: bool,
}

impl AgentEnvConfig {
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("wharf").join("config.json"))
    }

    /// Load from an explicit path (must exist) or the default location
    /// (missing file means defaults).
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        let path = match explicit {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path() {
                Some(p) if p.exists() => p,
                _ => {
                    tracing::debug!("no config file, using defaults");
                    return Ok(Self::default());
                }
            },
        };
        crate::input::read_document(&path)
    }

    pub fn env_params(&self) -> ProjectEnvVarParams {
        ProjectEnvVarParams {
            api_url: self.api_url.clone(),
            server_url: self.server_url.clone(),
            client_id: self.client_id.clone(),
            server_version: self
                .server_version
                .clone()
                .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string()),
        }
    }
}
