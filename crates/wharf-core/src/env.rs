//! Environment handed to a project's agent at provisioning time.

use std::collections::BTreeMap;

use crate::project::Project;

pub const WS_ID: &str = "WHARF_WS_ID";
pub const WS_PROJECT_NAME: &str = "WHARF_WS_PROJECT_NAME";
pub const WS_PROJECT_REPOSITORY_URL: &str = "WHARF_WS_PROJECT_REPOSITORY_URL";
pub const SERVER_API_KEY: &str = "WHARF_SERVER_API_KEY";
pub const SERVER_VERSION: &str = "WHARF_SERVER_VERSION";
pub const SERVER_URL: &str = "WHARF_SERVER_URL";
pub const SERVER_API_URL: &str = "WHARF_SERVER_API_URL";
pub const CLIENT_ID: &str = "WHARF_CLIENT_ID";
pub const AGENT_LOG_FILE_PATH: &str = "WHARF_AGENT_LOG_FILE_PATH";
pub const TELEMETRY_ENABLED: &str = "WHARF_TELEMETRY_ENABLED";

/// `(HOME)` is resolved by the agent inside the project.
pub const AGENT_LOG_FILE_TEMPLATE: &str = "(HOME)/.wharf-agent.log";

/// Server-side values the agent needs to reach back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectEnvVarParams {
    pub api_url: String,
    pub server_url: String,
    pub client_id: String,
    pub server_version: String,
}

/// Build the agent environment for `project`.
pub fn project_env_vars(
    project: &Project,
    params: &ProjectEnvVarParams,
    telemetry_enabled: bool,
) -> BTreeMap<String, String> {
    let mut vars: BTreeMap<String, String> = [
        (WS_ID, project.workspace_id.as_str()),
        (WS_PROJECT_NAME, project.name()),
        (WS_PROJECT_REPOSITORY_URL, project.config.repository.url.as_str()),
        (SERVER_API_KEY, project.api_key.expose()),
        (SERVER_VERSION, params.server_version.as_str()),
        (SERVER_URL, params.server_url.as_str()),
        (SERVER_API_URL, params.api_url.as_str()),
        (CLIENT_ID, params.client_id.as_str()),
        (AGENT_LOG_FILE_PATH, AGENT_LOG_FILE_TEMPLATE),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    if telemetry_enabled {
        vars.insert(TELEMETRY_ENABLED.to_string(), "true".to_string());
    }

    vars
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::fixtures::project;

    const FIXED_KEYS: [&str; 9] = [
        WS_ID,
        WS_PROJECT_NAME,
        WS_PROJECT_REPOSITORY_URL,
        SERVER_API_KEY,
        SERVER_VERSION,
        SERVER_URL,
        SERVER_API_URL,
        CLIENT_ID,
        AGENT_LOG_FILE_PATH,
    ];

    fn params() -> ProjectEnvVarParams {
        ProjectEnvVarParams {
            api_url: "http://localhost:3986".to_string(),
            server_url: "http://localhost:3987".to_string(),
            client_id: "client-1".to_string(),
            server_version: "0.4.2".to_string(),
        }
    }

    #[test]
    fn fixed_keys_without_telemetry() {
        let vars = project_env_vars(&project("api", None), &params(), false);
        let keys: Vec<&str> = vars.keys().map(String::as_str).collect();
        let mut expected = FIXED_KEYS.to_vec();
        expected.sort_unstable();
        assert_eq!(keys, expected);
        assert!(!vars.contains_key(TELEMETRY_ENABLED));
    }

    #[test]
    fn telemetry_key_added_when_enabled() {
        let vars = project_env_vars(&project("api", None), &params(), true);
        assert_eq!(vars.len(), FIXED_KEYS.len() + 1);
        assert_eq!(vars[TELEMETRY_ENABLED], "true");
    }

    #[test]
    fn values_come_from_project_and_params() {
        let vars = project_env_vars(&project("api", None), &params(), false);
        assert_eq!(vars[WS_ID], "ws1");
        assert_eq!(vars[WS_PROJECT_NAME], "api");
        assert_eq!(vars[WS_PROJECT_REPOSITORY_URL], "https://github.com/acme/api.git");
        assert_eq!(vars[SERVER_API_KEY], "sk-super-secret-key");
        assert_eq!(vars[SERVER_VERSION], "0.4.2");
        assert_eq!(vars[SERVER_URL], "http://localhost:3987");
        assert_eq!(vars[SERVER_API_URL], "http://localhost:3986");
        assert_eq!(vars[CLIENT_ID], "client-1");
        assert_eq!(vars[AGENT_LOG_FILE_PATH], "(HOME)/.wharf-agent.log");
    }
}
