use std::collections::BTreeMap;
use std::path::Path;
use wharf_core::{project_env_vars, ApiKey, Project};

use crate::config::AgentEnvConfig;
use crate::input::read_document;

pub struct EnvCliParams<'a> {
    pub project_file: &'a Path,
    pub config_file: Option<&'a Path>,
    pub api_key: Option<String>,
    pub telemetry: bool,
}

pub fn execute(params: EnvCliParams<'_>) -> anyhow::Result<()> {
    let config = AgentEnvConfig::load(params.config_file)?;
    let mut project: Project = read_document(params.project_file)?;
    match params.api_key {
        Some(key) => project.api_key = ApiKey::new(key),
        None => tracing::warn!("no api key given, agent will not be able to authenticate"),
    }

    let telemetry = params.telemetry || config.telemetry_enabled;
    let vars = project_env_vars(&project, &config.env_params(), telemetry);
    print!("{}", render(&vars));
    Ok(())
}

/// `KEY=VALUE` lines in key order.
fn render(vars: &BTreeMap<String, String>) -> String {
    vars.iter().map(|(k, v)| format!("{k}={v}\n")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_is_sorted_key_value_lines() {
        let mut vars = BTreeMap::new();
        vars.insert("B".to_string(), "2".to_string());
        vars.insert("A".to_string(), "1".to_string());
        assert_eq!(render(&vars), "A=1\nB=2\n");
    }

    #[test]
    fn execute_with_explicit_config() {
        use crate::input::fixtures::{write, PROJECT_JSON};
        let tmp = tempfile::tempdir().unwrap();
        let project_file = write(tmp.path(), "p.json", PROJECT_JSON);
        let config_file = write(tmp.path(), "c.json", r#"{"serverUrl":"http://s"}"#);
        execute(EnvCliParams {
            project_file: &project_file,
            config_file: Some(&config_file),
            api_key: Some("k".to_string()),
            telemetry: true,
        })
        .unwrap();
    }
}
