use std::path::Path;
use wharf_core::{project_hostname, Project, ProjectInfo, WorkspaceDto};

use crate::input::read_document;

/// One line of the text view of `wharf status`.
#[derive(Debug, PartialEq, Eq)]
struct StatusRow {
    name: String,
    hostname: String,
    observed: bool,
    is_running: bool,
    uptime: u64,
    branch: Option<String>,
    changed_files: usize,
}

impl StatusRow {
    fn new(workspace_id: &str, project: &Project) -> Self {
        let state = project.state.as_ref();
        Self {
            name: project.name().to_string(),
            hostname: project_hostname(workspace_id, project.name()),
            observed: state.is_some(),
            is_running: project.is_running(),
            uptime: state.map_or(0, |s| s.uptime),
            branch: state.map(|s| s.git_status.current_branch.clone()),
            changed_files: state.map_or(0, |s| s.git_status.changed_files().count()),
        }
    }

    fn render(&self) -> String {
        let liveness = match (self.observed, self.is_running) {
            (false, _) => "never observed".to_string(),
            (true, false) => "stopped".to_string(),
            (true, true) => format!("running ({}s)", self.uptime),
        };
        match &self.branch {
            Some(branch) => format!(
                "{} [{}]  {liveness}  on {branch}, {} changed",
                self.name, self.hostname, self.changed_files
            ),
            None => format!("{} [{}]  {liveness}", self.name, self.hostname),
        }
    }
}

/// `created` is taken from the last observation; unobserved projects get
/// an empty string.
fn project_infos(projects: &[Project]) -> Vec<ProjectInfo> {
    projects
        .iter()
        .map(|p| {
            let created = p
                .state
                .as_ref()
                .map(|s| s.updated_at.clone())
                .unwrap_or_default();
            ProjectInfo::for_project(p, created)
        })
        .collect()
}

pub fn execute(workspace_file: &Path, json: bool) -> anyhow::Result<()> {
    let dto: WorkspaceDto = read_document(workspace_file)?;
    let ws = &dto.workspace;

    if json {
        let infos = project_infos(&ws.projects);
        println!("{}", serde_json::to_string_pretty(&infos)?);
        return Ok(());
    }

    let rows: Vec<StatusRow> = ws
        .projects
        .iter()
        .map(|p| StatusRow::new(&ws.id, p))
        .collect();

    println!("Workspace {} ({}) on {}", ws.name, ws.id, ws.target);
    if rows.is_empty() {
        println!("(no projects)");
    }
    for row in &rows {
        println!("  {}", row.render());
    }
    Ok(())
}
