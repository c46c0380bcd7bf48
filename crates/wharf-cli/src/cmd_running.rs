use std::path::Path;
use wharf_core::{find_project, is_project_running, WorkspaceDto};

use crate::input::read_document;

/// Print whether the project is running and return the answer so the
/// caller can turn it into an exit status.
pub fn execute(workspace_file: &Path, project_name: &str) -> anyhow::Result<bool> {
    let dto: WorkspaceDto = read_document(workspace_file)?;
    let workspace = &dto.workspace;
    if find_project(workspace, project_name).is_none() {
        tracing::debug!(workspace = %workspace.id, project = project_name, "project not in workspace");
    }
    let running = is_project_running(workspace, project_name);
    println!("{running}");
    Ok(running)
}
