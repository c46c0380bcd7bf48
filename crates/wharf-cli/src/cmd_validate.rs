use std::path::Path;
use wharf_core::CreateWorkspaceDto;

use crate::input::read_document;

pub fn execute(request_file: &Path) -> anyhow::Result<()> {
    let request: CreateWorkspaceDto = read_document(request_file)?;
    request.validate()?;
    println!(
        "ok: workspace '{}' with {} project(s)",
        request.id,
        request.projects.len()
    );
    Ok(())
}
