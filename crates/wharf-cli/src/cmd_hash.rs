use std::path::Path;
use wharf_core::Project;

use crate::input::read_document;

pub fn execute(project_file: &Path) -> anyhow::Result<()> {
    let project: Project = read_document(project_file)?;
    let hash = project.config_hash()?;
    println!("{hash}");
    Ok(())
}
