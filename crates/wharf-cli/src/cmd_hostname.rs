use wharf_core::project_hostname;

pub fn execute(workspace_id: &str, project_name: &str) -> anyhow::Result<()> {
    println!("{}", project_hostname(workspace_id, project_name));
    Ok(())
}
