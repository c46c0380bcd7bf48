/// Longest allowed DNS label.
pub const MAX_HOSTNAME_LEN: usize = 63;

/// Hostname for a project's container: `{workspace_id}-{project_name}`
/// with `_`, `*` and `.` in the project name turned into `-`, cut to
/// [`MAX_HOSTNAME_LEN`] characters. Consecutive or trailing hyphens are
/// left as they are.
pub fn project_hostname(workspace_id: &str, project_name: &str) -> String {
    let sanitized = project_name.replace(['_', '*', '.'], "-");
    let hostname = format!("{workspace_id}-{sanitized}");

    match hostname.char_indices().nth(MAX_HOSTNAME_LEN) {
        Some((cut, _)) => hostname[..cut].to_string(),
        None => hostname,
    }
}
