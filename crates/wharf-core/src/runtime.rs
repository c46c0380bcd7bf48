//! Liveness lookups over a workspace snapshot.

use crate::project::{Project, Workspace};

/// First project in `workspace` whose name matches exactly.
pub fn find_project<'a>(workspace: &'a Workspace, project_name: &str) -> Option<&'a Project> {
    workspace
        .projects
        .iter()
        .find(|p| p.name() == project_name)
}

/// Whether the named project has been observed with non-zero uptime.
///
/// An unknown project is reported as not running; use [`find_project`]
/// to tell the two apart.
pub fn is_project_running(workspace: &Workspace, project_name: &str) -> bool {
    find_project(workspace, project_name).is_some_and(Project::is_running)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::fixtures::{project, workspace};

    #[test]
    fn absent_project_is_not_running() {
        let ws = workspace(vec![project("web", Some(10))]);
        assert!(!is_project_running(&ws, "p"));
        assert!(find_project(&ws, "p").is_none());
    }

    #[test]
    fn never_observed_is_not_running() {
        let ws = workspace(vec![project("p", None)]);
        assert!(!is_project_running(&ws, "p"));
        assert!(find_project(&ws, "p").is_some());
    }

    #[test]
    fn zero_uptime_is_not_running() {
        let ws = workspace(vec![project("p", Some(0))]);
        assert!(!is_project_running(&ws, "p"));
    }

    #[test]
    fn positive_uptime_is_running() {
        let ws = workspace(vec![project("p", Some(5))]);
        assert!(is_project_running(&ws, "p"));
    }

    #[test]
    fn match_is_case_sensitive() {
        let ws = workspace(vec![project("API", Some(5))]);
        assert!(!is_project_running(&ws, "api"));
    }

    #[test]
    fn first_match_wins() {
        let ws = workspace(vec![project("p", Some(0)), project("p", Some(7))]);
        assert!(!is_project_running(&ws, "p"));
    }
}
