pub mod canon;
pub mod dto;
pub mod env;
pub mod error;
pub mod git;
pub mod hash;
pub mod hostname;
pub mod project;
pub mod runtime;
pub mod state;
pub mod types;

pub use dto::{
    CreateProjectConfigDto, CreateWorkspaceDto, ProjectDto, ProjectInfo, WorkspaceDto,
    WorkspaceInfo,
};
pub use env::{project_env_vars, ProjectEnvVarParams};
pub use error::{GitStatusError, HashError, StateError, ValidationError};
pub use git::{FileStatus, GitStatus, Status};
pub use hash::config_hash;
pub use hostname::project_hostname;
pub use project::{ApiKey, Project, Workspace};
pub use runtime::{find_project, is_project_running};
pub use state::ProjectState;
pub use types::*;
