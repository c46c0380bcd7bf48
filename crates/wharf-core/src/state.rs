use serde::{Deserialize, Serialize};

use crate::error::StateError;
use crate::git::GitStatus;

/// One observation of a live project. A project that was never observed
/// has no `ProjectState` at all.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectState {
    pub updated_at: String,
    /// Seconds since the project's agent reported itself started.
    pub uptime: u64,
    pub git_status: GitStatus,
}

impl ProjectState {
    /// Build a snapshot stamped with the current UTC time (RFC 3339).
    pub fn observed_now(uptime: u64, git_status: GitStatus) -> Result<Self, StateError> {
        let updated_at = time::OffsetDateTime::now_utc()
            .format(&time::format_description::well_known::Rfc3339)?;
        Ok(Self {
            updated_at,
            uptime,
            git_status,
        })
    }

    /// Observed and accruing uptime. Zero uptime means stopped or not yet
    /// started.
    pub fn is_running(&self) -> bool {
        self.uptime != 0
    }
}
