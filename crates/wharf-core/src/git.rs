//! Working-tree status snapshots.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::GitStatusError;

/// Change state of one file in either the index or the worktree.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Status {
    Unmodified,
    Untracked,
    Modified,
    Added,
    Deleted,
    Renamed,
    Copied,
    #[serde(rename = "Updated but unmerged")]
    UpdatedButUnmerged,
}

impl Status {
    /// Map a porcelain v1 status letter. Type changes (`T`) count as
    /// modifications.
    pub fn from_porcelain(code: char) -> Option<Self> {
        match code {
            ' ' => Some(Self::Unmodified),
            '?' => Some(Self::Untracked),
            'M' | 'T' => Some(Self::Modified),
            'A' => Some(Self::Added),
            'D' => Some(Self::Deleted),
            'R' => Some(Self::Renamed),
            'C' => Some(Self::Copied),
            'U' => Some(Self::UpdatedButUnmerged),
            _ => None,
        }
    }

    pub fn is_unmodified(self) -> bool {
        self == Self::Unmodified
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unmodified => write!(f, "Unmodified"),
            Self::Untracked => write!(f, "Untracked"),
            Self::Modified => write!(f, "Modified"),
            Self::Added => write!(f, "Added"),
            Self::Deleted => write!(f, "Deleted"),
            Self::Renamed => write!(f, "Renamed"),
            Self::Copied => write!(f, "Copied"),
            Self::UpdatedButUnmerged => write!(f, "Updated but unmerged"),
        }
    }
}

/// Status of a single path. `extra` carries the previous path for
/// renames and copies and is empty otherwise.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileStatus {
    pub name: String,
    pub extra: String,
    pub staging: Status,
    pub worktree: Status,
}

impl FileStatus {
    pub fn is_changed(&self) -> bool {
        !(self.staging.is_unmodified() && self.worktree.is_unmodified())
    }
}

/// Branch plus per-file status, in the order the scan produced them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GitStatus {
    pub current_branch: String,
    #[serde(rename = "fileStatus")]
    pub files: Vec<FileStatus>,
}

impl GitStatus {
    /// Parse the output of `git status --porcelain=v1 --branch`.
    ///
    /// Ignored entries (`!!`) are dropped. A missing `##` header leaves the
    /// branch empty, as does a detached HEAD.
    pub fn from_porcelain(output: &str) -> Result<Self, GitStatusError> {
        let mut status = GitStatus::default();

        for (idx, line) in output.lines().enumerate() {
            let line_no = idx + 1;
            if line.trim().is_empty() {
                continue;
            }
            if let Some(header) = line.strip_prefix("## ") {
                status.current_branch = parse_branch_header(header);
                continue;
            }
            if line.starts_with("!!") {
                tracing::debug!(line_no, "skipping ignored path");
                continue;
            }
            status.files.push(parse_entry(line_no, line)?);
        }

        Ok(status)
    }

    /// True when no file differs from HEAD in either column.
    pub fn is_clean(&self) -> bool {
        self.files.iter().all(|f| !f.is_changed())
    }

    pub fn changed_files(&self) -> impl Iterator<Item = &FileStatus> {
        self.files.iter().filter(|f| f.is_changed())
    }
}

fn parse_branch_header(header: &str) -> String {
    if header.starts_with("HEAD (no branch)") {
        return String::new();
    }
    let header = header
        .strip_prefix("No commits yet on ")
        .or_else(|| header.strip_prefix("Initial commit on "))
        .unwrap_or(header);
    let end = header
        .find("...")
        .or_else(|| header.find(' '))
        .unwrap_or(header.len());
    header[..end].to_string()
}

fn parse_entry(line_no: usize, line: &str) -> Result<FileStatus, GitStatusError> {
    let malformed = || GitStatusError::MalformedLine {
        line_no,
        line: line.to_string(),
    };

    let mut chars = line.chars();
    let (x, y) = match (chars.next(), chars.next(), chars.next()) {
        (Some(x), Some(y), Some(' ')) => (x, y),
        _ => return Err(malformed()),
    };
    let path = chars.as_str();
    if path.is_empty() {
        return Err(malformed());
    }

    let staging = Status::from_porcelain(x).ok_or(GitStatusError::UnknownCode { line_no, code: x })?;
    let worktree = Status::from_porcelain(y).ok_or(GitStatusError::UnknownCode { line_no, code: y })?;

    let (name, extra) = match path.split_once(" -> ") {
        Some((from, to)) if is_rename_or_copy(staging) || is_rename_or_copy(worktree) => {
            (unquote(line_no, to)?, unquote(line_no, from)?)
        }
        _ => (unquote(line_no, path)?, String::new()),
    };

    Ok(FileStatus {
        name,
        extra,
        staging,
        worktree,
    })
}

fn is_rename_or_copy(status: Status) -> bool {
    matches!(status, Status::Renamed | Status::Copied)
}

/// Undo the C-style quoting git applies to unusual paths. With the default
/// `core.quotePath`, non-ASCII bytes arrive as three-digit octal escapes.
fn unquote(line_no: usize, path: &str) -> Result<String, GitStatusError> {
    let Some(inner) = path.strip_prefix('"').and_then(|p| p.strip_suffix('"')) else {
        return Ok(path.to_string());
    };
    let invalid = || GitStatusError::InvalidPath {
        line_no,
        path: path.to_string(),
    };

    let mut bytes = Vec::with_capacity(inner.len());
    let mut rest = inner.as_bytes();
    while let Some((&b, tail)) = rest.split_first() {
        rest = tail;
        if b != b'\\' {
            bytes.push(b);
            continue;
        }
        let (&esc, tail) = rest.split_first().ok_or_else(invalid)?;
        rest = tail;
        let decoded = match esc {
            b'a' => 0x07,
            b'b' => 0x08,
            b't' => b'\t',
            b'n' => b'\n',
            b'v' => 0x0b,
            b'f' => 0x0c,
            b'r' => b'\r',
            b'"' => b'"',
            b'\\' => b'\\',
            b'0'..=b'7' => {
                let (digits, tail) = rest.split_at(rest.len().min(2));
                if digits.len() != 2 || !digits.iter().all(|d| (b'0'..=b'7').contains(d)) {
                    return Err(invalid());
                }
                rest = tail;
                let value = [esc, digits[0], digits[1]]
                    .iter()
                    .fold(0u32, |acc, d| acc * 8 + u32::from(d - b'0'));
                u8::try_from(value).map_err(|_| invalid())?
            }
            _ => return Err(invalid()),
        };
        bytes.push(decoded);
    }

    String::from_utf8(bytes).map_err(|_| invalid())
}
