use std::path::Path;
use wharf_core::GitStatus;

pub fn execute(cwd: &Path) -> anyhow::Result<()> {
    let output = std::process::Command::new("git")
        .args(["status", "--porcelain=v1", "--branch"])
        .current_dir(cwd)
        .output()
        .map_err(|e| anyhow::anyhow!("git not available: {e}"))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!("git status failed: {}", stderr.trim());
    }

    println!("{}", render(&output.stdout)?);
    Ok(())
}

/// Parse raw porcelain output into pretty-printed `GitStatus` JSON.
fn render(porcelain: &[u8]) -> anyhow::Result<String> {
    let text = std::str::from_utf8(porcelain)
        .map_err(|e| anyhow::anyhow!("git status output is not UTF-8: {e}"))?;
    let status = GitStatus::from_porcelain(text)?;
    Ok(serde_json::to_string_pretty(&status)?)
}
