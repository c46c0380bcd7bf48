use serde::de::DeserializeOwned;
use std::path::Path;

/// Read a JSON or YAML document. `.yaml`/`.yml` files go through the YAML
/// parser, everything else is treated as JSON.
pub fn read_document<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))?;
    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml" | "yml")
    );
    tracing::debug!(path = %path.display(), is_yaml, "loading document");
    if is_yaml {
        serde_yaml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("invalid YAML in {}: {e}", path.display()))
    } else {
        serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("invalid JSON in {}: {e}", path.display()))
    }
}
