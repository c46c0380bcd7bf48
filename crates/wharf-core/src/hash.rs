use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::canon::canonical_json_bytes;
use crate::error::HashError;

/// Compute SHA-256 hash of bytes, returning lowercase hex string.
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// Fingerprint a build configuration at a source revision.
///
/// The configuration is canonicalized to JSON and the revision string is
/// appended with no separator before hashing. Environment variables are
/// not part of the input: workspace-provided env differs per workspace and
/// would make identical configs hash differently.
pub fn config_hash<B: Serialize + ?Sized>(build: &B, revision: &str) -> Result<String, HashError> {
    let mut data = canonical_json_bytes(build)?;
    data.extend_from_slice(revision.as_bytes());
    let hash = sha256_hex(&data);
    tracing::debug!(%revision, %hash, "computed config hash");
    Ok(hash)
}
