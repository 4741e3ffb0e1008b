//! SHA-256 digests for fetched content.

use sha2::{Digest as _, Sha256};

/// A SHA-256 hex digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digest(String);

impl Digest {
    /// Compute the digest of the given bytes.
    pub fn compute(data: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(data);
        Digest(hex_encode(&hasher.finalize()))
    }

    /// Wrap an expected digest, normalizing to lowercase hex.
    pub fn expected(hex: &str) -> Self {
        Digest(hex.to_ascii_lowercase())
    }

    /// The lowercase hex string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check the given bytes against this digest.
    pub fn matches(&self, data: &[u8]) -> bool {
        Digest::compute(data) == *self
    }
}

impl std::fmt::Display for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
