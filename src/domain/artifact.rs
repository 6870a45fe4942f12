//! Artifacts fetched from remote sources.
//!
//! An artifact is the raw body of one successful fetch. It is never mutated
//! after creation; the fingerprint is derived from its full content.

use sha2::{Digest, Sha512};

/// Raw bytes fetched from a source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    bytes: Vec<u8>,
}

impl Artifact {
    /// Wrap fetched bytes
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    /// Borrow the raw content
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Size in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Fingerprint of the full content
    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint::of(&self.bytes)
    }
}

/// Content fingerprint: lowercase hex SHA-512 (128 chars)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Hex length of a fingerprint
    pub const HEX_LEN: usize = 128;

    /// Compute the fingerprint of a byte sequence
    pub fn of(bytes: &[u8]) -> Self {
        let mut hasher = Sha512::new();
        hasher.update(bytes);
        Self(hex::encode(hasher.finalize()))
    }

    /// Get the raw string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq<String> for Fingerprint {
    fn eq(&self, other: &String) -> bool {
        &self.0 == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY_SHA512: &str = "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce\
                                47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e";

    #[test]
    fn test_fingerprint_of_empty_input() {
        let fp = Fingerprint::of(b"");
        assert_eq!(fp.as_str(), EMPTY_SHA512);
    }

    #[test]
    fn test_fingerprint_is_deterministic() {
        let a = Fingerprint::of(b"\x89PNG\r\n\x1a\nweather");
        let b = Fingerprint::of(b"\x89PNG\r\n\x1a\nweather");
        assert_eq!(a, b);
    }

    #[test]
    fn test_fingerprint_is_lowercase_hex() {
        let fp = Fingerprint::of(b"pune");
        assert_eq!(fp.as_str().len(), Fingerprint::HEX_LEN);
        assert!(fp
            .as_str()
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn test_distinct_inputs_do_not_collide() {
        let fingerprints: std::collections::HashSet<Fingerprint> = (0u32..500)
            .map(|i| Fingerprint::of(&i.to_le_bytes()))
            .collect();
        assert_eq!(fingerprints.len(), 500);
    }

    #[test]
    fn test_artifact_fingerprint_matches_bytes() {
        let artifact = Artifact::new(b"image".to_vec());
        assert_eq!(artifact.fingerprint(), Fingerprint::of(b"image"));
        assert_eq!(artifact.len(), 5);
        assert!(!artifact.is_empty());
    }
}
