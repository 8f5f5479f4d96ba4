//! SHA-256 advisory digests.
//!
//! Logged at debug level around seal/open so operators can compare what went
//! in with what came out. Carries no integrity duty — the AEAD tag does.

use sha2::{Digest, Sha256};

/// Hex digest of arbitrary content.
pub fn content_digest(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_is_stable_hex() {
        let d = content_digest(b"hello");
        assert_eq!(d.len(), 64);
        assert_eq!(d, content_digest(b"hello"));
        assert_ne!(d, content_digest(b"hello!"));
    }
}
