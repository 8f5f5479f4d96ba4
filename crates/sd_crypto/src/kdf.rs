//! Key derivation — Argon2id from a clearance secret plus a per-blob salt.
//!
//! The clearance secret is a label-selected passphrase, not uniform key
//! material, so it goes through a memory-hard KDF before touching the AEAD.
//! The salt is fresh for every sealed blob and travels inside the blob.

use argon2::{Argon2, Params, Version};
use zeroize::ZeroizeOnDrop;

use crate::error::CryptoError;

pub const SALT_LEN: usize = 16;

/// 32-byte sealing key derived from a clearance secret. Zeroized on drop.
#[derive(ZeroizeOnDrop)]
pub struct SealKey(pub [u8; 32]);

/// Argon2id parameters — tuned for interactive (desktop) use.
fn argon2_params() -> Params {
    Params::new(
        64 * 1024, // m_cost: 64 MiB
        3,         // t_cost: 3 iterations
        1,         // p_cost: 1 thread
        Some(32),  // output len
    )
    .expect("Static Argon2 params are always valid")
}

/// Derive the sealing key for one blob from the clearance secret and the
/// blob's salt.
pub fn derive_seal_key(secret: &str, salt: &[u8; SALT_LEN]) -> Result<SealKey, CryptoError> {
    let argon2 = Argon2::new(argon2::Algorithm::Argon2id, Version::V0x13, argon2_params());
    let mut output = [0u8; 32];
    argon2
        .hash_password_into(secret.as_bytes(), salt, &mut output)
        .map_err(|e| CryptoError::KeyDerivation(e.to_string()))?;
    Ok(SealKey(output))
}

/// Generate a fresh random salt for a new blob.
pub fn generate_salt() -> [u8; SALT_LEN] {
    use rand::RngCore;
    let mut salt = [0u8; SALT_LEN];
    rand::rngs::OsRng.fill_bytes(&mut salt);
    salt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_inputs_same_key() {
        let salt = [7u8; SALT_LEN];
        let a = derive_seal_key("dv-secure-key", &salt).unwrap();
        let b = derive_seal_key("dv-secure-key", &salt).unwrap();
        assert_eq!(a.0, b.0);
    }

    #[test]
    fn salt_changes_the_key() {
        let a = derive_seal_key("dv-secure-key", &[1u8; SALT_LEN]).unwrap();
        let b = derive_seal_key("dv-secure-key", &[2u8; SALT_LEN]).unwrap();
        assert_ne!(a.0, b.0);
    }
}
