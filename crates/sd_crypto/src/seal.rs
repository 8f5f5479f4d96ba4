//! Sealed-blob format and AEAD.
//!
//! Uses XChaCha20-Poly1305 (192-bit nonce). Key size: 32 bytes, derived per
//! blob (see `kdf`). Nonce: 24 bytes (random). Tag: 16 bytes.
//!
//! Textual format — standard base64 of:
//!   [ magic "SDSEAL1\0" (8 bytes) | salt (16) | nonce (24) | ciphertext + tag ]
//!
//! The blob is self-describing: everything needed to re-derive the key from
//! the clearance secret travels with the ciphertext, and the magic prefix
//! lets a future format revision be detected instead of mis-decrypted.

use base64::{engine::general_purpose, Engine as _};
use chacha20poly1305::{
    aead::{Aead, AeadCore, KeyInit, OsRng as AeadOsRng},
    XChaCha20Poly1305,
};
use zeroize::Zeroizing;

use crate::error::CryptoError;
use crate::kdf::{derive_seal_key, generate_salt, SALT_LEN};

pub const SEAL_MAGIC: &[u8; 8] = b"SDSEAL1\0";
const NONCE_LEN: usize = 24;
const HEADER_LEN: usize = SEAL_MAGIC.len() + SALT_LEN + NONCE_LEN;

/// Seal `plaintext` under a clearance secret, producing the textual blob.
pub fn seal(secret: &str, plaintext: &[u8]) -> Result<String, CryptoError> {
    let salt = generate_salt();
    let key = derive_seal_key(secret, &salt)?;

    let cipher = XChaCha20Poly1305::new_from_slice(&key.0).map_err(|_| CryptoError::Seal)?;
    let nonce = XChaCha20Poly1305::generate_nonce(&mut AeadOsRng);
    let ciphertext = cipher
        .encrypt(&nonce, plaintext)
        .map_err(|_| CryptoError::Seal)?;

    let mut out = Vec::with_capacity(HEADER_LEN + ciphertext.len());
    out.extend_from_slice(SEAL_MAGIC);
    out.extend_from_slice(&salt);
    out.extend_from_slice(&nonce);
    out.extend_from_slice(&ciphertext);
    Ok(general_purpose::STANDARD.encode(out))
}

/// Open a textual blob with the clearance secret.
///
/// Structural problems (bad base64, wrong magic, truncation) report as
/// [`CryptoError::Format`]/[`CryptoError::Base64Decode`]; an intact blob that
/// fails authentication reports as [`CryptoError::Open`].
pub fn open(secret: &str, blob: &str) -> Result<Zeroizing<Vec<u8>>, CryptoError> {
    let data = general_purpose::STANDARD.decode(blob.trim())?;
    if data.len() < HEADER_LEN + 16 {
        return Err(CryptoError::Format("blob truncated"));
    }
    if &data[..SEAL_MAGIC.len()] != SEAL_MAGIC {
        return Err(CryptoError::Format("unrecognised magic"));
    }

    let salt: [u8; SALT_LEN] = data[SEAL_MAGIC.len()..SEAL_MAGIC.len() + SALT_LEN]
        .try_into()
        .expect("slice length checked above");
    let nonce = chacha20poly1305::XNonce::from_slice(
        &data[SEAL_MAGIC.len() + SALT_LEN..HEADER_LEN],
    );
    let ciphertext = &data[HEADER_LEN..];

    let key = derive_seal_key(secret, &salt)?;
    let cipher = XChaCha20Poly1305::new_from_slice(&key.0).map_err(|_| CryptoError::Open)?;
    let plaintext = cipher
        .decrypt(nonce, ciphertext)
        .map_err(|_| CryptoError::Open)?;
    Ok(Zeroizing::new(plaintext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seal_open_roundtrip() {
        let blob = seal("dv-secure-key", b"classified paragraph").unwrap();
        let plain = open("dv-secure-key", &blob).unwrap();
        assert_eq!(plain.as_slice(), b"classified paragraph");
    }

    #[test]
    fn roundtrip_empty_plaintext() {
        let blob = seal("sc-secure-key", b"").unwrap();
        let plain = open("sc-secure-key", &blob).unwrap();
        assert!(plain.is_empty());
    }

    #[test]
    fn wrong_secret_is_an_open_error() {
        let blob = seal("dv-secure-key", b"payload").unwrap();
        assert!(matches!(
            open("sc-secure-key", &blob),
            Err(CryptoError::Open)
        ));
    }

    #[test]
    fn tampered_blob_is_rejected() {
        let blob = seal("dv-secure-key", b"payload").unwrap();
        let mut raw = general_purpose::STANDARD.decode(&blob).unwrap();
        let last = raw.len() - 1;
        raw[last] ^= 0x01;
        let tampered = general_purpose::STANDARD.encode(raw);
        assert!(matches!(
            open("dv-secure-key", &tampered),
            Err(CryptoError::Open)
        ));
    }

    #[test]
    fn garbage_is_a_format_error_not_a_panic() {
        assert!(matches!(
            open("dv-secure-key", "not base64 at all!"),
            Err(CryptoError::Base64Decode(_))
        ));
        // Valid base64, but far too short to be a blob.
        assert!(matches!(
            open("dv-secure-key", "AAAA"),
            Err(CryptoError::Format(_))
        ));
        // Right length, wrong magic.
        let bogus = general_purpose::STANDARD.encode([0u8; 80]);
        assert!(matches!(
            open("dv-secure-key", &bogus),
            Err(CryptoError::Format(_))
        ));
    }

    #[test]
    fn fresh_salt_and_nonce_every_seal() {
        let a = seal("dv-secure-key", b"same input").unwrap();
        let b = seal("dv-secure-key", b"same input").unwrap();
        assert_ne!(a, b);
    }
}
