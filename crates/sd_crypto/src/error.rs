use thiserror::Error;

#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("Key derivation failed: {0}")]
    KeyDerivation(String),

    #[error("Sealing failed")]
    Seal,

    #[error("Opening failed (authentication tag mismatch — wrong secret or tampered blob)")]
    Open,

    #[error("Malformed sealed blob: {0}")]
    Format(&'static str),

    #[error("Base64 decode error: {0}")]
    Base64Decode(#[from] base64::DecodeError),
}
