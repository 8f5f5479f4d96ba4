use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProtectError {
    #[error("Unknown clearance level {0:?}")]
    UnknownClearance(String),

    #[error("Nothing to seal — the selected content is empty")]
    EmptyContent,

    #[error("No stored ciphertext under key {0:?}")]
    CiphertextNotFound(String),

    #[error("Decryption failed — wrong clearance secret or corrupted ciphertext")]
    DecryptFailed,

    #[error(transparent)]
    Store(#[from] sd_store::StoreError),

    #[error("Crypto error: {0}")]
    Crypto(#[from] sd_crypto::CryptoError),

    #[error("Document host error: {0}")]
    Doc(#[from] sd_doc::DocError),

    #[error("Malformed envelope: {0}")]
    Envelope(#[from] serde_json::Error),
}
