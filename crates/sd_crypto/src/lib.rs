//! sd_crypto — Sealdoc sealing primitives
//!
//! # Design principles
//! - NO custom crypto; all primitives come from audited Rust crates.
//! - Zeroize all secret material on drop.
//! - Ciphertext is authenticated: a wrong secret is detected by the AEAD tag,
//!   never guessed from the shape of the plaintext.
//!
//! # Module layout
//! - `seal`  — sealed-blob textual format + XChaCha20-Poly1305 encrypt/decrypt
//! - `kdf`   — Argon2id derivation of the sealing key from a clearance secret
//! - `hash`  — SHA-256 advisory digests (debug logging only)
//! - `error` — unified error type

pub mod error;
pub mod hash;
pub mod kdf;
pub mod seal;

pub use error::CryptoError;
pub use seal::{open, seal};
