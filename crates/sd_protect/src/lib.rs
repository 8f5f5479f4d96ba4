//! sd_protect — clearance keys and the seal/open workflow
//!
//! One parameterized workflow covers all the operations the UI surface
//! exposes: seal the selection or the whole body, inline or out-of-line
//! through the XML store (leaving a placeholder token), and the inverse.
//! Every call is an independent read-transform-write cycle; no state spans
//! calls beyond the document's own persisted content.
//!
//! # Module layout
//! - `config`   — `ClearanceKeys`, the level→secret table
//! - `workflow` — encrypt/decrypt over Scope × Sink/Source, plus key listing
//! - `error`    — unified error type

pub mod config;
pub mod error;
pub mod workflow;

pub use config::ClearanceKeys;
pub use error::ProtectError;
pub use workflow::{
    decrypt, delete_key, encrypt, insert_sample_content, list_keys, Scope, Sink, Source,
};
