//! sd_doc — Sealdoc document content model
//!
//! # Module layout
//! - `envelope` — `ContentEnvelope` / `Table`, the serialized {text, tables}
//!   structure exchanged between the sealing workflow and the document
//! - `document` — `DocumentHost`, the seam over the host object model
//!   (selection/body access, custom-XML-part CRUD)
//! - `memory`   — in-memory `DocumentHost` used by tests and the CLI
//! - `error`    — unified error type

pub mod document;
pub mod envelope;
pub mod error;
pub mod memory;

pub use document::{DocumentHost, PartId, XmlPart};
pub use envelope::{ContentEnvelope, Table};
pub use error::DocError;
pub use memory::MemoryDocument;
