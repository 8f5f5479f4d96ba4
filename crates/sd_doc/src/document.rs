//! The seam over the host document object model.
//!
//! Everything above this trait treats the document the way the host API
//! presents it: a current selection, a whole body, and a collection of custom
//! XML parts addressed by namespace. Host-backed implementations are expected
//! to wrap each call in a host transaction that batches property loads,
//! commits them once, and releases host resources before returning — the
//! trait itself carries no transaction state.

use serde::{Deserialize, Serialize};

use crate::envelope::{ContentEnvelope, Table};
use crate::error::DocError;

/// Host-assigned identity of a custom XML part, used for targeted deletion.
pub type PartId = u64;

/// One custom XML part as handed back by the host: its id plus the raw
/// fragment text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XmlPart {
    pub id: PartId,
    pub xml: String,
}

/// Read/write access to a host document.
///
/// Only ever consumed by the store and workflow crates — the host object
/// model is used, never redefined.
pub trait DocumentHost {
    /// Content of the current selection.
    fn selection(&self) -> Result<ContentEnvelope, DocError>;

    /// Replace the current selection with `content`.
    fn replace_selection(&mut self, content: ContentEnvelope) -> Result<(), DocError>;

    /// Content of the whole document body.
    fn body(&self) -> Result<ContentEnvelope, DocError>;

    /// Clear the body and write `content` in its place.
    fn replace_body(&mut self, content: ContentEnvelope) -> Result<(), DocError>;

    /// Append a paragraph at the end of the body.
    fn append_paragraph(&mut self, text: &str) -> Result<(), DocError>;

    /// Append a table at the end of the body.
    fn append_table(&mut self, table: Table) -> Result<(), DocError>;

    /// Add a custom XML part; the host assigns and returns its id.
    /// Size or XML-validity rejections surface as [`DocError::HostRejected`].
    fn add_xml_part(&mut self, xml: &str) -> Result<PartId, DocError>;

    /// All custom XML parts whose root element lives in `namespace`.
    fn xml_parts_in_namespace(&self, namespace: &str) -> Result<Vec<XmlPart>, DocError>;

    /// Delete one custom XML part in its entirety.
    fn delete_xml_part(&mut self, id: PartId) -> Result<(), DocError>;
}
