//! In-memory document host.
//!
//! Stands in for the real host in tests and in the CLI, which persists the
//! whole document as a JSON file. The selection is modeled as its own
//! content region, which is all the sealing workflows ever touch.

use serde::{Deserialize, Serialize};

use crate::document::{DocumentHost, PartId, XmlPart};
use crate::envelope::{ContentEnvelope, Table};
use crate::error::DocError;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryDocument {
    body: ContentEnvelope,
    selection: ContentEnvelope,
    parts: Vec<XmlPart>,
    next_part_id: PartId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    part_size_limit: Option<usize>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the current selection, as a user highlighting content would.
    pub fn select(&mut self, content: ContentEnvelope) {
        self.selection = content;
    }

    /// Raw view of every stored part, regardless of namespace.
    pub fn parts(&self) -> &[XmlPart] {
        &self.parts
    }

    /// Cap the size of accepted XML parts, in bytes. Real hosts reject
    /// oversized parts; this lets callers exercise that path.
    pub fn set_part_size_limit(&mut self, limit: Option<usize>) {
        self.part_size_limit = limit;
    }
}

impl DocumentHost for MemoryDocument {
    fn selection(&self) -> Result<ContentEnvelope, DocError> {
        Ok(self.selection.clone())
    }

    fn replace_selection(&mut self, content: ContentEnvelope) -> Result<(), DocError> {
        self.selection = content;
        Ok(())
    }

    fn body(&self) -> Result<ContentEnvelope, DocError> {
        Ok(self.body.clone())
    }

    fn replace_body(&mut self, content: ContentEnvelope) -> Result<(), DocError> {
        self.body = content;
        Ok(())
    }

    fn append_paragraph(&mut self, text: &str) -> Result<(), DocError> {
        if !self.body.text.is_empty() {
            self.body.text.push('\n');
        }
        self.body.text.push_str(text);
        Ok(())
    }

    fn append_table(&mut self, table: Table) -> Result<(), DocError> {
        self.body.tables.push(table);
        Ok(())
    }

    fn add_xml_part(&mut self, xml: &str) -> Result<PartId, DocError> {
        if let Some(limit) = self.part_size_limit {
            if xml.len() > limit {
                return Err(DocError::HostRejected(format!(
                    "part of {} bytes exceeds the {limit}-byte limit",
                    xml.len()
                )));
            }
        }
        let id = self.next_part_id;
        self.next_part_id += 1;
        self.parts.push(XmlPart {
            id,
            xml: xml.to_string(),
        });
        Ok(id)
    }

    fn xml_parts_in_namespace(&self, namespace: &str) -> Result<Vec<XmlPart>, DocError> {
        // The host indexes parts by root namespace; a declaration match is
        // enough for fragments this store writes itself.
        let needle = format!("xmlns=\"{namespace}\"");
        Ok(self
            .parts
            .iter()
            .filter(|part| part.xml.contains(&needle))
            .cloned()
            .collect())
    }

    fn delete_xml_part(&mut self, id: PartId) -> Result<(), DocError> {
        let before = self.parts.len();
        self.parts.retain(|part| part.id != id);
        if self.parts.len() == before {
            return Err(DocError::UnknownPart(id));
        }
        Ok(())
    }
}
