use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Document host error: {0}")]
    Doc(#[from] sd_doc::DocError),

    #[error("Malformed stored fragment: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Invalid key {0:?} — keys must be valid XML element names")]
    InvalidKey(String),

    #[error("Key {0:?} is already stored — delete it first, or replace it")]
    DuplicateKey(String),
}
