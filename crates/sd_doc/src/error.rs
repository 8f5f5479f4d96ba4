use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocError {
    #[error("Host rejected the operation: {0}")]
    HostRejected(String),

    #[error("Ragged table: row {row} has {got} cells, expected {expected}")]
    RaggedTable {
        row: usize,
        got: usize,
        expected: usize,
    },

    #[error("No custom XML part with id {0}")]
    UnknownPart(u64),
}
