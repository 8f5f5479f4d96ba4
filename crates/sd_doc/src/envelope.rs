//! Serialized document content — the {text, tables} envelope.
//!
//! The envelope is what actually gets sealed: plain text plus every table in
//! the covered region, captured as row-major cell grids. Round-tripping
//! through JSON must reproduce text and every cell exactly, including row and
//! column counts.

use serde::{Deserialize, Serialize};

use crate::error::DocError;

/// Row-major grid of cell strings. Always rectangular — construction rejects
/// ragged input, and serde goes through the same check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<String>>", into = "Vec<Vec<String>>")]
pub struct Table {
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Build a table from row-major cells. Fails if any row differs in width
    /// from the first.
    pub fn new(rows: Vec<Vec<String>>) -> Result<Self, DocError> {
        if let Some(first) = rows.first() {
            let expected = first.len();
            for (i, row) in rows.iter().enumerate().skip(1) {
                if row.len() != expected {
                    return Err(DocError::RaggedTable {
                        row: i,
                        got: row.len(),
                        expected,
                    });
                }
            }
        }
        Ok(Self { rows })
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.rows.first().map(Vec::len).unwrap_or(0)
    }

    /// True when the table carries no cells at all.
    pub fn is_empty(&self) -> bool {
        self.row_count() == 0 || self.column_count() == 0
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(String::as_str)
    }
}

impl TryFrom<Vec<Vec<String>>> for Table {
    type Error = DocError;

    fn try_from(rows: Vec<Vec<String>>) -> Result<Self, Self::Error> {
        Table::new(rows)
    }
}

impl From<Table> for Vec<Vec<String>> {
    fn from(table: Table) -> Self {
        table.rows
    }
}

/// The {text, tables} structure exchanged between the sealing workflow and
/// the document. Produced before encryption, consumed after decryption.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentEnvelope {
    pub text: String,
    #[serde(default)]
    pub tables: Vec<Table>,
}

impl ContentEnvelope {
    /// Envelope holding only text, no tables.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tables: Vec::new(),
        }
    }

    /// True when there is nothing worth sealing: no visible text and no
    /// table cells.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty() && self.tables.iter().all(Table::is_empty)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn json_roundtrip_preserves_text_and_tables() {
        let envelope = ContentEnvelope {
            text: "Summary line\nwith a second paragraph".to_string(),
            tables: vec![
                Table::new(grid(&[&["Name", "Age"], &["Alice", "30"], &["Bob", "25"]])).unwrap(),
            ],
        };
        let restored = ContentEnvelope::from_json(&envelope.to_json().unwrap()).unwrap();
        assert_eq!(restored, envelope);
        assert_eq!(restored.tables[0].row_count(), 3);
        assert_eq!(restored.tables[0].column_count(), 2);
        assert_eq!(restored.tables[0].cell(1, 0), Some("Alice"));
    }

    #[test]
    fn roundtrip_with_no_tables() {
        let envelope = ContentEnvelope::plain("just text");
        let restored = ContentEnvelope::from_json(&envelope.to_json().unwrap()).unwrap();
        assert_eq!(restored, envelope);
        assert!(restored.tables.is_empty());
    }

    #[test]
    fn roundtrip_single_cell_table() {
        let envelope = ContentEnvelope {
            text: String::new(),
            tables: vec![Table::new(grid(&[&["only"]])).unwrap()],
        };
        let restored = ContentEnvelope::from_json(&envelope.to_json().unwrap()).unwrap();
        assert_eq!(restored.tables[0].row_count(), 1);
        assert_eq!(restored.tables[0].column_count(), 1);
        assert_eq!(restored.tables[0].cell(0, 0), Some("only"));
    }

    #[test]
    fn ragged_rows_rejected() {
        let err = Table::new(grid(&[&["a", "b"], &["c"]])).unwrap_err();
        assert!(matches!(
            err,
            DocError::RaggedTable {
                row: 1,
                got: 1,
                expected: 2
            }
        ));
    }

    #[test]
    fn ragged_rows_rejected_through_serde_too() {
        let json = r#"{"text":"","tables":[[["a","b"],["c"]]]}"#;
        assert!(ContentEnvelope::from_json(json).is_err());
    }

    #[test]
    fn empty_envelope_detection() {
        assert!(ContentEnvelope::plain("   \n ").is_empty());
        assert!(!ContentEnvelope::plain("x").is_empty());
        let with_table = ContentEnvelope {
            text: String::new(),
            tables: vec![Table::new(grid(&[&["cell"]])).unwrap()],
        };
        assert!(!with_table.is_empty());
    }
}
