//! Clearance key table.
//!
//! An explicit configuration object mapping clearance-level labels to the
//! secrets that seal content at that level. Callers own provisioning —
//! loading from a config file, a keyring, whatever the deployment uses; the
//! table itself never reaches out anywhere.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClearanceKeys {
    levels: BTreeMap<String, String>,
}

impl ClearanceKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in demo table with the stock clearance labels. For
    /// experimentation only — these secrets are public by definition.
    pub fn demo() -> Self {
        tracing::warn!("built-in demo clearance keys in use");
        Self::new()
            .with_level("dv", "dv-secure-key")
            .with_level("sc", "sc-secure-key")
            .with_level("official", "official-secure-key")
    }

    pub fn with_level(mut self, level: impl Into<String>, secret: impl Into<String>) -> Self {
        self.insert(level, secret);
        self
    }

    pub fn insert(&mut self, level: impl Into<String>, secret: impl Into<String>) {
        self.levels.insert(level.into(), secret.into());
    }

    /// Secret for a level, or `None` for an unknown label.
    pub fn secret(&self, level: &str) -> Option<&str> {
        self.levels.get(level).map(String::as_str)
    }

    pub fn levels(&self) -> impl Iterator<Item = &str> {
        self.levels.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

// Secrets stay out of Debug output.
impl fmt::Debug for ClearanceKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClearanceKeys")
            .field("levels", &self.levels.keys().collect::<Vec<_>>())
            .finish()
    }
}
