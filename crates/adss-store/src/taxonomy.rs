use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

const EMBEDDED: &str = include_str!("../data/taxonomy.json");

/// Class hierarchy the store is built from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Taxonomy {
    pub version: String,
    pub classes: Vec<ClassDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassDef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

impl Taxonomy {
    /// The taxonomy shipped with the crate.
    pub fn embedded() -> Result<Self, StoreError> {
        Ok(serde_json::from_str(EMBEDDED)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, StoreError> {
        let contents = std::fs::read_to_string(path).map_err(|source| StoreError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }
}
