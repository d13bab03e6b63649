use crate::error::{ModelError, ModelResult};
use crate::packages::Packages;
use crate::types::{ClassDef, RootElement};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A model as stored on disk: a namespace, a version label and its elements
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDocument {
    #[serde(default)]
    pub namespace: String,

    #[serde(default)]
    pub version: String,

    #[serde(default)]
    pub elements: Vec<RootElement>,
}

impl ModelDocument {
    pub fn from_json(source: &str) -> ModelResult<Self> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> ModelResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ModelError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&source)
    }

    pub fn packages(&self) -> Packages {
        Packages::new(self.namespace.as_str())
    }

    pub fn classes(&self) -> impl Iterator<Item = &ClassDef> {
        self.elements.iter().filter_map(RootElement::as_class)
    }
}
