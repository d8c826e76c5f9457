use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::element::Element;
use crate::geometry::LayoutConfig;

/// Errors that can occur at the persistence boundary.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to serialize layout: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to access layout file: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for persistence operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// A complete layout as written to storage. Full-replace semantics: every
/// save rewrites the whole collection, never a diff.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedLayout {
    pub name: String,
    #[serde(default)]
    pub config: LayoutConfig,
    pub elements: Vec<Element>,
}

/// The persistence boundary. Called only at explicit open/save actions,
/// never after individual edits, so intermediate states are not visible
/// outside the editor.
pub trait LayoutStore {
    /// Load the saved layout, or `None` when nothing has been saved yet.
    fn load(&self) -> StoreResult<Option<SavedLayout>>;

    /// Persist the complete layout, replacing whatever was stored before.
    fn save(&self, layout: &SavedLayout) -> StoreResult<()>;
}

/// Layout storage backed by a single pretty-printed JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LayoutStore for JsonFileStore {
    fn load(&self) -> StoreResult<Option<SavedLayout>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(&self.path)?;
        let layout = serde_json::from_str(&data)?;
        Ok(Some(layout))
    }

    fn save(&self, layout: &SavedLayout) -> StoreResult<()> {
        let data = serde_json::to_string_pretty(layout)?;
        fs::write(&self.path, data)?;
        log::info!(
            "saved layout '{}' ({} elements) to {}",
            layout.name,
            layout.elements.len(),
            self.path.display()
        );
        Ok(())
    }
}
