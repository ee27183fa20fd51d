//! JSON file holding the day's block collection.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::data_dir;
use crate::error::{Result, ValidationError};
use crate::schedule::Block;

/// The block collection on disk. Writes always replace the whole file.
#[derive(Debug, Clone)]
pub struct BlockFile {
    path: PathBuf,
}

impl BlockFile {
    /// `blocks.json` in the data directory.
    pub fn open_default() -> Result<Self> {
        Ok(Self::at(data_dir()?.join("blocks.json")))
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every block. A missing file is an empty day.
    pub fn load(&self) -> Result<Vec<Block>> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(Vec::new()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Replace the stored collection with `blocks`.
    pub fn save(&self, blocks: &[Block]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(blocks)?;
        std::fs::write(&self.path, content)?;
        debug!(path = %self.path.display(), count = blocks.len(), "blocks saved");
        Ok(())
    }

    /// Load, apply `edit` to the block with `id`, and save.
    pub fn update<F>(&self, id: &str, edit: F) -> Result<Block>
    where
        F: FnOnce(&mut Block),
    {
        let mut blocks = self.load()?;
        let block = blocks
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| ValidationError::BlockNotFound(id.to_string()))?;
        edit(block);
        let updated = block.clone();
        self.save(&blocks)?;
        Ok(updated)
    }

    /// Remove the block with `id`.
    pub fn remove(&self, id: &str) -> Result<Block> {
        let mut blocks = self.load()?;
        let index = blocks
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| ValidationError::BlockNotFound(id.to_string()))?;
        let removed = blocks.remove(index);
        self.save(&blocks)?;
        Ok(removed)
    }
}
