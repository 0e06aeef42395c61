use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::warn;

use bl_core::catalog::ProductId;
use bl_core::ports::SelectionStorePort;

/// Fixed slot name for the persisted comparison selection.
pub const SELECTION_FILE_NAME: &str = "bimalink_comparison.json";

/// File-backed [`SelectionStorePort`].
///
/// The file content is exactly the JSON array of product id strings in
/// insertion order — no envelope, no schema version. A missing file and an
/// unparseable file are both "no prior selection"; only real IO errors
/// surface as `Err`.
pub struct JsonFileSelectionStore {
    path: PathBuf,
}

impl JsonFileSelectionStore {
    /// Store whose slot lives at `data_dir/bimalink_comparison.json`.
    pub fn in_dir(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(SELECTION_FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn dir(&self) -> Option<&Path> {
        self.path.parent()
    }

    async fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(dir) = self.dir() {
            fs::create_dir_all(dir)
                .await
                .with_context(|| format!("create selection store dir failed: {}", dir.display()))?;
        }
        Ok(())
    }

    /// Temp-file-then-rename so the slot is always either the previous list
    /// or the complete new one.
    async fn atomic_write(&self, content: &str) -> Result<()> {
        self.ensure_parent_dir().await?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content)
            .await
            .with_context(|| format!("write temp selection failed: {}", tmp_path.display()))?;

        fs::rename(&tmp_path, &self.path).await.with_context(|| {
            format!(
                "rename temp selection to target failed: {} -> {}",
                tmp_path.display(),
                self.path.display()
            )
        })?;

        Ok(())
    }
}

#[async_trait]
impl SelectionStorePort for JsonFileSelectionStore {
    async fn load(&self) -> Result<Option<Vec<ProductId>>> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("read selection failed: {}", self.path.display()))
            }
        };

        match serde_json::from_str::<Vec<ProductId>>(&content) {
            Ok(ids) => Ok(Some(ids)),
            Err(err) => {
                // Corrupt slot content degrades to "no prior selection".
                warn!(
                    path = %self.path.display(),
                    error = %err,
                    "persisted comparison selection is unreadable, ignoring it"
                );
                Ok(None)
            }
        }
    }

    async fn save(&self, ids: &[ProductId]) -> Result<()> {
        let content = serde_json::to_string(ids).context("serialize selection failed")?;
        self.atomic_write(&content).await
    }
}
