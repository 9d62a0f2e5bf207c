//! Collection-identifier persistence.
//!
//! The writer creates (or reuses) a collection in the backing store on first
//! use and writes its identifier to a file on disk so subsequent runs reuse
//! it instead of creating a new one each time. This is the one piece of
//! mutable process-external state the job touches, and it is written at most
//! once per run.

use std::path::Path;

use tracing::info;

use crate::error::Result;

/// Read `path` if it exists and is non-empty; otherwise call `create` to
/// obtain a fresh collection id and persist it to `path` before returning it.
pub async fn ensure<F, Fut>(path: &Path, create: F) -> Result<String>
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future<Output = Result<String>>,
{
    if let Ok(existing) = tokio::fs::read_to_string(path).await {
        let trimmed = existing.trim();
        if !trimmed.is_empty() {
            return Ok(trimmed.to_string());
        }
    }

    let id = create().await?;
    if let Some(parent) = path.parent() {
        let _ = tokio::fs::create_dir_all(parent).await;
    }
    tokio::fs::write(path, &id)
        .await
        .map_err(|e| crate::error::StoreError::Other(anyhow::anyhow!("writing collection id file: {e}")))?;
    info!(collection_id = %id, path = %path.display(), "created and persisted new collection id");
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn creates_and_persists_on_first_run() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("collection_id");

        let id = ensure(&path, || async { Ok("new-collection-id".to_string()) }).await.unwrap();
        assert_eq!(id, "new-collection-id");
        assert_eq!(tokio::fs::read_to_string(&path).await.unwrap(), "new-collection-id");
    }

    #[tokio::test]
    async fn reuses_existing_file_without_calling_create() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("collection_id");
        tokio::fs::write(&path, "already-there").await.unwrap();

        let id = ensure(&path, || async {
            panic!("create() must not run when the file already has an id");
        })
        .await
        .unwrap();
        assert_eq!(id, "already-there");
    }
}
