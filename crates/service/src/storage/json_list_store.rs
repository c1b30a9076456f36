use std::{path::PathBuf, sync::Arc};
use tokio::{fs, sync::RwLock};
use tracing::warn;

use crate::errors::ServiceError;

/// Generic JSON file-backed append-only list store.
///
/// Persists a `Vec<T>` to a single pretty-printed JSON array file and provides
/// append/read helpers. Records are never updated or removed; the collection
/// only grows. Intended for small submission logs where a database is overkill.
#[derive(Clone)]
pub struct JsonListStore<T> {
    inner: Arc<RwLock<Vec<T>>>,
    file_path: PathBuf,
}

impl<T> JsonListStore<T>
where
    T: serde::Serialize + serde::de::DeserializeOwned + Clone + PartialEq,
{
    /// Initialize the store from a path. Creates the file with an empty array
    /// if missing. A backing file that fails to parse is treated as an empty
    /// collection; the failure is logged, never surfaced to the caller.
    pub async fn new<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).await.ok();
        }

        let items: Vec<T> = match fs::read(&file_path).await {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(items) => items,
                Err(e) => {
                    warn!(file = %file_path.display(), error = %e, "backing file unparseable; treating collection as empty");
                    Vec::new()
                }
            },
            Err(_) => {
                let empty: Vec<T> = Vec::new();
                fs::write(&file_path, serde_json::to_vec_pretty(&empty).map_err(|e| ServiceError::Storage(e.to_string()))?)
                    .await
                    .map_err(|e| ServiceError::Storage(e.to_string()))?;
                empty
            }
        };

        Ok(Arc::new(Self { inner: Arc::new(RwLock::new(items)), file_path }))
    }

    /// Rewrite the backing file with the full collection contents. The write
    /// goes to a sibling temp file which is then renamed over the target, so
    /// the file on disk is always either the old or the new full contents.
    async fn save(&self, items: &[T]) -> Result<(), ServiceError> {
        let data = serde_json::to_vec_pretty(items).map_err(|e| ServiceError::Storage(e.to_string()))?;
        let tmp = self.file_path.with_extension("tmp");
        fs::write(&tmp, data).await.map_err(|e| ServiceError::Storage(e.to_string()))?;
        fs::rename(&tmp, &self.file_path).await.map_err(|e| ServiceError::Storage(e.to_string()))?;
        Ok(())
    }

    /// Snapshot of the full collection in insertion order.
    pub async fn list(&self) -> Vec<T> {
        let items = self.inner.read().await;
        items.clone()
    }

    /// Append one item and persist. The write lock is held across the rewrite
    /// so concurrent appends to the same collection cannot lose an entry.
    pub async fn push(&self, item: T) -> Result<(), ServiceError> {
        let mut items = self.inner.write().await;
        items.push(item);
        self.save(&items).await
    }

    /// Append one item unless an equal one is already present. A duplicate is
    /// a no-op reported as success, and the backing file is left untouched.
    pub async fn push_unique(&self, item: T) -> Result<(), ServiceError> {
        let mut items = self.inner.write().await;
        if items.contains(&item) {
            return Ok(());
        }
        items.push(item);
        self.save(&items).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tmp_path(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("json_list_store_{}_{}.json", tag, uuid::Uuid::new_v4()))
    }

    #[tokio::test]
    async fn push_list_and_reload_persists() -> Result<(), anyhow::Error> {
        let tmp = tmp_path("roundtrip");
        let store = JsonListStore::<String>::new(&tmp).await?;

        // initially empty
        assert_eq!(store.list().await.len(), 0);

        store.push("first".into()).await?;
        store.push("second".into()).await?;
        assert_eq!(store.list().await, vec!["first".to_string(), "second".to_string()]);

        // reload from disk, order preserved
        let reloaded = JsonListStore::<String>::new(&tmp).await?;
        assert_eq!(reloaded.list().await, vec!["first".to_string(), "second".to_string()]);

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn push_unique_is_idempotent() -> Result<(), anyhow::Error> {
        let tmp = tmp_path("unique");
        let store = JsonListStore::<String>::new(&tmp).await?;

        store.push_unique("a@example.com".into()).await?;
        store.push_unique("a@example.com".into()).await?;
        store.push_unique("b@example.com".into()).await?;
        assert_eq!(store.list().await, vec!["a@example.com".to_string(), "b@example.com".to_string()]);

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn unparseable_file_degrades_to_empty() -> Result<(), anyhow::Error> {
        let tmp = tmp_path("corrupt");
        tokio::fs::write(&tmp, b"{ not json ]").await?;

        let store = JsonListStore::<String>::new(&tmp).await?;
        assert_eq!(store.list().await.len(), 0);

        // the store stays usable; the next append rewrites a valid file
        store.push("fresh".into()).await?;
        let reloaded = JsonListStore::<String>::new(&tmp).await?;
        assert_eq!(reloaded.list().await, vec!["fresh".to_string()]);

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn backing_file_is_pretty_printed_array() -> Result<(), anyhow::Error> {
        let tmp = tmp_path("pretty");
        let store = JsonListStore::<String>::new(&tmp).await?;
        store.push("x".into()).await?;

        let contents = tokio::fs::read_to_string(&tmp).await?;
        assert!(contents.contains('\n'), "expected pretty-printed output");
        let parsed: Vec<String> = serde_json::from_str(&contents)?;
        assert_eq!(parsed, vec!["x".to_string()]);

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }
}
