use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::Result;

/// Cache of raw directory listings, keyed by account and directory path
///
/// Entries never expire on their own; callers remove or clear them when they
/// know a listing went stale.
#[async_trait]
pub trait DirectoryCache<E>: Send + Sync
where
    E: Clone + Send + Sync + 'static,
{
    /// Get the cached listing for a directory
    async fn get(&self, account: &str, path: &str) -> Result<Option<Vec<E>>>;

    /// Store the full listing for a directory
    async fn set(&self, account: &str, path: &str, entries: Vec<E>) -> Result<()>;

    /// Check if a directory has a cached listing
    async fn contains(&self, account: &str, path: &str) -> bool;

    /// Drop the cached listing for a directory
    async fn remove(&self, account: &str, path: &str) -> Result<()>;

    /// Drop every cached listing
    async fn clear(&self) -> Result<()>;
}

fn cache_key(account: &str, path: &str) -> String {
    format!("{}:{}", account, path)
}

/// In-memory listing cache
pub struct MemoryCache<E> {
    store: Arc<RwLock<HashMap<String, Vec<E>>>>,
}

impl<E> MemoryCache<E> {
    pub fn new() -> Self {
        Self {
            store: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl<E> Default for MemoryCache<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E> DirectoryCache<E> for MemoryCache<E>
where
    E: Clone + Send + Sync + 'static,
{
    async fn get(&self, account: &str, path: &str) -> Result<Option<Vec<E>>> {
        let store = self.store.read().await;
        Ok(store.get(&cache_key(account, path)).cloned())
    }

    async fn set(&self, account: &str, path: &str, entries: Vec<E>) -> Result<()> {
        let mut store = self.store.write().await;
        store.insert(cache_key(account, path), entries);
        Ok(())
    }

    async fn contains(&self, account: &str, path: &str) -> bool {
        let store = self.store.read().await;
        store.contains_key(&cache_key(account, path))
    }

    async fn remove(&self, account: &str, path: &str) -> Result<()> {
        let mut store = self.store.write().await;
        store.remove(&cache_key(account, path));
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        let mut store = self.store.write().await;
        store.clear();
        Ok(())
    }
}

/// No-op cache that doesn't cache anything
pub struct NoCache;

#[async_trait]
impl<E> DirectoryCache<E> for NoCache
where
    E: Clone + Send + Sync + 'static,
{
    async fn get(&self, _account: &str, _path: &str) -> Result<Option<Vec<E>>> {
        Ok(None)
    }

    async fn set(&self, _account: &str, _path: &str, _entries: Vec<E>) -> Result<()> {
        Ok(())
    }

    async fn contains(&self, _account: &str, _path: &str) -> bool {
        false
    }

    async fn remove(&self, _account: &str, _path: &str) -> Result<()> {
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        Ok(())
    }
}
