//! Knowledge store: per-user notes text, memory first, then disk.

use async_trait::async_trait;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info, instrument, warn};

/// Durable backing for knowledge text, keyed by user id.
#[async_trait]
pub trait KnowledgePersistence: Send + Sync {
    /// Returns the stored text, `Ok(None)` when the user has nothing stored.
    async fn read(&self, user_id: i64) -> io::Result<Option<String>>;
    /// Replaces the stored text for the user.
    async fn write(&self, user_id: i64, text: &str) -> io::Result<()>;
}

/// One UTF-8 `<user_id>.txt` file per user under a fixed directory.
#[derive(Debug, Clone)]
pub struct FileKnowledgePersistence {
    dir: PathBuf,
}

impl FileKnowledgePersistence {
    /// Uses `dir` as the knowledge-base directory, creating it if missing.
    pub fn new(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File that holds the given user's text.
    pub fn path_for(&self, user_id: i64) -> PathBuf {
        self.dir.join(format!("{}.txt", user_id))
    }
}

#[async_trait]
impl KnowledgePersistence for FileKnowledgePersistence {
    async fn read(&self, user_id: i64) -> io::Result<Option<String>> {
        match tokio::fs::read_to_string(self.path_for(user_id)).await {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn write(&self, user_id: i64, text: &str) -> io::Result<()> {
        tokio::fs::create_dir_all(&self.dir).await?;
        tokio::fs::write(self.path_for(user_id), text).await
    }
}

/// Per-user notes text. Memory is authoritative once populated; disk is the fallback and the
/// durable copy. Disk errors never reach the caller: reads degrade to "absent", writes are logged.
///
/// No eviction and no per-user locking: concurrent writers for one user are last-writer-wins.
#[derive(Clone)]
pub struct KnowledgeStore {
    cache: Arc<RwLock<HashMap<i64, String>>>,
    persistence: Arc<dyn KnowledgePersistence>,
}

impl KnowledgeStore {
    pub fn new(persistence: Arc<dyn KnowledgePersistence>) -> Self {
        Self {
            cache: Arc::new(RwLock::new(HashMap::new())),
            persistence,
        }
    }

    /// Store backed by `<dir>/<user_id>.txt` files.
    pub fn with_dir(dir: impl Into<PathBuf>) -> io::Result<Self> {
        Ok(Self::new(Arc::new(FileKnowledgePersistence::new(dir)?)))
    }

    /// Returns the user's notes: memory first, then disk (populating memory on a disk hit).
    /// A failed disk read is logged and reported as absent.
    #[instrument(skip(self))]
    pub async fn get_context(&self, user_id: i64) -> Option<String> {
        if let Some(text) = self.cache.read().await.get(&user_id) {
            debug!(user_id, len = text.len(), "knowledge cache hit");
            return Some(text.clone());
        }

        match self.persistence.read(user_id).await {
            Ok(Some(text)) => {
                info!(user_id, len = text.len(), "knowledge loaded from disk");
                self.cache.write().await.insert(user_id, text.clone());
                Some(text)
            }
            Ok(None) => None,
            Err(e) => {
                warn!(user_id, error = %e, "Failed to read knowledge file, treating as absent");
                None
            }
        }
    }

    /// Replaces the user's notes in memory and on disk. A failed disk write is logged; the
    /// memory copy is kept for the rest of the process lifetime.
    #[instrument(skip(self, text), fields(len = text.len()))]
    pub async fn put_context(&self, user_id: i64, text: String) {
        self.cache.write().await.insert(user_id, text.clone());
        match self.persistence.write(user_id, &text).await {
            Ok(()) => info!(user_id, "knowledge saved"),
            Err(e) => error!(user_id, error = %e, "Failed to write knowledge file"),
        }
    }

    pub async fn has_context(&self, user_id: i64) -> bool {
        self.get_context(user_id).await.is_some()
    }

    /// Number of users currently held in memory.
    pub async fn cached_len(&self) -> usize {
        self.cache.read().await.len()
    }
}
