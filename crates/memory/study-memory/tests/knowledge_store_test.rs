//! Integration tests for [`study_memory::KnowledgeStore`].
//!
//! Covers: memory round trip, disk read-through after restart, overwrite on re-upload,
//! read failure treated as absent, write failure keeping the memory copy.

use async_trait::async_trait;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use study_memory::{FileKnowledgePersistence, KnowledgePersistence, KnowledgeStore};

/// Backend whose reads and writes always fail; counts calls.
#[derive(Default)]
struct FailingPersistence {
    reads: AtomicUsize,
    writes: AtomicUsize,
}

#[async_trait]
impl KnowledgePersistence for FailingPersistence {
    async fn read(&self, _user_id: i64) -> io::Result<Option<String>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Err(io::Error::new(io::ErrorKind::PermissionDenied, "disk unavailable"))
    }

    async fn write(&self, _user_id: i64, _text: &str) -> io::Result<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        Err(io::Error::new(io::ErrorKind::Other, "disk full"))
    }
}

/// **Test: put then get returns exactly the same text.**
#[tokio::test]
async fn put_then_get_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let store = KnowledgeStore::with_dir(dir.path()).unwrap();
    let text = "Chapter 1: Minerals\n\nQuartz is SiO2.\n\n".to_string();

    store.put_context(100, text.clone()).await;

    assert_eq!(store.get_context(100).await, Some(text));
}

/// **Test: A fresh store (process restart) over the same directory reads the last text from disk.**
#[tokio::test]
async fn fresh_store_reads_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    {
        let store = KnowledgeStore::with_dir(dir.path()).unwrap();
        store.put_context(7, "first upload".to_string()).await;
        store.put_context(7, "second upload".to_string()).await;
    }

    let restarted = KnowledgeStore::with_dir(dir.path()).unwrap();
    assert_eq!(restarted.cached_len().await, 0);
    assert_eq!(restarted.get_context(7).await.as_deref(), Some("second upload"));
    assert_eq!(restarted.cached_len().await, 1, "disk hit populates memory");
}

/// **Test: The file is `<user_id>.txt` and holds exactly the stored text.**
#[tokio::test]
async fn file_layout_is_plain_text_per_user() {
    let dir = tempfile::tempdir().unwrap();
    let store = KnowledgeStore::with_dir(dir.path()).unwrap();

    store.put_context(555, "Basalt\n".to_string()).await;

    let on_disk = std::fs::read_to_string(dir.path().join("555.txt")).unwrap();
    assert_eq!(on_disk, "Basalt\n");
}

/// **Test: Re-upload overwrites the whole file, not appends.**
#[tokio::test]
async fn put_overwrites_previous_text() {
    let dir = tempfile::tempdir().unwrap();
    let store = KnowledgeStore::with_dir(dir.path()).unwrap();

    store.put_context(1, "a much longer original text".to_string()).await;
    store.put_context(1, "short".to_string()).await;

    let on_disk = std::fs::read_to_string(dir.path().join("1.txt")).unwrap();
    assert_eq!(on_disk, "short");
    assert_eq!(store.get_context(1).await.as_deref(), Some("short"));
}

/// **Test: Unknown user is absent; has_context follows get_context.**
#[tokio::test]
async fn unknown_user_is_absent() {
    let dir = tempfile::tempdir().unwrap();
    let store = KnowledgeStore::with_dir(dir.path()).unwrap();

    assert_eq!(store.get_context(999).await, None);
    assert!(!store.has_context(999).await);

    store.put_context(999, String::new()).await;
    assert!(store.has_context(999).await, "empty text is still stored");
}

/// **Test: Memory is authoritative once populated; later disk edits are not observed.**
#[tokio::test]
async fn memory_wins_over_disk_once_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let store = KnowledgeStore::with_dir(dir.path()).unwrap();
    store.put_context(3, "cached".to_string()).await;

    std::fs::write(dir.path().join("3.txt"), "edited behind our back").unwrap();

    assert_eq!(store.get_context(3).await.as_deref(), Some("cached"));
}

/// **Test: Invalid UTF-8 on disk is a read failure and therefore absent.**
#[tokio::test]
async fn unreadable_file_is_absent() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("8.txt"), [0xff, 0xfe, 0x00, 0x80]).unwrap();
    let store = KnowledgeStore::with_dir(dir.path()).unwrap();

    assert_eq!(store.get_context(8).await, None);
}

/// **Test: Read errors from the backend are swallowed as absent.**
#[tokio::test]
async fn read_error_is_absent() {
    let backend = Arc::new(FailingPersistence::default());
    let store = KnowledgeStore::new(backend.clone());

    assert_eq!(store.get_context(1).await, None);
    assert_eq!(backend.reads.load(Ordering::SeqCst), 1);
}

/// **Test: A write error is swallowed and the memory copy still serves reads.**
#[tokio::test]
async fn write_error_keeps_memory_copy() {
    let backend = Arc::new(FailingPersistence::default());
    let store = KnowledgeStore::new(backend.clone());

    store.put_context(2, "notes".to_string()).await;

    assert_eq!(backend.writes.load(Ordering::SeqCst), 1);
    assert_eq!(store.get_context(2).await.as_deref(), Some("notes"));
    assert_eq!(backend.reads.load(Ordering::SeqCst), 0, "memory hit skips disk");
}

/// **Test: Stores over the same persistence share disk state but not memory.**
#[tokio::test]
async fn stores_are_isolated_in_memory() {
    let dir = tempfile::tempdir().unwrap();
    let persistence = Arc::new(FileKnowledgePersistence::new(dir.path()).unwrap());
    let a = KnowledgeStore::new(persistence.clone());
    let b = KnowledgeStore::new(persistence);

    a.put_context(11, "from a".to_string()).await;

    assert_eq!(b.cached_len().await, 0);
    assert_eq!(b.get_context(11).await.as_deref(), Some("from a"));
}
