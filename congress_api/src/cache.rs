//! Pluggable response caches keyed by request URL.
//!
//! A cached entry keeps the response body together with its validators
//! (`ETag`, `Last-Modified`). The client revalidates entries with a
//! conditional request and serves the stored body on `304 Not Modified`.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// A stored response body and the validators needed to revalidate it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedResponse {
    pub body: String,
    #[serde(default)]
    pub etag: Option<String>,
    #[serde(default)]
    pub last_modified: Option<String>,
}

/// Storage for cached responses. Implementations must be safe to share
/// between threads; failures are expected to degrade to cache misses.
pub trait ResponseCache: Send + Sync {
    /// Returns the entry stored under `key`, if any.
    fn get(&self, key: &str) -> Option<CachedResponse>;

    /// Inserts or overwrites the entry stored under `key`.
    fn set(&self, key: &str, response: CachedResponse);
}

/// A single cached value with its expiration time.
struct CacheEntry {
    value: CachedResponse,
    expires_at: Instant,
}

/// Thread-safe in-memory cache with time-to-live expiration.
///
/// Expired entries are lazily evicted on the next `get` call for that key.
pub struct MemoryCache {
    store: DashMap<String, CacheEntry>,
    ttl: Duration,
}

impl MemoryCache {
    /// Creates a new cache with the given time-to-live for entries.
    pub fn new(ttl: Duration) -> Self {
        Self {
            store: DashMap::new(),
            ttl,
        }
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Removes all entries from the cache.
    pub fn clear(&self) {
        self.store.clear();
    }
}

impl ResponseCache for MemoryCache {
    fn get(&self, key: &str) -> Option<CachedResponse> {
        let entry = self.store.get(key)?;
        if Instant::now() > entry.expires_at {
            drop(entry);
            self.store.remove(key);
            return None;
        }
        Some(entry.value.clone())
    }

    fn set(&self, key: &str, response: CachedResponse) {
        self.store.insert(
            key.to_string(),
            CacheEntry {
                value: response,
                expires_at: Instant::now() + self.ttl,
            },
        );
    }
}

/// On-disk cache: one JSON file per URL, named by the SHA-256 of the URL.
///
/// The directory is created on first write. Unreadable or corrupt files are
/// treated as misses.
pub struct FileCache {
    dir: PathBuf,
}

#[derive(Serialize, Deserialize)]
struct FileEntry {
    url: String,
    #[serde(flatten)]
    response: CachedResponse,
}

impl FileCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        let digest = Sha256::digest(key.as_bytes());
        self.dir.join(format!("{}.json", hex::encode(digest)))
    }
}

impl ResponseCache for FileCache {
    fn get(&self, key: &str) -> Option<CachedResponse> {
        let path = self.entry_path(key);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!("Failed to read cache file {}: {}", path.display(), e);
                return None;
            }
        };
        match serde_json::from_str::<FileEntry>(&raw) {
            Ok(entry) if entry.url == key => Some(entry.response),
            Ok(_) => None,
            Err(e) => {
                tracing::warn!("Ignoring corrupt cache file {}: {}", path.display(), e);
                None
            }
        }
    }

    fn set(&self, key: &str, response: CachedResponse) {
        if let Err(e) = fs::create_dir_all(&self.dir) {
            tracing::warn!("Failed to create cache directory {}: {}", self.dir.display(), e);
            return;
        }
        let entry = FileEntry {
            url: key.to_string(),
            response,
        };
        let path = self.entry_path(key);
        let written = serde_json::to_vec(&entry)
            .map_err(|e| e.to_string())
            .and_then(|bytes| fs::write(&path, bytes).map_err(|e| e.to_string()));
        if let Err(e) = written {
            tracing::warn!("Failed to write cache file {}: {}", path.display(), e);
        }
    }
}
