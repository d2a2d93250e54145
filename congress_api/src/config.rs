//! Client configuration: API key, response cache, and overrides.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::cache::{FileCache, MemoryCache, ResponseCache};
use crate::family::ApiFamily;

/// Default on-disk cache directory.
pub const DEFAULT_CACHE_DIR: &str = ".cache";

/// Environment variable naming the cache directory (`none` disables caching).
pub const CACHE_DIR_VAR: &str = "CONGRESS_CACHE_DIR";

/// Environment variable overriding the default Congress number.
pub const DEFAULT_CONGRESS_VAR: &str = "CONGRESS_DEFAULT_CONGRESS";

/// Which response cache the client uses.
#[derive(Clone, Default)]
pub enum CacheConfig {
    /// No caching; every call goes to the network.
    None,
    /// An on-disk [`FileCache`] in this directory.
    Directory(PathBuf),
    /// An in-memory [`MemoryCache`] with this time-to-live.
    Memory(Duration),
    /// Any caller-provided store.
    Custom(Arc<dyn ResponseCache>),
    /// [`CacheConfig::Directory`] at [`DEFAULT_CACHE_DIR`].
    #[default]
    Default,
}

impl std::fmt::Debug for CacheConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CacheConfig::None => f.write_str("None"),
            CacheConfig::Directory(dir) => f.debug_tuple("Directory").field(dir).finish(),
            CacheConfig::Memory(ttl) => f.debug_tuple("Memory").field(ttl).finish(),
            CacheConfig::Custom(_) => f.write_str("Custom(..)"),
            CacheConfig::Default => f.write_str("Default"),
        }
    }
}

impl CacheConfig {
    /// Builds the configured cache, if any.
    pub fn build(&self) -> Option<Arc<dyn ResponseCache>> {
        match self {
            CacheConfig::None => None,
            CacheConfig::Directory(dir) => Some(Arc::new(FileCache::new(dir.clone()))),
            CacheConfig::Memory(ttl) => Some(Arc::new(MemoryCache::new(*ttl))),
            CacheConfig::Custom(cache) => Some(Arc::clone(cache)),
            CacheConfig::Default => Some(Arc::new(FileCache::new(DEFAULT_CACHE_DIR))),
        }
    }
}

/// Settings shared by every resource client built from one facade.
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    /// API key. May be left unset; requests then fail with `MissingApiKey`.
    pub api_key: Option<String>,
    pub cache: CacheConfig,
    /// Replaces the family's base URL. Used for testing with wiremock.
    pub base_url: Option<String>,
    /// Request timeout. `None` keeps the transport default.
    pub timeout: Option<Duration>,
    /// Congress number used when a call does not name one. `None` means the
    /// current Congress at the time of the call.
    pub default_congress: Option<u32>,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    /// Reads configuration from the environment, loading a `.env` file first
    /// when one exists.
    ///
    /// The key comes from the family's variable (`PROPUBLICA_API_KEY` or
    /// `NYT_CONGRESS_API_KEY`), the cache directory from `CONGRESS_CACHE_DIR`
    /// and the default Congress from `CONGRESS_DEFAULT_CONGRESS`.
    pub fn from_env(family: ApiFamily) -> Self {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!("Loaded environment from {}", path.display());
        }

        let cache = match env_string(CACHE_DIR_VAR) {
            Some(dir) if dir.eq_ignore_ascii_case("none") => CacheConfig::None,
            Some(dir) => CacheConfig::Directory(PathBuf::from(dir)),
            None => CacheConfig::Default,
        };

        Self {
            api_key: env_string(family.api_key_var()),
            cache,
            base_url: None,
            timeout: None,
            default_congress: env_u32(DEFAULT_CONGRESS_VAR),
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_cache(mut self, cache: CacheConfig) -> Self {
        self.cache = cache;
        self
    }

    pub fn without_cache(self) -> Self {
        self.with_cache(CacheConfig::None)
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = Some(base_url.to_string());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_default_congress(mut self, congress: u32) -> Self {
        self.default_congress = Some(congress);
        self
    }
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}

fn env_u32(key: &str) -> Option<u32> {
    env_string(key).and_then(|val| val.parse::<u32>().ok())
}
