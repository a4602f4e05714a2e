use {
	dashmap::DashMap,
	std::{
		sync::Arc,
		time::{Duration, Instant},
	},
	thiserror::Error,
	tracing::{debug, info},
};

/// Errors raised by cache stores
#[derive(Debug, Clone, Error)]
pub enum CacheError {
	#[error("Cache ttl must be greater than zero")]
	ZeroTtl,

	#[error("Cache max entry size must be greater than zero")]
	ZeroMaxEntrySize,

	#[error("Cache entry for key {key} is {size} bytes, limit is {limit}")]
	EntryTooLarge { key: String, size: usize, limit: usize },

	#[error("Cache store unavailable: {0}")]
	Unavailable(String),
}

/// Outcome of a lookup. A miss and a broken store are different variants so callers
/// never have to inspect error text to tell them apart.
#[derive(Debug)]
pub enum CacheLookup {
	Found(Vec<u8>),
	NotFound,
	Failed(CacheError),
}

/// Key to serialized payload store with a uniform per entry TTL.
///
/// Implementations must be safe to share between request tasks. An expired entry must
/// be reported as `NotFound`, never as `Found`.
pub trait CacheStore: Send + Sync {
	fn get(&self, key: &str) -> CacheLookup;

	/// Inserts or replaces `key`, restarting its TTL. On error the store is unchanged.
	fn set(&self, key: &str, payload: Vec<u8>) -> Result<(), CacheError>;
}

#[derive(Debug)]
struct CacheEntry {
	payload: Vec<u8>,
	expires_at: Instant,
}

/// In-process TTL store on a sharded `DashMap`.
///
/// Expiry is checked on every read, so a reader never sees a stale payload even if
/// `purge_expired` has not run yet. Deadlines are fixed at write time and reads do not
/// extend them.
#[derive(Debug)]
pub struct TtlCache {
	entries: DashMap<String, CacheEntry>,
	ttl: Duration,
	max_entry_bytes: usize,
}

impl TtlCache {
	pub fn new(ttl: Duration, max_entry_bytes: usize) -> Result<Self, CacheError> {
		if ttl.is_zero() {
			return Err(CacheError::ZeroTtl);
		}
		if max_entry_bytes == 0 {
			return Err(CacheError::ZeroMaxEntrySize);
		}
		Ok(Self { entries: DashMap::new(), ttl, max_entry_bytes })
	}

	pub fn ttl(&self) -> Duration {
		self.ttl
	}

	/// Number of stored entries, including expired ones not yet purged
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Drops every entry whose deadline has passed, returns how many were removed
	pub fn purge_expired(&self) -> usize {
		let now = Instant::now();
		let before = self.entries.len();
		self.entries.retain(|_, entry| entry.expires_at > now);
		before.saturating_sub(self.entries.len())
	}
}

impl CacheStore for TtlCache {
	fn get(&self, key: &str) -> CacheLookup {
		let now = Instant::now();
		// the shard read guard is released at the end of this statement, before remove_if takes the write lock
		let expired = match self.entries.get(key) {
			Some(entry) if entry.expires_at > now => return CacheLookup::Found(entry.payload.clone()),
			Some(_) => true,
			None => false,
		};
		if !expired {
			return CacheLookup::NotFound;
		}
		// a concurrent set may have refreshed the key in between, only drop it if still expired
		self.entries.remove_if(key, |_, entry| entry.expires_at <= now);
		debug!("Cache entry expired: key={}", key);
		CacheLookup::NotFound
	}

	fn set(&self, key: &str, payload: Vec<u8>) -> Result<(), CacheError> {
		if payload.len() > self.max_entry_bytes {
			return Err(CacheError::EntryTooLarge { key: key.to_string(), size: payload.len(), limit: self.max_entry_bytes });
		}
		let expires_at = Instant::now() + self.ttl;
		self.entries.insert(key.to_string(), CacheEntry { payload, expires_at });
		Ok(())
	}
}

/// Periodically reclaims expired entries. Reads already ignore them, this only frees memory
/// for keys nobody asks for anymore.
pub async fn purge_task(cache: Arc<TtlCache>, interval: Duration) {
	let mut tokio_interval = tokio::time::interval(interval);
	tokio_interval.tick().await;

	loop {
		tokio_interval.tick().await;
		let removed = cache.purge_expired();
		if removed > 0 {
			info!("Cache purge removed {} expired entries, {} remaining", removed, cache.len());
		}
	}
}
