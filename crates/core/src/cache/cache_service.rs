//! In-memory request cache keyed by endpoint path.
//!
//! Replaces ambient global revalidation state with an explicit service: each
//! key owns a watch channel of [`CacheState`] plus the most recently
//! registered fetcher, so invalidation can refetch and notify every
//! subscriber without the original caller.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use futures::future::BoxFuture;
use serde_json::Value;
use tokio::sync::watch;

use crate::errors::{Error, Result};

/// Future produced by a registered fetcher. Errors are flattened to strings
/// so the resulting state stays `Clone`.
pub type FetchFuture = BoxFuture<'static, std::result::Result<Value, String>>;

/// Fetch function stored per key and reused on invalidation.
pub type Fetcher = Arc<dyn Fn() -> FetchFuture + Send + Sync>;

/// Observable state of one cache key.
#[derive(Clone, Debug)]
pub enum CacheState {
    /// No value and no fetch running.
    Idle,
    /// A fetch is running; new callers attach to it instead of racing it.
    InFlight,
    /// Most recently fetched value.
    Ready(Value),
    /// Last fetch failed.
    Failed(String),
}

struct CacheEntry {
    state: watch::Sender<CacheState>,
    fetcher: Option<Fetcher>,
}

impl CacheEntry {
    fn new() -> Self {
        let (state, _) = watch::channel(CacheState::Idle);
        Self {
            state,
            fetcher: None,
        }
    }
}

/// Outcome of claiming a key under the lock.
enum Claim {
    Hit(Value),
    Wait(watch::Receiver<CacheState>),
    Fetch(watch::Sender<CacheState>, Fetcher),
}

/// Request cache guaranteeing at most one in-flight fetch per key.
///
/// Concurrent callers for the same key await the same resolution. The lock
/// protects only the entry map and is never held across an await.
#[derive(Default)]
pub struct RequestCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl RequestCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// A poisoned lock only means some holder panicked between map updates;
    /// the map itself stays usable.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, CacheEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the cached value for `key`, fetching it if needed.
    ///
    /// The fetcher is remembered for the key so a later [`invalidate`] can
    /// refetch without the original caller.
    ///
    /// [`invalidate`]: RequestCache::invalidate
    pub async fn get_or_fetch(&self, key: &str, fetcher: Fetcher) -> Result<Value> {
        let claim = {
            let mut entries = self.lock();
            let entry = entries
                .entry(key.to_string())
                .or_insert_with(CacheEntry::new);
            entry.fetcher = Some(fetcher.clone());

            let current = entry.state.borrow().clone();
            match current {
                CacheState::Ready(value) => Claim::Hit(value),
                CacheState::InFlight => Claim::Wait(entry.state.subscribe()),
                CacheState::Idle | CacheState::Failed(_) => {
                    entry.state.send_replace(CacheState::InFlight);
                    Claim::Fetch(entry.state.clone(), fetcher)
                }
            }
        };

        match claim {
            Claim::Hit(value) => Ok(value),
            Claim::Wait(mut rx) => {
                let state = rx
                    .wait_for(|state| !matches!(state, CacheState::InFlight))
                    .await
                    .map_err(|_| Error::Cache(format!("cache entry for '{key}' was dropped")))?;
                match &*state {
                    CacheState::Ready(value) => Ok(value.clone()),
                    CacheState::Failed(message) => Err(Error::Cache(message.clone())),
                    // The predicate excludes InFlight; Idle means the flight
                    // was discarded under us.
                    _ => Err(Error::Cache(format!("fetch for '{key}' was discarded"))),
                }
            }
            Claim::Fetch(tx, fetcher) => {
                log::debug!("cache miss for '{key}', fetching");
                match fetcher().await {
                    Ok(value) => {
                        tx.send_replace(CacheState::Ready(value.clone()));
                        Ok(value)
                    }
                    Err(message) => {
                        tx.send_replace(CacheState::Failed(message.clone()));
                        Err(Error::Cache(message))
                    }
                }
            }
        }
    }

    /// Discards the cached value for `key` and refetches it in the
    /// background, publishing the new state to every subscriber.
    ///
    /// A key that never registered a fetcher drops back to `Idle`; a key with
    /// a fetch already running is left alone, since the running fetch will
    /// deliver fresh data. Must be called from within a tokio runtime.
    pub fn invalidate(&self, key: &str) {
        let mut entries = self.lock();
        let Some(entry) = entries.get_mut(key) else {
            return;
        };

        if matches!(&*entry.state.borrow(), CacheState::InFlight) {
            return;
        }

        let Some(fetcher) = entry.fetcher.clone() else {
            entry.state.send_replace(CacheState::Idle);
            return;
        };

        entry.state.send_replace(CacheState::InFlight);
        let tx = entry.state.clone();
        let key = key.to_string();
        drop(entries);

        tokio::spawn(async move {
            log::debug!("revalidating '{key}'");
            match fetcher().await {
                Ok(value) => {
                    tx.send_replace(CacheState::Ready(value));
                }
                Err(message) => {
                    log::warn!("revalidation of '{key}' failed: {message}");
                    tx.send_replace(CacheState::Failed(message));
                }
            }
        });
    }

    /// Watches the state of `key`, creating an idle entry if needed.
    pub fn subscribe(&self, key: &str) -> watch::Receiver<CacheState> {
        let mut entries = self.lock();
        entries
            .entry(key.to_string())
            .or_insert_with(CacheEntry::new)
            .state
            .subscribe()
    }

    /// Current state of `key` without fetching.
    pub fn peek(&self, key: &str) -> CacheState {
        self.lock()
            .get(key)
            .map(|entry| entry.state.borrow().clone())
            .unwrap_or(CacheState::Idle)
    }
}
