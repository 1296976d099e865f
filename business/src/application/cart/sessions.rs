use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use lru::LruCache;
use tokio::sync::{Mutex, OnceCell};

use crate::domain::cart::repository::CartSnapshotRepository;
use crate::domain::cart::store::{CartStore, CartStoreProvider};
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::CartSessionId;

use super::store::PersistentCartStore;

pub const DEFAULT_MAX_SESSIONS: usize = 10_000;
pub const DEFAULT_SESSION_IDLE_TTL: Duration = Duration::from_secs(30 * 60);

struct SessionEntry {
    store: Arc<OnceCell<Arc<PersistentCartStore>>>,
    last_access: Instant,
}

/// Registry of live carts, one per browsing session. A session's cart is
/// loaded from storage the first time it is asked for and dropped again
/// once idle for longer than the TTL or pushed out by newer sessions.
/// Every mutation is already persisted, so an evicted cart reloads intact.
pub struct CartSessions {
    stores: Mutex<LruCache<CartSessionId, SessionEntry>>,
    idle_ttl: Duration,
    repository: Arc<dyn CartSnapshotRepository>,
    logger: Arc<dyn Logger>,
}

impl CartSessions {
    pub fn new(repository: Arc<dyn CartSnapshotRepository>, logger: Arc<dyn Logger>) -> Self {
        Self::with_limits(
            repository,
            logger,
            DEFAULT_MAX_SESSIONS,
            DEFAULT_SESSION_IDLE_TTL,
        )
    }

    pub fn with_limits(
        repository: Arc<dyn CartSnapshotRepository>,
        logger: Arc<dyn Logger>,
        max_sessions: usize,
        idle_ttl: Duration,
    ) -> Self {
        let capacity = NonZeroUsize::new(max_sessions).unwrap_or(NonZeroUsize::MIN);
        Self {
            stores: Mutex::new(LruCache::new(capacity)),
            idle_ttl,
            repository,
            logger,
        }
    }

    pub async fn active_sessions(&self) -> usize {
        self.stores.lock().await.len()
    }

    /// Drops sessions idle past the TTL. The LRU order is the access order,
    /// so only the oldest entries are inspected.
    fn evict_idle(&self, stores: &mut LruCache<CartSessionId, SessionEntry>, now: Instant) {
        while let Some((_, entry)) = stores.peek_lru() {
            if now.duration_since(entry.last_access) <= self.idle_ttl {
                break;
            }
            if let Some((session_id, _)) = stores.pop_lru() {
                self.logger
                    .debug(&format!("Evicting idle cart session {}", session_id));
            }
        }
    }

    async fn entry_for(&self, session_id: &CartSessionId) -> Arc<OnceCell<Arc<PersistentCartStore>>> {
        let mut stores = self.stores.lock().await;
        let now = Instant::now();
        self.evict_idle(&mut stores, now);

        if let Some(entry) = stores.get_mut(session_id) {
            entry.last_access = now;
            return entry.store.clone();
        }

        let store = Arc::new(OnceCell::new());
        let entry = SessionEntry {
            store: store.clone(),
            last_access: now,
        };
        if let Some((evicted, _)) = stores.push(session_id.clone(), entry) {
            self.logger.debug(&format!(
                "Session limit reached, evicting cart session {}",
                evicted
            ));
        }
        store
    }
}

#[async_trait]
impl CartStoreProvider for CartSessions {
    async fn store_for(&self, session_id: &CartSessionId) -> Arc<dyn CartStore> {
        // Snapshot reads happen outside the registry lock.
        let entry = self.entry_for(session_id).await;
        let store = entry
            .get_or_init(|| async {
                self.logger
                    .debug(&format!("Opening cart for session {}", session_id));
                Arc::new(
                    PersistentCartStore::load(
                        session_id,
                        self.repository.clone(),
                        self.logger.clone(),
                    )
                    .await,
                )
            })
            .await;
        store.clone()
    }
}
