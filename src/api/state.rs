use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{Catalog, FacetSelection};

/// Bounds on the in-memory session map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionLimits {
    /// Open sessions kept at most; the least recently used one is evicted
    pub max_sessions: usize,
    /// Sessions untouched for this long are dropped
    pub idle_timeout: Duration,
}

impl Default for SessionLimits {
    fn default() -> Self {
        Self {
            max_sessions: 10_000,
            idle_timeout: Duration::from_secs(30 * 60),
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Loaded once at start-up, never mutated
    pub catalog: Arc<Catalog>,
    limits: SessionLimits,
    inner: Arc<RwLock<AppStateInner>>,
}

struct Session {
    selection: FacetSelection,
    last_used: Instant,
    // Recency order for eviction; `Instant`s can tie on coarse clocks
    tick: u64,
}

/// Inner state that can be modified
#[derive(Default)]
struct AppStateInner {
    sessions: HashMap<Uuid, Session>,
    tick: u64,
}

impl AppStateInner {
    fn next_tick(&mut self) -> u64 {
        self.tick += 1;
        self.tick
    }

    fn prune_idle(&mut self, idle_timeout: Duration) {
        let before = self.sessions.len();
        self.sessions
            .retain(|_, session| session.last_used.elapsed() < idle_timeout);

        let pruned = before - self.sessions.len();
        if pruned > 0 {
            tracing::debug!(pruned, "Dropped idle sessions");
        }
    }

    fn evict_least_recent(&mut self) {
        let oldest = self
            .sessions
            .iter()
            .min_by_key(|(_, session)| session.tick)
            .map(|(id, _)| *id);

        if let Some(id) = oldest {
            self.sessions.remove(&id);
            tracing::debug!(session_id = %id, "Evicted least recently used session");
        }
    }

    /// Live session for `id`, marked as used; an idle one is dropped instead
    fn touch(&mut self, id: &Uuid, idle_timeout: Duration) -> Option<&mut Session> {
        let expired = self
            .sessions
            .get(id)
            .map(|session| session.last_used.elapsed() >= idle_timeout)?;
        if expired {
            self.sessions.remove(id);
            return None;
        }

        let tick = self.next_tick();
        let session = self.sessions.get_mut(id)?;
        session.last_used = Instant::now();
        session.tick = tick;
        Some(session)
    }
}

impl AppState {
    /// Creates state around a loaded catalog with no sessions
    pub fn new(catalog: Catalog) -> Self {
        Self::with_session_limits(catalog, SessionLimits::default())
    }

    pub fn with_session_limits(catalog: Catalog, limits: SessionLimits) -> Self {
        Self {
            catalog: Arc::new(catalog),
            limits,
            inner: Arc::new(RwLock::new(AppStateInner::default())),
        }
    }

    /// Opens a session with an empty selection and returns its id
    pub async fn create_session(&self) -> Uuid {
        let id = Uuid::new_v4();
        let mut inner = self.inner.write().await;

        inner.prune_idle(self.limits.idle_timeout);
        while !inner.sessions.is_empty() && inner.sessions.len() >= self.limits.max_sessions {
            inner.evict_least_recent();
        }

        let tick = inner.next_tick();
        inner.sessions.insert(
            id,
            Session {
                selection: FacetSelection::new(),
                last_used: Instant::now(),
                tick,
            },
        );
        id
    }

    /// Removes a session; false if it was not open
    pub async fn close_session(&self, id: &Uuid) -> bool {
        let mut inner = self.inner.write().await;
        inner.sessions.remove(id).is_some()
    }

    /// Number of sessions currently held
    pub async fn session_count(&self) -> usize {
        self.inner.read().await.sessions.len()
    }

    /// Snapshot of a session's selection, so callers never hold the lock
    /// while searching
    pub async fn selection(&self, id: &Uuid) -> Option<FacetSelection> {
        let mut inner = self.inner.write().await;
        inner
            .touch(id, self.limits.idle_timeout)
            .map(|session| session.selection.clone())
    }

    /// Applies `update` to a session's selection and returns the new value
    pub async fn update_selection<F>(&self, id: &Uuid, update: F) -> Option<FacetSelection>
    where
        F: FnOnce(&mut FacetSelection),
    {
        let mut inner = self.inner.write().await;
        let session = inner.touch(id, self.limits.idle_timeout)?;
        update(&mut session.selection);
        Some(session.selection.clone())
    }
}
