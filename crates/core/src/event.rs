//! Resolver events — lets hosts observe cache and refresh transitions.
//!
//! Events are published as component instances mount and refresh. Subscribers
//! react without the resolver knowing who is listening.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::broadcast;

/// All resolver events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ResolverEvent {
    /// An instance mounted and seeded its state
    CacheSeeded {
        key: String,
        /// Asset recorded in the cache entry, if any
        asset_id: Option<String>,
        from_cache: bool,
        timestamp: DateTime<Utc>,
    },

    /// The effective asset matched the cached one; no request was made
    CacheHit {
        key: String,
        asset_id: String,
        timestamp: DateTime<Utc>,
    },

    /// A refresh committed new state
    Refreshed {
        key: String,
        asset_id: String,
        timestamp: DateTime<Utc>,
    },

    /// A refresh failed; prior state was kept
    RefreshFailed {
        key: String,
        asset_id: String,
        error_message: String,
        timestamp: DateTime<Utc>,
    },

    /// A newer refresh started before this one settled; its result was dropped
    Superseded {
        key: String,
        asset_id: String,
        timestamp: DateTime<Utc>,
    },

    /// A stored value could not be parsed and was ignored
    CacheEntryDiscarded {
        key: String,
        reason: String,
        timestamp: DateTime<Utc>,
    },
}

/// A broadcast-based event bus for resolver events.
///
/// Uses `tokio::sync::broadcast` for multi-consumer pub/sub.
pub struct EventBus {
    sender: broadcast::Sender<Arc<ResolverEvent>>,
}

impl EventBus {
    /// Create a new event bus with the given capacity.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all subscribers.
    pub fn publish(&self, event: ResolverEvent) {
        // No subscribers is fine
        let _ = self.sender.send(Arc::new(event));
    }

    /// Subscribe to receive events.
    pub fn subscribe(&self) -> broadcast::Receiver<Arc<ResolverEvent>> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(256)
    }
}
