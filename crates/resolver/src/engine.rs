//! The resolver/cache engine.
//!
//! Lifecycle of one component instance:
//! 1. `mount` reads the cache entry for the instance's key once and seeds
//!    state from it, or from defaults when there is none.
//! 2. `sync` runs whenever the effective asset id or the display flags
//!    change. If the id matches the one held in state nothing is fetched;
//!    otherwise `refresh` runs.
//! 3. `refresh` fetches, extracts, persists, then swaps state in one step.
//!    Failures leave both the cache and in-memory state untouched.
//!
//! Every refresh takes a ticket. A result is only committed if its ticket is
//! still the newest when it settles, so a slow response for an asset the
//! user has already moved away from never overwrites newer state. A sync for
//! the asset that is already being fetched joins that fetch instead of
//! issuing another request.

use crate::extract::{FallbackValues, extract_state};
use crate::props::LogoProps;
use crate::render::RenderSpec;
use chrono::Utc;
use partnerlogo_config::AssetDefaultsConfig;
use partnerlogo_core::asset::{CachedEntry, ResolvedAssetState};
use partnerlogo_core::cache_key::CacheKey;
use partnerlogo_core::error::{Error, Result};
use partnerlogo_core::event::{EventBus, ResolverEvent};
use partnerlogo_core::source::AssetSource;
use partnerlogo_core::store::AssetStore;
use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// How a sync or refresh settled.
#[derive(Debug)]
pub enum RefreshOutcome {
    /// State already held the requested asset; no request was made
    CacheHit,

    /// No asset is selected for the active category
    NoSelection,

    /// New state was fetched, persisted, and applied
    Updated,

    /// A fetch for the same asset is already running; no request was made
    InFlight,

    /// A newer sync started before this one settled; the result was dropped
    Superseded,

    /// The refresh failed; prior state stays authoritative
    Failed(Error),
}

impl RefreshOutcome {
    pub fn is_updated(&self) -> bool {
        matches!(self, RefreshOutcome::Updated)
    }
}

/// Shared collaborators for every mounted instance.
#[derive(Clone)]
pub struct LogoResolver {
    /// Remote brand-asset service
    source: Arc<dyn AssetSource>,

    /// Persistent cache
    store: Arc<dyn AssetStore>,

    /// Event bus for resolver events
    event_bus: Arc<EventBus>,

    /// Seed image when nothing is cached
    default_image_url: String,

    /// Substitutes for fields a document lacks
    fallback: FallbackValues,
}

impl LogoResolver {
    pub fn new(source: Arc<dyn AssetSource>, store: Arc<dyn AssetStore>) -> Self {
        let defaults = AssetDefaultsConfig::default();
        Self {
            source,
            store,
            event_bus: Arc::new(EventBus::default()),
            default_image_url: defaults.default_image_url.clone(),
            fallback: FallbackValues::from_config(&defaults),
        }
    }

    /// Use configured default and placeholder values.
    pub fn with_defaults(mut self, defaults: &AssetDefaultsConfig) -> Self {
        self.default_image_url = defaults.default_image_url.clone();
        self.fallback = FallbackValues::from_config(defaults);
        self
    }

    /// Publish events to a shared bus instead of a private one.
    pub fn with_event_bus(mut self, event_bus: Arc<EventBus>) -> Self {
        self.event_bus = event_bus;
        self
    }

    pub fn event_bus(&self) -> &Arc<EventBus> {
        &self.event_bus
    }

    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    pub fn store_name(&self) -> &str {
        self.store.name()
    }

    /// Fetch and extract the state for `asset_id` without touching any cache.
    pub async fn resolve(&self, asset_id: &str) -> Result<ResolvedAssetState> {
        let body = self.source.fetch(asset_id).await?;
        Ok(extract_state(asset_id, &body, &self.fallback)?)
    }

    /// Read the cached entry under `key`.
    ///
    /// Unreadable or unparseable entries count as absent.
    pub async fn read_cached(&self, key: &CacheKey) -> Option<ResolvedAssetState> {
        let raw = match self.store.get(key.as_str()).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(key = %key, error = %e, "Cache read failed, using defaults");
                return None;
            }
        };

        match CachedEntry::parse(&raw) {
            Ok(entry) => Some(entry.into_state()),
            Err(e) => {
                warn!(key = %key, error = %e, "Discarding malformed cache entry");
                self.event_bus.publish(ResolverEvent::CacheEntryDiscarded {
                    key: key.to_string(),
                    reason: e.to_string(),
                    timestamp: Utc::now(),
                });
                None
            }
        }
    }

    /// Mount a component instance, seeding its state from the cache.
    pub async fn mount(&self, component_id: &str) -> LogoInstance {
        let key = CacheKey::derive(component_id);
        let cached = self.read_cached(&key).await;
        let from_cache = cached.is_some();
        let state =
            cached.unwrap_or_else(|| ResolvedAssetState::placeholder(&self.default_image_url));

        debug!(key = %key, from_cache, asset_id = ?state.asset_id, "Instance mounted");
        self.event_bus.publish(ResolverEvent::CacheSeeded {
            key: key.to_string(),
            asset_id: state.asset_id.clone(),
            from_cache,
            timestamp: Utc::now(),
        });

        LogoInstance {
            key,
            resolver: self.clone(),
            state: RwLock::new(state),
            latest_ticket: AtomicU64::new(0),
            pending: Mutex::new(None),
        }
    }
}

/// One mounted partner-logo component.
pub struct LogoInstance {
    key: CacheKey,
    resolver: LogoResolver,
    state: RwLock<ResolvedAssetState>,
    latest_ticket: AtomicU64,
    /// Ticket and asset id of the most recently started fetch
    pending: Mutex<Option<(u64, String)>>,
}

impl LogoInstance {
    pub fn key(&self) -> &CacheKey {
        &self.key
    }

    /// A consistent snapshot of the current state.
    pub async fn state(&self) -> ResolvedAssetState {
        self.state.read().await.clone()
    }

    /// Bring state in line with the effective asset id.
    pub async fn sync(&self, asset_id: Option<&str>) -> RefreshOutcome {
        let Some(asset_id) = asset_id.filter(|id| !id.is_empty()) else {
            debug!(key = %self.key, "No asset selected");
            return RefreshOutcome::NoSelection;
        };

        let ticket = {
            let state = self.state.read().await;
            if state.is_for(asset_id) {
                // Anything still in flight targets an asset we have moved away from
                self.latest_ticket.fetch_add(1, Ordering::SeqCst);
                debug!(key = %self.key, asset_id, "Cache hit, skipping fetch");
                self.resolver.event_bus.publish(ResolverEvent::CacheHit {
                    key: self.key.to_string(),
                    asset_id: asset_id.to_string(),
                    timestamp: Utc::now(),
                });
                return RefreshOutcome::CacheHit;
            }

            let mut pending = self.lock_pending();
            let current = self.latest_ticket.load(Ordering::SeqCst);
            if let Some((ticket, pending_id)) = pending.as_ref()
                && *ticket == current
                && pending_id == asset_id
            {
                debug!(key = %self.key, asset_id, ticket, "Fetch already in flight");
                return RefreshOutcome::InFlight;
            }
            self.begin(&mut *pending, asset_id)
        };

        self.settle(asset_id, ticket).await
    }

    /// Fetch `asset_id` unconditionally and commit it if still current.
    pub async fn refresh(&self, asset_id: &str) -> RefreshOutcome {
        let ticket = {
            let mut pending = self.lock_pending();
            self.begin(&mut *pending, asset_id)
        };
        self.settle(asset_id, ticket).await
    }

    fn lock_pending(&self) -> std::sync::MutexGuard<'_, Option<(u64, String)>> {
        // Never left half-written, so a poisoned lock is still usable
        self.pending.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn begin(&self, pending: &mut Option<(u64, String)>, asset_id: &str) -> u64 {
        let ticket = self.latest_ticket.fetch_add(1, Ordering::SeqCst) + 1;
        *pending = Some((ticket, asset_id.to_string()));
        debug!(key = %self.key, asset_id, ticket, "Refreshing asset");
        ticket
    }

    async fn settle(&self, asset_id: &str, ticket: u64) -> RefreshOutcome {
        let result = self.resolver.resolve(asset_id).await;

        let mut state = self.state.write().await;
        {
            let mut pending = self.lock_pending();
            if pending.as_ref().is_some_and(|(t, _)| *t == ticket) {
                *pending = None;
            }
        }
        if self.latest_ticket.load(Ordering::SeqCst) != ticket {
            debug!(key = %self.key, asset_id, ticket, "Dropping superseded refresh");
            self.resolver.event_bus.publish(ResolverEvent::Superseded {
                key: self.key.to_string(),
                asset_id: asset_id.to_string(),
                timestamp: Utc::now(),
            });
            return RefreshOutcome::Superseded;
        }

        let resolved = match result {
            Ok(resolved) => resolved,
            Err(e) => return self.failed(asset_id, e),
        };

        if let Err(e) = self.persist(&resolved).await {
            return self.failed(asset_id, e);
        }

        *state = resolved;
        info!(key = %self.key, asset_id, "Asset refreshed");
        self.resolver.event_bus.publish(ResolverEvent::Refreshed {
            key: self.key.to_string(),
            asset_id: asset_id.to_string(),
            timestamp: Utc::now(),
        });
        RefreshOutcome::Updated
    }

    /// Run `sync` as an independent task.
    pub fn spawn_sync(self: &Arc<Self>, asset_id: Option<String>) -> JoinHandle<RefreshOutcome> {
        let instance = Arc::clone(self);
        tokio::spawn(async move { instance.sync(asset_id.as_deref()).await })
    }

    /// The surface description for the current state.
    pub async fn render(&self, props: &LogoProps) -> RenderSpec {
        RenderSpec::build(&*self.state.read().await, props)
    }

    /// Sync to the props' asset, then render.
    ///
    /// Refresh failures only show up in logs and events; the render falls
    /// back to whatever state was already held.
    pub async fn apply(&self, props: &LogoProps) -> RenderSpec {
        let outcome = self.sync(props.asset_id()).await;
        debug!(key = %self.key, ?outcome, "Props applied");
        self.render(props).await
    }

    async fn persist(&self, resolved: &ResolvedAssetState) -> Result<()> {
        let value = serde_json::to_string(resolved)?;
        self.resolver.store.set(self.key.as_str(), value).await?;
        Ok(())
    }

    fn failed(&self, asset_id: &str, error: Error) -> RefreshOutcome {
        warn!(key = %self.key, asset_id, error = %error, "Refresh failed, keeping previous state");
        self.resolver.event_bus.publish(ResolverEvent::RefreshFailed {
            key: self.key.to_string(),
            asset_id: asset_id.to_string(),
            error_message: error.to_string(),
            timestamp: Utc::now(),
        });
        RefreshOutcome::Failed(error)
    }
}
