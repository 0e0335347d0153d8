//! # Partner Logo Core
//!
//! Domain types, ports, and error definitions for the partner logo resolver.
//! This crate has no transport or storage dependencies; it defines the model
//! that the other crates implement against.
//!
//! ## Layout
//!
//! Every external collaborator is a trait here. Implementations live in
//! their own crates:
//! - [`AssetSource`]: the remote brand-asset service (`partnerlogo-source`)
//! - [`AssetStore`]: the persistent key-value cache (`partnerlogo-store`)
//!
//! Tests substitute in-memory fakes for both.

pub mod asset;
pub mod cache_key;
pub mod catalog;
pub mod error;
pub mod event;
pub mod source;
pub mod store;

// Re-export key types at crate root for ergonomics
pub use asset::{CachedEntry, ResolvedAssetState, Variant};
pub use cache_key::{CACHE_KEY_PREFIX, CacheKey};
pub use catalog::{AssetRecord, Category};
pub use error::{CatalogError, Error, FetchError, Result, StoreError};
pub use event::{EventBus, ResolverEvent};
pub use source::AssetSource;
pub use store::AssetStore;
