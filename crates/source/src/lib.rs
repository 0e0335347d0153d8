//! Asset source implementations for the partner logo resolver.
//!
//! All sources implement the `partnerlogo_core::AssetSource` trait.

pub mod http;

pub use http::HttpAssetSource;
