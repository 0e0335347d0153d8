//! Static asset catalog for the partner logo resolver.
//!
//! The catalog is an immutable list of `{id, name, owner}` records built once
//! at startup. [`CatalogIndex`] partitions it by owner category for selection,
//! and [`controls`] turns that into the property schema a host inspector
//! renders.

pub mod controls;
pub mod index;

pub use controls::{Control, ControlDefaults, ControlKind, property_controls};
pub use index::{AssetOption, CatalogIndex};
