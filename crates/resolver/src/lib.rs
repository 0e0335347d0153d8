//! Asset resolution and caching engine.
//!
//! A [`LogoResolver`] holds the shared collaborators (source, store, event
//! bus). Each component on the canvas mounts its own [`LogoInstance`], which
//! seeds from the cache, refreshes when its asset changes, and produces the
//! [`RenderSpec`] handed to the rendering surface.

pub mod engine;
pub mod extract;
pub mod props;
pub mod render;
pub mod selector;

pub use engine::{LogoInstance, LogoResolver, RefreshOutcome};
pub use extract::{FallbackValues, extract_state};
pub use props::LogoProps;
pub use render::RenderSpec;
pub use selector::AssetSelection;
