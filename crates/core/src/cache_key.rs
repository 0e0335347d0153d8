//! Cache key derivation for component instances.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix shared by every persisted entry.
pub const CACHE_KEY_PREFIX: &str = "partnerLogos_";

/// Host-assigned ids carry this marker; the key drops it.
const ID_MARKER: &str = "id_";

/// Where a component instance's resolved state is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CacheKey(String);

impl CacheKey {
    /// Derive the key for a component identifier.
    ///
    /// When the id contains `id_`, everything up to and including the first
    /// occurrence of the marker is dropped.
    pub fn derive(component_id: &str) -> Self {
        let normalized = match component_id.find(ID_MARKER) {
            Some(pos) => &component_id[pos + ID_MARKER.len()..],
            None => component_id,
        };
        Self(format!("{CACHE_KEY_PREFIX}{normalized}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CacheKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_id_marker() {
        assert_eq!(CacheKey::derive("id_Xb3kLm9").as_str(), "partnerLogos_Xb3kLm9");
    }

    #[test]
    fn raw_id_without_marker() {
        assert_eq!(CacheKey::derive("header-logo").as_str(), "partnerLogos_header-logo");
    }

    #[test]
    fn marker_in_the_middle_drops_everything_before_it() {
        assert_eq!(CacheKey::derive("frame_id_42").as_str(), "partnerLogos_42");
    }

    #[test]
    fn only_first_marker_is_stripped() {
        assert_eq!(CacheKey::derive("id_id_7").as_str(), "partnerLogos_id_7");
    }

    #[test]
    fn derivation_is_deterministic() {
        assert_eq!(CacheKey::derive("id_abc"), CacheKey::derive("id_abc"));
        assert_ne!(CacheKey::derive("id_abc"), CacheKey::derive("id_abd"));
    }

    #[test]
    fn empty_id_yields_bare_prefix() {
        assert_eq!(CacheKey::derive("").as_str(), CACHE_KEY_PREFIX);
    }
}
