//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::{CacheConfig, SuggestionCache};
use crate::catalog::Catalog;
use crate::engine::EngineConfig;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Destinations and search history
    pub catalog: Catalog,

    /// Nearby result cache
    pub cache: Arc<SuggestionCache>,

    /// Ranking configuration
    pub engine: Arc<EngineConfig>,

    /// Most destinations handed to the engine per request
    pub max_candidates: usize,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        catalog: Catalog,
        cache_config: &CacheConfig,
        engine: EngineConfig,
        max_candidates: usize,
    ) -> Self {
        Self {
            catalog,
            cache: Arc::new(SuggestionCache::new(cache_config)),
            engine: Arc::new(engine),
            max_candidates,
        }
    }
}
