//! Shared application state for the web server.

use std::sync::Arc;

use morbyx_config::RankerConfig;
use morbyx_ingestion::SymptomIndex;

/// Shared state injected into every Axum handler.
///
/// The index is built once at startup and never mutated, so it is shared
/// across concurrent requests without locking.
#[derive(Clone)]
pub struct AppState {
    pub index: Arc<SymptomIndex>,
    /// Default ranking policy; requests may override within handler clamps.
    pub ranker: RankerConfig,
}

impl AppState {
    pub fn new(index: SymptomIndex, ranker: RankerConfig) -> Self {
        Self {
            index: Arc::new(index),
            ranker,
        }
    }
}

pub type SharedState = Arc<AppState>;
