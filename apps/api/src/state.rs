use std::sync::Arc;

use crate::comparison::scorer::{Comparator, KeywordComparator};
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable comparator. Default: KeywordComparator.
    pub comparator: Arc<dyn Comparator>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            comparator: Arc::new(KeywordComparator),
        }
    }
}
