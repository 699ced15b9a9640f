//! Account-level handles the facade dispatches through.

use courier_core::FetchConfig;
use courier_interface::{FetchManager, MediaBox};
use derive_getters::Getters;
use std::sync::Arc;

/// The fetch manager, media cache and settings of one account.
///
/// Cloning is cheap; all handles are shared.
#[derive(Clone, Getters, derive_new::new)]
pub struct FetchContext {
    /// Scheduler for interactive fetches
    fetch_manager: Arc<dyn FetchManager>,
    /// Local media cache
    media_box: Arc<dyn MediaBox>,
    /// Dispatch settings
    #[new(default)]
    config: FetchConfig,
}

impl FetchContext {
    /// Replaces the dispatch settings.
    pub fn with_config(mut self, config: FetchConfig) -> Self {
        self.config = config;
        self
    }
}

impl std::fmt::Debug for FetchContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchContext")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
