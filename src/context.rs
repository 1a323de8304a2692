//! Application Context
//!
//! Shared state provided via Leptos Context API.

use crate::config::AppConfig;

/// App-wide values provided via context
#[derive(Clone, Debug)]
pub struct AppContext {
    /// Where the item collection lives
    pub config: AppConfig,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }
}
