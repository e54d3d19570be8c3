//! Application Context
//!
//! Read-only configuration provided via Leptos Context API.

use leptos::prelude::*;
use playground_core::{Catalog, MatchConfig};

/// App-wide values shared with every component
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Bundled items and recipes, never mutated
    pub catalog: &'static Catalog,
    /// How many missing items still count as "almost ready"
    pub match_config: MatchConfig,
}

impl AppContext {
    pub fn new(catalog: &'static Catalog, match_config: MatchConfig) -> Self {
        Self {
            catalog,
            match_config,
        }
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
