//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The selection is
//! the only mutable state on the page and is written through the helpers
//! below.

use leptos::prelude::*;
use playground_core::{classify_with, Classification, ItemId, Selection};
use reactive_stores::Store;

use crate::context::AppContext;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Items the user has on hand
    pub selection: Selection,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Toggle an item in the selection, returns whether it is now selected
pub fn store_toggle_item(store: &AppStore, item_id: &str) -> bool {
    store.selection().write().toggle(item_id)
}

/// Empty the selection
pub fn store_clear_selection(store: &AppStore) {
    store.selection().write().clear();
}

pub fn store_is_selected(store: &AppStore, item_id: &str) -> bool {
    store.selection().read().contains(item_id)
}

pub fn store_selection_is_empty(store: &AppStore) -> bool {
    store.selection().read().is_empty()
}

pub fn store_selection_len(store: &AppStore) -> usize {
    store.selection().read().len()
}

/// Selected ids in the order they were picked
pub fn store_selected_ids(store: &AppStore) -> Vec<ItemId> {
    store.selection().read().iter().map(str::to_string).collect()
}

/// Matcher output, recomputed whenever the selection changes
pub fn classification_memo(store: AppStore, ctx: AppContext) -> Memo<Classification> {
    Memo::new(move |_| {
        let selection = store.selection().read();
        classify_with(&ctx.match_config, &selection, ctx.catalog.recipes())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use playground_core::{Catalog, MatchConfig};

    fn with_store(test: impl FnOnce(AppStore)) {
        let owner = Owner::new();
        owner.set();
        test(Store::new(AppState::new()));
    }

    #[test]
    fn test_toggle_and_clear_through_store() {
        with_store(|store| {
            assert!(store_selection_is_empty(&store));
            assert!(store_toggle_item(&store, "milk"));
            assert!(store_toggle_item(&store, "spoon"));
            assert!(store_is_selected(&store, "milk"));
            assert_eq!(store_selected_ids(&store), vec!["milk", "spoon"]);

            assert!(!store_toggle_item(&store, "milk"));
            assert_eq!(store_selection_len(&store), 1);

            store_clear_selection(&store);
            assert!(store_selection_is_empty(&store));
        });
    }

    #[test]
    fn test_classification_follows_selection() {
        with_store(|store| {
            let catalog = Catalog::bundled().unwrap();
            let ctx = AppContext::new(catalog, MatchConfig::default());
            let classification = classification_memo(store, ctx);

            assert_eq!(classification.get().ready.len(), catalog.recipes().len());

            for id in ["balloon", "ribbon", "straw", "tape"] {
                store_toggle_item(&store, id);
            }
            let ready = classification.get().ready;
            assert_eq!(ready.len(), 1);
            assert_eq!(ready[0].recipe_id, "balloon-rocket");
        });
    }
}
