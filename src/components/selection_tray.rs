//! Selection Tray Component
//!
//! Picked items in the order they were chosen, each with a remove badge.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{
    store_selected_ids, store_selection_is_empty, store_selection_len, store_toggle_item, use_app_store,
};

#[component]
pub fn SelectionTray() -> impl IntoView {
    let catalog = use_app_context().catalog;
    let store = use_app_store();

    view! {
        <Show when=move || !store_selection_is_empty(&store)>
            <div class="selection-tray">
                <span class="tray-count">{move || format!("{} on hand", store_selection_len(&store))}</span>
                <For
                    each=move || store_selected_ids(&store)
                    key=|id| id.clone()
                    children=move |id| {
                        let label = catalog.label_for(&id).to_string();
                        let icon = catalog.icon_for(&id).to_string();
                        let aria = format!("Remove {}", label);
                        view! {
                            <span class="tray-badge">
                                <span aria-hidden="true">{icon}</span>
                                {label}
                                <button
                                    type="button"
                                    class="tray-remove"
                                    aria-label=aria
                                    on:click=move |_| {
                                        log::debug!("[TRAY] Removed {}", id);
                                        store_toggle_item(&store, &id);
                                    }
                                >
                                    "×"
                                </button>
                            </span>
                        }
                    }
                />
            </div>
        </Show>
    }
}
