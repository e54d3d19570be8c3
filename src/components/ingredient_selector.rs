//! Ingredient Selector Component
//!
//! Toggle buttons for every catalog item, grouped by category.

use leptos::prelude::*;
use playground_core::Item;

use crate::context::use_app_context;
use crate::store::{store_clear_selection, store_is_selected, store_toggle_item, use_app_store};

/// One toggle button
#[component]
fn IngredientChip(item: &'static Item) -> impl IntoView {
    let store = use_app_store();
    let id = item.id.as_str();
    let is_active = move || store_is_selected(&store, id);

    view! {
        <button
            type="button"
            class=move || if is_active() { "chip active" } else { "chip" }
            aria-pressed=move || if is_active() { "true" } else { "false" }
            on:click=move |_| {
                let selected = store_toggle_item(&store, id);
                log::debug!("[SELECTOR] {} {}", if selected { "Selected" } else { "Deselected" }, id);
            }
        >
            <span class="chip-icon" aria-hidden="true">{item.icon.as_str()}</span>
            {item.label.as_str()}
        </button>
    }
}

#[component]
pub fn IngredientSelector() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    view! {
        <section class="selector">
            <header class="selector-header">
                <div>
                    <p class="eyebrow">"Ingredient Locker"</p>
                    <h2>"What do you have on your kitchen counter?"</h2>
                </div>
                <button
                    type="button"
                    class="clear-btn"
                    on:click=move |_| {
                        log::debug!("[SELECTOR] Clear all");
                        store_clear_selection(&store);
                    }
                >
                    "Clear all"
                </button>
            </header>

            <div class="selector-groups">
                {ctx.catalog.items_by_category().into_iter().map(|(category, items)| view! {
                    <div class="selector-group">
                        <h3>{category.as_str()}</h3>
                        <div class="chip-row">
                            {items.into_iter().map(|item| view! { <IngredientChip item=item /> }).collect_view()}
                        </div>
                    </div>
                }).collect_view()}
            </div>
        </section>
    }
}
