//! Experiment Playground App
//!
//! Loads the bundled catalog and lays out the page.

use leptos::prelude::*;
use playground_core::{Catalog, MatchConfig};
use reactive_stores::Store;

use crate::components::{AlmostReadySection, Hero, IngredientSelector, ResultsSection, SelectionTray};
use crate::context::AppContext;
use crate::store::{classification_memo, AppState};

#[component]
pub fn App() -> impl IntoView {
    match Catalog::bundled() {
        Ok(catalog) => view! { <Playground catalog=catalog /> }.into_any(),
        Err(err) => {
            log::error!("[APP] Failed to load bundled catalog: {}", err);
            view! { <CatalogErrorPanel message=err.to_string() /> }.into_any()
        }
    }
}

#[component]
fn Playground(catalog: &'static Catalog) -> impl IntoView {
    let ctx = AppContext::new(catalog, MatchConfig::default());
    let store = Store::new(AppState::new());

    // Provide context to all children
    provide_context(ctx);
    provide_context(store);

    let classification = classification_memo(store, ctx);

    log::info!(
        "[APP] Catalog v{} ready: {} items, {} experiments",
        catalog.version(),
        catalog.items().len(),
        catalog.recipes().len()
    );

    view! {
        <div class="page">
            <main class="page-main">
                <Hero />
                <IngredientSelector />
                <SelectionTray />
                <ResultsSection classification=classification />
                <AlmostReadySection classification=classification />
            </main>
        </div>
    }
}

#[component]
fn CatalogErrorPanel(message: String) -> impl IntoView {
    view! {
        <div class="page">
            <main class="page-main">
                <section class="catalog-error">
                    <h1>"The experiment catalog could not be loaded"</h1>
                    <p>{message}</p>
                </section>
            </main>
        </div>
    }
}
