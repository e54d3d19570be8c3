//! Results Sections
//!
//! Ready and almost-ready experiment lists driven by the matcher memo.

use leptos::prelude::*;
use playground_core::{Classification, ItemId, RecipeMatch};

use crate::components::{ExperimentCard, Highlight};
use crate::context::use_app_context;
use crate::headings::{results_heading, show_almost_ready, show_starter_prompt, STARTER_PROMPT};
use crate::store::{store_selection_is_empty, use_app_store};

/// Current missing list of `recipe_id`, empty once it has left the bucket
fn missing_for(matches: &[RecipeMatch], recipe_id: &str) -> Vec<ItemId> {
    matches
        .iter()
        .find(|m| m.recipe_id == recipe_id)
        .map(|m| m.missing.clone())
        .unwrap_or_default()
}

/// Cards for one bucket, in matcher order.
///
/// Keyed by recipe so a card stays mounted (and keeps its video open) while
/// only its missing list changes.
#[component]
fn MatchList(#[prop(into)] matches: Signal<Vec<RecipeMatch>>, highlight: Highlight) -> impl IntoView {
    let catalog = use_app_context().catalog;

    view! {
        <For
            each=move || matches.get()
            key=|m| m.recipe_id.clone()
            children=move |m| {
                let recipe = catalog.recipe(&m.recipe_id);
                if recipe.is_none() {
                    log::warn!("[RESULTS] Unknown recipe '{}'", m.recipe_id);
                }
                let recipe_id = m.recipe_id;
                let missing = Signal::derive(move || matches.with(|all| missing_for(all, &recipe_id)));
                recipe.map(|recipe| view! {
                    <ExperimentCard recipe=recipe highlight=highlight missing=missing />
                })
            }
        />
    }
}

#[component]
pub fn ResultsSection(classification: Memo<Classification>) -> impl IntoView {
    let limit = use_app_context().match_config.almost_ready_limit;
    let store = use_app_store();
    let ready_count = move || classification.with(|c| c.ready.len());
    let heading = move || results_heading(store_selection_is_empty(&store), ready_count(), limit);

    view! {
        <section class="results">
            <header class="results-header">
                <p class="eyebrow">{move || heading().eyebrow}</p>
                <h2>{move || heading().title}</h2>
                {move || heading().hint.map(|hint| view! { <p class="results-hint">{hint}</p> })}
            </header>

            <div class="card-grid">
                <MatchList
                    matches=Signal::derive(move || classification.with(|c| c.ready.clone()))
                    highlight=Highlight::Ready
                />
                <Show when=move || show_starter_prompt(store_selection_is_empty(&store), ready_count())>
                    <p class="starter-prompt">{STARTER_PROMPT}</p>
                </Show>
            </div>
        </section>
    }
}

#[component]
pub fn AlmostReadySection(classification: Memo<Classification>) -> impl IntoView {
    let store = use_app_store();
    let visible = move || {
        show_almost_ready(
            store_selection_is_empty(&store),
            classification.with(|c| c.almost_ready.len()),
        )
    };

    view! {
        <Show when=visible>
            <section class="results almost">
                <header class="results-header">
                    <p class="eyebrow amber">"Grab one more thing"</p>
                    <h2>"Experiments that are almost ready"</h2>
                    <p class="results-hint">
                        "Missing ingredients are highlighted so you can decide whether to improvise \
                         or add them to your shopping list."
                    </p>
                </header>
                <div class="card-grid">
                    <MatchList
                        matches=Signal::derive(move || classification.with(|c| c.almost_ready.clone()))
                        highlight=Highlight::Almost
                    />
                </div>
            </section>
        </Show>
    }
}
