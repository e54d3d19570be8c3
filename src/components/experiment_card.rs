//! Experiment Card Component
//!
//! Full write-up of one recipe: what it needs, what is missing, the steps and
//! the talking points, plus a demo video button.

use leptos::prelude::*;
use playground_core::{Catalog, ItemId, Recipe};

use crate::components::VideoModal;
use crate::context::use_app_context;
use crate::markdown::render_inline;

/// Which bucket the card is shown in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    Ready,
    Almost,
}

impl Highlight {
    pub fn card_class(&self) -> &'static str {
        match self {
            Highlight::Ready => "experiment-card match",
            Highlight::Almost => "experiment-card almost",
        }
    }

    pub fn eyebrow(&self) -> &'static str {
        match self {
            Highlight::Ready => "Ready to Launch",
            Highlight::Almost => "Almost There",
        }
    }
}

/// Comma-separated labels, unknown ids shown as-is
fn joined_labels(catalog: &Catalog, ids: &[ItemId]) -> String {
    ids.iter()
        .map(|id| catalog.label_for(id))
        .collect::<Vec<_>>()
        .join(", ")
}

#[component]
pub fn ExperimentCard(
    recipe: &'static Recipe,
    highlight: Highlight,
    /// Required items the selection lacks, empty when ready
    #[prop(into)]
    missing: Signal<Vec<ItemId>>,
) -> impl IntoView {
    let catalog = use_app_context().catalog;
    let (video_open, set_video_open) = signal(false);

    let missing_text = move || missing.with(|ids| joined_labels(catalog, ids));
    let optional_text = joined_labels(catalog, &recipe.optional);

    view! {
        <article class=highlight.card_class()>
            <div class="card-glow"></div>
            <div class="card-body">
                <div class="card-media">
                    <img src=recipe.image.src.as_str() alt=recipe.image.alt.as_str() loading="lazy" />
                    <div class="badge-row">
                        <span class="badge badge-emerald">{recipe.duration.as_str()}</span>
                        <span class="badge badge-sky">{format!("Ages {}", recipe.age_range)}</span>
                        <span class="badge badge-amber">{format!("Mess: {}", recipe.mess_level.as_str())}</span>
                    </div>
                </div>

                <div class="card-content">
                    <header>
                        <p class="card-eyebrow">{highlight.eyebrow()}</p>
                        <h3>{recipe.title.as_str()}</h3>
                        <p class="card-summary">{recipe.short_description.as_str()}</p>
                    </header>

                    <section class="card-needs">
                        <h4>"You'll need"</h4>
                        <div class="pill-row">
                            {recipe.required.iter().map(|id| view! {
                                <span class="need-pill">{catalog.label_for(id)}</span>
                            }).collect_view()}
                        </div>
                        {move || {
                            let text = missing_text();
                            (!text.is_empty()).then(move || view! {
                                <p class="missing-line">
                                    "Grab these to make it happen: "
                                    <span>{text}</span>
                                </p>
                            })
                        }}
                        {(!optional_text.is_empty()).then(move || view! {
                            <p class="optional-line">"Optional sparkle: " {optional_text}</p>
                        })}
                    </section>

                    <section class="card-steps">
                        <h4>"Step-by-step adventure"</h4>
                        <ol>
                            {recipe.steps.iter().enumerate().map(|(idx, step)| view! {
                                <li>
                                    <span class="step-number">{idx + 1}</span>
                                    <span class="step-text" inner_html=render_inline(step)></span>
                                </li>
                            }).collect_view()}
                        </ol>
                    </section>

                    <section class="card-learning">
                        <div>
                            <h4>"What we're learning"</h4>
                            <p inner_html=render_inline(&recipe.science_spotlight)></p>
                        </div>
                        <div>
                            <h4>"Explain it to kids"</h4>
                            <p inner_html=render_inline(&recipe.how_to_explain)></p>
                        </div>
                    </section>

                    <section class="card-coaching">
                        <div>
                            <h4>"Adult coaching tip"</h4>
                            <p inner_html=render_inline(&recipe.adult_note)></p>
                        </div>
                        <div>
                            <h4>"Try next"</h4>
                            <ul>
                                {recipe.extension_ideas.iter().map(|idea| view! {
                                    <li inner_html=render_inline(idea)></li>
                                }).collect_view()}
                            </ul>
                            {recipe.safety_tip.as_deref().map(|tip| view! {
                                <p class="safety-tip">"Safety: " {tip}</p>
                            })}
                        </div>
                    </section>

                    <div class="card-actions">
                        <button
                            type="button"
                            class="video-btn"
                            on:click=move |_| {
                                log::debug!("[CARD] Opening video for {}", recipe.id);
                                set_video_open.set(true);
                            }
                        >
                            "▶ Watch quick demo"
                        </button>
                        <span class="badge badge-sky">"Built for co-learning"</span>
                    </div>
                </div>
            </div>
        </article>

        <Show when=move || video_open.get()>
            <VideoModal
                title=recipe.title.as_str()
                url=recipe.video_url.as_str()
                on_close=move |_| set_video_open.set(false)
            />
        </Show>
    }
}
