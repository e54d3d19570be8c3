//! Hero Panel
//!
//! Page intro with the featured experiment.

use leptos::prelude::*;

use crate::context::use_app_context;

const FEATURE_BADGES: &[(&str, &str)] = &[
    ("badge-sky", "Hands-on STEM"),
    ("badge-amber", "Explain the why"),
    ("badge-emerald", "Video walk-throughs"),
];

#[component]
pub fn Hero() -> impl IntoView {
    let catalog = use_app_context().catalog;
    let featured = catalog.featured_recipe();
    let blurb = catalog.featured().blurb.as_str();

    view! {
        <section class="hero">
            <div class="hero-grid">
                <div class="hero-pitch">
                    <span class="hero-kicker">"Experiment Playground"</span>
                    <h1>"Dream up science adventures with what's in your kitchen."</h1>
                    <p class="hero-lead">
                        "Pick the supplies you already have, and we'll match you with kid-approved \
                         experiments, adult talking points, and quick demo videos. Designed to feel \
                         playful for kids and insightful for grown-ups."
                    </p>
                    <div class="badge-row">
                        {FEATURE_BADGES.iter().map(|(class, label)| view! {
                            <span class=format!("badge {}", class)>{*label}</span>
                        }).collect_view()}
                    </div>
                </div>

                // Featured experiment
                <div class="hero-featured">
                    <div class="hero-featured-flag">"Try this today"</div>
                    <p class="hero-featured-kicker">"Featured Experiment"</p>
                    <h2>{featured.title.as_str()}</h2>
                    <p class="hero-featured-blurb">{blurb}</p>
                    <p class="hero-featured-cta">"Start by picking ingredients below"</p>
                </div>
            </div>
        </section>
    }
}
