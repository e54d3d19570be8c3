//! Video Modal Component
//!
//! Full-screen embed of a recipe's demo video. Page scrolling is locked while
//! the modal is mounted.

use leptos::prelude::*;

const BODY_LOCK_CLASS: &str = "overflow-hidden";
const IFRAME_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";

fn set_body_scroll_locked(locked: bool) {
    let Some(body) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.body())
    else {
        return;
    };
    let classes = body.class_list();
    let result = if locked {
        classes.add_1(BODY_LOCK_CLASS)
    } else {
        classes.remove_1(BODY_LOCK_CLASS)
    };
    if let Err(err) = result {
        log::warn!("[VIDEO] Failed to update body class: {:?}", err);
    }
}

/// Keys that dismiss the modal; "Esc" is what older browsers report
pub fn closes_modal(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

/// Closes on the Close button or Escape
#[component]
pub fn VideoModal(
    title: &'static str,
    url: &'static str,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    set_body_scroll_locked(true);
    on_cleanup(|| set_body_scroll_locked(false));

    let keydown = window_event_listener(leptos::ev::keydown, move |ev| {
        if closes_modal(&ev.key()) {
            on_close.run(());
        }
    });
    on_cleanup(move || keydown.remove());

    view! {
        <div class="video-backdrop" role="dialog" aria-modal="true">
            <div class="video-frame">
                <div class="video-aspect">
                    <iframe
                        src=url
                        title=format!("{} video walkthrough", title)
                        allow=IFRAME_ALLOW
                        allowfullscreen=true
                    ></iframe>
                </div>
                <div class="video-footer">
                    <p>{format!("{} video demo", title)}</p>
                    <button
                        type="button"
                        class="video-close"
                        on:click=move |_| on_close.run(())
                    >
                        "Close"
                    </button>
                </div>
            </div>
        </div>
    }
}
