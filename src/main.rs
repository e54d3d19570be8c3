//! Experiment Playground Frontend Entry Point

mod app;
mod components;
mod context;
mod headings;
mod logger;
mod markdown;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(logger::default_level());
    mount_to_body(App);
}
