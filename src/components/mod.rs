//! UI Components
//!
//! Leptos components for the playground page.

mod experiment_card;
mod hero;
mod ingredient_selector;
mod results;
mod selection_tray;
mod video_modal;

pub use experiment_card::{ExperimentCard, Highlight};
pub use hero::Hero;
pub use ingredient_selector::IngredientSelector;
pub use results::{AlmostReadySection, ResultsSection};
pub use selection_tray::SelectionTray;
pub use video_modal::VideoModal;
