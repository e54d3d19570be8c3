//! Experiment Playground Core
//!
//! Bundled catalog, ingredient selection and the matcher that decides which
//! experiments are ready or almost ready. Target-independent so it can be
//! tested natively and used from the WASM frontend.

mod catalog;
mod error;
mod matcher;
mod model;
mod selection;


pub use catalog::{Catalog, FALLBACK_ICON};
pub use error::CatalogError;
pub use matcher::{
    classify, classify_with, missing_items, Classification, MatchConfig, RecipeMatch,
    DEFAULT_ALMOST_READY_LIMIT,
};
pub use model::{Category, Featured, Item, ItemId, MessLevel, Recipe, RecipeId, RecipeImage};
pub use selection::Selection;
