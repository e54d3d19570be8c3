//! Catalog loading errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("item id '{0}' is defined more than once")]
    DuplicateItem(String),
    #[error("recipe id '{0}' is defined more than once")]
    DuplicateRecipe(String),
    #[error("featured recipe '{0}' does not exist")]
    UnknownFeatured(String),
}
