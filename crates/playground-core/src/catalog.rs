//! Bundled Catalog
//!
//! The item and recipe dataset, embedded at compile time and parsed once.
//! Lookups never fail: a dangling item reference falls back to its raw id.

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use serde::Deserialize;

use crate::error::CatalogError;
use crate::model::{Category, Featured, Item, Recipe};

/// Icon shown for an item id that is not in the catalog
pub const FALLBACK_ICON: &str = "•";

static BUNDLED_JSON: &str = include_str!("../data/catalog.json");
static BUNDLED: OnceLock<Result<Catalog, CatalogError>> = OnceLock::new();

/// On-disk layout of `data/catalog.json`
#[derive(Deserialize)]
struct CatalogFile {
    version: u32,
    featured: Featured,
    items: Vec<Item>,
    recipes: Vec<Recipe>,
}

/// Immutable item and recipe dataset
#[derive(Debug, Clone)]
pub struct Catalog {
    version: u32,
    featured: Featured,
    items: Vec<Item>,
    recipes: Vec<Recipe>,
    item_index: HashMap<String, usize>,
    recipe_index: HashMap<String, usize>,
}

impl Catalog {
    /// The catalog shipped with the application.
    ///
    /// Parsed on first call; later calls return the cached result.
    pub fn bundled() -> Result<&'static Catalog, &'static CatalogError> {
        BUNDLED.get_or_init(|| Catalog::from_json(BUNDLED_JSON)).as_ref()
    }

    /// Parse and validate a catalog document
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        let catalog = Self::build(file)?;
        log::debug!(
            "[CATALOG] Loaded v{}: {} items, {} recipes",
            catalog.version,
            catalog.items.len(),
            catalog.recipes.len()
        );
        Ok(catalog)
    }

    fn build(file: CatalogFile) -> Result<Self, CatalogError> {
        let mut item_index = HashMap::with_capacity(file.items.len());
        for (pos, item) in file.items.iter().enumerate() {
            if item_index.insert(item.id.clone(), pos).is_some() {
                return Err(CatalogError::DuplicateItem(item.id.clone()));
            }
        }

        let mut recipe_index = HashMap::with_capacity(file.recipes.len());
        for (pos, recipe) in file.recipes.iter().enumerate() {
            if recipe_index.insert(recipe.id.clone(), pos).is_some() {
                return Err(CatalogError::DuplicateRecipe(recipe.id.clone()));
            }
        }

        if !recipe_index.contains_key(&file.featured.recipe_id) {
            return Err(CatalogError::UnknownFeatured(file.featured.recipe_id.clone()));
        }

        let catalog = Self {
            version: file.version,
            featured: file.featured,
            items: file.items,
            recipes: file.recipes,
            item_index,
            recipe_index,
        };
        catalog.warn_on_loose_references();
        Ok(catalog)
    }

    /// Dangling ids and empty requirement lists are tolerated, only reported
    fn warn_on_loose_references(&self) {
        for recipe in &self.recipes {
            if recipe.required.is_empty() {
                log::warn!("[CATALOG] Recipe '{}' has no required items", recipe.id);
            }
            let mut seen = HashSet::new();
            for id in recipe.required.iter().chain(&recipe.optional) {
                if !self.item_index.contains_key(id) && seen.insert(id) {
                    log::warn!("[CATALOG] Recipe '{}' references unknown item '{}'", recipe.id, id);
                }
            }
        }
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn item(&self, id: &str) -> Option<&Item> {
        self.item_index.get(id).map(|&pos| &self.items[pos])
    }

    pub fn recipe(&self, id: &str) -> Option<&Recipe> {
        self.recipe_index.get(id).map(|&pos| &self.recipes[pos])
    }

    /// Display label for an item, or the raw id if it is unknown
    pub fn label_for<'a>(&'a self, id: &'a str) -> &'a str {
        self.item(id).map(|item| item.label.as_str()).unwrap_or(id)
    }

    pub fn icon_for(&self, id: &str) -> &str {
        self.item(id).map(|item| item.icon.as_str()).unwrap_or(FALLBACK_ICON)
    }

    /// Items grouped for the selector.
    ///
    /// Every category appears once in [`Category::ALL`] order, even when empty.
    /// Items keep their catalog order inside a group.
    pub fn items_by_category(&self) -> Vec<(Category, Vec<&Item>)> {
        Category::ALL
            .iter()
            .map(|&category| {
                let items = self.items.iter().filter(|item| item.category == category).collect();
                (category, items)
            })
            .collect()
    }

    pub fn featured(&self) -> &Featured {
        &self.featured
    }

    /// Recipe named by the featured entry (checked at load time)
    pub fn featured_recipe(&self) -> &Recipe {
        &self.recipes[self.recipe_index[&self.featured.recipe_id]]
    }
}
