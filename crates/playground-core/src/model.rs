//! Catalog Entities
//!
//! Immutable records loaded from the bundled catalog file.

use serde::{Deserialize, Serialize};

/// Identifier of an [`Item`], e.g. `"dish-soap"`
pub type ItemId = String;

/// Identifier of a [`Recipe`], e.g. `"magic-milk"`
pub type RecipeId = String;

/// Shelf an item is grouped under in the selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Liquids,
    Pantry,
    Household,
    Tools,
}

impl Category {
    /// Display order of the selector groups
    pub const ALL: [Category; 4] = [
        Category::Liquids,
        Category::Pantry,
        Category::Household,
        Category::Tools,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Liquids => "Liquids",
            Category::Pantry => "Pantry",
            Category::Household => "Household",
            Category::Tools => "Tools",
        }
    }
}

/// How much cleanup an experiment leaves behind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessLevel {
    Low,
    Medium,
    High,
}

impl MessLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessLevel::Low => "Low",
            MessLevel::Medium => "Medium",
            MessLevel::High => "High",
        }
    }
}

/// A household object the user can declare as available
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub label: String,
    pub category: Category,
    /// Emoji shown next to the label
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeImage {
    pub src: String,
    pub alt: String,
}

/// A predefined experiment
///
/// Only `required` takes part in matching. Everything else is display content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    pub short_description: String,
    pub duration: String,
    pub age_range: String,
    pub mess_level: MessLevel,
    /// Items that must all be selected, in display order
    pub required: Vec<ItemId>,
    /// Nice-to-have extras, never matched against
    #[serde(default)]
    pub optional: Vec<ItemId>,
    pub steps: Vec<String>,
    pub science_spotlight: String,
    pub how_to_explain: String,
    pub adult_note: String,
    #[serde(default)]
    pub extension_ideas: Vec<String>,
    #[serde(default)]
    pub safety_tip: Option<String>,
    pub image: RecipeImage,
    /// Embeddable video URL, passed through to an iframe
    pub video_url: String,
}

/// Recipe highlighted in the hero panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Featured {
    pub recipe_id: RecipeId,
    pub blurb: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_roundtrips_capitalized_name() {
        let parsed: Category = serde_json::from_str("\"Household\"").unwrap();
        assert_eq!(parsed, Category::Household);
        assert_eq!(parsed.as_str(), "Household");
    }

    #[test]
    fn test_recipe_optional_fields_default() {
        let json = r#"{
            "id": "r",
            "title": "R",
            "short_description": "",
            "duration": "5 min",
            "age_range": "3+",
            "mess_level": "High",
            "required": ["a"],
            "steps": [],
            "science_spotlight": "",
            "how_to_explain": "",
            "adult_note": "",
            "image": { "src": "", "alt": "" },
            "video_url": ""
        }"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert!(recipe.optional.is_empty());
        assert!(recipe.extension_ideas.is_empty());
        assert_eq!(recipe.safety_tip, None);
        assert_eq!(recipe.mess_level, MessLevel::High);
    }
}
