//! Recipe Matcher
//!
//! Splits recipes into "ready" and "almost ready" buckets for a selection.

use crate::model::{ItemId, Recipe, RecipeId};
use crate::selection::Selection;

/// Default number of missing items a recipe may have and still be suggested
pub const DEFAULT_ALMOST_READY_LIMIT: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchConfig {
    /// Recipes missing `1..=almost_ready_limit` items land in `almost_ready`
    pub almost_ready_limit: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            almost_ready_limit: DEFAULT_ALMOST_READY_LIMIT,
        }
    }
}

/// One recipe in a bucket, with the required items still to grab
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecipeMatch {
    pub recipe_id: RecipeId,
    /// In the recipe's `required` order; empty for ready recipes
    pub missing: Vec<ItemId>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    pub ready: Vec<RecipeMatch>,
    pub almost_ready: Vec<RecipeMatch>,
}

impl Classification {
    pub fn is_empty(&self) -> bool {
        self.ready.is_empty() && self.almost_ready.is_empty()
    }
}

/// Classify with the default almost-ready limit
pub fn classify(selection: &Selection, recipes: &[Recipe]) -> Classification {
    classify_with(&MatchConfig::default(), selection, recipes)
}

/// Classify every recipe against the selection.
///
/// An empty selection puts every recipe in `ready` so there is starter
/// content to show. Otherwise a recipe is ready when nothing is missing,
/// almost ready when at most `almost_ready_limit` items are missing, and
/// dropped beyond that. Both buckets keep the input order.
pub fn classify_with(config: &MatchConfig, selection: &Selection, recipes: &[Recipe]) -> Classification {
    let mut result = Classification::default();

    if selection.is_empty() {
        result.ready = recipes
            .iter()
            .map(|recipe| RecipeMatch {
                recipe_id: recipe.id.clone(),
                missing: Vec::new(),
            })
            .collect();
        log::trace!("[MATCH] Empty selection, {} starter recipes", result.ready.len());
        return result;
    }

    for recipe in recipes {
        let missing = missing_items(selection, recipe);
        let entry = RecipeMatch {
            recipe_id: recipe.id.clone(),
            missing,
        };
        match entry.missing.len() {
            0 => result.ready.push(entry),
            n if n <= config.almost_ready_limit => result.almost_ready.push(entry),
            _ => {}
        }
    }

    log::trace!(
        "[MATCH] {} selected: {} ready, {} almost ready",
        selection.len(),
        result.ready.len(),
        result.almost_ready.len()
    );
    result
}

/// Required items of `recipe` not in the selection, in `required` order
pub fn missing_items(selection: &Selection, recipe: &Recipe) -> Vec<ItemId> {
    recipe
        .required
        .iter()
        .filter(|id| !selection.contains(id))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MessLevel, RecipeImage};

    fn make_recipe(id: &str, required: &[&str]) -> Recipe {
        Recipe {
            id: id.to_string(),
            title: format!("Recipe {}", id),
            short_description: String::new(),
            duration: "5 min".to_string(),
            age_range: "3+".to_string(),
            mess_level: MessLevel::Low,
            required: required.iter().map(|s| s.to_string()).collect(),
            optional: Vec::new(),
            steps: Vec::new(),
            science_spotlight: String::new(),
            how_to_explain: String::new(),
            adult_note: String::new(),
            extension_ideas: Vec::new(),
            safety_tip: None,
            image: RecipeImage {
                src: String::new(),
                alt: String::new(),
            },
            video_url: String::new(),
        }
    }

    fn ids(matches: &[RecipeMatch]) -> Vec<&str> {
        matches.iter().map(|m| m.recipe_id.as_str()).collect()
    }

    fn select(items: &[&str]) -> Selection {
        items.iter().copied().collect()
    }

    #[test]
    fn test_empty_selection_readies_everything() {
        let recipes = vec![make_recipe("a", &["x", "y", "z", "w"]), make_recipe("b", &["x"])];
        let result = classify(&Selection::new(), &recipes);

        assert_eq!(ids(&result.ready), vec!["a", "b"]);
        assert!(result.ready.iter().all(|m| m.missing.is_empty()));
        assert!(result.almost_ready.is_empty());
    }

    #[test]
    fn test_buckets_by_missing_count() {
        let recipes = vec![
            make_recipe("full", &["x", "y"]),
            make_recipe("one", &["x", "q"]),
            make_recipe("two", &["q", "x", "r"]),
            make_recipe("three", &["q", "r", "s"]),
        ];
        let result = classify(&select(&["x", "y"]), &recipes);

        assert_eq!(ids(&result.ready), vec!["full"]);
        assert_eq!(ids(&result.almost_ready), vec!["one", "two"]);
        assert_eq!(result.almost_ready[0].missing, vec!["q"]);
        assert_eq!(result.almost_ready[1].missing, vec!["q", "r"]);
    }

    #[test]
    fn test_missing_keeps_required_order() {
        let recipe = make_recipe("r", &["c", "a", "b", "d"]);
        let selection = select(&["d", "a"]);
        assert_eq!(missing_items(&selection, &recipe), vec!["c", "b"]);
    }

    #[test]
    fn test_output_follows_input_order() {
        let recipes = vec![
            make_recipe("z", &["x", "q"]),
            make_recipe("m", &["x"]),
            make_recipe("a", &["x", "q"]),
            make_recipe("b", &["x"]),
        ];
        let result = classify(&select(&["x"]), &recipes);
        assert_eq!(ids(&result.ready), vec!["m", "b"]);
        assert_eq!(ids(&result.almost_ready), vec!["z", "a"]);
    }

    #[test]
    fn test_zero_required_is_vacuously_ready() {
        let recipes = vec![make_recipe("free", &[])];
        let result = classify(&select(&["anything"]), &recipes);
        assert_eq!(ids(&result.ready), vec!["free"]);
        assert!(result.almost_ready.is_empty());
    }

    #[test]
    fn test_duplicate_required_reported_per_occurrence() {
        let recipes = vec![make_recipe("doubled", &["x", "x", "y"])];
        let result = classify(&select(&["y"]), &recipes);

        assert!(result.ready.is_empty());
        assert_eq!(ids(&result.almost_ready), vec!["doubled"]);
        assert_eq!(result.almost_ready[0].missing, vec!["x", "x"]);
    }

    #[test]
    fn test_unknown_selected_ids_are_ignored() {
        let recipes = vec![make_recipe("r", &["x"])];
        let result = classify(&select(&["not-an-item"]), &recipes);
        assert!(result.ready.is_empty());
        assert_eq!(result.almost_ready[0].missing, vec!["x"]);
    }

    #[test]
    fn test_custom_limit() {
        let recipes = vec![make_recipe("one", &["x", "q"]), make_recipe("three", &["q", "r", "s"])];
        let selection = select(&["x"]);

        let strict = classify_with(&MatchConfig { almost_ready_limit: 0 }, &selection, &recipes);
        assert!(strict.is_empty());

        let loose = classify_with(&MatchConfig { almost_ready_limit: 3 }, &selection, &recipes);
        assert_eq!(ids(&loose.almost_ready), vec!["one", "three"]);
    }

    #[test]
    fn test_empty_recipe_list() {
        let result = classify(&select(&["x"]), &[]);
        assert!(result.is_empty());
        assert!(classify(&Selection::new(), &[]).is_empty());
    }
}
