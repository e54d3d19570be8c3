//! Results Copy
//!
//! Which heading and prompts the results area shows for a given state.

pub const STARTER_PROMPT: &str =
    "Add an ingredient above to start receiving personalized experiments.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsHeading {
    pub eyebrow: &'static str,
    pub title: &'static str,
    /// Shown under the title when nothing is ready yet
    pub hint: Option<String>,
}

/// Nudge for a selection with no ready recipes, worded for the almost-ready limit
pub fn close_hint(almost_ready_limit: usize) -> String {
    let ask = match almost_ready_limit {
        0 => return "Keep adding items to unlock an experiment.".to_string(),
        1 => "Add one more item".to_string(),
        2 => "Add one or two more items".to_string(),
        n => format!("Add up to {} more items", n),
    };
    format!("You're close! {} to unlock an experiment. See suggestions below.", ask)
}

pub fn results_heading(selection_empty: bool, ready_count: usize, almost_ready_limit: usize) -> ResultsHeading {
    if selection_empty {
        return ResultsHeading {
            eyebrow: "Kickoff collection",
            title: "Our favorite starter experiments",
            hint: None,
        };
    }
    if ready_count > 0 {
        ResultsHeading {
            eyebrow: "With your ingredients",
            title: "Experiments ready to go",
            hint: None,
        }
    } else {
        ResultsHeading {
            eyebrow: "With your ingredients",
            title: "No instant matches yet",
            hint: Some(close_hint(almost_ready_limit)),
        }
    }
}

/// Only reachable with an empty catalog
pub fn show_starter_prompt(selection_empty: bool, ready_count: usize) -> bool {
    selection_empty && ready_count == 0
}

pub fn show_almost_ready(selection_empty: bool, almost_count: usize) -> bool {
    !selection_empty && almost_count > 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use playground_core::DEFAULT_ALMOST_READY_LIMIT;

    #[test]
    fn test_empty_selection_shows_starters() {
        let heading = results_heading(true, 6, DEFAULT_ALMOST_READY_LIMIT);
        assert_eq!(heading.eyebrow, "Kickoff collection");
        assert_eq!(heading.title, "Our favorite starter experiments");
        assert_eq!(heading.hint, None);
    }

    #[test]
    fn test_ready_matches_heading() {
        let heading = results_heading(false, 2, DEFAULT_ALMOST_READY_LIMIT);
        assert_eq!(heading.eyebrow, "With your ingredients");
        assert_eq!(heading.title, "Experiments ready to go");
        assert_eq!(heading.hint, None);
    }

    #[test]
    fn test_no_matches_heading_has_hint() {
        let heading = results_heading(false, 0, DEFAULT_ALMOST_READY_LIMIT);
        assert_eq!(heading.title, "No instant matches yet");
        assert_eq!(
            heading.hint.as_deref(),
            Some("You're close! Add one or two more items to unlock an experiment. See suggestions below.")
        );
    }

    #[test]
    fn test_close_hint_follows_limit() {
        assert_eq!(close_hint(0), "Keep adding items to unlock an experiment.");
        assert!(close_hint(1).contains("Add one more item to unlock"));
        assert!(close_hint(2).contains("Add one or two more items"));
        assert!(close_hint(4).contains("Add up to 4 more items"));
    }

    #[test]
    fn test_section_visibility() {
        assert!(show_starter_prompt(true, 0));
        assert!(!show_starter_prompt(true, 3));
        assert!(!show_starter_prompt(false, 0));

        assert!(show_almost_ready(false, 1));
        assert!(!show_almost_ready(true, 4));
        assert!(!show_almost_ready(false, 0));
    }
}
