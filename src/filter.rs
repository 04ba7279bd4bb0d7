// 🔍 Filter Engine - which catalog parts are visible for a category + search
//
// Pure functions over the catalog. Output keeps catalog order, no paging.

use crate::catalog::{Catalog, Category, PartDefinition, UnknownCategory};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// CATEGORY SELECTOR
// ============================================================================

/// Category constraint chosen in the browser: "All" or a single category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CategorySelector {
    #[default]
    All,
    Only(Category),
}

impl CategorySelector {
    /// Selectable values in display order (All first)
    pub const ALL_CHOICES: [CategorySelector; 6] = [
        CategorySelector::All,
        CategorySelector::Only(Category::Structure),
        CategorySelector::Only(Category::Motion),
        CategorySelector::Only(Category::Electronics),
        CategorySelector::Only(Category::Pneumatics),
        CategorySelector::Only(Category::Hardware),
    ];

    pub fn admits(&self, category: Category) -> bool {
        match self {
            CategorySelector::All => true,
            CategorySelector::Only(selected) => *selected == category,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategorySelector::All => "All",
            CategorySelector::Only(category) => category.as_str(),
        }
    }

    fn position(&self) -> usize {
        Self::ALL_CHOICES
            .iter()
            .position(|choice| choice == self)
            .unwrap_or(0)
    }

    /// Next choice, wrapping Hardware -> All
    pub fn next(&self) -> Self {
        let len = Self::ALL_CHOICES.len();
        Self::ALL_CHOICES[(self.position() + 1) % len]
    }

    /// Previous choice, wrapping All -> Hardware
    pub fn previous(&self) -> Self {
        let len = Self::ALL_CHOICES.len();
        Self::ALL_CHOICES[(self.position() + len - 1) % len]
    }
}

impl From<Category> for CategorySelector {
    fn from(category: Category) -> Self {
        CategorySelector::Only(category)
    }
}

impl fmt::Display for CategorySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CategorySelector {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(CategorySelector::All)
        } else {
            s.parse::<Category>().map(CategorySelector::Only)
        }
    }
}

// ============================================================================
// MATCHING
// ============================================================================

/// Case-insensitive match of the search text against name or part number.
/// Empty search text matches everything.
fn matches_search(part: &PartDefinition, needle_lower: &str) -> bool {
    needle_lower.is_empty()
        || part.name.to_lowercase().contains(needle_lower)
        || part.part_number.to_lowercase().contains(needle_lower)
}

/// Full visibility predicate for one part
pub fn matches(part: &PartDefinition, selector: CategorySelector, search_text: &str) -> bool {
    selector.admits(part.category) && matches_search(part, &search_text.to_lowercase())
}

/// Parts visible for the given selector and search text, in catalog order
pub fn visible_parts<'a>(
    catalog: &'a Catalog,
    selector: CategorySelector,
    search_text: &str,
) -> Vec<&'a PartDefinition> {
    let needle = search_text.to_lowercase();

    catalog
        .parts()
        .iter()
        .filter(|part| selector.admits(part.category) && matches_search(part, &needle))
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ids(parts: &[&PartDefinition]) -> Vec<String> {
        parts.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn test_all_with_empty_search_returns_whole_catalog() {
        let catalog = Catalog::builtin().unwrap();
        let visible = visible_parts(&catalog, CategorySelector::All, "");

        assert_eq!(visible.len(), catalog.len());
        assert_eq!(ids(&visible), catalog.parts().iter().map(|p| p.id.clone()).collect::<Vec<_>>());
    }

    #[test]
    fn test_motion_omni_returns_omni_wheel_only() {
        let catalog = Catalog::builtin().unwrap();
        let visible = visible_parts(&catalog, Category::Motion.into(), "omni");

        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "4\" Omni Wheel");
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = Catalog::builtin().unwrap();

        let lower = visible_parts(&catalog, CategorySelector::All, "motor");
        let upper = visible_parts(&catalog, CategorySelector::All, "MOTOR");

        assert_eq!(ids(&lower), vec!["12", "13"]);
        assert_eq!(ids(&lower), ids(&upper));
    }

    #[test]
    fn test_search_matches_part_number() {
        let catalog = Catalog::builtin().unwrap();
        let visible = visible_parts(&catalog, CategorySelector::All, "276-2174");

        assert_eq!(ids(&visible), vec!["7", "16"]);
    }

    #[test]
    fn test_category_constraint_applies_to_part_number_hits() {
        let catalog = Catalog::builtin().unwrap();
        let visible = visible_parts(&catalog, Category::Pneumatics.into(), "276-2174");

        assert_eq!(ids(&visible), vec!["16"]);
    }

    #[test]
    fn test_description_is_not_searched() {
        let catalog = Catalog::builtin().unwrap();
        // "Gyroscope" only appears in the Inertial Sensor description
        assert!(visible_parts(&catalog, CategorySelector::All, "gyroscope").is_empty());
    }

    #[test]
    fn test_no_match_is_empty() {
        let catalog = Catalog::builtin().unwrap();
        assert!(visible_parts(&catalog, Category::Hardware.into(), "omni").is_empty());
    }

    #[test]
    fn test_selector_cycles() {
        assert_eq!(CategorySelector::All.next(), CategorySelector::Only(Category::Structure));
        assert_eq!(CategorySelector::Only(Category::Hardware).next(), CategorySelector::All);
        assert_eq!(CategorySelector::All.previous(), CategorySelector::Only(Category::Hardware));

        let mut selector = CategorySelector::All;
        for _ in 0..CategorySelector::ALL_CHOICES.len() {
            selector = selector.next();
        }
        assert_eq!(selector, CategorySelector::All);
    }

    #[test]
    fn test_selector_from_str() {
        assert_eq!("All".parse::<CategorySelector>().unwrap(), CategorySelector::All);
        assert_eq!("all".parse::<CategorySelector>().unwrap(), CategorySelector::All);
        assert_eq!(
            "Electronics".parse::<CategorySelector>().unwrap(),
            CategorySelector::Only(Category::Electronics)
        );
        assert!("Wheels".parse::<CategorySelector>().is_err());
    }

    proptest! {
        #[test]
        fn prop_visible_parts_is_ordered_subset(
            choice in 0usize..6,
            search in "[a-zA-Z0-9 .\"-]{0,4}",
        ) {
            let catalog = Catalog::builtin().unwrap();
            let selector = CategorySelector::ALL_CHOICES[choice];
            let visible = visible_parts(&catalog, selector, &search);

            let positions: Vec<usize> = visible
                .iter()
                .map(|v| catalog.parts().iter().position(|p| p.id == v.id).unwrap())
                .collect();
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));

            for part in catalog.parts() {
                let shown = visible.iter().any(|v| v.id == part.id);
                prop_assert_eq!(shown, matches(part, selector, &search));
            }
        }

        #[test]
        fn prop_visible_parts_is_idempotent(choice in 0usize..6, search in "[a-z0-9]{0,3}") {
            let catalog = Catalog::builtin().unwrap();
            let selector = CategorySelector::ALL_CHOICES[choice];

            let first = ids(&visible_parts(&catalog, selector, &search));
            let second = ids(&visible_parts(&catalog, selector, &search));
            prop_assert_eq!(first, second);
        }
    }
}
