// 📦 Part Catalog - the static list of VEX parts a team can own
//
// The catalog is seeded once at startup from a CSV table compiled into the
// binary and is never mutated afterwards. Part ids are unique; part numbers
// are NOT (the seed data reuses 276-2174 and 276-2169).

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::io::Read;
use std::str::FromStr;
use thiserror::Error;

const BUILTIN_CATALOG: &str = include_str!("../data/vex_parts.csv");

// ============================================================================
// CATEGORY
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Structure,
    Motion,
    Electronics,
    Pneumatics,
    Hardware,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown part category: {0:?}")]
pub struct UnknownCategory(pub String);

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 5] = [
        Category::Structure,
        Category::Motion,
        Category::Electronics,
        Category::Pneumatics,
        Category::Hardware,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Structure => "Structure",
            Category::Motion => "Motion",
            Category::Electronics => "Electronics",
            Category::Pneumatics => "Pneumatics",
            Category::Hardware => "Hardware",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

// ============================================================================
// PART DEFINITION
// ============================================================================

/// One catalog entry. Field names match the CSV header of the seed table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartDefinition {
    /// Stable identifier, unique across the catalog
    pub id: String,

    /// Display name (e.g., "4\" Omni Wheel")
    pub name: String,

    /// Manufacturer code (e.g., "276-2177") - may repeat across parts
    pub part_number: String,

    pub category: Category,

    pub description: String,
}

impl PartDefinition {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        part_number: impl Into<String>,
        category: Category,
        description: impl Into<String>,
    ) -> Self {
        PartDefinition {
            id: id.into(),
            name: name.into(),
            part_number: part_number.into(),
            category,
            description: description.into(),
        }
    }
}

// ============================================================================
// CATALOG
// ============================================================================

/// Immutable, ordered list of part definitions
#[derive(Debug, Clone)]
pub struct Catalog {
    parts: Vec<PartDefinition>,
}

impl Catalog {
    /// Load the seed catalog embedded in the binary
    pub fn builtin() -> Result<Self> {
        Catalog::from_reader(BUILTIN_CATALOG.as_bytes()).context("Failed to load built-in catalog")
    }

    /// Parse a catalog from CSV with header `id,name,part_number,category,description`
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::Reader::from_reader(reader);

        let mut parts = Vec::new();
        for (index, result) in rdr.deserialize().enumerate() {
            // +2: header is line 1
            let part: PartDefinition = result
                .with_context(|| format!("Failed to parse catalog line {}", index + 2))?;
            parts.push(part);
        }

        Catalog::from_parts(parts)
    }

    /// Build a catalog from values, rejecting duplicate ids
    pub fn from_parts(parts: Vec<PartDefinition>) -> Result<Self> {
        let mut seen = HashSet::new();
        for part in &parts {
            if !seen.insert(part.id.as_str()) {
                bail!("Duplicate part id in catalog: {}", part.id);
            }
        }

        Ok(Catalog { parts })
    }

    pub fn parts(&self) -> &[PartDefinition] {
        &self.parts
    }

    pub fn get(&self, id: &str) -> Option<&PartDefinition> {
        self.parts.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Number of parts in one category
    pub fn count_in(&self, category: Category) -> usize {
        self.parts.iter().filter(|p| p.category == category).count()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_loads_all_parts() {
        let catalog = Catalog::builtin().unwrap();

        assert_eq!(catalog.len(), 24);
        assert_eq!(catalog.parts()[0].id, "1");
        assert_eq!(catalog.parts()[23].id, "24");
        assert_eq!(catalog.count_in(Category::Structure), 5);
        assert_eq!(catalog.count_in(Category::Motion), 5);
        assert_eq!(catalog.count_in(Category::Electronics), 5);
        assert_eq!(catalog.count_in(Category::Pneumatics), 4);
        assert_eq!(catalog.count_in(Category::Hardware), 5);
    }

    #[test]
    fn test_builtin_catalog_keeps_quoted_names() {
        let catalog = Catalog::builtin().unwrap();

        let omni = catalog.get("6").unwrap();
        assert_eq!(omni.name, "4\" Omni Wheel");
        assert_eq!(omni.part_number, "276-2177");
        assert_eq!(omni.category, Category::Motion);

        assert_eq!(catalog.get("20").unwrap().name, "8-32 x 0.5\" Screw");
    }

    #[test]
    fn test_part_numbers_are_not_unique() {
        let catalog = Catalog::builtin().unwrap();

        let shared: Vec<&str> = catalog
            .parts()
            .iter()
            .filter(|p| p.part_number == "276-2174")
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(shared, vec!["2.75\" Traction Wheel", "Single Acting Cylinder"]);

        let chain = catalog.parts().iter().filter(|p| p.part_number == "276-2169").count();
        assert_eq!(chain, 2);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let parts = vec![
            PartDefinition::new("1", "A", "000-0001", Category::Hardware, ""),
            PartDefinition::new("1", "B", "000-0002", Category::Hardware, ""),
        ];

        let err = Catalog::from_parts(parts).unwrap_err();
        assert!(err.to_string().contains("Duplicate part id"));
    }

    #[test]
    fn test_unknown_category_in_csv_rejected() {
        let csv = "id,name,part_number,category,description\n1,Widget,000-0001,Gadgets,Nope\n";

        let err = Catalog::from_reader(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("Motion".parse::<Category>().unwrap(), Category::Motion);
        assert_eq!("pneumatics".parse::<Category>().unwrap(), Category::Pneumatics);
        assert_eq!(
            "Wheels".parse::<Category>().unwrap_err(),
            UnknownCategory("Wheels".to_string())
        );
    }

    #[test]
    fn test_get_missing_part() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.get("99").is_none());
    }
}
