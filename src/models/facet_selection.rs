use std::collections::BTreeSet;
use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// One of the three recipe classification axes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Facet {
    Cuisine,
    Dietary,
    Method,
}

impl Display for Facet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Facet::Cuisine => write!(f, "cuisine"),
            Facet::Dietary => write!(f, "dietary"),
            Facet::Method => write!(f, "method"),
        }
    }
}

/// Active filter values for each facet
///
/// An empty set means the facet places no constraint on the results.
/// Values are stored verbatim; they are compared against the catalog with
/// exact string equality.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FacetSelection {
    #[serde(default)]
    pub cuisine: BTreeSet<String>,
    #[serde(default)]
    pub dietary: BTreeSet<String>,
    #[serde(default)]
    pub method: BTreeSet<String>,
}

impl FacetSelection {
    /// Creates a selection with no active filters
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self, facet: Facet) -> &BTreeSet<String> {
        match facet {
            Facet::Cuisine => &self.cuisine,
            Facet::Dietary => &self.dietary,
            Facet::Method => &self.method,
        }
    }

    fn values_mut(&mut self, facet: Facet) -> &mut BTreeSet<String> {
        match facet {
            Facet::Cuisine => &mut self.cuisine,
            Facet::Dietary => &mut self.dietary,
            Facet::Method => &mut self.method,
        }
    }

    /// Activates a value; returns false if it was already active
    pub fn add(&mut self, facet: Facet, value: impl Into<String>) -> bool {
        self.values_mut(facet).insert(value.into())
    }

    /// Deactivates a value; returns false if it was not active
    pub fn remove(&mut self, facet: Facet, value: &str) -> bool {
        self.values_mut(facet).remove(value)
    }

    /// Mirrors a checkbox change: checked adds the value, unchecked removes it
    pub fn set(&mut self, facet: Facet, value: impl Into<String>, selected: bool) -> bool {
        let value = value.into();
        if selected {
            self.add(facet, value)
        } else {
            self.remove(facet, &value)
        }
    }

    /// Clears all three facets
    pub fn reset(&mut self) {
        self.cuisine.clear();
        self.dietary.clear();
        self.method.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.cuisine.is_empty() && self.dietary.is_empty() && self.method.is_empty()
    }

    /// Builder-style helper, mostly useful in tests and fixtures
    pub fn with(mut self, facet: Facet, values: &[&str]) -> Self {
        for value in values {
            self.add(facet, *value);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_selection_is_empty() {
        let selection = FacetSelection::new();
        assert!(selection.is_empty());
        assert!(selection.values(Facet::Method).is_empty());
    }

    #[test]
    fn test_add_duplicate_value() {
        let mut selection = FacetSelection::new();
        assert!(selection.add(Facet::Dietary, "vegan"));
        assert!(!selection.add(Facet::Dietary, "vegan"));
        assert_eq!(selection.dietary.len(), 1);
    }

    #[test]
    fn test_set_toggles_value() {
        let mut selection = FacetSelection::new();
        selection.set(Facet::Cuisine, "Italian", true);
        assert!(selection.cuisine.contains("Italian"));

        selection.set(Facet::Cuisine, "Italian", false);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_remove_missing_value() {
        let mut selection = FacetSelection::new();
        assert!(!selection.remove(Facet::Method, "grilling"));
    }

    #[test]
    fn test_reset_clears_all_facets() {
        let mut selection = FacetSelection::new()
            .with(Facet::Cuisine, &["Mexican"])
            .with(Facet::Dietary, &["vegan", "gluten-free"])
            .with(Facet::Method, &["baking"]);
        assert!(!selection.is_empty());

        selection.reset();
        assert!(selection.is_empty());
    }

    #[test]
    fn test_facet_serialization() {
        assert_eq!(serde_json::to_string(&Facet::Dietary).unwrap(), "\"dietary\"");
        let facet: Facet = serde_json::from_str("\"method\"").unwrap();
        assert_eq!(facet, Facet::Method);
        assert_eq!(Facet::Cuisine.to_string(), "cuisine");
    }

    #[test]
    fn test_deserialize_partial_selection() {
        let selection: FacetSelection = serde_json::from_str(r#"{"dietary":["vegan"]}"#).unwrap();
        assert!(selection.cuisine.is_empty());
        assert!(selection.dietary.contains("vegan"));
    }
}
