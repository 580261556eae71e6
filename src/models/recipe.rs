use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A single catalog entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Recipe {
    /// Display name (e.g., "Spaghetti Aglio e Olio")
    pub name: String,
    /// Single cuisine category, stored with the catalog's casing
    pub cuisine: String,
    /// Dietary tags (e.g., "vegan", "gluten-free")
    #[serde(default)]
    pub dietary: Vec<String>,
    /// Cooking method tags (e.g., "baking", "frying")
    #[serde(default)]
    pub method: Vec<String>,
    /// Ingredients in display order
    pub ingredients: Vec<String>,
    /// Total time in minutes
    pub time: u32,
    #[serde(default)]
    pub description: String,
}

impl Recipe {
    /// Creates a recipe with no facet tags
    pub fn new(name: impl Into<String>, cuisine: impl Into<String>, ingredients: Vec<String>) -> Self {
        Self {
            name: name.into(),
            cuisine: cuisine.into(),
            dietary: Vec::new(),
            method: Vec::new(),
            ingredients,
            time: 0,
            description: String::new(),
        }
    }

    /// A recipe without ingredients cannot be scored
    pub fn is_valid(&self) -> bool {
        !self.ingredients.is_empty()
    }

    pub fn has_dietary(&self, tag: &str) -> bool {
        self.dietary.iter().any(|d| d == tag)
    }

    pub fn has_method(&self, tag: &str) -> bool {
        self.method.iter().any(|m| m == tag)
    }
}

/// A recipe annotated with its coverage against an availability pool
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ScoredRecipe {
    #[serde(flatten)]
    pub recipe: Recipe,
    /// Rounded coverage, 0..=100
    pub match_percentage: u8,
    pub matched_count: usize,
    /// Full ingredient count, before any display truncation
    pub total_count: usize,
    /// Lower-cased ingredients with no match, in recipe order
    pub missing_ingredients: Vec<String>,
}

/// Distinct facet values present in a catalog, used to build filter controls
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct FacetValues {
    pub cuisine: BTreeSet<String>,
    pub dietary: BTreeSet<String>,
    pub method: BTreeSet<String>,
}

/// The read-only recipe catalog shared by every search
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Number of entries that will be skipped at search time
    pub fn malformed_count(&self) -> usize {
        self.recipes.iter().filter(|r| !r.is_valid()).count()
    }

    /// Collects every cuisine, dietary tag and method used by the catalog
    pub fn facet_values(&self) -> FacetValues {
        let mut values = FacetValues::default();
        for recipe in &self.recipes {
            values.cuisine.insert(recipe.cuisine.clone());
            values.dietary.extend(recipe.dietary.iter().cloned());
            values.method.extend(recipe.method.iter().cloned());
        }
        values
    }
}

impl From<Vec<Recipe>> for Catalog {
    fn from(recipes: Vec<Recipe>) -> Self {
        Self::new(recipes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pancakes() -> Recipe {
        Recipe {
            name: "Pancakes".to_string(),
            cuisine: "American".to_string(),
            dietary: vec!["vegetarian".to_string()],
            method: vec!["frying".to_string()],
            ingredients: vec!["Flour".to_string(), "Milk".to_string(), "Egg".to_string()],
            time: 20,
            description: "Fluffy breakfast pancakes".to_string(),
        }
    }

    #[test]
    fn test_deserialize_recipe_with_defaults() {
        let json = r#"{
            "name": "Toast",
            "cuisine": "British",
            "ingredients": ["bread", "butter"],
            "time": 5
        }"#;

        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.name, "Toast");
        assert!(recipe.dietary.is_empty());
        assert!(recipe.method.is_empty());
        assert_eq!(recipe.description, "");
        assert!(recipe.is_valid());
    }

    #[test]
    fn test_recipe_without_ingredients_is_invalid() {
        let recipe = Recipe::new("Air", "None", vec![]);
        assert!(!recipe.is_valid());
    }

    #[test]
    fn test_tag_lookup_is_case_sensitive() {
        let recipe = pancakes();
        assert!(recipe.has_dietary("vegetarian"));
        assert!(!recipe.has_dietary("Vegetarian"));
        assert!(recipe.has_method("frying"));
        assert!(!recipe.has_method("baking"));
    }

    #[test]
    fn test_scored_recipe_flattens_recipe_fields() {
        let scored = ScoredRecipe {
            recipe: pancakes(),
            match_percentage: 67,
            matched_count: 2,
            total_count: 3,
            missing_ingredients: vec!["egg".to_string()],
        };

        let json = serde_json::to_value(&scored).unwrap();
        assert_eq!(json["name"], "Pancakes");
        assert_eq!(json["match_percentage"], 67);
        assert_eq!(json["missing_ingredients"][0], "egg");
    }

    #[test]
    fn test_facet_values_are_distinct_and_sorted() {
        let mut curry = Recipe::new("Curry", "Indian", vec!["rice".to_string()]);
        curry.dietary = vec!["vegan".to_string(), "vegetarian".to_string()];
        curry.method = vec!["simmering".to_string()];

        let catalog = Catalog::new(vec![pancakes(), curry]);
        let values = catalog.facet_values();

        assert_eq!(
            values.cuisine.into_iter().collect::<Vec<_>>(),
            vec!["American", "Indian"]
        );
        assert_eq!(
            values.dietary.into_iter().collect::<Vec<_>>(),
            vec!["vegan", "vegetarian"]
        );
        assert_eq!(values.method.len(), 2);
    }

    #[test]
    fn test_malformed_count() {
        let catalog = Catalog::new(vec![pancakes(), Recipe::new("Empty", "None", vec![])]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.malformed_count(), 1);
    }
}
