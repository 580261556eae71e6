use crate::models::{FacetSelection, Recipe};

/// Reduces recipes to those passing every active facet, keeping input order
///
/// Each facet joins its selected values differently:
/// - cuisine: the recipe's cuisine must be one of the selected values
/// - dietary: the recipe must carry ALL selected tags
/// - method: the recipe must carry ANY selected method
pub fn filter_by_facets<'a>(recipes: &'a [Recipe], selection: &FacetSelection) -> Vec<&'a Recipe> {
    recipes
        .iter()
        .filter(|recipe| {
            matches_cuisine(recipe, selection)
                && matches_dietary(recipe, selection)
                && matches_method(recipe, selection)
        })
        .collect()
}

/// Membership of the recipe's single cuisine in the selection
pub fn matches_cuisine(recipe: &Recipe, selection: &FacetSelection) -> bool {
    selection.cuisine.is_empty() || selection.cuisine.contains(&recipe.cuisine)
}

/// Recipe dietary tags must be a superset of the selection
pub fn matches_dietary(recipe: &Recipe, selection: &FacetSelection) -> bool {
    selection.dietary.iter().all(|tag| recipe.has_dietary(tag))
}

/// Recipe methods must intersect the selection
pub fn matches_method(recipe: &Recipe, selection: &FacetSelection) -> bool {
    selection.method.is_empty() || selection.method.iter().any(|m| recipe.has_method(m))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Facet;

    fn recipe(name: &str, cuisine: &str, dietary: &[&str], method: &[&str]) -> Recipe {
        let mut recipe = Recipe::new(name, cuisine, vec!["rice".to_string()]);
        recipe.dietary = dietary.iter().map(|s| s.to_string()).collect();
        recipe.method = method.iter().map(|s| s.to_string()).collect();
        recipe
    }

    fn names(recipes: Vec<&Recipe>) -> Vec<&str> {
        recipes.into_iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_empty_selection_keeps_everything() {
        let recipes = vec![
            recipe("A", "Italian", &[], &[]),
            recipe("B", "Thai", &["vegan"], &["frying"]),
        ];
        let filtered = filter_by_facets(&recipes, &FacetSelection::new());
        assert_eq!(names(filtered), vec!["A", "B"]);
    }

    #[test]
    fn test_dietary_requires_all_selected_tags() {
        let vegan_only = recipe("Salad", "Greek", &["vegan"], &[]);
        let selection = FacetSelection::new().with(Facet::Dietary, &["vegan", "gluten-free"]);
        assert!(!matches_dietary(&vegan_only, &selection));

        let both = recipe("Bowl", "Greek", &["vegan", "gluten-free", "nut-free"], &[]);
        assert!(matches_dietary(&both, &selection));
    }

    #[test]
    fn test_method_requires_any_selected_method() {
        let recipe = recipe("Fritters", "Indian", &[], &["baking", "frying"]);
        let selection = FacetSelection::new().with(Facet::Method, &["frying", "grilling"]);
        assert!(matches_method(&recipe, &selection));

        let steamed = FacetSelection::new().with(Facet::Method, &["steaming"]);
        assert!(!matches_method(&recipe, &steamed));
    }

    #[test]
    fn test_cuisine_is_membership() {
        let tacos = recipe("Tacos", "Mexican", &[], &[]);
        let selection = FacetSelection::new().with(Facet::Cuisine, &["Italian", "Mexican"]);
        assert!(matches_cuisine(&tacos, &selection));

        let italian = FacetSelection::new().with(Facet::Cuisine, &["Italian"]);
        assert!(!matches_cuisine(&tacos, &italian));
    }

    #[test]
    fn test_facet_values_are_case_sensitive() {
        let tacos = recipe("Tacos", "Mexican", &["Vegan"], &[]);
        let lower = FacetSelection::new().with(Facet::Cuisine, &["mexican"]);
        assert!(!matches_cuisine(&tacos, &lower));

        let vegan = FacetSelection::new().with(Facet::Dietary, &["vegan"]);
        assert!(!matches_dietary(&tacos, &vegan));
    }

    #[test]
    fn test_all_facets_must_pass_and_order_is_kept() {
        let recipes = vec![
            recipe("Pad Thai", "Thai", &["vegan"], &["frying"]),
            recipe("Green Curry", "Thai", &["vegan"], &["simmering"]),
            recipe("Pizza", "Italian", &["vegan"], &["baking"]),
            recipe("Satay", "Thai", &[], &["grilling"]),
            recipe("Spring Rolls", "Thai", &["vegan", "gluten-free"], &["frying"]),
        ];
        let selection = FacetSelection::new()
            .with(Facet::Cuisine, &["Thai"])
            .with(Facet::Dietary, &["vegan"])
            .with(Facet::Method, &["frying", "grilling"]);

        let filtered = filter_by_facets(&recipes, &selection);
        assert_eq!(names(filtered), vec!["Pad Thai", "Spring Rolls"]);
    }
}
