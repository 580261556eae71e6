/// Ingredients every kitchen is assumed to have
///
/// Merged into every availability pool regardless of user input.
pub const PANTRY_STAPLES: [&str; 12] = [
    "salt",
    "pepper",
    "oil",
    "olive oil",
    "vegetable oil",
    "water",
    "flour",
    "all-purpose flour",
    "sugar",
    "baking soda",
    "baking powder",
    "black pepper",
];

/// The ingredients considered on hand for a single search
///
/// User tokens come first, followed by the pantry staples they did not
/// already name. Rebuilt for every search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityPool {
    ingredients: Vec<String>,
}

impl AvailabilityPool {
    /// Builds the pool from already-normalized user tokens
    pub fn new(user_ingredients: Vec<String>) -> Self {
        let mut ingredients = user_ingredients;
        for staple in PANTRY_STAPLES {
            if !ingredients.iter().any(|i| i == staple) {
                ingredients.push(staple.to_string());
            }
        }
        Self { ingredients }
    }

    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }

    /// Loose two-way containment match against every pool member
    ///
    /// `ingredient` must already be lower-cased. "chicken breast" is covered
    /// by "chicken", and "oil" is covered by "olive oil".
    pub fn covers(&self, ingredient: &str) -> bool {
        self.ingredients
            .iter()
            .any(|available| ingredient.contains(available.as_str()) || available.contains(ingredient))
    }
}
