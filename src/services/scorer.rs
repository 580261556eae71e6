use crate::models::{Recipe, ScoredRecipe};

use super::{pantry::AvailabilityPool, SearchError};

/// Scores a recipe's ingredient coverage against the availability pool
///
/// Every ingredient is lower-cased and checked on its own with
/// [`AvailabilityPool::covers`]. The percentage rounds half up, so 1 of 8
/// gives 13 and 3 of 7 gives 43. The source recipe is cloned, never mutated.
pub fn score(recipe: &Recipe, pool: &AvailabilityPool) -> Result<ScoredRecipe, SearchError> {
    if !recipe.is_valid() {
        return Err(SearchError::InvalidRecipe {
            name: recipe.name.clone(),
        });
    }

    let total_count = recipe.ingredients.len();
    let mut missing_ingredients = Vec::new();

    for ingredient in &recipe.ingredients {
        let ingredient = ingredient.to_lowercase();
        if !pool.covers(&ingredient) {
            missing_ingredients.push(ingredient);
        }
    }

    let matched_count = total_count - missing_ingredients.len();

    Ok(ScoredRecipe {
        recipe: recipe.clone(),
        match_percentage: match_percentage(matched_count, total_count),
        matched_count,
        total_count,
        missing_ingredients,
    })
}

/// round(matched / total * 100) with halves rounded up, in integer arithmetic
fn match_percentage(matched: usize, total: usize) -> u8 {
    ((matched * 200 + total) / (total * 2)) as u8
}
