use tracing::instrument;

use crate::models::{FacetSelection, Recipe, ScoredRecipe};

use super::{
    facet_filter::filter_by_facets, normalizer::normalize, pantry::AvailabilityPool,
    scorer::score, SearchError,
};

/// Minimum coverage (inclusive) for a recipe to be returned
pub const MATCH_THRESHOLD: u8 = 50;

/// Finds the recipes the user can cook with what they have
///
/// Pipeline: normalize the input, add the pantry staples, apply the facet
/// filter, score, drop anything below [`MATCH_THRESHOLD`] and sort by
/// coverage. The sort is stable, so recipes with equal scores keep their
/// catalog order. An empty result is a valid outcome.
///
/// Recipes without ingredients are skipped rather than failing the search.
#[instrument(skip_all, fields(catalog_size = catalog.len()))]
pub fn search(
    raw_input: &str,
    catalog: &[Recipe],
    selection: &FacetSelection,
) -> Result<Vec<ScoredRecipe>, SearchError> {
    let tokens = normalize(raw_input)?;
    let pool = AvailabilityPool::new(tokens);

    let filtered = filter_by_facets(catalog, selection);

    tracing::debug!(
        pool_size = pool.len(),
        filtered = filtered.len(),
        "Scoring filtered recipes"
    );

    let mut results: Vec<ScoredRecipe> = filtered
        .into_iter()
        .filter_map(|recipe| match score(recipe, &pool) {
            Ok(scored) => Some(scored),
            Err(e) => {
                tracing::warn!(error = %e, "Skipping recipe");
                None
            }
        })
        .filter(|scored| scored.match_percentage >= MATCH_THRESHOLD)
        .collect();

    results.sort_by(|a, b| b.match_percentage.cmp(&a.match_percentage));

    tracing::debug!(returned = results.len(), "Search completed");

    Ok(results)
}
