mod facet_selection;
mod recipe;

pub use facet_selection::{Facet, FacetSelection};
pub use recipe::{Catalog, FacetValues, Recipe, ScoredRecipe};
