mod handlers;
mod routes;
mod state;

pub use handlers::{RecipeCard, SearchResponse, CARD_INGREDIENT_LIMIT, MISSING_NOTE_LIMIT};
pub use routes::create_router;
pub use state::{AppState, SessionLimits};
