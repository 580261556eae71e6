use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::middleware::request_id::RequestId;
use crate::models::{Facet, FacetSelection, FacetValues, Recipe, ScoredRecipe};
use crate::services;

use super::AppState;

/// Ingredients listed on a card before the rest are collapsed
pub const CARD_INGREDIENT_LIMIT: usize = 6;

/// Missing ingredients are spelled out only when there are this few
pub const MISSING_NOTE_LIMIT: usize = 3;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    /// Free text, one ingredient per comma or line
    pub ingredients: String,
    #[serde(default)]
    pub facets: FacetSelection,
}

#[derive(Debug, Deserialize)]
pub struct SessionSearchRequest {
    pub ingredients: String,
}

#[derive(Debug, Deserialize)]
pub struct FacetToggleRequest {
    pub facet: Facet,
    pub value: String,
    /// Checkbox state after the change
    pub selected: bool,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub id: Uuid,
    pub facets: FacetSelection,
}

/// Everything a presentation layer needs to render one result
#[derive(Debug, Serialize, PartialEq)]
pub struct RecipeCard {
    pub name: String,
    pub cuisine: String,
    pub time: u32,
    pub dietary: Vec<String>,
    pub method: Vec<String>,
    pub description: String,
    /// First ingredients in recipe order
    pub ingredients: Vec<String>,
    /// How many ingredients were left off the card
    pub more_ingredients: usize,
    pub match_percentage: u8,
    pub matched_count: usize,
    pub total_count: usize,
    pub missing_ingredients: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing_note: Option<String>,
}

impl From<&ScoredRecipe> for RecipeCard {
    fn from(scored: &ScoredRecipe) -> Self {
        let recipe = &scored.recipe;
        let shown = recipe.ingredients.len().min(CARD_INGREDIENT_LIMIT);

        let missing_note = match scored.missing_ingredients.len() {
            1..=MISSING_NOTE_LIMIT => Some(format!(
                "Missing: {}",
                scored.missing_ingredients.join(", ")
            )),
            _ => None,
        };

        Self {
            name: recipe.name.clone(),
            cuisine: recipe.cuisine.clone(),
            time: recipe.time,
            dietary: recipe.dietary.clone(),
            method: recipe.method.clone(),
            description: recipe.description.clone(),
            ingredients: recipe.ingredients[..shown].to_vec(),
            more_ingredients: recipe.ingredients.len() - shown,
            match_percentage: scored.match_percentage,
            matched_count: scored.matched_count,
            total_count: scored.total_count,
            missing_ingredients: scored.missing_ingredients.clone(),
            missing_note,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub count: usize,
    pub message: String,
    pub results: Vec<RecipeCard>,
}

impl SearchResponse {
    pub fn from_results(results: &[ScoredRecipe]) -> Self {
        let count = results.len();
        let message = match count {
            0 => "No recipes found. Try adding more ingredients or adjusting your filters."
                .to_string(),
            1 => "Found 1 recipe matching your criteria".to_string(),
            n => format!("Found {} recipes matching your criteria", n),
        };

        Self {
            count,
            message,
            results: results.iter().map(RecipeCard::from).collect(),
        }
    }
}

fn session_not_found(id: &Uuid) -> AppError {
    AppError::NotFound(format!("Session {} not found", id))
}

// Handlers

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({ "status": "healthy", "recipes": state.catalog.len() })),
    )
}

/// Get the full recipe catalog
pub async fn get_recipes(State(state): State<AppState>) -> Json<Vec<Recipe>> {
    Json(state.catalog.recipes().to_vec())
}

/// Get the facet values available for filtering
pub async fn get_facets(State(state): State<AppState>) -> Json<FacetValues> {
    Json(state.catalog.facet_values())
}

/// Stateless search with facets supplied in the request
pub async fn search(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<SearchRequest>,
) -> AppResult<Json<SearchResponse>> {
    run_search(&state, &request_id, &request.ingredients, &request.facets)
}

/// Open a new session with no active filters
pub async fn create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<SessionResponse>) {
    let id = state.create_session().await;
    tracing::info!(session_id = %id, "Session created");

    (
        StatusCode::CREATED,
        Json(SessionResponse {
            id,
            facets: FacetSelection::new(),
        }),
    )
}

/// Get a session's current selection
pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<SessionResponse>> {
    let facets = state
        .selection(&id)
        .await
        .ok_or_else(|| session_not_found(&id))?;

    Ok(Json(SessionResponse { id, facets }))
}

/// Close a session and forget its selection
pub async fn close_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    if !state.close_session(&id).await {
        return Err(session_not_found(&id));
    }

    tracing::info!(session_id = %id, "Session closed");
    Ok(StatusCode::NO_CONTENT)
}

/// Add or remove a single facet value
pub async fn toggle_facet(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<FacetToggleRequest>,
) -> AppResult<Json<SessionResponse>> {
    let FacetToggleRequest {
        facet,
        value,
        selected,
    } = request;

    tracing::debug!(session_id = %id, %facet, value = %value, selected, "Toggling facet");

    let facets = state
        .update_selection(&id, |selection| {
            selection.set(facet, value, selected);
        })
        .await
        .ok_or_else(|| session_not_found(&id))?;

    Ok(Json(SessionResponse { id, facets }))
}

/// Clear all three facets of a session
pub async fn reset_facets(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<SessionResponse>> {
    let facets = state
        .update_selection(&id, FacetSelection::reset)
        .await
        .ok_or_else(|| session_not_found(&id))?;

    tracing::debug!(session_id = %id, "Facets reset");

    Ok(Json(SessionResponse { id, facets }))
}

/// Search using the session's selection
pub async fn session_search(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<SessionSearchRequest>,
) -> AppResult<Json<SearchResponse>> {
    let selection = state
        .selection(&id)
        .await
        .ok_or_else(|| session_not_found(&id))?;

    run_search(&state, &request_id, &request.ingredients, &selection)
}

fn run_search(
    state: &AppState,
    request_id: &RequestId,
    ingredients: &str,
    selection: &FacetSelection,
) -> AppResult<Json<SearchResponse>> {
    tracing::info!(
        request_id = %request_id,
        cuisine = selection.cuisine.len(),
        dietary = selection.dietary.len(),
        method = selection.method.len(),
        "Processing search request"
    );

    let results = services::search(ingredients, state.catalog.recipes(), selection)?;

    tracing::info!(
        request_id = %request_id,
        matches = results.len(),
        "Search completed"
    );

    Ok(Json(SearchResponse::from_results(&results)))
}
