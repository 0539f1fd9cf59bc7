use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::extract::{ValidatedJson, ValidatedPath, ValidatedQuery};
use crate::api::state::AppState;
use crate::domain::pet::{Pet, PetCreate, PetFilter, PetUpdate};
use crate::domain::repositories::Repository;

/// Create a pet
///
/// POST /pets
pub async fn create_pet(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<PetCreate>,
) -> Result<(StatusCode, Json<Pet>), ApiError> {
    let pet = state.store.pets.insert(Pet::new(req)).await?;
    tracing::info!(pet_id = %pet.id, species = %pet.species, "pet created");

    Ok((StatusCode::CREATED, Json(pet)))
}

/// List pets matching every supplied filter
///
/// GET /pets
pub async fn list_pets(
    State(state): State<AppState>,
    ValidatedQuery(filter): ValidatedQuery<PetFilter>,
) -> Json<Vec<Pet>> {
    let pets = state.store.pets.list(|pet| filter.matches(pet)).await;
    tracing::debug!(count = pets.len(), "pets listed");

    Json(pets)
}

/// Get a pet by ID
///
/// GET /pets/:id
pub async fn get_pet(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<Uuid>,
) -> Result<Json<Pet>, ApiError> {
    let pet = state.store.pets.get(id).await?;
    Ok(Json(pet))
}

/// Apply a partial update to a pet
///
/// PATCH /pets/:id
pub async fn update_pet(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<Uuid>,
    ValidatedJson(update): ValidatedJson<PetUpdate>,
) -> Result<Json<Pet>, ApiError> {
    let pet = state
        .store
        .pets
        .update(id, |pet| update.apply_to(pet))
        .await?;
    tracing::info!(pet_id = %id, "pet updated");

    Ok(Json(pet))
}

/// Delete a pet
///
/// DELETE /pets/:id
pub async fn delete_pet(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.store.pets.delete(id).await?;
    tracing::info!(pet_id = %id, "pet deleted");

    Ok(StatusCode::NO_CONTENT)
}
