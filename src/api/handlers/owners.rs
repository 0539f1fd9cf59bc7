use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::extract::{ValidatedJson, ValidatedPath, ValidatedQuery};
use crate::api::state::AppState;
use crate::domain::owner::{Owner, OwnerCreate, OwnerFilter, OwnerUpdate};
use crate::domain::repositories::Repository;

/// Create an owner
///
/// POST /owners
pub async fn create_owner(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<OwnerCreate>,
) -> Result<(StatusCode, Json<Owner>), ApiError> {
    let owner = state.store.owners.insert(Owner::new(req)).await?;
    tracing::info!(owner_id = %owner.id, "owner created");

    Ok((StatusCode::CREATED, Json(owner)))
}

/// List owners matching every supplied filter
///
/// GET /owners
pub async fn list_owners(
    State(state): State<AppState>,
    ValidatedQuery(filter): ValidatedQuery<OwnerFilter>,
) -> Json<Vec<Owner>> {
    let owners = state
        .store
        .owners
        .list(|owner| filter.matches(owner))
        .await;
    tracing::debug!(count = owners.len(), "owners listed");

    Json(owners)
}

/// Get an owner by ID
///
/// GET /owners/:id
pub async fn get_owner(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<Uuid>,
) -> Result<Json<Owner>, ApiError> {
    let owner = state.store.owners.get(id).await?;
    Ok(Json(owner))
}

/// Apply a partial update to an owner
///
/// PATCH /owners/:id
pub async fn update_owner(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<Uuid>,
    ValidatedJson(update): ValidatedJson<OwnerUpdate>,
) -> Result<Json<Owner>, ApiError> {
    let owner = state
        .store
        .owners
        .update(id, |owner| update.apply_to(owner))
        .await?;
    tracing::info!(owner_id = %id, "owner updated");

    Ok(Json(owner))
}

/// Delete an owner
///
/// DELETE /owners/:id
///
/// Pets stored under /pets are left alone.
pub async fn delete_owner(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.store.owners.delete(id).await?;
    tracing::info!(owner_id = %id, "owner deleted");

    Ok(StatusCode::NO_CONTENT)
}
