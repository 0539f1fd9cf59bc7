use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::extract::{ValidatedJson, ValidatedPath, ValidatedQuery};
use crate::api::state::AppState;
use crate::domain::address::{Address, AddressCreate, AddressFilter, AddressUpdate};
use crate::domain::repositories::Repository;

/// Create an address
///
/// POST /addresses
///
/// The caller may supply the id; reusing one that exists is a 400.
pub async fn create_address(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<AddressCreate>,
) -> Result<(StatusCode, Json<Address>), ApiError> {
    let address = state.store.addresses.insert(Address::new(req)).await?;
    tracing::info!(address_id = %address.id, "address created");

    Ok((StatusCode::CREATED, Json(address)))
}

/// List addresses matching every supplied filter
///
/// GET /addresses
pub async fn list_addresses(
    State(state): State<AppState>,
    ValidatedQuery(filter): ValidatedQuery<AddressFilter>,
) -> Json<Vec<Address>> {
    let addresses = state
        .store
        .addresses
        .list(|address| filter.matches(address))
        .await;
    tracing::debug!(count = addresses.len(), "addresses listed");

    Json(addresses)
}

/// Get an address by ID
///
/// GET /addresses/:id
pub async fn get_address(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<Uuid>,
) -> Result<Json<Address>, ApiError> {
    let address = state.store.addresses.get(id).await?;
    Ok(Json(address))
}

/// Apply a partial update to an address
///
/// PATCH /addresses/:id
pub async fn update_address(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<Uuid>,
    ValidatedJson(update): ValidatedJson<AddressUpdate>,
) -> Result<Json<Address>, ApiError> {
    let address = state
        .store
        .addresses
        .update(id, |address| update.apply_to(address))
        .await?;
    tracing::info!(address_id = %id, "address updated");

    Ok(Json(address))
}
