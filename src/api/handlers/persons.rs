use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::extract::{ValidatedJson, ValidatedPath, ValidatedQuery};
use crate::api::state::AppState;
use crate::domain::person::{Person, PersonCreate, PersonFilter, PersonUpdate};
use crate::domain::repositories::Repository;

/// Create a person
///
/// POST /persons
pub async fn create_person(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<PersonCreate>,
) -> Result<(StatusCode, Json<Person>), ApiError> {
    let person = state.store.persons.insert(Person::new(req)).await?;
    tracing::info!(person_id = %person.id, "person created");

    Ok((StatusCode::CREATED, Json(person)))
}

/// List persons matching every supplied filter
///
/// GET /persons
///
/// `city` and `country` match against any of the person's addresses.
pub async fn list_persons(
    State(state): State<AppState>,
    ValidatedQuery(filter): ValidatedQuery<PersonFilter>,
) -> Json<Vec<Person>> {
    let persons = state
        .store
        .persons
        .list(|person| filter.matches(person))
        .await;
    tracing::debug!(count = persons.len(), "persons listed");

    Json(persons)
}

/// Get a person by ID
///
/// GET /persons/:id
pub async fn get_person(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<Uuid>,
) -> Result<Json<Person>, ApiError> {
    let person = state.store.persons.get(id).await?;
    Ok(Json(person))
}

/// Apply a partial update to a person
///
/// PATCH /persons/:id
pub async fn update_person(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<Uuid>,
    ValidatedJson(update): ValidatedJson<PersonUpdate>,
) -> Result<Json<Person>, ApiError> {
    let person = state
        .store
        .persons
        .update(id, |person| update.apply_to(person))
        .await?;
    tracing::info!(person_id = %id, "person updated");

    Ok(Json(person))
}
