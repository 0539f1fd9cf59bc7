use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::DomainError;
use super::filter::{matches, matches_optional};
use super::patch::Patch;
use super::repositories::Record;

/// Pet details without identity
///
/// This is the creation payload for `/pets` and also the value embedded in
/// an owner's `pets` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetDetails {
    pub name: String,
    /// e.g. "Dog", "Cat"
    pub species: String,
    /// Years
    #[serde(default)]
    pub age: Option<i64>,
    /// Kilograms
    #[serde(default)]
    pub weight: Option<f64>,
}

pub type PetCreate = PetDetails;

/// Pet record as stored and returned to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    pub id: Uuid,
    pub name: String,
    pub species: String,
    pub age: Option<i64>,
    pub weight: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record for Pet {
    const KIND: &'static str = "Pet";

    fn id(&self) -> Uuid {
        self.id
    }
}

impl Pet {
    /// Builds a new pet with a fresh id; both timestamps share one instant
    pub fn new(create: PetCreate) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: create.name,
            species: create.species,
            age: create.age,
            weight: create.weight,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update; the pet id comes from the path
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PetUpdate {
    pub name: Patch<String>,
    pub species: Patch<String>,
    pub age: Patch<i64>,
    pub weight: Patch<f64>,
}

impl PetUpdate {
    /// Merges the supplied fields and refreshes `updated_at`
    pub fn apply_to(self, pet: &mut Pet) -> Result<(), DomainError> {
        self.name.apply_required("name", &mut pet.name)?;
        self.species.apply_required("species", &mut pet.species)?;
        self.age.apply(&mut pet.age);
        self.weight.apply(&mut pet.weight);
        pet.updated_at = Utc::now();
        Ok(())
    }
}

/// Query filters for `GET /pets`
///
/// `age` and `weight` are exact equality, not ranges.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PetFilter {
    pub name: Option<String>,
    pub species: Option<String>,
    pub age: Option<i64>,
    pub weight: Option<f64>,
}

impl PetFilter {
    pub fn matches(&self, pet: &Pet) -> bool {
        matches(self.name.as_deref(), pet.name.as_str())
            && matches(self.species.as_deref(), pet.species.as_str())
            && matches_optional(self.age.as_ref(), pet.age.as_ref())
            && matches_optional(self.weight.as_ref(), pet.weight.as_ref())
    }
}
