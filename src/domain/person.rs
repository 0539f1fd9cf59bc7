use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::address::{any_address_matches, Address};
use super::errors::DomainError;
use super::filter::{matches, matches_optional};
use super::patch::Patch;
use super::repositories::Record;
use super::value_objects::Email;

/// Person record as stored and returned to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: Uuid,
    /// Columbia UNI
    pub uni: String,
    pub first_name: String,
    pub last_name: String,
    pub email: Email,
    pub phone: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub addresses: Vec<Address>,
}

impl Record for Person {
    const KIND: &'static str = "Person";

    fn id(&self) -> Uuid {
        self.id
    }
}

/// Creation payload for a person
#[derive(Debug, Clone, Deserialize)]
pub struct PersonCreate {
    pub uni: String,
    pub first_name: String,
    pub last_name: String,
    pub email: Email,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    pub addresses: Vec<Address>,
}

impl Person {
    /// Builds a new person with a fresh id
    pub fn new(create: PersonCreate) -> Self {
        Self {
            id: Uuid::new_v4(),
            uni: create.uni,
            first_name: create.first_name,
            last_name: create.last_name,
            email: create.email,
            phone: create.phone,
            birth_date: create.birth_date,
            addresses: create.addresses,
        }
    }
}

/// Partial update; `addresses` replaces the whole list
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PersonUpdate {
    pub uni: Patch<String>,
    pub first_name: Patch<String>,
    pub last_name: Patch<String>,
    pub email: Patch<Email>,
    pub phone: Patch<String>,
    pub birth_date: Patch<NaiveDate>,
    pub addresses: Patch<Vec<Address>>,
}

impl PersonUpdate {
    pub fn apply_to(self, person: &mut Person) -> Result<(), DomainError> {
        self.uni.apply_required("uni", &mut person.uni)?;
        self.first_name
            .apply_required("first_name", &mut person.first_name)?;
        self.last_name
            .apply_required("last_name", &mut person.last_name)?;
        self.email.apply_required("email", &mut person.email)?;
        self.phone.apply(&mut person.phone);
        self.birth_date.apply(&mut person.birth_date);
        self.addresses
            .apply_required("addresses", &mut person.addresses)?;
        Ok(())
    }
}

/// Query filters for `GET /persons`
///
/// `city` and `country` match if any embedded address has that value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonFilter {
    pub uni: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Compared against the `YYYY-MM-DD` form of the stored date
    pub birth_date: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

impl PersonFilter {
    pub fn matches(&self, person: &Person) -> bool {
        let birth_date = person.birth_date.map(|d| d.to_string());

        matches(self.uni.as_deref(), person.uni.as_str())
            && matches(self.first_name.as_deref(), person.first_name.as_str())
            && matches(self.last_name.as_deref(), person.last_name.as_str())
            && matches(self.email.as_deref(), person.email.as_str())
            && matches_optional(self.phone.as_deref(), person.phone.as_deref())
            && matches_optional(self.birth_date.as_deref(), birth_date.as_deref())
            && any_address_matches(
                &person.addresses,
                self.city.as_deref(),
                self.country.as_deref(),
            )
    }
}
