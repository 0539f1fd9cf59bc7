use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::address::{any_address_matches, Address};
use super::errors::DomainError;
use super::filter::{matches, matches_optional};
use super::patch::Patch;
use super::pet::PetDetails;
use super::repositories::Record;
use super::value_objects::Email;

/// Owner record as stored and returned to clients
///
/// `addresses` and `pets` are value copies. They are not linked to records
/// stored under `/addresses` or `/pets`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Owner {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: Email,
    pub phone: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub addresses: Vec<Address>,
    pub pets: Vec<PetDetails>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record for Owner {
    const KIND: &'static str = "Owner";

    fn id(&self) -> Uuid {
        self.id
    }
}

/// Creation payload for an owner
///
/// The pet list is also accepted under the older `pet` key.
#[derive(Debug, Clone, Deserialize)]
pub struct OwnerCreate {
    pub first_name: String,
    pub last_name: String,
    pub email: Email,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    pub addresses: Vec<Address>,
    #[serde(default, alias = "pet")]
    pub pets: Vec<PetDetails>,
}

impl Owner {
    /// Builds a new owner with a fresh id; both timestamps share one instant
    pub fn new(create: OwnerCreate) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            first_name: create.first_name,
            last_name: create.last_name,
            email: create.email,
            phone: create.phone,
            birth_date: create.birth_date,
            addresses: create.addresses,
            pets: create.pets,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update; `addresses` and `pets` replace the whole list
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OwnerUpdate {
    pub first_name: Patch<String>,
    pub last_name: Patch<String>,
    pub email: Patch<Email>,
    pub phone: Patch<String>,
    pub birth_date: Patch<NaiveDate>,
    pub addresses: Patch<Vec<Address>>,
    #[serde(alias = "pet")]
    pub pets: Patch<Vec<PetDetails>>,
}

impl OwnerUpdate {
    /// Merges the supplied fields and refreshes `updated_at`
    pub fn apply_to(self, owner: &mut Owner) -> Result<(), DomainError> {
        self.first_name
            .apply_required("first_name", &mut owner.first_name)?;
        self.last_name
            .apply_required("last_name", &mut owner.last_name)?;
        self.email.apply_required("email", &mut owner.email)?;
        self.phone.apply(&mut owner.phone);
        self.birth_date.apply(&mut owner.birth_date);
        self.addresses
            .apply_required("addresses", &mut owner.addresses)?;
        self.pets.apply_required("pets", &mut owner.pets)?;
        owner.updated_at = Utc::now();
        Ok(())
    }
}

/// Query filters for `GET /owners`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OwnerFilter {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub birth_date: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

impl OwnerFilter {
    pub fn matches(&self, owner: &Owner) -> bool {
        let birth_date = owner.birth_date.map(|d| d.to_string());

        matches(self.first_name.as_deref(), owner.first_name.as_str())
            && matches(self.last_name.as_deref(), owner.last_name.as_str())
            && matches(self.email.as_deref(), owner.email.as_str())
            && matches_optional(self.phone.as_deref(), owner.phone.as_deref())
            && matches_optional(self.birth_date.as_deref(), birth_date.as_deref())
            && any_address_matches(
                &owner.addresses,
                self.city.as_deref(),
                self.country.as_deref(),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn grace() -> Owner {
        let create: OwnerCreate = serde_json::from_value(json!({
            "first_name": "Grace",
            "last_name": "Hopper",
            "email": "grace.hopper@navy.mil",
            "birth_date": "1906-12-09",
            "addresses": [
                {
                    "street": "1701 E St NW",
                    "city": "Washington",
                    "state": "DC",
                    "postal_code": "20552",
                    "country": "USA"
                },
                {
                    "street": "10 Downing St",
                    "city": "London",
                    "country": "UK"
                }
            ],
            "pet": [{ "name": "Rex", "species": "Dog", "age": 5, "weight": 30.5 }]
        }))
        .unwrap();
        Owner::new(create)
    }

    #[test]
    fn create_accepts_legacy_pet_key() {
        let owner = grace();
        assert_eq!(owner.pets.len(), 1);
        assert_eq!(owner.pets[0].name, "Rex");
        assert_eq!(owner.created_at, owner.updated_at);
    }

    #[test]
    fn create_defaults_collections_to_empty() {
        let create: OwnerCreate = serde_json::from_value(json!({
            "first_name": "Ada",
            "last_name": "Lovelace",
            "email": "ada@example.com"
        }))
        .unwrap();
        let owner = Owner::new(create);
        assert!(owner.addresses.is_empty());
        assert!(owner.pets.is_empty());
    }

    #[test]
    fn serializes_pets_under_plural_key() {
        let value = serde_json::to_value(grace()).unwrap();
        assert!(value["pets"].is_array());
        assert!(value.get("pet").is_none());
    }

    #[test]
    fn update_replaces_pets_and_bumps_updated_at() {
        let mut owner = grace();
        let created_at = owner.created_at;
        let update: OwnerUpdate = serde_json::from_value(json!({
            "pets": [{ "name": "Tom", "species": "Cat" }]
        }))
        .unwrap();
        std::thread::sleep(std::time::Duration::from_millis(5));

        update.apply_to(&mut owner).unwrap();

        assert_eq!(owner.pets.len(), 1);
        assert_eq!(owner.pets[0].name, "Tom");
        assert_eq!(owner.addresses.len(), 2);
        assert_eq!(owner.created_at, created_at);
        assert!(owner.updated_at > created_at);
    }

    #[test]
    fn update_rejects_null_pets() {
        let mut owner = grace();
        let update: OwnerUpdate = serde_json::from_value(json!({ "pets": null })).unwrap();
        assert!(update.apply_to(&mut owner).is_err());
    }

    #[test]
    fn filter_matches_any_embedded_address() {
        let owner = grace();
        let filter = OwnerFilter {
            city: Some("London".to_string()),
            ..Default::default()
        };
        assert!(filter.matches(&owner));

        let filter = OwnerFilter {
            city: Some("Berlin".to_string()),
            ..Default::default()
        };
        assert!(!filter.matches(&owner));
    }

    #[test]
    fn filter_on_unset_phone_does_not_match() {
        let filter = OwnerFilter {
            phone: Some("+1-202-555-0101".to_string()),
            ..Default::default()
        };
        assert!(!filter.matches(&grace()));
    }
}
