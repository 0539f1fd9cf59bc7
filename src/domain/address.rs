use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::DomainError;
use super::filter::{matches, matches_optional};
use super::patch::Patch;
use super::repositories::Record;

/// Postal address
///
/// Used both as the stored `/addresses` record and as the value embedded
/// in persons and owners. Embedded copies are independent of any stored
/// record with the same id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub street: String,
    pub city: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    pub country: String,
}

impl Record for Address {
    const KIND: &'static str = "Address";

    fn id(&self) -> Uuid {
        self.id
    }
}

/// Creation payload; the caller may choose the id
#[derive(Debug, Clone, Deserialize)]
pub struct AddressCreate {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub street: String,
    pub city: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    pub country: String,
}

impl Address {
    /// Builds the stored record, generating an id if none was supplied
    pub fn new(create: AddressCreate) -> Self {
        Self {
            id: create.id.unwrap_or_else(Uuid::new_v4),
            street: create.street,
            city: create.city,
            state: create.state,
            postal_code: create.postal_code,
            country: create.country,
        }
    }
}

/// Partial update; the id comes from the path and is never changed
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AddressUpdate {
    pub street: Patch<String>,
    pub city: Patch<String>,
    pub state: Patch<String>,
    pub postal_code: Patch<String>,
    pub country: Patch<String>,
}

impl AddressUpdate {
    pub fn apply_to(self, address: &mut Address) -> Result<(), DomainError> {
        self.street.apply_required("street", &mut address.street)?;
        self.city.apply_required("city", &mut address.city)?;
        self.state.apply(&mut address.state);
        self.postal_code.apply(&mut address.postal_code);
        self.country.apply_required("country", &mut address.country)?;
        Ok(())
    }
}

/// Query filters for `GET /addresses`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddressFilter {
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

impl AddressFilter {
    pub fn matches(&self, address: &Address) -> bool {
        matches(self.street.as_deref(), address.street.as_str())
            && matches(self.city.as_deref(), address.city.as_str())
            && matches_optional(self.state.as_deref(), address.state.as_deref())
            && matches_optional(self.postal_code.as_deref(), address.postal_code.as_deref())
            && matches(self.country.as_deref(), address.country.as_str())
    }
}

/// Existential filter over embedded addresses
///
/// Each set criterion must be met by at least one address; the criteria
/// are checked independently, so `city` and `country` may be satisfied by
/// different entries.
pub(crate) fn any_address_matches(
    addresses: &[Address],
    city: Option<&str>,
    country: Option<&str>,
) -> bool {
    let city_ok = city.map_or(true, |city| addresses.iter().any(|a| a.city == city));
    let country_ok = country.map_or(true, |country| {
        addresses.iter().any(|a| a.country == country)
    });
    city_ok && country_ok
}
