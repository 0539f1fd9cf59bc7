use crate::domain::address::Address;
use crate::domain::owner::Owner;
use crate::domain::person::Person;
use crate::domain::pet::Pet;

use super::InMemoryRepository;

/// All storage the API needs, one repository per resource
///
/// Built once at startup and shared through the application state.
/// Tests build a fresh one each for isolation.
#[derive(Default)]
pub struct Store {
    pub addresses: InMemoryRepository<Address>,
    pub persons: InMemoryRepository<Person>,
    pub owners: InMemoryRepository<Owner>,
    pub pets: InMemoryRepository<Pet>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }
}
