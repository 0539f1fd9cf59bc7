// Domain layer module exports
// Schemas, value objects and the repository contract.
// Independent of HTTP and storage concerns.

pub mod address;
pub mod errors;
pub(crate) mod filter;
pub mod owner;
pub mod patch;
pub mod person;
pub mod pet;
pub mod repositories;
pub mod value_objects;
