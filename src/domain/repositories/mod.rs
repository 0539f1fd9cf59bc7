// Repository contracts (ports)
// Storage adapters live in infrastructure::repositories

pub mod record_repository;

pub use record_repository::{Record, Repository};
