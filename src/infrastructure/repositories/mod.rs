// Repository implementations (data access layer)
// Adapters that implement the domain repository contract

pub mod in_memory_repository;
pub mod store;

pub use in_memory_repository::InMemoryRepository;
pub use store::Store;
