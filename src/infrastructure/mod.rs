// Infrastructure layer module
// Storage adapters
// Follows Hexagonal Architecture

pub mod repositories;
