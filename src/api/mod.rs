// API layer module (HTTP adapter)
// Follows Hexagonal Architecture - API is an adapter

pub mod errors;
pub mod extract;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::build as router;
pub use state::AppState;
