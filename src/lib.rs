//! Person/Address API Library
//!
//! In-memory CRUD service for persons, addresses, owners and pets:
//! schemas and merge rules, the repository contract and its in-memory
//! implementation, and the axum HTTP layer.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
