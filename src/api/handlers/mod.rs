// HTTP handlers, one module per resource

pub mod addresses;
pub mod health;
pub mod owners;
pub mod persons;
pub mod pets;
