//! Domain model of the auction platform.
//!
//! Entities are plain mutable records with declarative validation;
//! value objects wrap the few fields with their own invariants.

pub mod entities;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
