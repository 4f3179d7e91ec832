//! Armory domain core.
//!
//! Pure domain logic with zero I/O dependencies: the level progression
//! formula, player field validation rules, and shared error/ID types.
//! Used by both the repository layer (`armory-db`) and the API crate.

pub mod error;
pub mod progression;
pub mod types;
pub mod validation;
