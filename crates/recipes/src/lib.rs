//! Recipe domain module.
//!
//! This crate contains the drink definitions a machine sells, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod recipe;

pub use recipe::{MAX_RECIPE_UNITS, Recipe};
