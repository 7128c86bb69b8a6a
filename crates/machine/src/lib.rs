//! Coffee machine domain module.
//!
//! This crate contains the business rules for a vending machine: the
//! bounded recipe catalog, the four ingredient counters, and the purchase
//! operation. Pure deterministic domain logic (no IO, no HTTP, no storage).

pub mod inventory;
pub mod machine;

pub use inventory::{INITIAL_UNITS, INVENTORY_CAPACITY, Inventory};
pub use machine::{CATALOG_CAPACITY, CoffeeMachine, PAYMENT_CEILING};
