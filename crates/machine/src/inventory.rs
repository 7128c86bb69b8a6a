use serde::{Deserialize, Serialize};

use brewvend_core::{DomainError, DomainResult, Ingredient};
use brewvend_recipes::Recipe;

/// Units of each ingredient a machine starts with.
pub const INITIAL_UNITS: i32 = 20;

/// Upper bound of every ingredient counter.
pub const INVENTORY_CAPACITY: i32 = 100;

/// The four bounded ingredient counters.
///
/// Invariant: every counter stays in `[0, INVENTORY_CAPACITY]`. A resupply
/// that would overflow is rejected in full; a debit that would go negative
/// mutates nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    coffee: i32,
    milk: i32,
    sugar: i32,
    chocolate: i32,
}

impl Default for Inventory {
    fn default() -> Self {
        Self {
            coffee: INITIAL_UNITS,
            milk: INITIAL_UNITS,
            sugar: INITIAL_UNITS,
            chocolate: INITIAL_UNITS,
        }
    }
}

impl Inventory {
    /// Current stock level of one ingredient.
    pub fn level(&self, ingredient: Ingredient) -> i32 {
        match ingredient {
            Ingredient::Coffee => self.coffee,
            Ingredient::Milk => self.milk,
            Ingredient::Sugar => self.sugar,
            Ingredient::Chocolate => self.chocolate,
        }
    }

    /// Add `amount` units of one ingredient.
    ///
    /// Rejects non-positive amounts, and rejects the whole resupply (no
    /// clamping) when it would push the counter past `INVENTORY_CAPACITY`.
    pub fn resupply(&mut self, ingredient: Ingredient, amount: i32) -> DomainResult<()> {
        if amount <= 0 {
            return Err(DomainError::invalid_value(
                "Resupply amount must be a positive integer",
            ));
        }
        let level = self.level(ingredient);
        // `amount` may be i32::MAX; only `capacity - level` is overflow-safe.
        if amount > INVENTORY_CAPACITY - level {
            return Err(DomainError::invalid_value(format!(
                "Inventory of {ingredient} cannot exceed {INVENTORY_CAPACITY} units"
            )));
        }
        *self.level_mut(ingredient) = level + amount;
        Ok(())
    }

    /// Consume a recipe's ingredients, all four counters together.
    ///
    /// Every counter is checked before any is touched; on a shortage the
    /// first short ingredient in canonical order is reported and nothing
    /// is debited.
    pub fn debit(&mut self, recipe: &Recipe) -> DomainResult<()> {
        for ingredient in Ingredient::ALL {
            if self.level(ingredient) < recipe.amount_of(ingredient) {
                return Err(DomainError::InsufficientStock(ingredient));
            }
        }
        for ingredient in Ingredient::ALL {
            *self.level_mut(ingredient) -= recipe.amount_of(ingredient);
        }
        Ok(())
    }

    fn level_mut(&mut self, ingredient: Ingredient) -> &mut i32 {
        match ingredient {
            Ingredient::Coffee => &mut self.coffee,
            Ingredient::Milk => &mut self.milk,
            Ingredient::Sugar => &mut self.sugar,
            Ingredient::Chocolate => &mut self.chocolate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_counter_starts_at_the_initial_level() {
        let inventory = Inventory::default();
        for ingredient in Ingredient::ALL {
            assert_eq!(inventory.level(ingredient), INITIAL_UNITS);
        }
    }

    #[test]
    fn resupply_adds_exactly_the_requested_amount() {
        let mut inventory = Inventory::default();
        inventory.resupply(Ingredient::Coffee, 50).unwrap();
        assert_eq!(inventory.level(Ingredient::Coffee), 70);
    }

    #[test]
    fn resupply_may_land_exactly_on_capacity() {
        let mut inventory = Inventory::default();
        inventory.resupply(Ingredient::Milk, 80).unwrap();
        assert_eq!(inventory.level(Ingredient::Milk), INVENTORY_CAPACITY);
    }

    #[test]
    fn resupply_past_capacity_is_rejected_in_full() {
        let mut inventory = Inventory::default();
        let err = inventory.resupply(Ingredient::Sugar, 81).unwrap_err();
        assert!(matches!(err, DomainError::InvalidValue(_)));
        assert_eq!(inventory.level(Ingredient::Sugar), INITIAL_UNITS);
    }

    #[test]
    fn zero_and_negative_resupplies_are_rejected() {
        let mut inventory = Inventory::default();
        for amount in [0, -1] {
            let err = inventory.resupply(Ingredient::Chocolate, amount).unwrap_err();
            assert!(matches!(err, DomainError::InvalidValue(_)));
        }
        assert_eq!(inventory.level(Ingredient::Chocolate), INITIAL_UNITS);
    }

    #[test]
    fn debit_consumes_all_four_counters_together() {
        let mut inventory = Inventory::default();
        let recipe = Recipe::new("Mix", 100, 1, 2, 1, 2).unwrap();
        inventory.debit(&recipe).unwrap();
        assert_eq!(inventory.level(Ingredient::Coffee), 19);
        assert_eq!(inventory.level(Ingredient::Milk), 18);
        assert_eq!(inventory.level(Ingredient::Sugar), 19);
        assert_eq!(inventory.level(Ingredient::Chocolate), 18);
    }

    #[test]
    fn debit_on_shortage_mutates_nothing() {
        let mut inventory = Inventory::default();
        // 21 milk units needed, 20 available; coffee alone would fit.
        let recipe = Recipe::new("Milky", 80, 1, 21, 0, 0).unwrap();
        let err = inventory.debit(&recipe).unwrap_err();
        assert_eq!(err, DomainError::InsufficientStock(Ingredient::Milk));
        assert_eq!(inventory, Inventory::default());
    }
}
