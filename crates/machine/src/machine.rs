use serde::{Deserialize, Serialize};

use brewvend_core::{DomainError, DomainResult, Ingredient};
use brewvend_recipes::Recipe;

use crate::inventory::Inventory;

/// Most recipes a machine offers at once.
pub const CATALOG_CAPACITY: usize = 3;

/// Largest payment the coin slot accepts, in cents.
pub const PAYMENT_CEILING: i32 = 500;

/// The vending machine: a bounded recipe catalog plus ingredient stock.
///
/// Every operation validates fully before mutating anything, so a failed
/// call leaves the machine exactly as it was.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoffeeMachine {
    catalog: Vec<Recipe>,
    inventory: Inventory,
}

impl CoffeeMachine {
    /// A machine with an empty catalog and default stock levels.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a recipe into the catalog.
    ///
    /// Rejects the recipe when the catalog is full, when an entry already
    /// carries the same name (case-sensitive), or when an entry has the
    /// identical ingredient signature. Name and signature are two
    /// independent uniqueness domains, checked separately.
    pub fn add_recipe(&mut self, recipe: Recipe) -> DomainResult<()> {
        if self.catalog.len() >= CATALOG_CAPACITY {
            return Err(DomainError::CatalogFull(CATALOG_CAPACITY));
        }
        if self.catalog.iter().any(|r| r.name() == recipe.name()) {
            return Err(DomainError::duplicate_recipe(format!(
                "a recipe named {:?} is already loaded",
                recipe.name()
            )));
        }
        if self
            .catalog
            .iter()
            .any(|r| r.signature() == recipe.signature())
        {
            return Err(DomainError::duplicate_recipe(format!(
                "a recipe with the same ingredients as {:?} is already loaded",
                recipe.name()
            )));
        }
        tracing::info!(name = recipe.name(), price = recipe.price(), "recipe added");
        self.catalog.push(recipe);
        Ok(())
    }

    /// Remove a recipe by name.
    pub fn delete_recipe(&mut self, name: &str) -> DomainResult<()> {
        let index = self
            .catalog
            .iter()
            .position(|r| r.name() == name)
            .ok_or_else(|| DomainError::recipe_not_found(name))?;
        self.catalog.remove(index);
        tracing::info!(name, "recipe deleted");
        Ok(())
    }

    /// Currently loaded recipes, in insertion order.
    pub fn recipes(&self) -> &[Recipe] {
        &self.catalog
    }

    /// Read-only view of the stock counters.
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Current stock level of one ingredient.
    pub fn check_inventory(&self, ingredient: Ingredient) -> i32 {
        self.inventory.level(ingredient)
    }

    pub fn check_coffee_inventory(&self) -> i32 {
        self.check_inventory(Ingredient::Coffee)
    }

    pub fn check_milk_inventory(&self) -> i32 {
        self.check_inventory(Ingredient::Milk)
    }

    pub fn check_sugar_inventory(&self) -> i32 {
        self.check_inventory(Ingredient::Sugar)
    }

    pub fn check_chocolate_inventory(&self) -> i32 {
        self.check_inventory(Ingredient::Chocolate)
    }

    /// Resupply one ingredient; see [`Inventory::resupply`] for the rules.
    pub fn add_inventory(&mut self, ingredient: Ingredient, amount: i32) -> DomainResult<()> {
        self.inventory.resupply(ingredient, amount)?;
        tracing::info!(
            %ingredient,
            amount,
            level = self.inventory.level(ingredient),
            "inventory resupplied"
        );
        Ok(())
    }

    pub fn add_coffee_inventory(&mut self, amount: i32) -> DomainResult<()> {
        self.add_inventory(Ingredient::Coffee, amount)
    }

    pub fn add_milk_inventory(&mut self, amount: i32) -> DomainResult<()> {
        self.add_inventory(Ingredient::Milk, amount)
    }

    pub fn add_sugar_inventory(&mut self, amount: i32) -> DomainResult<()> {
        self.add_inventory(Ingredient::Sugar, amount)
    }

    pub fn add_chocolate_inventory(&mut self, amount: i32) -> DomainResult<()> {
        self.add_inventory(Ingredient::Chocolate, amount)
    }

    /// Sell one drink and return the change in cents.
    ///
    /// Order of checks: payment range, recipe lookup, funds, stock. A
    /// zero payment is a valid coin-slot amount and fails the funds check,
    /// not the range check. Stock is debited only when the whole purchase
    /// succeeds.
    pub fn make_coffee(&mut self, name: &str, payment: i32) -> DomainResult<i32> {
        if !(0..=PAYMENT_CEILING).contains(&payment) {
            return Err(DomainError::invalid_value(
                "Payment must be positive or less than 500 cents",
            ));
        }
        let recipe = self
            .catalog
            .iter()
            .find(|r| r.name() == name)
            .ok_or_else(|| DomainError::recipe_not_found(name))?;
        if payment < recipe.price() {
            tracing::debug!(name, payment, price = recipe.price(), "payment too low");
            return Err(DomainError::InsufficientFunds {
                price: recipe.price(),
                payment,
            });
        }
        let recipe = recipe.clone();
        self.inventory.debit(&recipe).inspect_err(|err| {
            tracing::warn!(name, %err, "purchase aborted");
        })?;
        let change = payment - recipe.price();
        tracing::info!(name, payment, change, "drink sold");
        Ok(change)
    }
}
