use serde::{Deserialize, Serialize};

use brewvend_core::{DomainError, DomainResult, Ingredient};

/// Sanity ceiling for a single ingredient quantity.
///
/// Aligned with the machine's inventory capacity, so any constructible
/// recipe is brewable from a fully stocked machine.
pub const MAX_RECIPE_UNITS: i32 = 100;

/// Value object: a named, priced drink with fixed ingredient requirements.
///
/// Constructed only through [`Recipe::new`], which either fully succeeds or
/// fails without producing an instance. `set_name` is the one mutator
/// (operator rename before catalog insertion); everything else is frozen
/// at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    name: String,
    /// Price in cents, strictly positive.
    price: i32,
    amt_coffee: i32,
    amt_milk: i32,
    amt_sugar: i32,
    amt_chocolate: i32,
}

impl Recipe {
    /// Validate and build a recipe.
    ///
    /// Checks run in a fixed order and the first failure wins:
    /// name, price, then each quantity (coffee, milk, sugar, chocolate),
    /// then the all-zero rule. Quantities must sit in `[0, MAX_RECIPE_UNITS]`.
    pub fn new(
        name: impl Into<String>,
        price: i32,
        amt_coffee: i32,
        amt_milk: i32,
        amt_sugar: i32,
        amt_chocolate: i32,
    ) -> DomainResult<Self> {
        let name = name.into();
        check_name(&name)?;
        if price <= 0 {
            return Err(DomainError::invalid_value(
                "Price must be a positive integer",
            ));
        }
        let amounts = [amt_coffee, amt_milk, amt_sugar, amt_chocolate];
        for (ingredient, amount) in Ingredient::ALL.into_iter().zip(amounts) {
            if !(0..=MAX_RECIPE_UNITS).contains(&amount) {
                return Err(DomainError::invalid_value(format!(
                    "Units of {ingredient} must be a positive integer"
                )));
            }
        }
        if amounts == [0, 0, 0, 0] {
            return Err(DomainError::invalid_value("Zero ingredients"));
        }
        Ok(Self {
            name,
            price,
            amt_coffee,
            amt_milk,
            amt_sugar,
            amt_chocolate,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> i32 {
        self.price
    }

    pub fn amt_coffee(&self) -> i32 {
        self.amt_coffee
    }

    pub fn amt_milk(&self) -> i32 {
        self.amt_milk
    }

    pub fn amt_sugar(&self) -> i32 {
        self.amt_sugar
    }

    pub fn amt_chocolate(&self) -> i32 {
        self.amt_chocolate
    }

    /// Required quantity of one ingredient.
    pub fn amount_of(&self, ingredient: Ingredient) -> i32 {
        match ingredient {
            Ingredient::Coffee => self.amt_coffee,
            Ingredient::Milk => self.amt_milk,
            Ingredient::Sugar => self.amt_sugar,
            Ingredient::Chocolate => self.amt_chocolate,
        }
    }

    /// Rename the recipe; the name rule from construction still applies.
    pub fn set_name(&mut self, name: impl Into<String>) -> DomainResult<()> {
        let name = name.into();
        check_name(&name)?;
        self.name = name;
        Ok(())
    }

    /// Ingredient quantities in canonical order.
    ///
    /// Two recipes with the same signature are catalog duplicates
    /// regardless of name or price.
    pub fn signature(&self) -> [i32; 4] {
        [
            self.amt_coffee,
            self.amt_milk,
            self.amt_sugar,
            self.amt_chocolate,
        ]
    }
}

fn check_name(name: &str) -> DomainResult<()> {
    if name.is_empty() {
        return Err(DomainError::invalid_value("Invalid name"));
    }
    Ok(())
}
