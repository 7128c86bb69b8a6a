//! Domain error model.

use thiserror::Error;

use crate::ingredient::Ingredient;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// One variant per failure kind so callers discriminate programmatically;
/// the carried strings are user-facing text only, never a control signal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required value was outside its valid domain (name, price,
    /// ingredient quantity, payment, resupply amount).
    #[error("{0}")]
    InvalidValue(String),

    /// The recipe catalog is already at capacity.
    #[error("recipe catalog is full ({0} recipes)")]
    CatalogFull(usize),

    /// A catalog entry already shares the name or ingredient signature.
    #[error("duplicate recipe: {0}")]
    DuplicateRecipe(String),

    /// The referenced recipe name is absent from the catalog.
    #[error("no recipe named {0:?}")]
    RecipeNotFound(String),

    /// Payment below the recipe price.
    #[error("insufficient funds: payment of {payment} cents is below the {price} cent price")]
    InsufficientFunds { price: i32, payment: i32 },

    /// An inventory counter is below the recipe's required quantity.
    #[error("insufficient stock of {0}")]
    InsufficientStock(Ingredient),
}

impl DomainError {
    pub fn invalid_value(msg: impl Into<String>) -> Self {
        Self::InvalidValue(msg.into())
    }

    pub fn duplicate_recipe(msg: impl Into<String>) -> Self {
        Self::DuplicateRecipe(msg.into())
    }

    pub fn recipe_not_found(name: impl Into<String>) -> Self {
        Self::RecipeNotFound(name.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_value_displays_its_message_verbatim() {
        let err = DomainError::invalid_value("Invalid name");
        assert_eq!(err.to_string(), "Invalid name");
    }

    #[test]
    fn insufficient_stock_names_the_ingredient() {
        let err = DomainError::InsufficientStock(Ingredient::Chocolate);
        assert_eq!(err.to_string(), "insufficient stock of chocolate");
    }
}
