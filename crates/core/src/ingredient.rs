//! The four ingredients a machine stocks.

use serde::{Deserialize, Serialize};

/// One of the four ingredient kinds tracked by a machine.
///
/// `ALL` fixes the canonical ordering (coffee, milk, sugar, chocolate)
/// used by recipe validation and by the ingredient-signature tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ingredient {
    Coffee,
    Milk,
    Sugar,
    Chocolate,
}

impl Ingredient {
    /// Canonical ordering of all ingredient kinds.
    pub const ALL: [Ingredient; 4] = [
        Ingredient::Coffee,
        Ingredient::Milk,
        Ingredient::Sugar,
        Ingredient::Chocolate,
    ];

    /// Lowercase label used in user-facing messages.
    pub fn label(self) -> &'static str {
        match self {
            Ingredient::Coffee => "coffee",
            Ingredient::Milk => "milk",
            Ingredient::Sugar => "sugar",
            Ingredient::Chocolate => "chocolate",
        }
    }
}

impl core::fmt::Display for Ingredient {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}
