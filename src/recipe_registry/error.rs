//! Error types for the recipe registry.

use crate::model::{BurgerKind, Shop};
use thiserror::Error;

/// Errors that can occur while registering or looking up recipes.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecipeError {
    /// No recipe is registered for the shop and kind.
    #[error("Undefined burger recipe: Shop({shop}), Burger({kind})")]
    UndefinedRecipe { shop: Shop, kind: BurgerKind },

    /// A recipe for the shop and kind was already registered.
    #[error("Duplicate burger recipe: Shop({shop}), Burger({kind})")]
    DuplicateRecipe { shop: Shop, kind: BurgerKind },
}
