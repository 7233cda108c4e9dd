//! The recipes every shop starts the day with.

use super::{RecipeError, RecipeRegistry};
use crate::model::{Bread, Burger, BurgerKind, Meat, Shop, Veggie};

impl RecipeRegistry {
    /// Builds a registry holding the five standard recipes.
    ///
    /// | Shop    | Kind    | Bread      | Veggie | Meat          |
    /// |---------|---------|------------|--------|---------------|
    /// | Taipei  | Chicken | WhiteBread | Tomato | TaiwanChicken |
    /// | Taipei  | Pork    | WhiteBread | Tomato | Tenderloin    |
    /// | NewYork | Chicken | WhiteBread | Onion  | Turkey        |
    /// | NewYork | Pork    | WhiteBread | Onion  | Bacon         |
    /// | Tokyo   | Chicken | WheatBread | Tomato | Bacon         |
    ///
    /// # Errors
    /// Returns [`RecipeError::DuplicateRecipe`] if the table above ever lists a
    /// pair twice. Callers treat that as a fatal startup error.
    pub fn standard_menu() -> Result<Self, RecipeError> {
        let mut registry = Self::new();

        registry.register_recipe(Shop::Taipei, BurgerKind::Chicken, || {
            Burger::new(
                "TaipeiChickenBurger",
                Bread::WhiteBread,
                Veggie::Tomato,
                Meat::TaiwanChicken,
            )
        })?;
        registry.register_recipe(Shop::Taipei, BurgerKind::Pork, || {
            Burger::new("TaipeiPorkBurger", Bread::WhiteBread, Veggie::Tomato, Meat::Tenderloin)
        })?;
        registry.register_recipe(Shop::NewYork, BurgerKind::Chicken, || {
            Burger::new("NewYorkChickenBurger", Bread::WhiteBread, Veggie::Onion, Meat::Turkey)
        })?;
        registry.register_recipe(Shop::NewYork, BurgerKind::Pork, || {
            Burger::new("NewYorkPorkBurger", Bread::WhiteBread, Veggie::Onion, Meat::Bacon)
        })?;
        registry.register_recipe(Shop::Tokyo, BurgerKind::Chicken, || {
            Burger::new("TokyoChickenBurger", Bread::WheatBread, Veggie::Tomato, Meat::Bacon)
        })?;

        Ok(registry)
    }
}
