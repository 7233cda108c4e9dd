//! # Recipe Registry
//!
//! The burger factory. A [`RecipeRegistry`] maps each `(Shop, BurgerKind)` pair to
//! a zero-argument constructor returning a [`Burger`]. It is built once at startup
//! (see [`RecipeRegistry::standard_menu`]), handed to the
//! [`ShopSession`](crate::lifecycle::ShopSession), and only read after that.
//!
//! A pair is either registered exactly once or absent. Absence is normal, since
//! not every shop sells every kind, and lookups report it as
//! [`RecipeError::UndefinedRecipe`].

pub mod error;
mod standard_menu;

pub use error::*;

use crate::model::{Burger, BurgerKind, Shop};
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, info, instrument, warn};

/// A zero-argument burger constructor.
pub type Recipe = Box<dyn Fn() -> Burger + Send + Sync>;

/// Registry of burger recipes keyed by shop and kind.
#[derive(Default)]
pub struct RecipeRegistry {
    recipes: BTreeMap<(Shop, BurgerKind), Recipe>,
}

impl RecipeRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the constructor for `shop` and `kind`.
    ///
    /// # Errors
    /// [`RecipeError::DuplicateRecipe`] if the pair already has a recipe. The
    /// existing recipe is kept.
    pub fn register_recipe<F>(
        &mut self,
        shop: Shop,
        kind: BurgerKind,
        maker: F,
    ) -> Result<(), RecipeError>
    where
        F: Fn() -> Burger + Send + Sync + 'static,
    {
        if self.recipes.contains_key(&(shop, kind)) {
            return Err(RecipeError::DuplicateRecipe { shop, kind });
        }
        self.recipes.insert((shop, kind), Box::new(maker));
        debug!(%shop, %kind, size = self.recipes.len(), "Registered recipe");
        Ok(())
    }

    /// The kinds `shop` has recipes for, in declaration order.
    pub fn defined_kinds(&self, shop: Shop) -> Vec<BurgerKind> {
        self.recipes
            .keys()
            .filter(|(recipe_shop, _)| *recipe_shop == shop)
            .map(|&(_, kind)| kind)
            .collect()
    }

    /// Looks up the recipe for `shop` and `kind` and builds the burger.
    ///
    /// # Errors
    /// [`RecipeError::UndefinedRecipe`] if no recipe is registered for the pair.
    #[instrument(skip(self))]
    pub fn create_burger(&self, shop: Shop, kind: BurgerKind) -> Result<Burger, RecipeError> {
        let Some(maker) = self.recipes.get(&(shop, kind)) else {
            warn!("Recipe not found");
            return Err(RecipeError::UndefinedRecipe { shop, kind });
        };
        let burger = maker();
        info!(burger = burger.name(), "Created burger");
        Ok(burger)
    }

    pub fn contains(&self, shop: Shop, kind: BurgerKind) -> bool {
        self.recipes.contains_key(&(shop, kind))
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl fmt::Debug for RecipeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecipeRegistry")
            .field("recipes", &self.recipes.keys().collect::<Vec<_>>())
            .finish()
    }
}
