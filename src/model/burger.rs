use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use tracing::info;

use super::ingredient::{Bread, Meat, Veggie};

/// A fully specified burger.
///
/// Every shop and kind shares this one shape; a recipe only decides the name and
/// the ingredients. Burgers are built by the constructors held in a
/// [`RecipeRegistry`](crate::recipe_registry::RecipeRegistry) and are immutable
/// once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Burger {
    name: String,
    bread: Bread,
    veggie: Veggie,
    meat: Meat,
}

impl Burger {
    /// Creates a new Burger.
    ///
    /// # Arguments
    /// * `name` - Display name, e.g. `TaipeiChickenBurger`
    /// * `bread` - The bun
    /// * `veggie` - The vegetable
    /// * `meat` - The patty
    pub fn new(name: impl Into<String>, bread: Bread, veggie: Veggie, meat: Meat) -> Self {
        Self {
            name: name.into(),
            bread,
            veggie,
            meat,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bread(&self) -> Bread {
        self.bread
    }

    pub fn veggie(&self) -> Veggie {
        self.veggie
    }

    pub fn meat(&self) -> Meat {
        self.meat
    }

    /// Cooks the burger, returning the report to show the customer.
    pub fn cook(&self) -> CookingReport<'_> {
        info!(
            burger = %self.name,
            bread = %self.bread,
            veggie = %self.veggie,
            meat = %self.meat,
            "Cooking burger"
        );
        CookingReport { burger: self }
    }
}

/// Human-readable description of a cooked [`Burger`].
///
/// Ingredient lines are indented with a tab:
///
/// ```text
/// Cooking TaipeiChickenBurger...
/// 	Bread used:WhiteBread
/// 	Veggie used:Tomato
/// 	Meat used:TaiwanChicken
/// Your TaipeiChickenBurger is ready. Enjoy it!
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CookingReport<'a> {
    burger: &'a Burger,
}

impl Display for CookingReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let burger = self.burger;
        writeln!(f, "Cooking {}...", burger.name)?;
        writeln!(f, "\tBread used:{}", burger.bread)?;
        writeln!(f, "\tVeggie used:{}", burger.veggie)?;
        writeln!(f, "\tMeat used:{}", burger.meat)?;
        write!(f, "Your {} is ready. Enjoy it!", burger.name)
    }
}
