//! Pure data: the closed choice sets, the ingredient tags and the [`Burger`] itself.

#[macro_use]
mod choice;
pub mod burger;
pub mod error;
pub mod ingredient;
pub mod menu;

pub use burger::*;
pub use choice::*;
pub use error::*;
pub use ingredient::*;
pub use menu::*;
