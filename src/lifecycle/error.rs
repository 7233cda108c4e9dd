//! Error types for a shop session.

use crate::console::ConsoleError;
use crate::model::SelectionError;
use crate::recipe_registry::RecipeError;
use thiserror::Error;

/// Everything that can go wrong while serving an order.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The customer picked something that is not on the menu.
    #[error(transparent)]
    Selection(#[from] SelectionError),

    /// The registry has no recipe for the chosen pair.
    #[error(transparent)]
    Recipe(#[from] RecipeError),

    /// The console failed or was closed.
    #[error(transparent)]
    Console(#[from] ConsoleError),
}

impl SessionError {
    /// Whether the session can report this error and carry on to the next order.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, SessionError::Console(_))
    }
}
