//! # Session Lifecycle
//!
//! Startup wiring and the interactive loop:
//!
//! 1. [`setup_tracing`] installs logging.
//! 2. [`RecipeRegistry::standard_menu`](crate::recipe_registry::RecipeRegistry::standard_menu)
//!    builds the registry. A duplicate recipe here is fatal.
//! 3. The registry is injected into a [`ShopSession`] together with a
//!    [`Console`](crate::console::Console), and [`ShopSession::run`] serves orders
//!    until the customer presses the quit key.
//!
//! Errors inside a round ([`SessionError::is_recoverable`]) are printed and the
//! loop goes on. A console failure ends the session and is returned to `main`.

pub mod error;
pub mod shop_session;
pub mod tracing;

pub use error::*;
pub use shop_session::*;
pub use self::tracing::*;
