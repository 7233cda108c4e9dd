#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Burger Shop
//!
//! > **Pick a shop, pick a burger, get it cooked.**
//!
//! A small interactive console program built around a recipe factory. Every shop
//! offers its own subset of burger kinds, and each `(shop, kind)` pair maps to a
//! constructor that assembles a [`Burger`](model::Burger) from bread, veggie and meat.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`model`])
//! - **Role**: The closed menus ([`Shop`](model::Shop), [`BurgerKind`](model::BurgerKind)),
//!   the ingredient tags and the single [`Burger`](model::Burger) shape.
//! - **Key items**: [`Choice`](model::Choice), [`parse_choice`](model::parse_choice).
//!
//! ### 2. The Factory ([`recipe_registry`])
//! - **Role**: Maps `(Shop, BurgerKind)` to burger constructors and builds burgers on demand.
//! - **Key items**: [`RecipeRegistry`](recipe_registry::RecipeRegistry).
//!
//! ### 3. The Interface ([`console`])
//! - **Role**: Line-based text I/O behind the [`Console`](console::Console) trait.
//!
//! ### 4. The Loop ([`lifecycle`])
//! - **Role**: Tracing setup and the [`ShopSession`](lifecycle::ShopSession) that
//!   prompts, validates, cooks and repeats.
//!
//! ## 👩‍💻 Error Handling
//! Each module has its own error enum. [`SessionError`](lifecycle::SessionError)
//! collects them with `#[from]` and tells the loop which ones it can recover from.
//!
//! ## 🚀 Running
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod console;
pub mod lifecycle;
pub mod model;
pub mod recipe_registry;
