use tracing::{debug, info, info_span, warn, Instrument};

use super::error::SessionError;
use crate::console::{Console, ConsoleError};
use crate::model::{list_choices, parse_choice, Burger, BurgerKind, Choice, Shop};
use crate::recipe_registry::RecipeRegistry;

/// Runtime settings for a [`ShopSession`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Answer to the continuation prompt that ends the session, matched
    /// ASCII case-insensitively.
    pub quit_key: char,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { quit_key: 'Q' }
    }
}

/// The interactive ordering loop.
///
/// Each round asks for a shop, then for one of the burger kinds that shop has a
/// recipe for, builds the burger through the [`RecipeRegistry`] and cooks it.
/// Selection and recipe errors are printed and the round ends; the customer is
/// then asked whether to go on. Console errors end the session.
///
/// # Example
///
/// ```ignore
/// let registry = RecipeRegistry::standard_menu()?;
/// let mut session = ShopSession::new(registry, StreamConsole::stdio());
/// let served = session.run().await?;
/// ```
pub struct ShopSession<C> {
    registry: RecipeRegistry,
    console: C,
    config: SessionConfig,
}

impl<C: Console> ShopSession<C> {
    pub fn new(registry: RecipeRegistry, console: C) -> Self {
        Self::with_config(registry, console, SessionConfig::default())
    }

    pub fn with_config(registry: RecipeRegistry, console: C, config: SessionConfig) -> Self {
        Self {
            registry,
            console,
            config,
        }
    }

    /// Serves orders until the customer quits.
    ///
    /// Returns the number of burgers served.
    ///
    /// # Errors
    /// Only [`SessionError::Console`]; every other error is shown to the
    /// customer and the loop continues.
    pub async fn run(&mut self) -> Result<usize, SessionError> {
        let mut served = 0;
        let mut round = 0u64;

        loop {
            round += 1;
            match self.serve_order().instrument(info_span!("order", round)).await {
                Ok(()) => served += 1,
                Err(e) if e.is_recoverable() => {
                    warn!(round, error = %e, "Order rejected");
                    self.console.write(&format!("{e}\n")).await?;
                }
                Err(e) => return Err(e),
            }

            if !self.should_continue().await? {
                break;
            }
        }

        info!(rounds = round, served, "Shop closed");
        Ok(served)
    }

    /// Runs one round: take the order, then cook it.
    pub async fn serve_order(&mut self) -> Result<(), SessionError> {
        let burger = self.take_order().await?;
        let report = burger.cook().to_string();
        self.console.write(&format!("{report}\n")).await?;
        Ok(())
    }

    /// Asks for a shop and a burger kind and builds the chosen burger.
    pub async fn take_order(&mut self) -> Result<Burger, SessionError> {
        let question = format!("Which shop do you like? {}: ", list_choices(&Shop::all()));
        let answer = self.console.prompt(&question).await?;
        let shop: Shop = parse_choice(&answer, None)?;
        debug!(%shop, "Shop selected");

        let kinds = self.registry.defined_kinds(shop);
        let question = format!("What burger would you like? {}: ", list_choices(&kinds));
        let answer = self.console.prompt(&question).await?;
        let kind: BurgerKind = parse_choice(&answer, Some(kinds.as_slice()))?;
        debug!(%shop, %kind, "Burger selected");

        Ok(self.registry.create_burger(shop, kind)?)
    }

    pub fn registry(&self) -> &RecipeRegistry {
        &self.registry
    }

    /// Consumes the session, returning its console.
    pub fn into_console(self) -> C {
        self.console
    }

    async fn should_continue(&mut self) -> Result<bool, ConsoleError> {
        let question = format!(
            "Press '{}' to quit or any other key to go on...",
            self.config.quit_key
        );
        let answer = self.console.prompt(&question).await?;
        self.console.write("\n").await?;

        let mut chars = answer.trim().chars();
        let quit = matches!(
            (chars.next(), chars.next()),
            (Some(key), None) if key.eq_ignore_ascii_case(&self.config.quit_key)
        );
        Ok(!quit)
    }
}
