//! Console entry point: build the standard menu and serve orders on stdin/stdout.

use burger_shop::console::StreamConsole;
use burger_shop::lifecycle::{setup_tracing, ShopSession};
use burger_shop::recipe_registry::RecipeRegistry;
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), String> {
    setup_tracing();

    let registry = RecipeRegistry::standard_menu().map_err(|e| {
        error!(error = %e, "Invalid recipe configuration");
        e.to_string()
    })?;
    info!(recipes = registry.len(), "Recipes prepared");

    let mut session = ShopSession::new(registry, StreamConsole::stdio());
    match session.run().await {
        Ok(served) => {
            info!(served, "Session finished");
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Session aborted");
            Err(e.to_string())
        }
    }
}
