//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the process-wide `tracing` subscriber.
//!
//! ## ⚙️ Configuration
//!
//! - **Configurable log levels** via the `RUST_LOG` environment variable
//! - **Compact format** without module targets
//! - **stderr output**, so log lines never land in the middle of a prompt
//!
//! ## 🚀 Usage
//!
//! ```bash
//! # Orders, cooking and rejections
//! RUST_LOG=info cargo run
//!
//! # Also recipe registration and every parsed selection
//! RUST_LOG=debug cargo run
//! ```
//!
//! ## 🔍 Sample Output
//!
//! With `RUST_LOG=debug`, one round of the loop looks like:
//!
//! ```text
//! DEBUG order: Shop selected round=1 shop=Taipei
//! DEBUG order: Burger selected round=1 shop=Taipei kind=Chicken
//!  INFO order:create_burger: Created burger round=1 shop=Taipei kind=Chicken
//!      burger="TaipeiChickenBurger"
//!  INFO order: Cooking burger round=1 burger=TaipeiChickenBurger bread=WhiteBread
//!      veggie=Tomato meat=TaiwanChicken
//! ```
//!
//! Without `RUST_LOG` only errors are logged.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Spans and fields say where an event came from
        .with_writer(std::io::stderr) // Keep stdout for the customer transcript
        .compact() // Spans render inline, e.g. "order:create_burger"
        .init();
}
