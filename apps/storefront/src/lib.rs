//! # Bakehouse Storefront Library
//!
//! Core library for the storefront application: configuration, state,
//! commands and the terminal front end.
//!
//! ## Module Organization
//! ```text
//! bakehouse_storefront/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── catalog.rs  ◄─── Menu state (read-only)
//! │   ├── cart.rs     ◄─── Cart engine state
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── catalog.rs  ◄─── Menu listing/search
//! │   ├── cart.rs     ◄─── Cart manipulation commands
//! │   ├── checkout.rs ◄─── Order placement
//! │   └── config.rs   ◄─── Configuration retrieval
//! ├── terminal/       ◄─── Line-oriented front end
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod state;
pub mod terminal;

use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

use state::{CartState, CatalogState, ConfigState};
use terminal::Terminal;

/// Runs the storefront on stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: info,bakehouse=debug, override with RUST_LOG             │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • BAKEHOUSE_* environment variables over defaults                   │
/// │                                                                         │
/// │  3. Load Menu ────────────────────────────────────────────────────────► │
/// │     • Configured file, config-dir menu.json, or built-in menu           │
/// │                                                                         │
/// │  4. Initialize State Objects ─────────────────────────────────────────► │
/// │     • CatalogState: Arc<Catalog>                                        │
/// │     • CartState: empty cart engine behind a Mutex                       │
/// │                                                                         │
/// │  5. Run Terminal Session ─────────────────────────────────────────────► │
/// │     • Subscribe the cart badge                                          │
/// │     • Read intents until quit / EOF                                     │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    info!("Starting Bakehouse storefront");

    let config = ConfigState::from_env()?;
    let catalog = CatalogState::load(&config)?;
    let cart = CartState::new();

    info!(
        store = %config.store_name,
        products = catalog.catalog().len(),
        "State initialized"
    );

    let terminal = Terminal::new(catalog, cart, config, io::stdout());
    terminal.attach_badge();
    terminal.run(io::stdin().lock())?;

    info!("Storefront closed");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=bakehouse=trace` - Show trace for bakehouse crates only
/// - Default: INFO, DEBUG for bakehouse crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,bakehouse=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
