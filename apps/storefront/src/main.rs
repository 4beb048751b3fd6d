//! # Bakehouse Storefront Entry Point
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Bakehouse Storefront                             │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                      Terminal (stdin/stdout)                      │  │
//! │  │  • Menu listing        • Cart badge                               │  │
//! │  │  • Search              • Checkout confirmation                    │  │
//! │  └──────────────────────────────┬───────────────────────────────────┘  │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                    Rust Backend (this crate)                     │  │
//! │  │                                                                  │  │
//! │  │  main.rs ────► Calls run()                                       │  │
//! │  │  lib.rs ─────► Sets up logging, config, state                    │  │
//! │  │  commands/ ──► list_menu, add_to_cart, checkout                  │  │
//! │  │  state/ ─────► CatalogState, CartState, ConfigState              │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // The actual setup is in lib.rs for better testability
    bakehouse_storefront::run()
}
