//! # Commands Module
//!
//! Every operation the presentation layer can invoke.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── catalog.rs   ◄─── Menu listing and search
//! ├── cart.rs      ◄─── Cart manipulation
//! ├── checkout.rs  ◄─── Order placement
//! └── config.rs    ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Terminal                                                               │
//! │  ────────                                                               │
//! │  > inc 3 2                                                              │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Intent::Adjust { reference: "3", delta: 2 }                            │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  fn update_cart_item(                                                   │
//! │      cart: &CartState,   ◄── Only the state it needs                   │
//! │      name: &str,                                                        │
//! │      delta: i64,                                                        │
//! │  ) -> CartResponse                                                      │
//! │         │                                                               │
//! │         │ (serializable response)                                       │
//! │         ▼                                                               │
//! │  Rendered cart / JSON                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
