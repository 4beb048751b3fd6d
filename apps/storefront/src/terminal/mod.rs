//! # Terminal Front End
//!
//! A line-oriented presentation layer over the commands. Each input line is
//! one intent, processed to completion before the next is read.
//!
//! ## Session Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  stdin line ──► Intent::from_str ──► command ──► CartEngine            │
//! │                      │                              │                   │
//! │                 ParseError                     listener fires           │
//! │                      │                              │                   │
//! │                      ▼                              ▼                   │
//! │                 message ◄──────────── stdout ◄── "Cart: 3 items, $24.00"│
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod intent;

pub use intent::{Intent, ParseError};

use std::io::{self, BufRead, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use bakehouse_core::{CartChange, OrderSummary, Product, SubscriptionId};
use chrono::Local;
use thiserror::Error;
use tracing::{debug, warn};

use crate::commands;
use crate::commands::cart::CartResponse;
use crate::error::ApiError;
use crate::state::{CartState, CatalogState, ConfigState};

const HELP: &str = "\
Commands:
  menu                 show the menu
  search <text>        search the menu
  add <product>        add one to your cart
  remove <product>     remove from your cart
  inc <product> [n]    increase quantity (default 1)
  dec <product> [n]    decrease quantity (default 1)
  cart                 show your cart
  clear                empty your cart
  checkout             place your order
  json                 show your cart as JSON
  help                 show this list
  quit                 leave the store

<product> is the exact name or the menu number (e.g. 3 or #3).";

/// Whether the session keeps reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug, Error)]
enum StepError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// One shopping session on a terminal.
pub struct Terminal<W: Write + Send + 'static> {
    catalog: CatalogState,
    cart: CartState,
    config: ConfigState,
    out: Arc<Mutex<W>>,
}

impl<W: Write + Send + 'static> Terminal<W> {
    pub fn new(catalog: CatalogState, cart: CartState, config: ConfigState, out: W) -> Self {
        Terminal {
            catalog,
            cart,
            config,
            out: Arc::new(Mutex::new(out)),
        }
    }

    /// Subscribes the cart badge: one line after every cart change.
    pub fn attach_badge(&self) -> SubscriptionId {
        let out = Arc::clone(&self.out);
        let config = self.config.clone();

        self.cart.subscribe(move |change: &CartChange| {
            let mut out = out.lock().unwrap_or_else(PoisonError::into_inner);
            if let Err(e) = writeln!(out, "{}", badge(&config, change)) {
                warn!(error = %e, "Failed to print cart badge");
            }
        })
    }

    /// Reads intents until `quit` or end of input.
    pub fn run<R: BufRead>(&self, input: R) -> io::Result<()> {
        self.say(format!("Welcome to {}!", self.config.store_name))?;
        self.say("Type 'menu' to see what's fresh today, or 'help' for all commands.")?;

        let mut lines = input.lines();
        loop {
            {
                let mut out = self.lock_out();
                write!(out, "> ")?;
                out.flush()?;
            }

            let Some(line) = lines.next().transpose()? else {
                debug!("End of input");
                break;
            };

            if self.handle_line(&line)? == Flow::Quit {
                break;
            }
        }

        Ok(())
    }

    /// Parses and executes one line.
    ///
    /// User mistakes are reported on the output and never end the session;
    /// only output failures are returned as errors.
    pub fn handle_line(&self, line: &str) -> io::Result<Flow> {
        let intent = match line.parse::<Intent>() {
            Ok(intent) => intent,
            Err(ParseError::Empty) => return Ok(Flow::Continue),
            Err(e) => {
                warn!(input = %line, error = %e, "Unparseable input");
                self.say(e)?;
                return Ok(Flow::Continue);
            }
        };

        debug!(?intent, "Handling intent");
        match self.execute(intent) {
            Ok(flow) => Ok(flow),
            Err(StepError::Api(e)) => {
                warn!(code = ?e.code, message = %e.message, "Command failed");
                self.say(&e.message)?;
                Ok(Flow::Continue)
            }
            Err(StepError::Io(e)) => Err(e),
        }
    }

    fn execute(&self, intent: Intent) -> Result<Flow, StepError> {
        match intent {
            Intent::Menu => {
                let menu = commands::catalog::list_menu(&self.catalog);
                self.show_products(&menu)?;
            }
            Intent::Search(query) => {
                let results = commands::catalog::search_menu(&self.catalog, &query)?;
                if results.is_empty() {
                    self.say(format!("Nothing on the menu matches '{}'", query))?;
                } else {
                    self.show_products(&results)?;
                }
            }
            Intent::Add(reference) => {
                let name = self.resolve(&reference)?;
                commands::cart::add_to_cart(&self.catalog, &self.cart, &name)?;
                self.say("Item added successfully!")?;
            }
            Intent::Remove(reference) => {
                let name = self.resolve(&reference)?;
                match commands::cart::remove_if_in_cart(&self.cart, &name) {
                    Some(_) => self.say(format!("Removed {} from your cart", name))?,
                    None => self.say(format!("{} is not in your cart", name))?,
                }
            }
            Intent::Adjust { reference, delta } => {
                let name = self.resolve(&reference)?;
                if commands::cart::update_if_in_cart(&self.cart, &name, delta).is_none() {
                    self.say(format!("{} is not in your cart", name))?;
                }
            }
            Intent::Cart => {
                let cart = commands::cart::get_cart(&self.cart);
                self.show_cart(&cart)?;
            }
            Intent::Clear => {
                commands::cart::clear_cart(&self.cart);
                self.say("Your cart has been cleared")?;
            }
            Intent::Checkout => {
                let summary = commands::checkout::checkout(&self.cart)?;
                self.show_order(&summary)?;
            }
            Intent::Json => {
                let cart = commands::cart::get_cart(&self.cart);
                let json = serde_json::to_string_pretty(&cart)
                    .map_err(|e| ApiError::internal(e.to_string()))?;
                self.say(json)?;
            }
            Intent::Help => self.say(HELP)?,
            Intent::Quit => {
                self.say(format!("Thanks for visiting {}!", self.config.store_name))?;
                return Ok(Flow::Quit);
            }
        }

        Ok(Flow::Continue)
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn resolve(&self, reference: &str) -> Result<String, ApiError> {
        Ok(self.catalog.resolve(reference)?.name().to_string())
    }

    fn show_products(&self, products: &[Product]) -> io::Result<()> {
        let mut out = self.lock_out();
        for product in products {
            let position = self
                .catalog
                .catalog()
                .iter()
                .position(|p| p.name() == product.name())
                .map_or(0, |i| i + 1);
            writeln!(
                out,
                "{:>3}. {:<40} {:>8}",
                position,
                product.name(),
                self.config.format_money(product.price())
            )?;
            writeln!(out, "     {}", product.description())?;
        }
        Ok(())
    }

    fn show_cart(&self, cart: &CartResponse) -> io::Result<()> {
        if cart.items.is_empty() {
            return self.say("Your cart is empty!");
        }

        let mut out = self.lock_out();
        for line in &cart.items {
            writeln!(
                out,
                "  {:>3} x {:<40} {:>8}",
                line.quantity,
                line.name,
                self.config.format_money(line.line_total)
            )?;
        }
        writeln!(out, "Total items: {}", cart.totals.total_items)?;
        writeln!(
            out,
            "Total: {}",
            self.config.format_money(cart.totals.total_price)
        )
    }

    fn show_order(&self, summary: &OrderSummary) -> io::Result<()> {
        let mut out = self.lock_out();
        writeln!(out, "Order placed successfully!")?;
        writeln!(out, "Order: {}", summary.order_id)?;
        writeln!(
            out,
            "Placed at: {}",
            summary
                .placed_at
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
        )?;
        writeln!(out, "Total items: {}", summary.total_items)?;
        writeln!(out, "Total: {}", self.config.format_money(summary.total_price))
    }

    fn say(&self, text: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.lock_out(), "{}", text)
    }

    fn lock_out(&self) -> MutexGuard<'_, W> {
        self.out.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// The one-line cart summary shown after each change.
fn badge(config: &ConfigState, change: &CartChange) -> String {
    let items = change.totals.total_items;
    format!(
        "Cart: {} {}, {}",
        items,
        if items == 1 { "item" } else { "items" },
        config.format_money(change.totals.total_price)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use bakehouse_catalog::Catalog;

    fn terminal() -> Terminal<Vec<u8>> {
        let terminal = Terminal::new(
            CatalogState::new(Catalog::default_menu().unwrap()),
            CartState::new(),
            ConfigState::default(),
            Vec::new(),
        );
        terminal.attach_badge();
        terminal
    }

    fn take_output(terminal: &Terminal<Vec<u8>>) -> String {
        let mut out = terminal.lock_out();
        String::from_utf8(std::mem::take(&mut *out)).unwrap()
    }

    fn send(terminal: &Terminal<Vec<u8>>, line: &str) -> String {
        assert_eq!(terminal.handle_line(line).unwrap(), Flow::Continue);
        take_output(terminal)
    }

    #[test]
    fn test_add_prints_badge_and_message() {
        let t = terminal();

        let out = send(&t, "add 9");
        assert_eq!(out, "Cart: 1 item, $6.50\nItem added successfully!\n");

        let out = send(&t, "add Pistachio Almond Croissant");
        assert_eq!(out, "Cart: 2 items, $13.00\nItem added successfully!\n");
    }

    #[test]
    fn test_adjust_and_remove() {
        let t = terminal();
        send(&t, "add #7");

        assert_eq!(send(&t, "inc 7 2"), "Cart: 3 items, $26.25\n");
        assert_eq!(send(&t, "dec 7 10"), "Cart: 0 items, $0.00\n");
        assert_eq!(
            send(&t, "dec 7"),
            "Classic Tiramisu Square Cake is not in your cart\n"
        );

        send(&t, "add 7");
        let out = send(&t, "remove Classic Tiramisu Square Cake");
        assert_eq!(
            out,
            "Cart: 0 items, $0.00\nRemoved Classic Tiramisu Square Cake from your cart\n"
        );
    }

    #[test]
    fn test_cart_listing() {
        let t = terminal();
        assert_eq!(send(&t, "cart"), "Your cart is empty!\n");

        send(&t, "add 1");
        send(&t, "add 1");
        let out = send(&t, "cart");
        assert!(out.contains("Salted Caramel Toffee Cheesecake"));
        assert!(out.contains("Total items: 2"));
        assert!(out.ends_with("Total: $19.00\n"));
    }

    #[test]
    fn test_checkout_messages() {
        let t = terminal();
        assert_eq!(send(&t, "checkout"), "Your cart is empty!\n");

        send(&t, "add 5");
        let out = send(&t, "checkout");
        assert!(out.starts_with("Cart: 0 items, $0.00\nOrder placed successfully!\n"));
        assert!(out.contains("Total items: 1\n"));
        assert!(out.ends_with("Total: $9.50\n"));
        assert_eq!(send(&t, "cart"), "Your cart is empty!\n");
    }

    #[test]
    fn test_errors_do_not_end_session() {
        let t = terminal();
        assert_eq!(send(&t, "add Scone"), "Product not found: Scone\n");
        assert_eq!(send(&t, "add 99"), "Product not found: 99\n");
        assert_eq!(
            send(&t, "dance"),
            "Unknown command 'dance'. Type 'help' for the list\n"
        );
        assert_eq!(send(&t, "   "), "");
    }

    #[test]
    fn test_search_output() {
        let t = terminal();
        let out = send(&t, "search yule");
        assert!(out.starts_with(" 12. Festive Chocolate Yule Log cake"));
        assert!(out.contains("$14.00"));

        assert_eq!(
            send(&t, "search baguette"),
            "Nothing on the menu matches 'baguette'\n"
        );
    }

    #[test]
    fn test_json_output() {
        let t = terminal();
        send(&t, "add 10");
        let out = send(&t, "json");
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(json["items"][0]["name"], "Gourmet Cinnamon cream Roll");
        assert_eq!(json["totals"]["totalPriceCents"], 575);
    }

    #[test]
    fn test_run_until_quit() {
        let t = terminal();
        let input = "add 2\nquit\nadd 2\n";
        t.run(input.as_bytes()).unwrap();

        let out = take_output(&t);
        assert!(out.starts_with("Welcome to Sweet Corner Bakehouse!\n"));
        assert!(out.contains("Item added successfully!"));
        assert!(out.contains("Thanks for visiting Sweet Corner Bakehouse!"));
        assert_eq!(
            t.cart
                .with_cart(|engine| engine.quantity_of("Fresh Strawberry Glaze Cheesecake")),
            1
        );
    }
}
