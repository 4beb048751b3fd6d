//! # Intent Parsing
//!
//! Turns one line of terminal input into a storefront intent.
//!
//! ## Grammar
//! ```text
//! menu                      list the menu
//! search <text>             search names and descriptions
//! add <product>             add one unit
//! remove <product>          drop the line
//! inc <product> [n]         quantity + n (default 1)
//! dec <product> [n]         quantity - n (default 1)
//! cart                      show the cart
//! clear                     empty the cart
//! checkout                  place the order
//! json                      cart as JSON
//! help                      this list
//! quit                      leave
//!
//! <product> is an exact name or a menu number (3 or #3)
//! ```

use std::str::FromStr;

use thiserror::Error;

/// A parsed terminal command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Menu,
    Search(String),
    Add(String),
    Remove(String),
    /// `inc`/`dec`: reference plus signed delta.
    Adjust { reference: String, delta: i64 },
    Cart,
    Clear,
    Checkout,
    Json,
    Help,
    Quit,
}

/// Why a line could not be understood.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Type a command, or 'help' for the list")]
    Empty,

    #[error("Unknown command '{0}'. Type 'help' for the list")]
    UnknownCommand(String),

    #[error("'{0}' needs a product name or menu number")]
    MissingProduct(&'static str),

    #[error("Amount must be a positive whole number, got '{0}'")]
    InvalidAmount(String),
}

impl FromStr for Intent {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        if line.is_empty() {
            return Err(ParseError::Empty);
        }

        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command.to_lowercase().as_str() {
            "menu" => Ok(Intent::Menu),
            "search" => Ok(Intent::Search(rest.to_string())),
            "add" => product_arg("add", rest).map(Intent::Add),
            "remove" | "rm" => product_arg("remove", rest).map(Intent::Remove),
            "inc" => adjust_args("inc", rest, 1),
            "dec" => adjust_args("dec", rest, -1),
            "cart" => Ok(Intent::Cart),
            "clear" => Ok(Intent::Clear),
            "checkout" => Ok(Intent::Checkout),
            "json" => Ok(Intent::Json),
            "help" | "?" => Ok(Intent::Help),
            "quit" | "exit" | "q" => Ok(Intent::Quit),
            _ => Err(ParseError::UnknownCommand(command.to_string())),
        }
    }
}

fn product_arg(command: &'static str, rest: &str) -> Result<String, ParseError> {
    if rest.is_empty() {
        Err(ParseError::MissingProduct(command))
    } else {
        Ok(rest.to_string())
    }
}

/// `<product> [n]`: a trailing integer is the amount, unless it is the
/// only token (then it is a menu number).
fn adjust_args(command: &'static str, rest: &str, sign: i64) -> Result<Intent, ParseError> {
    if rest.is_empty() {
        return Err(ParseError::MissingProduct(command));
    }

    let trailing = rest
        .rsplit_once(char::is_whitespace)
        .and_then(|(head, tail)| tail.parse::<i64>().ok().map(|n| (head, tail, n)));

    let (reference, amount) = match trailing {
        Some((_, tail, n)) if n <= 0 => return Err(ParseError::InvalidAmount(tail.to_string())),
        Some((head, _, n)) => (head.trim(), n),
        None => (rest, 1),
    };

    Ok(Intent::Adjust {
        reference: reference.to_string(),
        delta: sign.saturating_mul(amount),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Result<Intent, ParseError> {
        line.parse()
    }

    #[test]
    fn test_simple_commands() {
        assert_eq!(parse("menu"), Ok(Intent::Menu));
        assert_eq!(parse("  CART "), Ok(Intent::Cart));
        assert_eq!(parse("checkout"), Ok(Intent::Checkout));
        assert_eq!(parse("q"), Ok(Intent::Quit));
        assert_eq!(parse("?"), Ok(Intent::Help));
    }

    #[test]
    fn test_product_commands_keep_full_name() {
        assert_eq!(
            parse("add Classic Tiramisu Square Cake"),
            Ok(Intent::Add("Classic Tiramisu Square Cake".to_string()))
        );
        assert_eq!(parse("rm #3"), Ok(Intent::Remove("#3".to_string())));
        assert_eq!(parse("add"), Err(ParseError::MissingProduct("add")));
    }

    #[test]
    fn test_search_allows_empty_query() {
        assert_eq!(parse("search"), Ok(Intent::Search(String::new())));
        assert_eq!(
            parse("search  Cheesecake "),
            Ok(Intent::Search("Cheesecake".to_string()))
        );
    }

    #[test]
    fn test_adjust_amounts() {
        assert_eq!(
            parse("inc 3"),
            Ok(Intent::Adjust {
                reference: "3".to_string(),
                delta: 1
            })
        );
        assert_eq!(
            parse("inc 3 2"),
            Ok(Intent::Adjust {
                reference: "3".to_string(),
                delta: 2
            })
        );
        assert_eq!(
            parse("dec Pistachio Almond Croissant 4"),
            Ok(Intent::Adjust {
                reference: "Pistachio Almond Croissant".to_string(),
                delta: -4
            })
        );
        assert_eq!(
            parse("dec Pistachio Almond Croissant"),
            Ok(Intent::Adjust {
                reference: "Pistachio Almond Croissant".to_string(),
                delta: -1
            })
        );
    }

    #[test]
    fn test_adjust_rejects_non_positive_amount() {
        assert_eq!(parse("inc 3 0"), Err(ParseError::InvalidAmount("0".to_string())));
        assert_eq!(parse("dec 3 -2"), Err(ParseError::InvalidAmount("-2".to_string())));
        assert_eq!(parse("inc"), Err(ParseError::MissingProduct("inc")));
    }

    #[test]
    fn test_unknown_and_empty() {
        assert_eq!(parse(""), Err(ParseError::Empty));
        assert_eq!(
            parse("buy 3"),
            Err(ParseError::UnknownCommand("buy".to_string()))
        );
    }
}
