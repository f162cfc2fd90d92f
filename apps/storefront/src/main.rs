//! # QuickCart Storefront
//!
//! A terminal storefront over the QuickCart demo catalog. Drives the
//! `CartStore` from stdin and renders the same three sections a web
//! storefront would show: product grid, cart summary, cart items.
//!
//! ## Usage
//! ```bash
//! cargo run -p storefront
//!
//! # With debug logging
//! RUST_LOG=debug cargo run -p storefront
//! ```
//!
//! ## Session Commands
//! ```text
//! shop              Show the product grid
//! cart              Show cart items
//! add <id>          Add one of a product           (aliases: a, +)
//! remove <id>       Remove one of a product        (aliases: r, -)
//! set <id> <qty>    Set a product's quantity       (0 removes)
//! clear             Empty the cart
//! json              Dump the cart view as JSON
//! help              Show this list
//! quit              Leave the shop
//! ```
//!
//! ## Screen Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Products                                                               │
//! │    [1] Laptop        $500.00   (in cart: 2)                             │
//! │    [2] Smartphone    $300.00                                            │
//! │    ...                                                                  │
//! │                                                                         │
//! │  Cart Summary                                                           │
//! │    Subtotal: $1000.00                                                   │
//! │    You got a free Wireless Mouse!                                       │
//! │                                                                         │
//! │  Cart Items                                                             │
//! │    Laptop           $500.00 x 2 = $1000.00                              │
//! │    Wireless Mouse   $0.00 x 1 = $0.00  [FREE GIFT]                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod ui;

use std::env;
use std::io::{self, BufRead, Write};

use quickcart_core::{CartStore, CoreError, Product, ProductId};
use thiserror::Error;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            other => {
                eprintln!("unknown option: {other}");
                print_usage();
                return Ok(());
            }
        }
    }

    init_tracing();
    info!("Starting QuickCart storefront");

    let mut store = CartStore::demo();

    println!("🛒 QuickCart");
    println!("============");
    println!();
    print!("{}", ui::shop(&store));
    println!();
    print!("{}", ui::summary(&store));
    println!();
    println!("Type 'help' for commands.");

    let stdin = io::stdin();
    prompt()?;
    for line in stdin.lock().lines() {
        let line = line?;
        match Command::parse(&line) {
            Ok(Some(command)) => {
                if !apply(&mut store, command) {
                    break;
                }
            }
            Ok(None) => {}
            Err(e) => println!("{e}"),
        }
        prompt()?;
    }

    println!();
    println!("Thanks for shopping at QuickCart!");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=quickcart_core=trace` - Show trace for the core crate only
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,quickcart_core=debug,storefront=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::TRACE)
        .init();
}

fn print_usage() {
    println!("QuickCart Terminal Storefront");
    println!();
    println!("Usage: storefront [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -h, --help    Show this help message");
    println!();
    println!("Environment:");
    println!("  RUST_LOG      Log filter (default: info,quickcart_core=debug,storefront=debug)");
}

fn prompt() -> io::Result<()> {
    print!("quickcart> ");
    io::stdout().flush()
}

// =============================================================================
// Command Parsing
// =============================================================================

/// One line of user input, parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Shop,
    Cart,
    Add(u32),
    Remove(u32),
    Set(u32, i64),
    Clear,
    Json,
    Help,
    Quit,
}

/// A line the parser couldn't turn into a command.
#[derive(Debug, Error, PartialEq, Eq)]
enum ParseError {
    #[error("unknown command: {0:?} (try 'help')")]
    Unknown(String),

    #[error("'{0}' needs a product id, e.g. '{0} 1' (see 'shop' for ids)")]
    MissingId(&'static str),

    #[error("{0:?} is not a product id")]
    BadId(String),

    #[error("'set' needs a quantity, e.g. 'set 2 3'")]
    MissingQuantity,

    #[error("{0:?} is not a quantity")]
    BadQuantity(String),
}

impl Command {
    /// Parses a line of input. A blank line is `Ok(None)`.
    fn parse(line: &str) -> Result<Option<Command>, ParseError> {
        let mut words = line.split_whitespace();
        let Some(keyword) = words.next() else {
            return Ok(None);
        };

        let command = match keyword {
            "shop" | "list" | "products" | "p" => Command::Shop,
            "cart" | "c" => Command::Cart,
            "add" | "a" | "+" => Command::Add(parse_id(words.next(), "add")?),
            "remove" | "r" | "-" => Command::Remove(parse_id(words.next(), "remove")?),
            "set" | "s" => {
                let id = parse_id(words.next(), "set")?;
                let quantity = parse_quantity(words.next())?;
                Command::Set(id, quantity)
            }
            "clear" => Command::Clear,
            "json" => Command::Json,
            "help" | "h" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            other => return Err(ParseError::Unknown(other.to_string())),
        };

        Ok(Some(command))
    }
}

fn parse_id(word: Option<&str>, command: &'static str) -> Result<u32, ParseError> {
    let word = word.ok_or(ParseError::MissingId(command))?;
    word.parse().map_err(|_| ParseError::BadId(word.to_string()))
}

fn parse_quantity(word: Option<&str>) -> Result<i64, ParseError> {
    let word = word.ok_or(ParseError::MissingQuantity)?;
    word.parse()
        .map_err(|_| ParseError::BadQuantity(word.to_string()))
}

// =============================================================================
// Command Application
// =============================================================================

/// Runs one command against the store. Returns `false` when the session
/// should end.
fn apply(store: &mut CartStore, command: Command) -> bool {
    match command {
        Command::Shop => {
            print!("{}", ui::shop(store));
            print!("{}", ui::summary(store));
        }
        Command::Cart => {
            print!("{}", ui::cart(store));
            print!("{}", ui::summary(store));
        }
        Command::Add(id) => {
            if is_gift(store, id) {
                println!("The free {} is added automatically.", gift_name(store));
            } else {
                match resolve(store, id) {
                    Ok(product) => {
                        store.increment(&product);
                        println!("Added {}.", product.name);
                        print!("{}", ui::summary(store));
                    }
                    Err(e) => println!("{e}"),
                }
            }
        }
        Command::Remove(id) => {
            if is_gift(store, id) {
                println!("The free {} is removed automatically.", gift_name(store));
            } else {
                match resolve(store, id) {
                    Ok(product) => {
                        store.decrement(&product);
                        println!("Removed one {}.", product.name);
                        print!("{}", ui::summary(store));
                    }
                    Err(e) => println!("{e}"),
                }
            }
        }
        Command::Set(id, quantity) => {
            if is_gift(store, id) {
                println!("The free {} manages its own quantity.", gift_name(store));
            } else {
                match resolve(store, id) {
                    Ok(product) => {
                        store.set_quantity(product.id, quantity);
                        // Echo what the store actually kept (input clamps)
                        println!("Set {} to {}.", product.name, store.quantity_of(product.id));
                        print!("{}", ui::summary(store));
                    }
                    Err(e) => println!("{e}"),
                }
            }
        }
        Command::Clear => {
            store.clear();
            println!("Cart cleared.");
        }
        Command::Json => match serde_json::to_string_pretty(&store.view()) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("could not serialize cart: {e}"),
        },
        Command::Help => print_commands(),
        Command::Quit => return false,
    }

    true
}

fn print_commands() {
    println!("Commands:");
    println!("  shop              Show the product grid");
    println!("  cart              Show cart items");
    println!("  add <id>          Add one of a product           (aliases: a, +)");
    println!("  remove <id>       Remove one of a product        (aliases: r, -)");
    println!("  set <id> <qty>    Set a product's quantity       (0 removes)");
    println!("  clear             Empty the cart");
    println!("  json              Dump the cart view as JSON");
    println!("  help              Show this list");
    println!("  quit              Leave the shop");
}

/// Looks a raw id up in the catalog.
fn resolve(store: &CartStore, id: u32) -> Result<Product, CoreError> {
    let product_id = ProductId::new(id);
    store
        .catalog()
        .get(product_id)
        .cloned()
        .ok_or(CoreError::ProductNotFound(product_id))
}

fn is_gift(store: &CartStore, id: u32) -> bool {
    ProductId::new(id) == store.promotion().gift_id()
}

fn gift_name(store: &CartStore) -> &str {
    &store.promotion().gift().name
}

// =============================================================================
// Unit Tests
// =============================================================================
