//! Ruja CLI - Browse the catalog, manage the cart and check out via WhatsApp.
//!
//! # Usage
//!
//! ```bash
//! # List products matching a query
//! ruja search larimar
//!
//! # Show product 3 with its WhatsApp inquiry link
//! ruja view 3
//!
//! # Add product 3 to the cart
//! ruja add 3
//!
//! # Show the cart, change a quantity, remove a line
//! ruja cart
//! ruja qty 1712345678901 -1
//! ruja remove 1712345678901
//!
//! # Print the WhatsApp checkout link
//! ruja checkout
//! ```
//!
//! # Commands
//!
//! - `search` - Filter the product listing
//! - `view` / `add` - Product modal and add-to-cart
//! - `cart` / `html` - Render the cart as text or as item-list markup
//! - `qty` / `remove` - Change or drop a cart line
//! - `checkout` - Hand the order off to WhatsApp
//!
//! The cart is stored under `RUJA_DATA_DIR` and survives between runs.

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ruja_core::CartItemId;
use ruja_storefront::config::StorefrontConfig;
use ruja_storefront::error::Result;

mod commands;
mod host;

#[derive(Parser)]
#[command(name = "ruja")]
#[command(author, version, about = "Ruja storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog products matching a query (all when omitted)
    Search {
        /// Text to look for in names and descriptions
        query: Option<String>,
    },
    /// Show a product's details and WhatsApp inquiry link
    View {
        /// Listing position, as printed by `search`
        position: usize,
    },
    /// Add a product to the cart
    Add {
        /// Listing position, as printed by `search`
        position: usize,
    },
    /// Show the cart
    Cart,
    /// Print the cart item-list markup
    Html,
    /// Change a cart line's quantity
    Qty {
        /// Line id, as printed by `cart`
        id: CartItemId,

        /// Amount to add (negative to subtract)
        #[arg(allow_negative_numbers = true)]
        delta: i64,
    },
    /// Remove a cart line
    Remove {
        /// Line id, as printed by `cart`
        id: CartItemId,
    },
    /// Hand the order off to WhatsApp
    Checkout,
}

fn main() {
    // Logs go to stderr so command output stays clean.
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "ruja=info,ruja_storefront=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = StorefrontConfig::from_env()?;

    match cli.command {
        Commands::Search { query } => commands::catalog::search(&config, query.as_deref()),
        Commands::View { position } => commands::catalog::view(&config, position),
        Commands::Add { position } => commands::catalog::add(&config, position),
        Commands::Cart => commands::cart::show(&config),
        Commands::Html => commands::cart::html(&config),
        Commands::Qty { id, delta } => commands::cart::quantity(&config, id, delta),
        Commands::Remove { id } => commands::cart::remove(&config, id),
        Commands::Checkout => commands::cart::checkout(&config),
    }
}
