//! Cart page commands.

use ruja_core::CartItemId;
use ruja_storefront::cart::Checkout;
use ruja_storefront::config::StorefrontConfig;
use ruja_storefront::error::Result;

use crate::host::ConsoleHost;

use super::open_cart;

/// Print the cart summary.
///
/// # Errors
///
/// Returns an error if the cart cannot be read or rendered.
pub fn show(config: &StorefrontConfig) -> Result<()> {
    let cart = open_cart(config)?;
    print!("{}", cart.render().to_text()?);
    Ok(())
}

/// Print the item-list markup a web host would inject.
///
/// # Errors
///
/// Returns an error if the cart cannot be read or rendered.
pub fn html(config: &StorefrontConfig) -> Result<()> {
    let cart = open_cart(config)?;
    println!("{}", cart.render().to_html()?);
    Ok(())
}

/// Change a line's quantity and re-print the cart.
///
/// # Errors
///
/// Returns an error if the cart cannot be read or saved.
pub fn quantity(config: &StorefrontConfig, id: CartItemId, delta: i64) -> Result<()> {
    let mut cart = open_cart(config)?.with_display(ConsoleHost);
    if !cart.set_quantity(id, delta)? {
        tracing::warn!(%id, "No cart line with that id");
    }
    Ok(())
}

/// Remove a line and re-print the cart.
///
/// # Errors
///
/// Returns an error if the cart cannot be read or saved.
pub fn remove(config: &StorefrontConfig, id: CartItemId) -> Result<()> {
    let mut cart = open_cart(config)?.with_display(ConsoleHost);
    if !cart.remove(id)? {
        tracing::warn!(%id, "No cart line with that id");
    }
    Ok(())
}

/// Hand the order off to WhatsApp.
///
/// The link (or the empty-cart warning) is printed by the console host.
///
/// # Errors
///
/// Returns an error if the cart cannot be read or the link cannot be built.
pub fn checkout(config: &StorefrontConfig) -> Result<()> {
    let cart = open_cart(config)?;
    if let Checkout::HandedOff(url) = cart.checkout()? {
        tracing::debug!(%url, "Checkout link printed");
    }
    Ok(())
}
