//! Listing page commands: search, product modal and add-to-cart.

use ruja_core::Product;
use ruja_storefront::catalog::Catalog;
use ruja_storefront::config::StorefrontConfig;
use ruja_storefront::error::{Result, StorefrontError};

use super::open_cart;

/// Print the products visible for `query`.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded.
pub fn search(config: &StorefrontConfig, query: Option<&str>) -> Result<()> {
    let catalog = Catalog::load(&config.catalog_path)?;
    let shown = catalog.search(query.unwrap_or_default());

    if shown.is_empty() {
        println!("Sin resultados");
        return Ok(());
    }

    for (position, product) in shown {
        println!("{position:>3}. {} ({})", product.title, product.price);
        println!("     {}", product.description);
    }
    Ok(())
}

/// Open the product modal for a listing position.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded, the position does not
/// exist, or the modal cannot be rendered.
pub fn view(config: &StorefrontConfig, position: usize) -> Result<()> {
    let product = product_at(config, position)?;
    let mut cart = open_cart(config)?;
    let modal = cart.open_product(product)?;
    print!("{}", modal.to_text()?);
    Ok(())
}

/// Open a product and add it to the cart.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded, the position does not
/// exist, or the cart cannot be saved.
pub fn add(config: &StorefrontConfig, position: usize) -> Result<()> {
    let product = product_at(config, position)?;
    let mut cart = open_cart(config)?;
    cart.open_product(product)?;

    if let Some(id) = cart.add_current_product()? {
        println!("Línea {id} · {} en el carrito", cart.item_count());
    }
    Ok(())
}

fn product_at(config: &StorefrontConfig, position: usize) -> Result<Product> {
    let catalog = Catalog::load(&config.catalog_path)?;
    catalog
        .get(position)
        .cloned()
        .ok_or_else(|| StorefrontError::NotFound(format!("product {position}")))
}
