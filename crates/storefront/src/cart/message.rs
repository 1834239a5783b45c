//! Totals and the checkout message.
//!
//! Both are pure functions of the cart contents.

use rust_decimal::Decimal;

use ruja_core::{CartItem, PriceFormat, round_cents};

const CHECKOUT_GREETING: &str = "Hola, me gustaría comprar los siguientes productos:";

/// Sum of `price * quantity` over all lines, rounded to cents.
///
/// Returns `None` if any price cannot be read (or the sum overflows); callers
/// render that as `NaN` rather than dropping the line.
#[must_use]
pub fn compute_total(items: &[CartItem], format: &PriceFormat) -> Option<Decimal> {
    items
        .iter()
        .try_fold(Decimal::ZERO, |total, item| {
            let unit = format.parse_amount(&item.price).ok()?;
            let line = unit.checked_mul(Decimal::from(item.quantity.get()))?;
            total.checked_add(line)
        })
        .map(round_cents)
}

/// Plain-text order summary sent to the store's chat.
///
/// ```text
/// Hola, me gustaría comprar los siguientes productos:
///
/// <title> - <description>
/// Cantidad: <quantity>
/// Precio: <price>
///
/// Total: RD$<total>
/// ```
#[must_use]
pub fn checkout_message(items: &[CartItem], format: &PriceFormat) -> String {
    let mut message = String::from(CHECKOUT_GREETING);
    message.push_str("\n\n");

    for item in items {
        message.push_str(&format!(
            "{} - {}\nCantidad: {}\nPrecio: {}\n\n",
            item.title, item.description, item.quantity, item.price
        ));
    }

    message.push_str("Total: ");
    message.push_str(&format.format_total(compute_total(items, format)));
    message
}
