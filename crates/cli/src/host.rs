//! Terminal host: prints notices, links and cart renderings to stdout.

use url::Url;

use ruja_storefront::cart::CartView;
use ruja_storefront::notify::{CartDisplay, Notice, Notifier};

/// Stands in for the browser page.
///
/// Notices are printed as-is, navigation prints the link to open, and the
/// item list is re-printed after each cart change.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleHost;

impl Notifier for ConsoleHost {
    fn notify(&self, notice: Notice) {
        println!("{}", notice.message());
    }

    fn navigate(&self, url: &Url) {
        println!("Abrir en WhatsApp: {url}");
    }
}

impl CartDisplay for ConsoleHost {
    fn show_items(&self, view: &CartView) {
        match view.to_text() {
            Ok(text) => print!("{text}"),
            Err(e) => tracing::error!("Failed to render cart: {e}"),
        }
    }

    fn show_count(&self, count: usize) {
        tracing::debug!(count, "Cart counter");
    }
}
