//! Host collaborators: advisory messages, navigation and cart display.
//!
//! The cart manager never talks to a page directly. The host supplies a
//! [`Notifier`] for alerts and navigation, and optionally a [`CartDisplay`]
//! for the item list and the counter badge. A host page without those
//! elements passes `None` and the updates are skipped.

use std::cell::RefCell;

use url::Url;

use crate::cart::CartView;

/// User-visible advisory messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// A product was added to the cart.
    AddedToCart,
    /// Checkout was requested with nothing in the cart.
    EmptyCart,
}

impl Notice {
    /// Message shown to the shopper.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::AddedToCart => "Producto agregado al carrito",
            Self::EmptyCart => "El carrito está vacío",
        }
    }
}

/// Surfaces notices and performs navigation on behalf of the cart.
pub trait Notifier {
    /// Show an advisory message.
    fn notify(&self, notice: Notice);

    /// Leave the storefront for `url` (the messaging hand-off).
    fn navigate(&self, url: &Url);
}

/// Optional host elements that mirror the cart.
pub trait CartDisplay {
    /// Replace the item list with a freshly rendered view.
    fn show_items(&self, view: &CartView);

    /// Update the counter badge with the number of cart lines.
    fn show_count(&self, count: usize);
}

/// Notifier that only emits tracing events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: Notice) {
        tracing::info!(?notice, message = notice.message(), "Notice");
    }

    fn navigate(&self, url: &Url) {
        tracing::info!(%url, "Navigate");
    }
}

/// Something the cart asked the host to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    Notice(Notice),
    Navigate(Url),
    Items { lines: usize, empty: bool },
    Count(usize),
}

/// Records every host interaction, in order.
///
/// Useful for embedding hosts that batch their updates and for tests.
#[derive(Debug, Default)]
pub struct RecordingHost {
    events: RefCell<Vec<HostEvent>>,
}

impl RecordingHost {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded events.
    #[must_use]
    pub fn events(&self) -> Vec<HostEvent> {
        self.events.borrow().clone()
    }

    /// Recorded notices only.
    #[must_use]
    pub fn notices(&self) -> Vec<Notice> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                HostEvent::Notice(notice) => Some(*notice),
                _ => None,
            })
            .collect()
    }

    /// Recorded navigations only.
    #[must_use]
    pub fn navigations(&self) -> Vec<Url> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                HostEvent::Navigate(url) => Some(url.clone()),
                _ => None,
            })
            .collect()
    }

    /// The most recent counter value, if the counter was ever updated.
    #[must_use]
    pub fn last_count(&self) -> Option<usize> {
        self.events.borrow().iter().rev().find_map(|event| match event {
            HostEvent::Count(count) => Some(*count),
            _ => None,
        })
    }

    fn push(&self, event: HostEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl Notifier for RecordingHost {
    fn notify(&self, notice: Notice) {
        self.push(HostEvent::Notice(notice));
    }

    fn navigate(&self, url: &Url) {
        self.push(HostEvent::Navigate(url.clone()));
    }
}

impl CartDisplay for RecordingHost {
    fn show_items(&self, view: &CartView) {
        self.push(HostEvent::Items {
            lines: view.items.len(),
            empty: view.is_empty(),
        });
    }

    fn show_count(&self, count: usize) {
        self.push(HostEvent::Count(count));
    }
}

impl<T: Notifier + ?Sized> Notifier for &T {
    fn notify(&self, notice: Notice) {
        (**self).notify(notice);
    }

    fn navigate(&self, url: &Url) {
        (**self).navigate(url);
    }
}

impl<T: CartDisplay + ?Sized> CartDisplay for &T {
    fn show_items(&self, view: &CartView) {
        (**self).show_items(view);
    }

    fn show_count(&self, count: usize) {
        (**self).show_count(count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_messages() {
        assert_eq!(Notice::AddedToCart.message(), "Producto agregado al carrito");
        assert_eq!(Notice::EmptyCart.message(), "El carrito está vacío");
    }

    #[test]
    fn test_recording_host_filters() {
        let host = RecordingHost::new();
        host.notify(Notice::EmptyCart);
        host.show_count(2);
        host.show_count(3);

        assert_eq!(host.notices(), vec![Notice::EmptyCart]);
        assert!(host.navigations().is_empty());
        assert_eq!(host.last_count(), Some(3));
        assert_eq!(host.events().len(), 3);
    }
}
